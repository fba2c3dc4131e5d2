use crate::cipher::{encrypt_with, Encryption, WIDTH_RANGE};
use crate::error::{Result, TrifoldError};
use crate::key::SubstitutionKey;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

/// Options for the encrypt command
#[derive(Debug, Clone, Default)]
pub struct EncryptOptions {
    /// Fixed substitution key; a fresh one is generated when absent
    pub key: Option<SubstitutionKey>,
    /// Fixed column width; drawn from the 2-10 range when absent
    pub column_width: Option<usize>,
    /// Fixed row width; drawn from the 2-10 range when absent
    pub row_width: Option<usize>,
    /// Seed for the random draws, for reproducible runs
    pub seed: Option<u64>,
    /// Where to persist the key as JSON, if anywhere
    pub key_file: Option<PathBuf>,
}

/// Encrypt `text` and write the ciphertext verbatim to `output_path`.
/// Returns the full encryption outcome for reporting.
pub fn encrypt_to_file(text: &str, output_path: &Path, options: &EncryptOptions) -> Result<Encryption> {
    for width in [options.column_width, options.row_width].into_iter().flatten() {
        if !WIDTH_RANGE.contains(&width) {
            return Err(TrifoldError::InvalidWidth(width));
        }
    }

    let mut rng = seeded_rng(options.seed);

    // Every random draw happens here, in pipeline order, so a seeded run
    // is reproducible regardless of which draws are overridden.
    let key = match options.key {
        Some(key) => key,
        None => SubstitutionKey::generate(&mut rng),
    };
    let column_width = options
        .column_width
        .unwrap_or_else(|| rng.gen_range(WIDTH_RANGE));
    let row_width = options
        .row_width
        .unwrap_or_else(|| rng.gen_range(WIDTH_RANGE));

    let ciphertext = encrypt_with(text, &key, column_width, row_width);

    std::fs::write(output_path, &ciphertext)?;
    if let Some(key_path) = &options.key_file {
        write_key_file(key_path, &key)?;
    }

    Ok(Encryption {
        ciphertext,
        key,
        column_width,
        row_width,
    })
}

/// Persist the key as JSON: one object holding the A..Z image string
pub fn write_key_file(path: &Path, key: &SubstitutionKey) -> Result<()> {
    let json = serde_json::to_string_pretty(key)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
