use crate::key::SubstitutionKey;
use crate::pipeline::{substitute, transpose_columns, transpose_rows};
use rand::Rng;
use std::ops::RangeInclusive;

/// Sampling range for both transposition widths
pub const WIDTH_RANGE: RangeInclusive<usize> = 2..=10;

/// Result of one encryption run.
/// The key is the caller's decryption artifact; the widths are surfaced
/// for reporting. No decryption routine consumes them here.
#[derive(Debug, Clone)]
pub struct Encryption {
    pub ciphertext: String,
    pub key: SubstitutionKey,
    pub column_width: usize,
    pub row_width: usize,
}

/// Run the full pipeline with fresh random draws: a substitution key,
/// a column width and a row width, each drawn from `rng`.
pub fn encrypt<R: Rng>(text: &str, rng: &mut R) -> Encryption {
    let key = SubstitutionKey::generate(rng);
    let column_width = rng.gen_range(WIDTH_RANGE);
    let row_width = rng.gen_range(WIDTH_RANGE);
    let ciphertext = encrypt_with(text, &key, column_width, row_width);
    Encryption {
        ciphertext,
        key,
        column_width,
        row_width,
    }
}

/// The deterministic core of the pipeline: substitution, then column
/// transposition, then row transposition, with every draw fixed by the
/// caller. Total over all inputs; widths are clamped per stage.
pub fn encrypt_with(
    text: &str,
    key: &SubstitutionKey,
    column_width: usize,
    row_width: usize,
) -> String {
    let substituted = substitute(text, key);
    let after_columns = transpose_columns(&substituted, column_width);
    transpose_rows(&after_columns, row_width)
}
