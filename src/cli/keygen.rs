use crate::cli::encrypt::{seeded_rng, write_key_file};
use crate::error::Result;
use crate::key::SubstitutionKey;
use std::path::Path;

/// Options for the keygen command
#[derive(Debug, Clone, Default)]
pub struct KeygenOptions {
    /// Seed for the generator, for reproducible keys
    pub seed: Option<u64>,
}

/// Generate a fresh substitution key without encrypting anything,
/// optionally persisting it as JSON
pub fn generate_key(key_file: Option<&Path>, options: &KeygenOptions) -> Result<SubstitutionKey> {
    let mut rng = seeded_rng(options.seed);
    let key = SubstitutionKey::generate(&mut rng);
    if let Some(path) = key_file {
        write_key_file(path, &key)?;
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_seeded_keygen_is_reproducible() {
        let options = KeygenOptions { seed: Some(42) };
        let first = generate_key(None, &options).unwrap();
        let second = generate_key(None, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_keygen_writes_key_file() {
        let dir = tempdir().unwrap();
        let key_path = dir.path().join("key.json");

        let options = KeygenOptions { seed: Some(9) };
        let key = generate_key(Some(&key_path), &options).unwrap();

        let json = std::fs::read_to_string(&key_path).unwrap();
        let restored: SubstitutionKey = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, key);
    }
}
