use crate::error::{Result, TrifoldError};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of letters in the substitution alphabet
pub const ALPHABET_LEN: usize = 26;

/// The fixed substitution domain: uppercase ASCII letters in order
pub const ALPHABET: [u8; ALPHABET_LEN] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A monoalphabetic substitution key: a permutation of the alphabet.
///
/// Stored as a fixed array where `image[i]` is the letter that the i-th
/// alphabet letter maps to. The array representation makes the key a total
/// function over the alphabet by construction; bijectivity is guaranteed by
/// `generate` (a shuffle of the full alphabet) and checked by `from_image`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionKey {
    image: [u8; ALPHABET_LEN],
}

impl SubstitutionKey {
    /// Generate a uniformly random key by shuffling the alphabet
    /// (Fisher-Yates via `SliceRandom`) and pairing letter i with
    /// shuffled letter i
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut image = ALPHABET;
        image.shuffle(rng);
        Self { image }
    }

    /// Build a key from the image of A..Z in order.
    /// Rejects anything that is not a permutation of the alphabet.
    pub fn from_image(image: [u8; ALPHABET_LEN]) -> Result<Self> {
        let mut seen = [false; ALPHABET_LEN];
        for &letter in &image {
            if !letter.is_ascii_uppercase() {
                return Err(TrifoldError::InvalidKey(format!(
                    "'{}' is not an uppercase ASCII letter",
                    letter as char
                )));
            }
            let slot = (letter - b'A') as usize;
            if seen[slot] {
                return Err(TrifoldError::InvalidKey(format!(
                    "letter '{}' appears more than once",
                    letter as char
                )));
            }
            seen[slot] = true;
        }
        Ok(Self { image })
    }

    /// Substitute a single character. Characters outside A-Z pass through
    /// unchanged (digits, punctuation, accented characters).
    pub fn map_char(&self, c: char) -> char {
        if c.is_ascii_uppercase() {
            self.image[(c as u8 - b'A') as usize] as char
        } else {
            c
        }
    }

    /// The image of A..Z as a 26-character string
    pub fn image_string(&self) -> String {
        self.image.iter().map(|&b| b as char).collect()
    }

    /// (original letter, substituted letter) pairs in alphabet order
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        ALPHABET
            .iter()
            .zip(self.image.iter())
            .map(|(&from, &to)| (from as char, to as char))
    }
}

impl std::str::FromStr for SubstitutionKey {
    type Err = TrifoldError;
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if !s.is_ascii() || s.len() != ALPHABET_LEN {
            return Err(TrifoldError::InvalidKey(format!(
                "expected {} ASCII letters, got {} characters",
                ALPHABET_LEN,
                s.chars().count()
            )));
        }
        let mut image = [0u8; ALPHABET_LEN];
        for (slot, byte) in image.iter_mut().zip(s.bytes()) {
            *slot = byte.to_ascii_uppercase();
        }
        Self::from_image(image)
    }
}

/// Renders the letter-to-letter table, one pair per line
impl fmt::Display for SubstitutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (from, to)) in self.pairs().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} -> {}", from, to)?;
        }
        Ok(())
    }
}

/// Serialized as `{"image": "<26 letters>"}`, the image of A..Z in order
impl Serialize for SubstitutionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SubstitutionKey", 1)?;
        state.serialize_field("image", &self.image_string())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for SubstitutionKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            image: String,
        }
        let raw = Raw::deserialize(deserializer)?;
        raw.image.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_key_is_bijective() {
        for seed in 0..50u64 {
            let key = SubstitutionKey::generate(&mut StdRng::seed_from_u64(seed));
            let mut values: Vec<char> = key.pairs().map(|(_, to)| to).collect();
            values.sort_unstable();
            let expected: Vec<char> = ('A'..='Z').collect();
            assert_eq!(values, expected, "seed {} produced a non-permutation", seed);
        }
    }

    #[test]
    fn test_map_char_passes_through_non_letters() {
        let key = SubstitutionKey::generate(&mut StdRng::seed_from_u64(1));
        assert_eq!(key.map_char('7'), '7');
        assert_eq!(key.map_char('!'), '!');
        assert_eq!(key.map_char('ó'), 'ó');
        // Lowercase is not part of the alphabet either; normalization
        // happens before substitution.
        assert_eq!(key.map_char('a'), 'a');
    }

    #[test]
    fn test_parse_roundtrip() {
        let key = SubstitutionKey::generate(&mut StdRng::seed_from_u64(42));
        let parsed: SubstitutionKey = key.image_string().parse().unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn test_parse_accepts_lowercase() {
        let key: SubstitutionKey = "bcdefghijklmnopqrstuvwxyza".parse().unwrap();
        assert_eq!(key.map_char('A'), 'B');
        assert_eq!(key.map_char('Z'), 'A');
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        let result = "AACDEFGHIJKLMNOPQRSTUVWXYZ".parse::<SubstitutionKey>();
        assert!(matches!(result, Err(TrifoldError::InvalidKey(_))));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!("ABC".parse::<SubstitutionKey>().is_err());
        assert!("".parse::<SubstitutionKey>().is_err());
    }

    #[test]
    fn test_parse_rejects_non_letters() {
        let result = "ABCDEFGHIJKLMNOPQRSTUVWXY1".parse::<SubstitutionKey>();
        assert!(matches!(result, Err(TrifoldError::InvalidKey(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let key = SubstitutionKey::generate(&mut StdRng::seed_from_u64(7));
        let json = serde_json::to_string(&key).unwrap();
        assert!(json.contains("\"image\""));
        let back: SubstitutionKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_json_rejects_non_permutation() {
        let result = serde_json::from_str::<SubstitutionKey>(
            "{\"image\": \"AAAAAAAAAAAAAAAAAAAAAAAAAA\"}",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_display_lists_all_pairs() {
        let key: SubstitutionKey = "BCDEFGHIJKLMNOPQRSTUVWXYZA".parse().unwrap();
        let table = key.to_string();
        assert_eq!(table.lines().count(), ALPHABET_LEN);
        assert_eq!(table.lines().next(), Some("A -> B"));
        assert_eq!(table.lines().last(), Some("Z -> A"));
    }
}
