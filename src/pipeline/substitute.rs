use crate::key::SubstitutionKey;

/// Normalize text for encryption: uppercase every character and strip
/// space characters (U+0020 only). Tabs, newlines and punctuation stay
/// where they are.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(|&c| c != ' ')
        .collect()
}

/// Apply the substitution key to normalized text.
///
/// Each uppercase letter is replaced with its mapped counterpart; every
/// other character is a no-op, so the output has exactly one character
/// per normalized input character.
pub fn substitute(text: &str, key: &SubstitutionKey) -> String {
    normalize(text).chars().map(|c| key.map_char(c)).collect()
}
