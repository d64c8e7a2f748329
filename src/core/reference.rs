// src/core/reference.rs
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// Special characters recognized by the classifier and counted as a
/// 33-character class when sizing the entropy alphabet.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

lazy_static! {
    // Process-wide default table of known-weak passwords, case-folded
    static ref DEFAULT_COMMON_PASSWORDS: HashSet<String> = [
        "password",
        "123456",
        "qwerty",
        "admin",
        "welcome",
        "letmein",
        "monkey",
        "1234567890",
        "abc123",
        "password123",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
}

/// Immutable reference tables consumed by the analyzer. Built once at
/// startup and injected, so tests can substitute alternate tables.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    /// Known-weak passwords, matched case-insensitively against the full input.
    pub common_passwords: HashSet<String>,
    /// Short ascending/descending fragments like "1234" and "abcd".
    pub common_sequences: Vec<String>,
    /// Adjacent-row keyboard runs.
    pub keyboard_rows: Vec<String>,
    /// Three-key diagonal runs on a QWERTY layout.
    pub keyboard_diagonals: Vec<String>,
    /// Common leetspeak substitutions. Not consulted by any current check;
    /// kept so substitution-aware checks need no table changes.
    #[allow(dead_code)]
    pub substitutions: HashMap<char, Vec<char>>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        let mut substitutions = HashMap::new();
        substitutions.insert('a', vec!['4', '@']);
        substitutions.insert('e', vec!['3']);
        substitutions.insert('i', vec!['1', '!']);
        substitutions.insert('o', vec!['0']);
        substitutions.insert('s', vec!['$', '5']);
        substitutions.insert('l', vec!['1']);

        Self {
            common_passwords: DEFAULT_COMMON_PASSWORDS.clone(),
            common_sequences: ["1234", "4321", "abcd", "qwerty", "asdf", "zxcv"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            keyboard_rows: ["qwerty", "asdfgh", "zxcvbn", "qazwsx", "123456"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            keyboard_diagonals: ["qaz", "wsx", "edc", "rfv", "tgb", "yhn", "ujm"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            substitutions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_populated() {
        let reference = ReferenceData::default();
        assert!(reference.common_passwords.contains("password"));
        assert!(reference.common_passwords.contains("123456"));
        assert_eq!(reference.common_sequences.len(), 6);
        assert_eq!(reference.keyboard_rows.len(), 5);
        assert_eq!(reference.keyboard_diagonals.len(), 7);
        assert!(reference.substitutions.contains_key(&'a'));
    }

    #[test]
    fn special_chars_cover_detection_set() {
        for c in ['!', '@', '#', '$', '\\', '|', '?', '\''] {
            assert!(SPECIAL_CHARS.contains(c), "missing {:?}", c);
        }
        assert!(!SPECIAL_CHARS.contains('~'));
    }
}
