// src/analyzer/entropy.rs
use crate::core::reference::SPECIAL_CHARS;
use crate::models::PasswordDetails;

/// Scan the password for the four ASCII character classes. Total function:
/// non-ASCII input simply leaves every flag false while still counting
/// toward the length.
pub fn classify(password: &str) -> PasswordDetails {
    PasswordDetails {
        length: password.chars().count(),
        has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        has_digits: password.chars().any(|c| c.is_ascii_digit()),
        has_special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    }
}

/// Entropy in bits: log2(alphabet size) x length. The alphabet sums the
/// sizes of the classes present (26 + 26 + 10 + 33) and falls back to 26
/// when nothing matched, so empty or exotic input stays well-defined.
pub fn calculate_entropy(details: &PasswordDetails) -> f64 {
    let mut alphabet = 0u32;
    if details.has_lowercase {
        alphabet += 26;
    }
    if details.has_uppercase {
        alphabet += 26;
    }
    if details.has_digits {
        alphabet += 10;
    }
    if details.has_special {
        alphabet += 33;
    }
    if alphabet == 0 {
        alphabet = 26;
    }

    f64::from(alphabet).log2() * details.length as f64
}
