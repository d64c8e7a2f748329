// src/generators/password.rs
use rand::seq::SliceRandom;
use thiserror::Error;

/// Shortest length that can still seat one character from every class.
pub const MIN_LENGTH: usize = 4;
pub const DEFAULT_LENGTH: usize = 16;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
// Full ASCII punctuation, wider than the detection set the analyzer scans for
const PUNCTUATION: &[u8] = br##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("password length must be at least {}, got {0}", MIN_LENGTH)]
    LengthTooShort(usize),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Generates character-class-balanced random passwords. Backed by the
/// thread-local RNG like the rest of the tool; treat the output as a
/// convenience suggestion, not vault material from a vetted CSPRNG.
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate a password of `length` characters containing at least one
    /// lowercase letter, one uppercase letter, one digit and one
    /// punctuation character, uniformly shuffled.
    pub fn generate(&self, length: usize) -> Result<String> {
        if length < MIN_LENGTH {
            return Err(GeneratorError::LengthTooShort(length));
        }

        let mut rng = rand::thread_rng();
        let char_sets: [&[u8]; 4] = [LOWERCASE, UPPERCASE, DIGITS, PUNCTUATION];

        // One character from each set keeps every class represented
        let mut password: Vec<u8> = char_sets
            .iter()
            .map(|set| *set.choose(&mut rng).expect("character sets are non-empty"))
            .collect();

        // Fill the rest from the union of all sets
        let all_chars: Vec<u8> = char_sets.concat();
        for _ in 0..length - MIN_LENGTH {
            password.push(*all_chars.choose(&mut rng).expect("character sets are non-empty"));
        }

        // Shuffle to avoid predictable positioning
        password.shuffle(&mut rng);

        Ok(password.into_iter().map(char::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_password_has_requested_length() {
        let generator = PasswordGenerator::new();
        for length in [MIN_LENGTH, 8, 16, 64] {
            let password = generator.generate(length).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn every_class_represented() {
        let generator = PasswordGenerator::new();
        for _ in 0..50 {
            let password = generator.generate(16).unwrap();
            assert!(password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(password.chars().any(|c| c.is_ascii_punctuation()));
        }
    }

    #[test]
    fn minimum_length_still_covers_all_classes() {
        let generator = PasswordGenerator::new();
        for _ in 0..50 {
            let password = generator.generate(MIN_LENGTH).unwrap();
            assert!(password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(password.chars().any(|c| c.is_ascii_punctuation()));
        }
    }

    #[test]
    fn too_short_request_rejected() {
        let generator = PasswordGenerator::new();
        assert!(matches!(
            generator.generate(3),
            Err(GeneratorError::LengthTooShort(3))
        ));
        assert!(matches!(
            generator.generate(0),
            Err(GeneratorError::LengthTooShort(0))
        ));
    }

    #[test]
    fn output_is_printable_ascii() {
        let generator = PasswordGenerator::new();
        let password = generator.generate(32).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_graphic()));
    }
}
