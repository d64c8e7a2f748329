// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Qualitative strength label derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => Strength::Weak,
            4..=6 => Strength::Moderate,
            7..=8 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strength::Weak => write!(f, "Weak"),
            Strength::Moderate => write!(f, "Moderate"),
            Strength::Strong => write!(f, "Strong"),
            Strength::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

/// Character composition of the analyzed password. The flags only recognize
/// ASCII classes; `length` counts every character of the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordDetails {
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digits: bool,
    pub has_special: bool,
}

/// Full result of one analysis. Feedback and suggestions keep the order in
/// which the checks ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub score: u8,
    pub max_score: u8,
    pub strength: Strength,
    pub feedback: Vec<String>,
    pub suggestions: Vec<String>,
    pub details: PasswordDetails,
    pub entropy: f64,
    pub crack_time_estimate: String,
    pub generated_password: String,
}

/// One line of the in-memory analysis audit trail. Stores no password
/// material, only the length and the final score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub password_length: usize,
    pub score: u8,
}
