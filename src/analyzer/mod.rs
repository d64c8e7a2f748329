// src/analyzer/mod.rs
use chrono::Utc;

use crate::core::reference::ReferenceData;
use crate::generators::{PasswordGenerator, DEFAULT_LENGTH, MIN_LENGTH};
use crate::history::HistorySink;
use crate::models::{AnalysisReport, HistoryEntry, Strength};
use crate::utils::format_crack_time;

pub mod entropy;
pub mod patterns;

pub const MAX_SCORE: u8 = 10;

/// Stateless scoring engine (aside from the optional history sink). Runs a
/// fixed, ordered pipeline of checks over one score accumulator:
///
/// 1. length tier            add 0..=3
/// 2. character variety      add 0..=3
/// 3. known-weak membership  reset to 0
/// 4. keyboard patterns      subtract 2, floor 0
/// 5. date shapes            subtract 1, floor 0
/// 6. repetition             subtract 1, floor 0
/// 7. sequence fragments     subtract 1, floor 0
/// 8. entropy estimate       add 0..=2
///
/// The reset runs after the additive steps so the penalties that follow
/// keep flooring an already-zeroed score.
pub struct PasswordAnalyzer {
    reference: ReferenceData,
    generator: PasswordGenerator,
    suggestion_length: usize,
    history: Option<Box<dyn HistorySink>>,
}

impl PasswordAnalyzer {
    pub fn new(reference: ReferenceData) -> Self {
        Self {
            reference,
            generator: PasswordGenerator::new(),
            suggestion_length: DEFAULT_LENGTH,
            history: None,
        }
    }

    /// Length used for the generated-password suggestion appended to every
    /// report. Clamped to the generator minimum.
    pub fn with_suggestion_length(mut self, length: usize) -> Self {
        self.suggestion_length = length.max(MIN_LENGTH);
        self
    }

    /// Attach a sink that receives one entry per analysis. The engine only
    /// ever writes to it.
    pub fn with_history(mut self, sink: Box<dyn HistorySink>) -> Self {
        self.history = Some(sink);
        self
    }

    /// Analyze a password. Total over any string input; an empty password
    /// yields a degraded but valid report.
    pub fn analyze(&mut self, password: &str) -> AnalysisReport {
        let mut score: u8 = 0;
        let mut feedback = Vec::new();
        let mut suggestions = Vec::new();

        let details = entropy::classify(password);

        // 1. Length tier
        match details.length {
            0..=7 => {
                feedback.push(
                    "Password is too short (minimum 8 characters recommended)".to_string(),
                );
            }
            8..=11 => {
                score += 1;
                feedback.push(
                    "Password length is acceptable but could be improved (12+ recommended)"
                        .to_string(),
                );
            }
            12..=15 => {
                score += 2;
                feedback.push("Good password length".to_string());
            }
            _ => {
                score += 3;
                feedback.push("Excellent password length".to_string());
            }
        }

        // 2. Character variety
        let categories = [
            details.has_lowercase,
            details.has_uppercase,
            details.has_digits,
            details.has_special,
        ]
        .iter()
        .filter(|&&present| present)
        .count();

        match categories {
            4 => {
                score += 3;
                feedback.push("Excellent character variety".to_string());
            }
            3 => {
                score += 2;
                feedback.push("Good character variety".to_string());
            }
            2 => {
                score += 1;
                feedback.push("Limited character variety".to_string());
            }
            _ => {
                feedback.push(
                    "Poor character variety - use a mix of character types".to_string(),
                );
            }
        }

        // 3. Known-weak membership wipes out the additive score
        if self
            .reference
            .common_passwords
            .contains(&password.to_lowercase())
        {
            score = 0;
            feedback.push("❌ CRITICAL: This is a commonly used password!".to_string());
            suggestions.push("Choose a completely different password".to_string());
        }

        // 4. Keyboard patterns
        if patterns::contains_keyboard_pattern(password, &self.reference) {
            score = score.saturating_sub(2);
            feedback.push("Contains keyboard patterns (e.g., 'qwerty', 'asdf')".to_string());
            suggestions.push("Avoid sequential keyboard patterns".to_string());
        }

        // 5. Date shapes
        if patterns::looks_like_date(password) {
            score = score.saturating_sub(1);
            feedback.push("Contains what appears to be a date".to_string());
            suggestions.push("Avoid using dates, especially personal ones".to_string());
        }

        // 6. Repetition, one penalty however many issues were found
        let repetition = patterns::repetition_issues(password);
        if !repetition.is_empty() {
            score = score.saturating_sub(1);
            feedback.extend(repetition);
            suggestions.push("Avoid repeating characters or sequences".to_string());
        }

        // 7. Sequence fragments
        if patterns::contains_common_sequence(password, &self.reference) {
            score = score.saturating_sub(1);
            feedback.push("Contains sequential characters".to_string());
            suggestions.push("Avoid sequential characters like '1234' or 'abcd'".to_string());
        }

        // 8. Entropy estimate and crack time
        let entropy_bits = entropy::calculate_entropy(&details);
        let crack_time_estimate = format_crack_time(entropy_bits);

        if entropy_bits < 40.0 {
            feedback.push(format!(
                "Low entropy ({:.2} bits) - easily crackable",
                entropy_bits
            ));
        } else if entropy_bits < 60.0 {
            feedback.push(format!("Moderate entropy ({:.2} bits)", entropy_bits));
        } else if entropy_bits < 80.0 {
            score += 1;
            feedback.push(format!("Good entropy ({:.2} bits)", entropy_bits));
        } else {
            score += 2;
            feedback.push(format!("Excellent entropy ({:.2} bits)", entropy_bits));
        }

        // Suggest whatever is still missing, even when an earlier check
        // already flagged the same root cause
        if !details.has_lowercase {
            suggestions.push("Add lowercase letters (a-z)".to_string());
        }
        if !details.has_uppercase {
            suggestions.push("Add uppercase letters (A-Z)".to_string());
        }
        if !details.has_digits {
            suggestions.push("Add numbers (0-9)".to_string());
        }
        if !details.has_special {
            suggestions.push("Add special characters (!@#$%^&*())".to_string());
        }
        if details.length < 12 {
            suggestions.push(format!(
                "Increase length to at least 12 characters (currently {})",
                details.length
            ));
        }
        if suggestions.is_empty() {
            suggestions.push("Your password is already quite strong".to_string());
        }

        let score = score.min(MAX_SCORE);

        let generated_password = self
            .generator
            .generate(self.suggestion_length)
            .expect("suggestion length is clamped to the generator minimum");

        if let Some(sink) = self.history.as_mut() {
            sink.record(HistoryEntry {
                timestamp: Utc::now(),
                password_length: details.length,
                score,
            });
        }

        AnalysisReport {
            score,
            max_score: MAX_SCORE,
            strength: Strength::from_score(score),
            feedback,
            suggestions,
            details,
            entropy: (entropy_bits * 100.0).round() / 100.0,
            crack_time_estimate,
            generated_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn analyzer() -> PasswordAnalyzer {
        PasswordAnalyzer::new(ReferenceData::default())
    }

    #[test]
    fn score_bounded_and_strength_consistent() {
        let samples = [
            "",
            "a",
            "password",
            "123456",
            "qwerty123",
            "MyPass123!",
            "correct-horse-battery-staple",
            "X7$mQ9#vLp2&wRt5Zj",
            "aaaaaaaaaaaaaaaa",
            "пароль",
            "01/01/2000",
        ];

        let mut analyzer = analyzer();
        for sample in samples {
            let report = analyzer.analyze(sample);
            assert!(report.score <= MAX_SCORE, "score out of bounds for {:?}", sample);
            assert_eq!(report.max_score, MAX_SCORE);
            assert_eq!(report.strength, Strength::from_score(report.score));
        }
    }

    #[test]
    fn common_password_overrides_additive_score() {
        let mut analyzer = analyzer();

        // "password" earns a length point before the reset wipes it
        let report = analyzer.analyze("password");
        assert_eq!(report.score, 0);
        assert_eq!(report.strength, Strength::Weak);
        assert!(report.feedback.iter().any(|f| f.contains("CRITICAL")));

        let report = analyzer.analyze("123456");
        assert_eq!(report.score, 0);
    }

    #[test]
    fn common_password_matched_case_insensitively() {
        let report = analyzer().analyze("PaSsWoRd");
        assert_eq!(report.score, 0);
    }

    #[test]
    fn empty_password_degrades_gracefully() {
        let report = analyzer().analyze("");
        assert_eq!(report.details.length, 0);
        assert_eq!(report.entropy, 0.0);
        assert_eq!(report.score, 0);
        assert_eq!(report.strength, Strength::Weak);
        assert!(!report.suggestions.is_empty());
    }

    #[test]
    fn analysis_is_deterministic() {
        let mut analyzer = analyzer();
        let first = analyzer.analyze("MyPass123!");
        let second = analyzer.analyze("MyPass123!");

        assert_eq!(first.score, second.score);
        assert_eq!(first.strength, second.strength);
        assert_eq!(first.feedback, second.feedback);
        assert_eq!(first.suggestions, second.suggestions);
        assert_eq!(first.entropy, second.entropy);
        assert_eq!(first.crack_time_estimate, second.crack_time_estimate);
        assert_eq!(first.details, second.details);
    }

    #[test]
    fn strong_password_scores_high() {
        // 18 distinct characters across all four classes, no patterns
        let report = analyzer().analyze("X7$mQ9#vLp2&wRt5Zj");
        assert_eq!(report.score, 8);
        assert_eq!(report.strength, Strength::Strong);
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("already quite strong")));
    }

    #[test]
    fn keyboard_and_sequence_penalties_stack() {
        // "qwerty" is both a keyboard row and a sequence fragment
        let mut analyzer = analyzer();
        let with_both = analyzer.analyze("Aqwerty7$ExtraLen");
        let without = analyzer.analyze("Apzlmkv7$ExtraLen");
        assert!(with_both.score + 3 <= without.score);
    }

    #[test]
    fn repeated_block_reported_in_feedback() {
        let report = analyzer().analyze("abcabc");
        assert!(report
            .feedback
            .iter()
            .any(|f| f.contains("repeated sequence: 'abc'")));
    }

    #[test]
    fn missing_class_suggestions_compiled() {
        let report = analyzer().analyze("lowercaseonly");
        let joined = report.suggestions.join("\n");
        assert!(joined.contains("uppercase"));
        assert!(joined.contains("numbers"));
        assert!(joined.contains("special"));
        assert!(!joined.contains("lowercase letters (a-z)"));
    }

    #[test]
    fn short_password_gets_length_suggestion() {
        let report = analyzer().analyze("Ab1!");
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("at least 12 characters (currently 4)")));
    }

    #[test]
    fn generated_suggestion_honors_length() {
        let mut analyzer = analyzer().with_suggestion_length(20);
        let report = analyzer.analyze("whatever");
        assert_eq!(report.generated_password.chars().count(), 20);
    }

    #[test]
    fn suggestion_length_clamped_to_minimum() {
        let mut analyzer = analyzer().with_suggestion_length(1);
        let report = analyzer.analyze("whatever");
        assert_eq!(report.generated_password.chars().count(), MIN_LENGTH);
    }

    #[test]
    fn alternate_reference_tables_respected() {
        let mut reference = ReferenceData::default();
        reference.common_passwords.insert("hunter2".to_string());

        let mut analyzer = PasswordAnalyzer::new(reference);
        assert_eq!(analyzer.analyze("hunter2").score, 0);
    }

    #[test]
    fn history_sink_receives_one_entry_per_analysis() {
        struct CountingSink(Rc<Cell<usize>>);

        impl HistorySink for CountingSink {
            fn record(&mut self, entry: HistoryEntry) {
                assert_eq!(entry.password_length, 8);
                self.0.set(self.0.get() + 1);
            }
        }

        let count = Rc::new(Cell::new(0));
        let mut analyzer =
            analyzer().with_history(Box::new(CountingSink(Rc::clone(&count))));

        analyzer.analyze("whatever");
        analyzer.analyze("whatever");
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn no_history_by_default() {
        // Nothing to observe; the call simply must not record anywhere
        let report = analyzer().analyze("whatever");
        assert_eq!(report.details.length, 8);
    }
}
