// src/analyzer/patterns.rs
use chrono::{Datelike, Utc};

use crate::core::reference::ReferenceData;

// Delimiters accepted inside a date-like shape (e.g. 12/31/99, 01-02-2003)
const DATE_DELIMITERS: [char; 4] = ['/', '-', '_', '.'];

/// Case-folded substring match against the keyboard rows, then the
/// three-key diagonals.
pub fn contains_keyboard_pattern(password: &str, reference: &ReferenceData) -> bool {
    let lowered = password.to_lowercase();

    reference
        .keyboard_rows
        .iter()
        .chain(reference.keyboard_diagonals.iter())
        .any(|pattern| lowered.contains(pattern.as_str()))
}

/// True when the password contains something shaped like a date: a
/// delimited dd/dd/dd window, a run of four or more digits, or a literal
/// year from the last century.
pub fn looks_like_date(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();

    if contains_delimited_date(&chars) {
        return true;
    }

    // An eight- or six-digit date run is subsumed by the four-digit check
    if longest_digit_run(&chars) >= 4 {
        return true;
    }

    // Redundant with the four-digit run for in-range years, kept to match
    // the reference detector
    let current_year = Utc::now().year();
    for year in (current_year - 100)..=current_year {
        if password.contains(&year.to_string()) {
            return true;
        }
    }

    false
}

// Two digits, a delimiter, two digits, a delimiter, two digits. The first
// two digits of a four-digit year complete the window, so this is plain
// substring containment.
fn contains_delimited_date(chars: &[char]) -> bool {
    chars.windows(8).any(|w| {
        w[0].is_ascii_digit()
            && w[1].is_ascii_digit()
            && DATE_DELIMITERS.contains(&w[2])
            && w[3].is_ascii_digit()
            && w[4].is_ascii_digit()
            && DATE_DELIMITERS.contains(&w[5])
            && w[6].is_ascii_digit()
            && w[7].is_ascii_digit()
    })
}

fn longest_digit_run(chars: &[char]) -> usize {
    let mut longest = 0;
    let mut current = 0;

    for &c in chars {
        if c.is_ascii_digit() {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }

    longest
}

/// Collect repetition issues: a character repeated three or more times in a
/// row, and any block of two or more characters immediately repeated. For
/// each block length only the first offset is reported.
pub fn repetition_issues(password: &str) -> Vec<String> {
    let mut issues = Vec::new();
    let chars: Vec<char> = password.chars().collect();

    let mut run = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            run += 1;
            if run == 3 {
                issues.push("Contains repetitive characters (e.g., 'aaa', '111')".to_string());
                break;
            }
        } else {
            run = 1;
        }
    }

    let len = chars.len();
    for size in 2..=len / 2 {
        for start in 0..=len - size * 2 {
            if chars[start..start + size] == chars[start + size..start + size * 2] {
                let block: String = chars[start..start + size].iter().collect();
                issues.push(format!("Contains repeated sequence: '{}'", block));
                break;
            }
        }
    }

    issues
}

/// Case-folded substring match against the short ascending/descending
/// sequence fragments. "qwerty" is also a keyboard row, so both penalties
/// can fire on the same input.
pub fn contains_common_sequence(password: &str, reference: &ReferenceData) -> bool {
    let lowered = password.to_lowercase();

    reference
        .common_sequences
        .iter()
        .any(|sequence| lowered.contains(sequence.as_str()))
}
