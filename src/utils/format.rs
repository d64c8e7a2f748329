// src/utils/format.rs

// Assumed brute-force rate: ten billion guesses per second
const GUESSES_PER_SECOND: f64 = 10_000_000_000.0;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_MONTH: f64 = 2_592_000.0;
const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Bucket an entropy estimate into a human-readable crack-time string.
///
/// The expected guess count is 2^entropy, which exceeds f64 range past
/// roughly a thousand bits, so bucket routing happens in the log2 domain
/// and only in-range values are materialized.
pub fn format_crack_time(entropy_bits: f64) -> String {
    let log2_seconds = entropy_bits - GUESSES_PER_SECOND.log2();

    if log2_seconds < SECONDS_PER_MINUTE.log2() {
        format!("Instant to {:.1} seconds", log2_seconds.exp2())
    } else if log2_seconds < SECONDS_PER_HOUR.log2() {
        format!("About {:.1} minutes", log2_seconds.exp2() / SECONDS_PER_MINUTE)
    } else if log2_seconds < SECONDS_PER_DAY.log2() {
        format!("About {:.1} hours", log2_seconds.exp2() / SECONDS_PER_HOUR)
    } else if log2_seconds < SECONDS_PER_MONTH.log2() {
        format!("About {:.1} days", log2_seconds.exp2() / SECONDS_PER_DAY)
    } else if log2_seconds < SECONDS_PER_YEAR.log2() {
        format!("About {:.1} months", log2_seconds.exp2() / SECONDS_PER_MONTH)
    } else if log2_seconds < (10.0 * SECONDS_PER_YEAR).log2() {
        format!("About {:.1} years", log2_seconds.exp2() / SECONDS_PER_YEAR)
    } else {
        let log2_years = log2_seconds - SECONDS_PER_YEAR.log2();
        let years = log2_years.exp2();
        if years.is_finite() {
            format!("Over {:.0} years", years)
        } else {
            // Past f64 range; render the magnitude instead of "inf"
            format!("Over 10^{:.0} years", log2_years * std::f64::consts::LOG10_2)
        }
    }
}
