//! Rate unit normalization.
//!
//! Calculator users paste energy rates from plan fact sheets in two
//! denominations: cents per kWh ("12") and dollars per kWh ("0.12"). Every
//! evaluator interprets rates as cents per kWh, so rate fields pass through
//! [`normalize_rate`] first.

use derive_getters::Getters;

/// A rate field rewritten to the canonical cents-per-kWh denomination.
///
/// `changed` signals the rewrite for UI feedback ("we read this as 12¢");
/// the numeric result never depends on it.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct NormalizedRate {
    /// The rate in cents per kWh.
    cents: f64,
    /// Textual form, three decimal places with trailing zeros stripped.
    display: String,
    /// Whether the heuristic rescaled the input.
    changed: bool,
}

/// Normalize an energy rate to cents per kWh.
///
/// Values strictly between 0 and 1 are assumed to be dollar fractions and
/// scaled by 100, rounded to three decimal places. Values ≤ 0 or ≥ 1 pass
/// through unchanged.
///
/// This is a heuristic, not a unit proof: a genuine sub-cent rate such as
/// 0.5¢/kWh cannot be distinguished from a misentered dollar fraction and
/// will be scaled to 50¢/kWh. Accepted ambiguity.
///
/// # Examples
///
/// ```
/// use truerate_engine::normalize_rate;
///
/// assert_eq!(*normalize_rate(0.12).cents(), 12.0);
/// assert_eq!(*normalize_rate(7.5).cents(), 7.5);
/// assert_eq!(normalize_rate(0.12).display(), "12");
/// ```
pub fn normalize_rate(raw: f64) -> NormalizedRate {
    if raw > 0.0 && raw < 1.0 {
        let cents = round3(raw * 100.0);
        NormalizedRate {
            cents,
            display: trim_rate(cents),
            changed: true,
        }
    } else {
        NormalizedRate {
            cents: raw,
            display: trim_rate(raw),
            changed: false,
        }
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Three decimal places, trailing insignificant zeros stripped.
fn trim_rate(value: f64) -> String {
    let text = format!("{value:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollar_fraction_is_scaled() {
        let rate = normalize_rate(0.12);
        assert_eq!(*rate.cents(), 12.0);
        assert!(*rate.changed());
    }

    #[test]
    fn cents_pass_through() {
        let rate = normalize_rate(7.5);
        assert_eq!(*rate.cents(), 7.5);
        assert!(!*rate.changed());
    }

    #[test]
    fn display_strips_trailing_zeros() {
        assert_eq!(normalize_rate(0.1).display(), "10");
        assert_eq!(normalize_rate(0.1234).display(), "12.34");
        assert_eq!(normalize_rate(12.345).display(), "12.345");
    }

    #[test]
    fn zero_and_negative_pass_through() {
        assert_eq!(*normalize_rate(0.0).cents(), 0.0);
        assert_eq!(*normalize_rate(-4.0).cents(), -4.0);
    }
}
