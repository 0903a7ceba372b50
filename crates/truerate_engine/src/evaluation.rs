//! The shared evaluation result.

use derive_getters::Getters;
use serde::Serialize;

/// The outcome of evaluating one plan against one usage amount.
///
/// `true_rate_cents` is the all-in cost per kWh the consumer actually pays:
/// total bill divided by usage, in cents. For every plan kind,
/// `true_rate_cents × usage / 100 == total_bill` within float tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct Evaluation {
    /// Total bill for the period, in dollars.
    total_bill: f64,
    /// Effective rate in cents per kWh.
    true_rate_cents: f64,
}

impl Evaluation {
    /// Derive the evaluation from a total bill. Callers guarantee
    /// `usage_kwh > 0`; every plan constructor validates this before any
    /// arithmetic runs.
    pub(crate) fn from_total(total_bill: f64, usage_kwh: f64) -> Self {
        Self {
            total_bill,
            true_rate_cents: total_bill / usage_kwh * 100.0,
        }
    }

    /// The bill amount formatted to two decimal places.
    pub fn bill_display(&self) -> String {
        format!("{:.2}", self.total_bill)
    }

    /// The true rate formatted to two decimal places.
    pub fn true_rate_display(&self) -> String {
        format!("{:.2}", self.true_rate_cents)
    }
}

#[cfg(test)]
mod tests {
    use super::Evaluation;

    #[test]
    fn displays_round_to_two_places() {
        let eval = Evaluation::from_total(218.0, 900.0);
        assert_eq!(eval.bill_display(), "218.00");
        assert_eq!(eval.true_rate_display(), "24.22");
    }
}
