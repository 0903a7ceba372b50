//! Fixed-rate plans with a usage-threshold bill credit.

use serde_json::{Map, Value};
use truerate_error::EngineResult;

use crate::evaluation::Evaluation;
use crate::fields;
use crate::fixed::FixedRatePlan;

/// Fixed-rate math plus a bill credit once usage meets a threshold.
///
/// The credit applies when usage meets *or exceeds* the threshold; hitting
/// the threshold exactly earns the credit, consistent with how retailers
/// advertise these plans ("$30 off at 1000 kWh").
#[derive(Debug, Clone, PartialEq)]
pub struct BillCreditPlan {
    base: FixedRatePlan,
    credit_threshold: f64,
    credit_amount: f64,
}

impl BillCreditPlan {
    /// Build a validated plan on top of the fixed-rate constructor.
    ///
    /// # Errors
    ///
    /// `NonPositiveUsage` when `usage_kwh <= 0`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        usage_kwh: f64,
        energy_rate: f64,
        delivery_rate_cents: f64,
        base_delivery_charge: f64,
        base_charge: f64,
        credit_threshold: f64,
        credit_amount: f64,
    ) -> EngineResult<Self> {
        Ok(Self {
            base: FixedRatePlan::new(
                usage_kwh,
                energy_rate,
                delivery_rate_cents,
                base_delivery_charge,
                base_charge,
            )?,
            credit_threshold,
            credit_amount,
        })
    }

    /// Parse a plan from a request body.
    ///
    /// # Errors
    ///
    /// `MissingField`, `InvalidNumber`, or `NonPositiveUsage` per field.
    pub fn from_value(body: &Map<String, Value>) -> EngineResult<Self> {
        Ok(Self {
            base: FixedRatePlan::from_value(body)?,
            credit_threshold: fields::required(body, "creditThreshold")?,
            credit_amount: fields::required(body, "creditAmount")?,
        })
    }

    /// Evaluate the bill and true rate from the post-credit total.
    pub fn evaluate(&self) -> Evaluation {
        let mut total = self.base.total();
        if self.base.usage_kwh() >= self.credit_threshold {
            total -= self.credit_amount;
        }
        Evaluation::from_total(total, self.base.usage_kwh())
    }
}

#[cfg(test)]
mod tests {
    use super::BillCreditPlan;

    #[test]
    fn credit_applies_at_exact_threshold() {
        let plan = BillCreditPlan::new(1000.0, 12.0, 0.0, 0.0, 0.0, 1000.0, 30.0).unwrap();
        assert_eq!(*plan.evaluate().total_bill(), 90.0);
    }

    #[test]
    fn credit_withheld_below_threshold() {
        let plan = BillCreditPlan::new(999.0, 12.0, 0.0, 0.0, 0.0, 1000.0, 30.0).unwrap();
        assert_eq!(*plan.evaluate().total_bill(), 999.0 * 0.12);
    }
}
