//! Fixed-rate plan evaluation.

use serde_json::{Map, Value};
use truerate_error::{EngineError, EngineErrorKind, EngineResult};

use crate::delivery::delivery_cost;
use crate::evaluation::Evaluation;
use crate::normalize::normalize_rate;
use crate::fields;

/// A plan charging one energy rate for every kWh, no tiers.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedRatePlan {
    usage_kwh: f64,
    energy_rate_cents: f64,
    delivery_rate_cents: f64,
    base_delivery_charge: f64,
    base_charge: f64,
}

impl FixedRatePlan {
    /// Build a validated plan. The energy rate passes through the
    /// dollar-fraction normalizer.
    ///
    /// # Errors
    ///
    /// `NonPositiveUsage` when `usage_kwh <= 0`.
    pub fn new(
        usage_kwh: f64,
        energy_rate: f64,
        delivery_rate_cents: f64,
        base_delivery_charge: f64,
        base_charge: f64,
    ) -> EngineResult<Self> {
        if usage_kwh <= 0.0 {
            return Err(EngineError::new(EngineErrorKind::NonPositiveUsage));
        }
        Ok(Self {
            usage_kwh,
            energy_rate_cents: *normalize_rate(energy_rate).cents(),
            delivery_rate_cents,
            base_delivery_charge,
            base_charge,
        })
    }

    /// Parse a plan from a request body.
    ///
    /// # Errors
    ///
    /// `MissingField`, `InvalidNumber`, or `NonPositiveUsage` per field.
    pub fn from_value(body: &Map<String, Value>) -> EngineResult<Self> {
        Self::new(
            fields::usage(body)?,
            fields::required(body, "energyRate")?,
            fields::required(body, "deliveryRatePerKwh")?,
            fields::required(body, "baseDeliveryCharge")?,
            fields::required(body, "baseCharge")?,
        )
    }

    /// Evaluate the bill and true rate.
    pub fn evaluate(&self) -> Evaluation {
        let energy = self.usage_kwh * self.energy_rate_cents / 100.0;
        let delivery = delivery_cost(
            self.usage_kwh,
            self.delivery_rate_cents,
            self.base_delivery_charge,
        );
        Evaluation::from_total(self.base_charge + energy + delivery, self.usage_kwh)
    }

    pub(crate) fn usage_kwh(&self) -> f64 {
        self.usage_kwh
    }

    pub(crate) fn total(&self) -> f64 {
        *self.evaluate().total_bill()
    }
}

#[cfg(test)]
mod tests {
    use super::FixedRatePlan;

    #[test]
    fn rejects_zero_usage() {
        assert!(FixedRatePlan::new(0.0, 12.0, 4.0, 4.0, 10.0).is_err());
    }

    #[test]
    fn dollar_fraction_rate_is_normalized() {
        let plan = FixedRatePlan::new(1000.0, 0.12, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(*plan.evaluate().total_bill(), 120.0);
    }
}
