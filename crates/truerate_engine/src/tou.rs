//! Time-of-use plan evaluation.
//!
//! The plan grants a "free usage" allowance priced at the off-peak rate;
//! usage beyond the allowance is priced at the on-peak rate. The naming is
//! inverted relative to typical TOU plans, but it is the behavior these
//! plans are sold with and is preserved exactly.

use derive_getters::Getters;
use serde_json::{Map, Value};
use truerate_error::{EngineError, EngineErrorKind, EngineResult};

use crate::delivery::delivery_cost;
use crate::evaluation::Evaluation;
use crate::fields;
use crate::normalize::normalize_rate;

/// A time-of-use plan bound to one usage amount.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct TimeOfUsePlan {
    /// kWh consumed in the billing period.
    usage_kwh: f64,
    /// Rate for usage beyond the free allowance, cents per kWh.
    on_peak_rate_cents: f64,
    /// Rate for the allowance volume, cents per kWh.
    off_peak_rate_cents: f64,
    /// Free-usage allowance, clamped to `[0, usage]` at evaluation.
    free_usage_kwh: f64,
    /// TDU volumetric rate, cents per kWh.
    delivery_rate_cents: f64,
    /// TDU flat monthly charge, dollars.
    base_delivery_charge: f64,
    /// Retailer flat monthly charge, dollars.
    base_charge: f64,
}

impl TimeOfUsePlan {
    /// Build a validated plan. Both energy rates pass through the
    /// dollar-fraction normalizer.
    ///
    /// # Errors
    ///
    /// `NonPositiveUsage` when `usage_kwh <= 0`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        usage_kwh: f64,
        on_peak_rate: f64,
        off_peak_rate: f64,
        free_usage_kwh: f64,
        delivery_rate_cents: f64,
        base_delivery_charge: f64,
        base_charge: f64,
    ) -> EngineResult<Self> {
        if usage_kwh <= 0.0 {
            return Err(EngineError::new(EngineErrorKind::NonPositiveUsage));
        }
        Ok(Self {
            usage_kwh,
            on_peak_rate_cents: *normalize_rate(on_peak_rate).cents(),
            off_peak_rate_cents: *normalize_rate(off_peak_rate).cents(),
            free_usage_kwh,
            delivery_rate_cents,
            base_delivery_charge,
            base_charge,
        })
    }

    /// Parse a plan from a request body. All seven fields are required.
    ///
    /// # Errors
    ///
    /// `MissingField`, `InvalidNumber`, or `NonPositiveUsage` per field.
    pub fn from_value(body: &Map<String, Value>) -> EngineResult<Self> {
        Self::new(
            fields::usage(body)?,
            fields::required(body, "onPeakRate")?,
            fields::required(body, "offPeakRate")?,
            fields::required(body, "freeUsage")?,
            fields::required(body, "deliveryRatePerKwh")?,
            fields::required(body, "baseDeliveryCharge")?,
            fields::required(body, "baseCharge")?,
        )
    }

    /// Split usage into peak and off-peak volumes. The two always sum to
    /// total usage.
    pub fn split(&self) -> (f64, f64) {
        let allowance = self.free_usage_kwh.clamp(0.0, self.usage_kwh);
        (self.usage_kwh - allowance, allowance)
    }

    /// Evaluate the bill and true rate.
    pub fn evaluate(&self) -> Evaluation {
        let (paid_kwh, off_kwh) = self.split();
        let energy =
            self.on_peak_rate_cents / 100.0 * paid_kwh + self.off_peak_rate_cents / 100.0 * off_kwh;
        let delivery = delivery_cost(
            self.usage_kwh,
            self.delivery_rate_cents,
            self.base_delivery_charge,
        );
        Evaluation::from_total(self.base_charge + energy + delivery, self.usage_kwh)
    }
}

#[cfg(test)]
mod tests {
    use super::TimeOfUsePlan;

    #[test]
    fn allowance_clamps_to_usage() {
        let plan = TimeOfUsePlan::new(300.0, 15.0, 8.0, 500.0, 0.0, 0.0, 0.0).unwrap();
        let (paid, off) = plan.split();
        assert_eq!(paid, 0.0);
        assert_eq!(off, 300.0);
    }

    #[test]
    fn negative_allowance_clamps_to_zero() {
        let plan = TimeOfUsePlan::new(300.0, 15.0, 8.0, -50.0, 0.0, 0.0, 0.0).unwrap();
        let (paid, off) = plan.split();
        assert_eq!(paid, 300.0);
        assert_eq!(off, 0.0);
    }
}
