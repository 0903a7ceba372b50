//! Request dispatch: one `evaluate` entry point over all plan kinds.

use std::str::FromStr;

use serde_json::Value;
use tracing::debug;
use truerate_error::{EngineError, EngineErrorKind, EngineResult};

use crate::credit::BillCreditPlan;
use crate::evaluation::Evaluation;
use crate::fixed::FixedRatePlan;
use crate::tiered::TieredPlan;
use crate::tou::TimeOfUsePlan;

/// The plan kinds the engine evaluates, keyed by the `plan_type` request
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum PlanType {
    /// One energy rate for every kWh.
    FixedRate,
    /// Fixed rate plus a usage-threshold bill credit.
    FixedRateCredit,
    /// Up to three ascending usage bands.
    TieredPlan,
    /// Peak/off-peak split via a free-usage allowance.
    TimeOfUse,
}

/// Evaluate a calculation request body.
///
/// The body must be a JSON object with a `plan_type` string and the plan's
/// fields, each a number or numeric string (blank counts as absent).
///
/// # Errors
///
/// `MalformedBody`, `UnknownPlanType`, or any field-validation error from
/// the selected plan.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let eval = truerate_engine::evaluate(&json!({
///     "plan_type": "fixed_rate",
///     "usage": "1000",
///     "energyRate": 12,
///     "deliveryRatePerKwh": 4,
///     "baseDeliveryCharge": 4,
///     "baseCharge": 10,
/// }))
/// .unwrap();
/// assert_eq!(eval.true_rate_display(), "17.40");
/// ```
pub fn evaluate(body: &Value) -> EngineResult<Evaluation> {
    let map = body
        .as_object()
        .ok_or_else(|| EngineError::new(EngineErrorKind::MalformedBody))?;

    let raw_type = match map.get("plan_type") {
        Some(Value::String(s)) => s.as_str(),
        _ => return Err(EngineError::new(EngineErrorKind::MissingField("plan_type".into()))),
    };
    let plan_type = PlanType::from_str(raw_type)
        .map_err(|_| EngineError::new(EngineErrorKind::UnknownPlanType(raw_type.into())))?;

    debug!(%plan_type, "evaluating plan");

    match plan_type {
        PlanType::FixedRate => Ok(FixedRatePlan::from_value(map)?.evaluate()),
        PlanType::FixedRateCredit => Ok(BillCreditPlan::from_value(map)?.evaluate()),
        PlanType::TieredPlan => Ok(TieredPlan::from_value(map)?.evaluate()),
        PlanType::TimeOfUse => Ok(TimeOfUsePlan::from_value(map)?.evaluate()),
    }
}

#[cfg(test)]
mod tests {
    use super::PlanType;
    use std::str::FromStr;

    #[test]
    fn plan_type_round_trips_snake_case() {
        for (text, plan) in [
            ("fixed_rate", PlanType::FixedRate),
            ("fixed_rate_credit", PlanType::FixedRateCredit),
            ("tiered_plan", PlanType::TieredPlan),
            ("time_of_use", PlanType::TimeOfUse),
        ] {
            assert_eq!(PlanType::from_str(text).unwrap(), plan);
            assert_eq!(plan.to_string(), text);
        }
    }
}
