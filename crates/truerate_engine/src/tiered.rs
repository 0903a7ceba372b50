//! Tiered plan evaluation.
//!
//! A tiered plan prices up to three ascending usage bands at their own
//! rates, optionally with a usage-threshold flat fee (which may be negative,
//! a bill credit). The raw form inputs allow several partial configurations;
//! they are canonicalized into a [`TierSchedule`] by configured band count,
//! with one allocation function per variant, so every combination is
//! independently testable.

use derive_getters::Getters;
use serde_json::{Map, Value};
use truerate_error::{EngineError, EngineErrorKind, EngineResult};

use crate::delivery::delivery_cost;
use crate::evaluation::Evaluation;
use crate::fields;
use crate::normalize::normalize_rate;

/// A canonical tier configuration. Rates are cents per kWh; the last band
/// of every variant is unbounded, so allocation always partitions usage
/// exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum TierSchedule {
    /// Only tier 1 is configured: the plan is effectively flat and all
    /// usage is priced at the tier 1 rate, even beyond its limit.
    One {
        /// Rate for all usage.
        rate1: f64,
    },
    /// Two bands: tier 1 up to its limit, a second rate for everything
    /// above.
    Two {
        /// Rate below `limit1`.
        rate1: f64,
        /// Upper bound of the first band, kWh.
        limit1: f64,
        /// Rate for usage above `limit1`.
        rate2: f64,
    },
    /// Three bands with strictly ascending limits; the third absorbs all
    /// usage above `limit2`.
    Three {
        /// Rate below `limit1`.
        rate1: f64,
        /// Upper bound of the first band, kWh.
        limit1: f64,
        /// Rate between `limit1` and `limit2`.
        rate2: f64,
        /// Upper bound of the second band, kWh.
        limit2: f64,
        /// Rate for usage above `limit2`.
        rate3: f64,
    },
}

/// Usage split across the tier bands. Always sums exactly to the evaluated
/// usage.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct TierUsage {
    /// kWh priced at the tier 1 rate.
    tier1_kwh: f64,
    /// kWh priced at the tier 2 rate.
    tier2_kwh: f64,
    /// kWh priced at the tier 3 rate.
    tier3_kwh: f64,
}

impl TierUsage {
    /// Total allocated usage.
    pub fn total(&self) -> f64 {
        self.tier1_kwh + self.tier2_kwh + self.tier3_kwh
    }
}

impl TierSchedule {
    /// Canonicalize the raw form options into a schedule.
    ///
    /// A rate defines a tier: `tier2_limit` without `tier2_rate` is ignored
    /// (after ordering validation), and a `tier3_rate` behind an unbounded
    /// tier 2 can never receive usage, so it is dropped. A bounded tier 2
    /// with no tier 3 keeps its own rate for the overflow, preserving the
    /// exact-partition invariant. A lone `tier3_rate` starts immediately
    /// after tier 1.
    ///
    /// # Errors
    ///
    /// `InvalidNumber` when `tier1_rate` or `tier1_limit` is not positive;
    /// `TierOrdering` when `tier2_limit <= tier1_limit`.
    pub fn from_options(
        tier1_rate: f64,
        tier1_limit: f64,
        tier2_rate: Option<f64>,
        tier2_limit: Option<f64>,
        tier3_rate: Option<f64>,
    ) -> EngineResult<Self> {
        if tier1_rate <= 0.0 {
            return Err(EngineError::new(EngineErrorKind::InvalidNumber(
                "tier1Rate".into(),
            )));
        }
        if tier1_limit <= 0.0 {
            return Err(EngineError::new(EngineErrorKind::InvalidNumber(
                "tier1Limit".into(),
            )));
        }
        if let Some(limit2) = tier2_limit {
            if limit2 <= tier1_limit {
                return Err(EngineError::new(EngineErrorKind::TierOrdering(
                    "tier 2 limit must be greater than tier 1 limit".into(),
                )));
            }
        }

        let schedule = match (tier2_rate, tier2_limit, tier3_rate) {
            (Some(rate2), Some(limit2), Some(rate3)) => Self::Three {
                rate1: tier1_rate,
                limit1: tier1_limit,
                rate2,
                limit2,
                rate3,
            },
            (Some(rate2), _, _) => Self::Two {
                rate1: tier1_rate,
                limit1: tier1_limit,
                rate2,
            },
            (None, _, Some(rate3)) => Self::Two {
                rate1: tier1_rate,
                limit1: tier1_limit,
                rate2: rate3,
            },
            (None, _, None) => Self::One { rate1: tier1_rate },
        };
        Ok(schedule)
    }

    /// Split usage across the configured bands.
    pub fn allocate(&self, usage_kwh: f64) -> TierUsage {
        match *self {
            Self::One { .. } => allocate_one(usage_kwh),
            Self::Two { limit1, .. } => allocate_two(usage_kwh, limit1),
            Self::Three { limit1, limit2, .. } => allocate_three(usage_kwh, limit1, limit2),
        }
    }

    /// Energy cost in dollars for the given usage.
    pub fn energy_cost(&self, usage_kwh: f64) -> f64 {
        let split = self.allocate(usage_kwh);
        let (rate1, rate2, rate3) = match *self {
            Self::One { rate1 } => (rate1, 0.0, 0.0),
            Self::Two { rate1, rate2, .. } => (rate1, rate2, 0.0),
            Self::Three {
                rate1, rate2, rate3, ..
            } => (rate1, rate2, rate3),
        };
        (split.tier1_kwh * rate1 + split.tier2_kwh * rate2 + split.tier3_kwh * rate3) / 100.0
    }

    /// Rewrite every rate through the dollar-fraction normalizer.
    fn normalized(self) -> Self {
        match self {
            Self::One { rate1 } => Self::One {
                rate1: *normalize_rate(rate1).cents(),
            },
            Self::Two {
                rate1,
                limit1,
                rate2,
            } => Self::Two {
                rate1: *normalize_rate(rate1).cents(),
                limit1,
                rate2: *normalize_rate(rate2).cents(),
            },
            Self::Three {
                rate1,
                limit1,
                rate2,
                limit2,
                rate3,
            } => Self::Three {
                rate1: *normalize_rate(rate1).cents(),
                limit1,
                rate2: *normalize_rate(rate2).cents(),
                limit2,
                rate3: *normalize_rate(rate3).cents(),
            },
        }
    }
}

fn allocate_one(usage: f64) -> TierUsage {
    TierUsage {
        tier1_kwh: usage,
        tier2_kwh: 0.0,
        tier3_kwh: 0.0,
    }
}

fn allocate_two(usage: f64, limit1: f64) -> TierUsage {
    TierUsage {
        tier1_kwh: usage.min(limit1),
        tier2_kwh: (usage - limit1).max(0.0),
        tier3_kwh: 0.0,
    }
}

fn allocate_three(usage: f64, limit1: f64, limit2: f64) -> TierUsage {
    // limit2 > limit1 is validated at construction.
    let tier1 = usage.min(limit1);
    let tier2 = (usage.min(limit2) - limit1).max(0.0);
    TierUsage {
        tier1_kwh: tier1,
        tier2_kwh: tier2,
        tier3_kwh: (usage - limit2).max(0.0),
    }
}

/// A flat-fee step function keyed on a usage threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatFee {
    /// Fee when usage is below the threshold.
    below: f64,
    /// Fee when usage meets or exceeds the threshold. May be negative.
    at_or_above: f64,
    /// Threshold in kWh.
    threshold: f64,
}

impl FlatFee {
    /// Build a step fee. `at_or_above` commonly defaults to zero when a
    /// plan only advertises the below-threshold fee.
    pub fn new(below: f64, at_or_above: f64, threshold: f64) -> Self {
        Self {
            below,
            at_or_above,
            threshold,
        }
    }

    /// The fee charged for the given usage.
    pub fn applied(&self, usage_kwh: f64) -> f64 {
        if usage_kwh < self.threshold {
            self.below
        } else {
            self.at_or_above
        }
    }
}

/// A tiered plan bound to one usage amount.
#[derive(Debug, Clone, PartialEq)]
pub struct TieredPlan {
    usage_kwh: f64,
    delivery_rate_cents: f64,
    base_delivery_charge: f64,
    base_charge: f64,
    schedule: TierSchedule,
    flat_fee: Option<FlatFee>,
}

impl TieredPlan {
    /// Build a validated plan. Tier rates pass through the dollar-fraction
    /// normalizer.
    ///
    /// # Errors
    ///
    /// `NonPositiveUsage` when `usage_kwh <= 0`.
    pub fn new(
        usage_kwh: f64,
        delivery_rate_cents: f64,
        base_delivery_charge: f64,
        base_charge: f64,
        schedule: TierSchedule,
        flat_fee: Option<FlatFee>,
    ) -> EngineResult<Self> {
        if usage_kwh <= 0.0 {
            return Err(EngineError::new(EngineErrorKind::NonPositiveUsage));
        }
        Ok(Self {
            usage_kwh,
            delivery_rate_cents,
            base_delivery_charge,
            base_charge,
            schedule: schedule.normalized(),
            flat_fee,
        })
    }

    /// Parse a plan from a request body.
    ///
    /// The flat fee is configured when both `flatFee1` and `flatThreshold`
    /// are present; `flatFee2` defaults to zero.
    ///
    /// # Errors
    ///
    /// `MissingField`, `InvalidNumber`, `NonPositiveUsage`, or
    /// `TierOrdering` per field.
    pub fn from_value(body: &Map<String, Value>) -> EngineResult<Self> {
        let usage = fields::usage(body)?;
        let schedule = TierSchedule::from_options(
            fields::required(body, "tier1Rate")?,
            fields::required(body, "tier1Limit")?,
            fields::optional(body, "tier2Rate")?,
            fields::optional(body, "tier2Limit")?,
            fields::optional(body, "tier3Rate")?,
        )?;

        let flat_fee = match (
            fields::optional(body, "flatFee1")?,
            fields::optional(body, "flatThreshold")?,
        ) {
            (Some(below), Some(threshold)) => Some(FlatFee::new(
                below,
                fields::optional(body, "flatFee2")?.unwrap_or(0.0),
                threshold,
            )),
            _ => None,
        };

        Self::new(
            usage,
            fields::required(body, "deliveryRatePerKwh")?,
            fields::required(body, "baseDeliveryCharge")?,
            fields::required(body, "baseCharge")?,
            schedule,
            flat_fee,
        )
    }

    /// Split this plan's usage across its bands.
    pub fn allocate(&self) -> TierUsage {
        self.schedule.allocate(self.usage_kwh)
    }

    /// Evaluate the bill and true rate.
    pub fn evaluate(&self) -> Evaluation {
        let energy = self.schedule.energy_cost(self.usage_kwh);
        let flat = self
            .flat_fee
            .as_ref()
            .map_or(0.0, |fee| fee.applied(self.usage_kwh));
        let delivery = delivery_cost(
            self.usage_kwh,
            self.delivery_rate_cents,
            self.base_delivery_charge,
        );
        Evaluation::from_total(self.base_charge + energy + flat + delivery, self.usage_kwh)
    }
}
