//! Billing math for electricity plans.
//!
//! This crate turns a plan's tariff structure plus a usage amount into a
//! total bill and an effective ("true") rate per kWh. Four plan kinds share
//! one contract: fixed rate, fixed rate with a usage-threshold bill credit,
//! tiered, and time-of-use. Two leaf utilities are shared by all of them:
//! the rate normalizer (dollar-fraction detection) and the delivery-charge
//! adder.
//!
//! The engine is purely computational, synchronous, and stateless. Each
//! evaluation is independent and idempotent; errors are raised only during
//! input validation, never from evaluation arithmetic.
//!
//! # Examples
//!
//! ```
//! use truerate_engine::FixedRatePlan;
//!
//! let plan = FixedRatePlan::new(1000.0, 12.0, 4.0, 4.0, 10.0).unwrap();
//! let eval = plan.evaluate();
//! assert_eq!(eval.bill_display(), "174.00");
//! assert_eq!(eval.true_rate_display(), "17.40");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credit;
mod delivery;
mod evaluation;
mod fields;
mod fixed;
mod normalize;
mod request;
mod tiered;
mod tou;

pub use credit::BillCreditPlan;
pub use delivery::delivery_cost;
pub use evaluation::Evaluation;
pub use fixed::FixedRatePlan;
pub use normalize::{NormalizedRate, normalize_rate};
pub use request::{PlanType, evaluate};
pub use tiered::{FlatFee, TierSchedule, TierUsage, TieredPlan};
pub use tou::TimeOfUsePlan;
