//! Tests for the fixed-rate and bill-credit evaluators.

use truerate_engine::{BillCreditPlan, FixedRatePlan};
use truerate_error::EngineErrorKind;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_fixed_rate_reference_bill() {
    // 1000 kWh at 12 cents, 4 cent delivery, $4 base delivery, $10 base charge:
    // energy 120 + delivery 44 + base 10 = 174, true rate 17.4 cents.
    let plan = FixedRatePlan::new(1000.0, 12.0, 4.0, 4.0, 10.0).unwrap();
    let eval = plan.evaluate();
    assert_close(*eval.total_bill(), 174.0);
    assert_close(*eval.true_rate_cents(), 17.4);
    assert_eq!(eval.true_rate_display(), "17.40");
    assert_eq!(eval.bill_display(), "174.00");
}

#[test]
fn test_true_rate_round_trips_to_bill() {
    let plan = FixedRatePlan::new(823.0, 11.3, 3.974, 3.42, 9.95).unwrap();
    let eval = plan.evaluate();
    assert_close(eval.true_rate_cents() * 823.0 / 100.0, *eval.total_bill());
}

#[test]
fn test_zero_usage_rejected_before_arithmetic() {
    let err = FixedRatePlan::new(0.0, 12.0, 4.0, 4.0, 10.0).unwrap_err();
    assert_eq!(err.kind(), &EngineErrorKind::NonPositiveUsage);
    assert_eq!(err.message(), "usage must be greater than zero");
}

#[test]
fn test_credit_applied_at_and_above_threshold() {
    let at = BillCreditPlan::new(1000.0, 12.0, 4.0, 4.0, 10.0, 1000.0, 30.0).unwrap();
    assert_close(*at.evaluate().total_bill(), 144.0);

    let above = BillCreditPlan::new(1100.0, 12.0, 4.0, 4.0, 10.0, 1000.0, 30.0).unwrap();
    assert_close(*above.evaluate().total_bill(), 10.0 + 132.0 + 48.0 - 30.0);
}

#[test]
fn test_credit_withheld_below_threshold() {
    let plan = BillCreditPlan::new(999.9, 12.0, 4.0, 4.0, 10.0, 1000.0, 30.0).unwrap();
    let no_credit = FixedRatePlan::new(999.9, 12.0, 4.0, 4.0, 10.0).unwrap();
    assert_close(
        *plan.evaluate().total_bill(),
        *no_credit.evaluate().total_bill(),
    );
}

#[test]
fn test_credit_true_rate_uses_post_credit_total() {
    let plan = BillCreditPlan::new(1000.0, 12.0, 4.0, 4.0, 10.0, 1000.0, 30.0).unwrap();
    let eval = plan.evaluate();
    assert_close(*eval.true_rate_cents(), 14.4);
}
