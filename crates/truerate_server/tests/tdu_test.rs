//! Tests for the TDU table and lookup contract.

use serde_json::json;
use truerate_server::Tdu;

#[test]
fn test_fee_table_matches_filed_rates() {
    let fees = Tdu::CenterPoint.fees();
    assert_eq!(fees.delivery_per_kwh, 4.639);
    assert_eq!(fees.base_delivery, 4.39);

    let fees = Tdu::Tnmp.fees();
    assert_eq!(fees.delivery_per_kwh, 4.011);
    assert_eq!(fees.base_delivery, 7.85);
}

#[test]
fn test_fees_serialize_with_display_names() {
    let value = serde_json::to_value(Tdu::AepTexasCentral.fees()).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "AEP Texas Central",
            "delivery_per_kwh": 3.998,
            "base_delivery": 4.79,
        })
    );
}

#[test]
fn test_tdu_identifier_serializes_as_display_name() {
    assert_eq!(serde_json::to_value(Tdu::Oncor).unwrap(), json!("Oncor"));
    assert_eq!(serde_json::to_value(Tdu::Tnmp).unwrap(), json!("TNMP"));
}

#[test]
fn test_engine_accepts_table_values_as_plain_numbers() {
    // The engine never special-cases TDU identity; the table only
    // pre-fills ordinary numeric inputs.
    let fees = Tdu::Oncor.fees();
    let eval = truerate_engine::evaluate(&json!({
        "plan_type": "fixed_rate",
        "usage": 1000,
        "energyRate": 12,
        "deliveryRatePerKwh": fees.delivery_per_kwh,
        "baseDeliveryCharge": fees.base_delivery,
        "baseCharge": 9.95,
    }))
    .unwrap();
    let expected = 9.95 + 120.0 + (1000.0 * 3.974 / 100.0 + 3.42);
    assert!((eval.total_bill() - expected).abs() < 1e-6);
}
