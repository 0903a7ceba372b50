//! Utility delivery charges shared by every plan kind.

/// Total delivery cost in dollars for a billing period.
///
/// The TDU bills a per-kWh rate (cents) plus a flat monthly charge
/// (dollars), independent of the energy retailer.
///
/// # Examples
///
/// ```
/// use truerate_engine::delivery_cost;
///
/// assert_eq!(delivery_cost(1000.0, 4.0, 4.0), 44.0);
/// ```
pub fn delivery_cost(usage_kwh: f64, delivery_rate_cents: f64, base_delivery_charge: f64) -> f64 {
    usage_kwh * delivery_rate_cents / 100.0 + base_delivery_charge
}

#[cfg(test)]
mod tests {
    use super::delivery_cost;

    #[test]
    fn combines_volumetric_and_base_charge() {
        assert_eq!(delivery_cost(500.0, 4.639, 4.39), 500.0 * 0.04639 + 4.39);
    }

    #[test]
    fn zero_rate_leaves_base_charge() {
        assert_eq!(delivery_cost(1200.0, 0.0, 7.85), 7.85);
    }
}
