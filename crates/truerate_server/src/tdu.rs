//! TDU identifiers, delivery-fee defaults, and the zip-prefix guess.
//!
//! The fee table pre-fills the calculator's delivery inputs; the engine
//! never special-cases TDU identity and only ever sees the numbers. Update
//! the table when the utilities refile their rates.

use serde::Serialize;

/// The transmission & distribution utilities the calculator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum Tdu {
    /// CenterPoint Energy (Houston area).
    CenterPoint,
    /// Oncor (Dallas–Fort Worth and much of north Texas).
    Oncor,
    /// AEP Texas Central (coastal bend and south Texas).
    #[strum(serialize = "AEP Texas Central")]
    #[serde(rename = "AEP Texas Central")]
    AepTexasCentral,
    /// AEP Texas North (Abilene and west central Texas).
    #[strum(serialize = "AEP Texas North")]
    #[serde(rename = "AEP Texas North")]
    AepTexasNorth,
    /// Texas-New Mexico Power.
    #[strum(serialize = "TNMP")]
    #[serde(rename = "TNMP")]
    Tnmp,
}

/// Current delivery charges for one TDU.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryFees {
    /// Display name.
    pub name: &'static str,
    /// Volumetric delivery rate, cents per kWh.
    pub delivery_per_kwh: f64,
    /// Flat monthly delivery charge, dollars.
    pub base_delivery: f64,
}

/// Zip codes whose territory does not follow their prefix. Checked before
/// the prefix ranges. Port Lavaca and Matagorda carry Houston-style 77
/// prefixes but sit in AEP Texas Central territory.
const ZIP_OVERRIDES: &[(&str, Tdu)] = &[
    ("77979", Tdu::AepTexasCentral),
    ("77457", Tdu::AepTexasCentral),
];

impl Tdu {
    /// Every known TDU, in dropdown order.
    pub fn all() -> [Tdu; 5] {
        [
            Tdu::CenterPoint,
            Tdu::Oncor,
            Tdu::AepTexasNorth,
            Tdu::AepTexasCentral,
            Tdu::Tnmp,
        ]
    }

    /// Current delivery fees for this TDU.
    pub fn fees(&self) -> DeliveryFees {
        match self {
            Tdu::CenterPoint => DeliveryFees {
                name: "CenterPoint",
                delivery_per_kwh: 4.639,
                base_delivery: 4.39,
            },
            Tdu::Oncor => DeliveryFees {
                name: "Oncor",
                delivery_per_kwh: 3.974,
                base_delivery: 3.42,
            },
            Tdu::AepTexasNorth => DeliveryFees {
                name: "AEP Texas North",
                delivery_per_kwh: 4.123,
                base_delivery: 4.79,
            },
            Tdu::AepTexasCentral => DeliveryFees {
                name: "AEP Texas Central",
                delivery_per_kwh: 3.998,
                base_delivery: 4.79,
            },
            Tdu::Tnmp => DeliveryFees {
                name: "TNMP",
                delivery_per_kwh: 4.011,
                base_delivery: 7.85,
            },
        }
    }

    /// Guess the TDU for a 5-digit zip code.
    ///
    /// Explicit overrides win; otherwise prefix ranges decide. Returns
    /// `None` for malformed zips and for territory the table does not
    /// cover (the UI treats that as "Custom / Other").
    pub fn from_zip(zip: &str) -> Option<Tdu> {
        if zip.len() != 5 || !zip.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        if let Some((_, tdu)) = ZIP_OVERRIDES.iter().find(|(z, _)| *z == zip) {
            return Some(*tdu);
        }

        let prefix2 = &zip[..2];
        let prefix3: u32 = zip[..3].parse().ok()?;

        if prefix2 == "77" {
            return Some(Tdu::CenterPoint);
        }
        if prefix2 == "75" || (760..=763).contains(&prefix3) {
            return Some(Tdu::Oncor);
        }
        if (783..=785).contains(&prefix3) {
            return Some(Tdu::AepTexasCentral);
        }
        if (795..=796).contains(&prefix3) {
            return Some(Tdu::AepTexasNorth);
        }
        if (764..=766).contains(&prefix3) {
            return Some(Tdu::Tnmp);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::Tdu;

    #[test]
    fn prefix_ranges_route_major_metros() {
        assert_eq!(Tdu::from_zip("77002"), Some(Tdu::CenterPoint)); // Houston
        assert_eq!(Tdu::from_zip("75201"), Some(Tdu::Oncor)); // Dallas
        assert_eq!(Tdu::from_zip("76102"), Some(Tdu::Oncor)); // Fort Worth
        assert_eq!(Tdu::from_zip("78401"), Some(Tdu::AepTexasCentral)); // Corpus Christi
        assert_eq!(Tdu::from_zip("79601"), Some(Tdu::AepTexasNorth)); // Abilene
        assert_eq!(Tdu::from_zip("76528"), Some(Tdu::Tnmp)); // Gatesville
    }

    #[test]
    fn overrides_beat_prefixes() {
        // 77 prefix would say CenterPoint; the override list knows better.
        assert_eq!(Tdu::from_zip("77979"), Some(Tdu::AepTexasCentral));
        assert_eq!(Tdu::from_zip("77457"), Some(Tdu::AepTexasCentral));
    }

    #[test]
    fn unknown_territory_and_malformed_zips_return_none() {
        assert_eq!(Tdu::from_zip("79901"), None); // El Paso, outside ERCOT
        assert_eq!(Tdu::from_zip("1234"), None);
        assert_eq!(Tdu::from_zip("abcde"), None);
        assert_eq!(Tdu::from_zip("770011"), None);
    }

    #[test]
    fn display_matches_fee_table_names() {
        for tdu in Tdu::all() {
            assert_eq!(tdu.to_string(), tdu.fees().name);
        }
    }
}
