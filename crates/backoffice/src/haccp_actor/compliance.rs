//! Critical temperature limits per zone.
//!
//! Cold zones have a maximum, hot zones a minimum. A reading exactly on the limit complies.

use crate::model::Zone;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    AtMost(Decimal),
    AtLeast(Decimal),
}

impl Limit {
    pub fn allows(self, reading_c: Decimal) -> bool {
        match self {
            Limit::AtMost(max) => reading_c <= max,
            Limit::AtLeast(min) => reading_c >= min,
        }
    }
}

impl Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Limit::AtMost(max) => write!(f, "<= {} C", max),
            Limit::AtLeast(min) => write!(f, ">= {} C", min),
        }
    }
}

/// Context of the HACCP actor, loaded from the `haccp` config section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HaccpLimits {
    pub refrigerator_max_c: Decimal,
    pub freezer_max_c: Decimal,
    pub hot_holding_min_c: Decimal,
    pub cooking_min_c: Decimal,
    /// Chilled deliveries.
    pub delivery_max_c: Decimal,
}

impl Default for HaccpLimits {
    fn default() -> Self {
        Self {
            refrigerator_max_c: Decimal::from(5),
            freezer_max_c: Decimal::from(-18),
            hot_holding_min_c: Decimal::from(63),
            cooking_min_c: Decimal::from(75),
            delivery_max_c: Decimal::from(8),
        }
    }
}

impl HaccpLimits {
    pub fn limit_for(&self, zone: Zone) -> Limit {
        match zone {
            Zone::Refrigerator => Limit::AtMost(self.refrigerator_max_c),
            Zone::Freezer => Limit::AtMost(self.freezer_max_c),
            Zone::HotHolding => Limit::AtLeast(self.hot_holding_min_c),
            Zone::Cooking => Limit::AtLeast(self.cooking_min_c),
            Zone::Delivery => Limit::AtMost(self.delivery_max_c),
        }
    }

    pub fn is_compliant(&self, zone: Zone, reading_c: Decimal) -> bool {
        self.limit_for(zone).allows(reading_c)
    }

    /// Every cold limit must sit below every hot one, and freezers below fridges.
    pub fn validate(&self) -> Result<(), String> {
        if self.freezer_max_c > self.refrigerator_max_c {
            return Err(format!(
                "haccp.freezer_max_c ({}) is above haccp.refrigerator_max_c ({})",
                self.freezer_max_c, self.refrigerator_max_c
            ));
        }
        let warmest_cold = self.refrigerator_max_c.max(self.delivery_max_c);
        let coolest_hot = self.hot_holding_min_c.min(self.cooking_min_c);
        if warmest_cold >= coolest_hot {
            return Err(format!(
                "cold limits (up to {}) overlap hot limits (from {})",
                warmest_cold, coolest_hot
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn boundaries_are_inclusive() {
        let limits = HaccpLimits::default();
        assert!(limits.is_compliant(Zone::Refrigerator, dec("5")));
        assert!(!limits.is_compliant(Zone::Refrigerator, dec("5.1")));
        assert!(limits.is_compliant(Zone::Freezer, dec("-18")));
        assert!(!limits.is_compliant(Zone::Freezer, dec("-17.9")));
        assert!(limits.is_compliant(Zone::HotHolding, dec("63")));
        assert!(!limits.is_compliant(Zone::HotHolding, dec("62.9")));
        assert!(limits.is_compliant(Zone::Cooking, dec("75")));
        assert!(!limits.is_compliant(Zone::Cooking, dec("74.5")));
        assert!(limits.is_compliant(Zone::Delivery, dec("8")));
        assert!(!limits.is_compliant(Zone::Delivery, dec("8.5")));
    }

    #[test]
    fn cold_readings_far_below_limit_comply() {
        let limits = HaccpLimits::default();
        assert!(limits.is_compliant(Zone::Refrigerator, dec("-2")));
        assert!(limits.is_compliant(Zone::Freezer, dec("-25")));
        assert!(limits.is_compliant(Zone::Cooking, dec("92")));
    }

    #[test]
    fn limit_display() {
        let limits = HaccpLimits::default();
        assert_eq!(limits.limit_for(Zone::Freezer).to_string(), "<= -18 C");
        assert_eq!(limits.limit_for(Zone::HotHolding).to_string(), ">= 63 C");
    }

    #[test]
    fn validate_rejects_inverted_ranges() {
        assert!(HaccpLimits::default().validate().is_ok());

        let warm_freezer = HaccpLimits {
            freezer_max_c: dec("6"),
            ..HaccpLimits::default()
        };
        assert!(warm_freezer.validate().is_err());

        let cool_hot_holding = HaccpLimits {
            hot_holding_min_c: dec("4"),
            ..HaccpLimits::default()
        };
        assert!(cool_hot_holding.validate().is_err());
    }
}
