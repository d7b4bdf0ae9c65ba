//! Global replenishment and cost parameters.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::weeks::days_to_weeks;
use crate::domain::shared::{DomainError, NEVER_WEEKS};

/// Replenishment situation of the shared stock pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReplenishmentMode {
    /// No purchase order placed, vendor confirms reliably.
    #[default]
    NoOrderHighConfirmation,
    /// No purchase order placed, vendor confirms poorly; lead time doubles.
    NoOrderLowConfirmation,
    /// A purchase order is already on its way.
    IncomingOrder,
    /// Product will never be replenished.
    EndOfLife,
}

impl ReplenishmentMode {
    /// All modes in declaration order.
    pub const ALL: [Self; 4] = [
        Self::NoOrderHighConfirmation,
        Self::NoOrderLowConfirmation,
        Self::IncomingOrder,
        Self::EndOfLife,
    ];

    /// Wire name of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoOrderHighConfirmation => "NO_ORDER_HIGH_CONFIRMATION",
            Self::NoOrderLowConfirmation => "NO_ORDER_LOW_CONFIRMATION",
            Self::IncomingOrder => "INCOMING_ORDER",
            Self::EndOfLife => "END_OF_LIFE",
        }
    }
}

impl fmt::Display for ReplenishmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReplenishmentMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownVariant {
                kind: "replenishment mode".to_string(),
                value: s.to_string(),
            })
    }
}

/// Parameters shared by every marketplace in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalParameters {
    /// Replenishment situation.
    pub replenishment_mode: ReplenishmentMode,
    /// Weeks until the incoming order lands (INCOMING_ORDER only).
    pub incoming_order_eta_weeks: Decimal,
    /// Vendor lead time in days (NO_ORDER_* only).
    pub vendor_lead_time_days: Decimal,
    /// Vendor confirmation rate. Carried through; no formula reads it.
    pub confirmation_rate_percent: Decimal,
    /// Extra cost per unit fulfilled from another marketplace (OOR cost).
    pub cross_border_unit_cost: Decimal,
    /// Upper bound of healthy weeks-of-coverage after deactivation.
    pub max_healthy_coverage_weeks: Decimal,
}

impl Default for GlobalParameters {
    fn default() -> Self {
        Self {
            replenishment_mode: ReplenishmentMode::default(),
            incoming_order_eta_weeks: dec!(8),
            vendor_lead_time_days: dec!(14),
            confirmation_rate_percent: dec!(30),
            cross_border_unit_cost: dec!(1.50),
            max_healthy_coverage_weeks: dec!(7),
        }
    }
}

impl GlobalParameters {
    /// Weeks until the next replenishment arrives, by mode.
    ///
    /// End-of-life products never receive stock, reported as the never sentinel.
    #[must_use]
    pub fn arrival_weeks(&self) -> Decimal {
        match self.replenishment_mode {
            ReplenishmentMode::EndOfLife => NEVER_WEEKS,
            ReplenishmentMode::IncomingOrder => self.incoming_order_eta_weeks,
            ReplenishmentMode::NoOrderLowConfirmation => {
                days_to_weeks(Decimal::TWO * self.vendor_lead_time_days)
            }
            ReplenishmentMode::NoOrderHighConfirmation => {
                days_to_weeks(self.vendor_lead_time_days)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn params(mode: ReplenishmentMode) -> GlobalParameters {
        GlobalParameters {
            replenishment_mode: mode,
            incoming_order_eta_weeks: dec!(5.5),
            vendor_lead_time_days: dec!(14),
            ..GlobalParameters::default()
        }
    }

    #[test_case(ReplenishmentMode::NoOrderHighConfirmation, dec!(2) ; "high confirmation uses lead time")]
    #[test_case(ReplenishmentMode::NoOrderLowConfirmation, dec!(4) ; "low confirmation doubles lead time")]
    #[test_case(ReplenishmentMode::IncomingOrder, dec!(5.5) ; "incoming order uses eta")]
    #[test_case(ReplenishmentMode::EndOfLife, NEVER_WEEKS ; "end of life never arrives")]
    fn arrival_weeks_by_mode(mode: ReplenishmentMode, expected: Decimal) {
        assert_eq!(params(mode).arrival_weeks(), expected);
    }

    #[test]
    fn eta_ignored_outside_incoming_order() {
        let mut p = params(ReplenishmentMode::NoOrderHighConfirmation);
        p.incoming_order_eta_weeks = dec!(100);
        assert_eq!(p.arrival_weeks(), dec!(2));
    }

    #[test_case("NO_ORDER_HIGH_CONFIRMATION", ReplenishmentMode::NoOrderHighConfirmation)]
    #[test_case("no-order-low-confirmation", ReplenishmentMode::NoOrderLowConfirmation)]
    #[test_case(" incoming_order ", ReplenishmentMode::IncomingOrder)]
    #[test_case("End Of Life", ReplenishmentMode::EndOfLife)]
    fn parse_mode(raw: &str, expected: ReplenishmentMode) {
        assert_eq!(raw.parse::<ReplenishmentMode>().unwrap(), expected);
    }

    #[test]
    fn parse_unknown_mode_fails() {
        let err = "SOMETIMES".parse::<ReplenishmentMode>().unwrap_err();
        assert!(matches!(err, DomainError::UnknownVariant { .. }));
    }

    #[test]
    fn defaults_match_calculator_prefill() {
        let p = GlobalParameters::default();
        assert_eq!(p.replenishment_mode, ReplenishmentMode::NoOrderHighConfirmation);
        assert_eq!(p.incoming_order_eta_weeks, dec!(8));
        assert_eq!(p.vendor_lead_time_days, dec!(14));
        assert_eq!(p.confirmation_rate_percent, dec!(30));
        assert_eq!(p.cross_border_unit_cost, dec!(1.50));
        assert_eq!(p.max_healthy_coverage_weeks, dec!(7));
    }

    #[test]
    fn mode_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ReplenishmentMode::EndOfLife).unwrap();
        assert_eq!(json, "\"END_OF_LIFE\"");
    }
}
