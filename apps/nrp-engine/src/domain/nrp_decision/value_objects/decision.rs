//! Per-candidate deactivation decision.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::shared::{MarketplaceCode, is_never};

/// Result of evaluating one depleted marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// All three gates passed; stop selling in this marketplace.
    TurnOff,
    /// At least one gate failed; keep serving cross-border.
    KeepActive,
}

impl Outcome {
    /// Outcome for a set of gate results.
    #[must_use]
    pub const fn from_gates(margin: bool, health: bool, depletion: bool) -> Self {
        if margin && health && depletion {
            Self::TurnOff
        } else {
            Self::KeepActive
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TurnOff => write!(f, "TURN_OFF"),
            Self::KeepActive => write!(f, "KEEP_ACTIVE"),
        }
    }
}

/// Decision for one depleted marketplace, final once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// 1-based position in the evaluation sequence.
    pub evaluation_order: usize,
    /// Evaluated marketplace.
    pub marketplace: MarketplaceCode,
    /// Weekly forecast of the marketplace.
    pub forecast: Decimal,
    /// Unit margin before the cross-border penalty.
    pub unit_margin: Decimal,
    /// `unit_margin - cross_border_unit_cost`.
    pub effective_unit_margin: Decimal,
    /// Blended margin the effective margin was compared against.
    pub blended_unit_margin: Decimal,
    /// Running forecast before this candidate was applied.
    pub remaining_forecast_before: Decimal,
    /// Coverage if this marketplace and every earlier turn-off are removed.
    pub projected_coverage_weeks: Decimal,
    /// Health threshold the projection was compared against.
    pub max_healthy_coverage_weeks: Decimal,
    /// Arrival the projection was compared against.
    pub arrival_weeks: Decimal,
    /// Effective margin does not beat the stocked marketplaces.
    pub pass_margin_gate: bool,
    /// Projected coverage stays within the healthy bound.
    pub pass_health_gate: bool,
    /// Remaining stock runs out before replenishment arrives.
    pub pass_depletion_gate: bool,
    /// Final outcome.
    pub outcome: Outcome,
}

impl Decision {
    /// Returns true if the marketplace is turned off.
    #[must_use]
    pub fn is_turn_off(&self) -> bool {
        self.outcome == Outcome::TurnOff
    }

    /// One line per gate describing observed value, threshold and verdict.
    #[must_use]
    pub fn explain(&self) -> Vec<String> {
        let verdict = |passed: bool| if passed { "PASS" } else { "FAIL" };

        let margin = format!(
            "Margin gate {}: effective unit margin {:.2} vs blended {:.2} ({})",
            verdict(self.pass_margin_gate),
            self.effective_unit_margin,
            self.blended_unit_margin,
            if self.pass_margin_gate {
                "not profitable with cross-border cost"
            } else {
                "still profitable with cross-border cost"
            }
        );

        let projected = format_weeks(self.projected_coverage_weeks);
        let health = format!(
            "Health gate {}: projected coverage {} vs max healthy {:.2} weeks",
            verdict(self.pass_health_gate),
            projected,
            self.max_healthy_coverage_weeks
        );

        let depletion = format!(
            "Depletion gate {}: stock depletes in {} vs replenishment in {}",
            verdict(self.pass_depletion_gate),
            projected,
            format_weeks(self.arrival_weeks)
        );

        vec![margin, health, depletion]
    }
}

fn format_weeks(weeks: Decimal) -> String {
    if is_never(weeks) {
        "never".to_string()
    } else {
        format!("{weeks:.2} weeks")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::NEVER_WEEKS;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    fn decision(margin: bool, health: bool, depletion: bool) -> Decision {
        Decision {
            evaluation_order: 1,
            marketplace: MarketplaceCode::parse("IT").unwrap(),
            forecast: dec!(10),
            unit_margin: dec!(1.80),
            effective_unit_margin: dec!(0.30),
            blended_unit_margin: dec!(2.909),
            remaining_forecast_before: dec!(80),
            projected_coverage_weeks: dec!(2.85),
            max_healthy_coverage_weeks: dec!(7),
            arrival_weeks: dec!(2),
            pass_margin_gate: margin,
            pass_health_gate: health,
            pass_depletion_gate: depletion,
            outcome: Outcome::from_gates(margin, health, depletion),
        }
    }

    #[test_case(true, true, true, Outcome::TurnOff ; "all pass")]
    #[test_case(false, true, true, Outcome::KeepActive ; "margin fails")]
    #[test_case(true, false, true, Outcome::KeepActive ; "health fails")]
    #[test_case(true, true, false, Outcome::KeepActive ; "depletion fails")]
    #[test_case(false, false, false, Outcome::KeepActive ; "all fail")]
    fn outcome_requires_every_gate(margin: bool, health: bool, depletion: bool, expected: Outcome) {
        assert_eq!(Outcome::from_gates(margin, health, depletion), expected);
    }

    #[test]
    fn explain_has_one_line_per_gate() {
        let lines = decision(true, true, false).explain();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Margin gate PASS"));
        assert!(lines[1].starts_with("Health gate PASS"));
        assert!(lines[2].starts_with("Depletion gate FAIL"));
        assert!(lines[2].contains("2.85 weeks"));
    }

    #[test]
    fn explain_renders_never_sentinel() {
        let mut d = decision(true, false, true);
        d.arrival_weeks = NEVER_WEEKS;
        d.projected_coverage_weeks = NEVER_WEEKS;
        let lines = d.explain();
        assert!(lines[1].contains("never"));
        assert!(lines[2].ends_with("replenishment in never"));
    }

    #[test]
    fn outcome_serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&Outcome::KeepActive).unwrap(),
            "\"KEEP_ACTIVE\""
        );
        assert_eq!(Outcome::TurnOff.to_string(), "TURN_OFF");
    }
}
