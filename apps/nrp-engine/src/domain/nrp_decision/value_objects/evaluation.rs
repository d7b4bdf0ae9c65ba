//! Complete engine output for one run.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{AggregateMetrics, ComparativeReport, Decision, InsightSet};
use crate::domain::shared::MarketplaceCode;

/// Overall result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvaluationStatus {
    /// No depleted marketplace; nothing to decide.
    NoActionNeeded,
    /// Candidates were evaluated and all stay active.
    NoDeactivations,
    /// At least one marketplace should be turned off.
    DeactivationsRecommended,
}

/// Metrics, decisions, report and insights of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NrpEvaluation {
    /// Overall result.
    pub status: EvaluationStatus,
    /// Aggregates before optimization.
    pub metrics: AggregateMetrics,
    /// Decisions in evaluation order.
    pub decisions: Vec<Decision>,
    /// Forecast still active after the last decision.
    pub remaining_forecast: Decimal,
    /// Before/after comparison.
    pub report: ComparativeReport,
    /// Summary flags.
    pub insights: InsightSet,
}

impl NrpEvaluation {
    /// Marketplaces turned off, in evaluation order.
    #[must_use]
    pub fn turned_off(&self) -> Vec<&MarketplaceCode> {
        self.decisions
            .iter()
            .filter(|d| d.is_turn_off())
            .map(|d| &d.marketplace)
            .collect()
    }

    /// Decision for a marketplace, if it was a candidate.
    #[must_use]
    pub fn decision(&self, code: &str) -> Option<&Decision> {
        self.decisions
            .iter()
            .find(|d| d.marketplace.as_str() == code)
    }
}
