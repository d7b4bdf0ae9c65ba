//! Insight Builder
//!
//! Derives qualitative flags and messages from the computed numbers.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::domain::nrp_decision::value_objects::{
    AggregateMetrics, ComparativeReport, Decision, DepletionOutlook, GlobalParameters, Insight,
    InsightSet, ProfitDirection,
};
use crate::domain::shared::{MarketplaceCode, is_never};

/// Builds the [`InsightSet`] for one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsightBuilder;

impl InsightBuilder {
    /// Derive the insight set.
    #[must_use]
    pub fn build(
        &self,
        metrics: &AggregateMetrics,
        parameters: &GlobalParameters,
        decisions: &[Decision],
        report: &ComparativeReport,
    ) -> InsightSet {
        let turned_off: Vec<MarketplaceCode> = decisions
            .iter()
            .filter(|d| d.is_turn_off())
            .map(|d| d.marketplace.clone())
            .collect();
        let deactivations_occurred = !turned_off.is_empty();

        let profit_direction = match report.deltas.profit_improvement.cmp(&Decimal::ZERO) {
            Ordering::Greater => ProfitDirection::Improved,
            Ordering::Equal => ProfitDirection::Unchanged,
            Ordering::Less => ProfitDirection::Declined,
        };
        let cross_border_savings = report.deltas.cross_border_cost_saved > Decimal::ZERO;

        let final_coverage = report.after.coverage_weeks;
        let depletion_outlook = if is_never(metrics.arrival_weeks) {
            DepletionOutlook::NoReplenishment
        } else if final_coverage < metrics.arrival_weeks {
            DepletionOutlook::DepletesBeforeArrival
        } else {
            DepletionOutlook::CoversPastArrival
        };
        let health_threshold_breached = final_coverage > parameters.max_healthy_coverage_weeks;

        let mut messages = Vec::new();
        if deactivations_occurred {
            let codes: Vec<&str> = turned_off.iter().map(MarketplaceCode::as_str).collect();
            messages.push(Insight::info(
                "DEACTIVATIONS_RECOMMENDED",
                format!("Turn off {}", codes.join(", ")),
            ));
        }
        match profit_direction {
            ProfitDirection::Improved => messages.push(Insight::info(
                "PROFIT_IMPROVED",
                format!(
                    "Contribution profit improves by {} ({}%)",
                    report.deltas.profit_improvement.round_dp(2),
                    report.deltas.profit_improvement_pct.round_dp(1)
                ),
            )),
            ProfitDirection::Declined => messages.push(Insight::warning(
                "PROFIT_DECLINED",
                format!(
                    "Contribution profit declines by {}",
                    report.deltas.profit_improvement.abs().round_dp(2)
                ),
            )),
            ProfitDirection::Unchanged => {}
        }
        if cross_border_savings {
            messages.push(Insight::info(
                "CROSS_BORDER_SAVINGS",
                format!(
                    "Avoids {} cross-border units, saving {}",
                    report.deltas.cross_border_units_avoided.round_dp(2),
                    report.deltas.cross_border_cost_saved.round_dp(2)
                ),
            ));
        }
        match depletion_outlook {
            DepletionOutlook::NoReplenishment => messages.push(Insight::info(
                "NO_REPLENISHMENT",
                "No replenishment expected; remaining stock is final",
            )),
            DepletionOutlook::DepletesBeforeArrival => messages.push(Insight::warning(
                "DEPLETES_BEFORE_ARRIVAL",
                format!(
                    "Stock runs out after {} weeks, before replenishment at {} weeks",
                    final_coverage.round_dp(2),
                    metrics.arrival_weeks.round_dp(2)
                ),
            )),
            DepletionOutlook::CoversPastArrival => messages.push(Insight::info(
                "COVERS_PAST_ARRIVAL",
                "Stock lasts until replenishment arrives",
            )),
        }
        if health_threshold_breached {
            let coverage = if is_never(final_coverage) {
                "never depletes".to_string()
            } else {
                format!("{} weeks", final_coverage.round_dp(2))
            };
            messages.push(Insight::warning(
                "HEALTH_THRESHOLD_BREACHED",
                format!(
                    "Coverage {coverage} exceeds the healthy maximum of {} weeks",
                    parameters.max_healthy_coverage_weeks
                ),
            ));
        }

        InsightSet {
            deactivations_occurred,
            turned_off,
            profit_direction,
            cross_border_savings,
            depletion_outlook,
            health_threshold_breached,
            messages,
        }
    }
}
