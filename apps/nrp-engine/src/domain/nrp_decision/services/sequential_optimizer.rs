//! Sequential Optimizer
//!
//! Evaluates candidates one at a time against the margin, health and
//! depletion gates. Each turn-off removes its forecast from the running
//! total before the next candidate is evaluated, so later candidates see the
//! effect of earlier decisions. One pass, no backtracking.

use rust_decimal::Decimal;

use crate::domain::nrp_decision::value_objects::{
    AggregateMetrics, Decision, GlobalParameters, MarketplaceInput, Outcome,
};
use crate::domain::shared::{coverage_or_never, is_never};

/// Final state of one optimizer pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizerResult {
    /// Decisions in evaluation order.
    pub decisions: Vec<Decision>,
    /// Forecast still active after the last decision.
    pub remaining_forecast: Decimal,
}

impl OptimizerResult {
    /// Number of turned-off marketplaces.
    #[must_use]
    pub fn turn_off_count(&self) -> usize {
        self.decisions.iter().filter(|d| d.is_turn_off()).count()
    }
}

/// Greedy, order-dependent deactivation pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialOptimizer;

impl SequentialOptimizer {
    /// Run the gates over `candidates` in the given order.
    #[must_use]
    pub fn optimize(
        &self,
        candidates: &[&MarketplaceInput],
        metrics: &AggregateMetrics,
        parameters: &GlobalParameters,
    ) -> OptimizerResult {
        let initial = OptimizerResult {
            decisions: Vec::with_capacity(candidates.len()),
            remaining_forecast: metrics.total_forecast,
        };

        candidates
            .iter()
            .enumerate()
            .fold(initial, |mut state, (index, candidate)| {
                let decision = Self::evaluate(
                    index + 1,
                    candidate,
                    state.remaining_forecast,
                    metrics,
                    parameters,
                );

                tracing::debug!(
                    marketplace = %decision.marketplace,
                    order = decision.evaluation_order,
                    effective_unit_margin = %decision.effective_unit_margin,
                    projected_coverage_weeks = %decision.projected_coverage_weeks,
                    pass_margin_gate = decision.pass_margin_gate,
                    pass_health_gate = decision.pass_health_gate,
                    pass_depletion_gate = decision.pass_depletion_gate,
                    outcome = %decision.outcome,
                    "Evaluated deactivation candidate"
                );

                if decision.is_turn_off() {
                    state.remaining_forecast =
                        state.remaining_forecast.saturating_sub(candidate.forecast);
                }
                state.decisions.push(decision);
                state
            })
    }

    /// Evaluate one candidate against the running forecast.
    fn evaluate(
        evaluation_order: usize,
        candidate: &MarketplaceInput,
        remaining_forecast: Decimal,
        metrics: &AggregateMetrics,
        parameters: &GlobalParameters,
    ) -> Decision {
        let effective_unit_margin = candidate
            .unit_margin
            .saturating_sub(parameters.cross_border_unit_cost);
        let pass_margin_gate = effective_unit_margin <= metrics.blended_unit_margin;

        let projected_coverage_weeks = coverage_or_never(
            metrics.total_stock,
            remaining_forecast.saturating_sub(candidate.forecast),
        );
        let pass_health_gate = projected_coverage_weeks <= parameters.max_healthy_coverage_weeks;

        let pass_depletion_gate =
            is_never(metrics.arrival_weeks) || projected_coverage_weeks < metrics.arrival_weeks;

        Decision {
            evaluation_order,
            marketplace: candidate.code.clone(),
            forecast: candidate.forecast,
            unit_margin: candidate.unit_margin,
            effective_unit_margin,
            blended_unit_margin: metrics.blended_unit_margin,
            remaining_forecast_before: remaining_forecast,
            projected_coverage_weeks,
            max_healthy_coverage_weeks: parameters.max_healthy_coverage_weeks,
            arrival_weeks: metrics.arrival_weeks,
            pass_margin_gate,
            pass_health_gate,
            pass_depletion_gate,
            outcome: Outcome::from_gates(pass_margin_gate, pass_health_gate, pass_depletion_gate),
        }
    }
}
