//! NRP Decision Engine
//!
//! Runs the aggregator, selector, optimizer, reporter and insight builder in
//! order for one snapshot. Pure and deterministic: identical inputs give
//! identical outputs, and nothing is kept between runs.

use crate::domain::nrp_decision::value_objects::{
    EvaluationStatus, GlobalParameters, MarketplaceInput, NrpEvaluation,
};

use super::{
    CandidateSelector, ComparativeReporter, InsightBuilder, MetricsAggregator, SequentialOptimizer,
};

/// Façade over the decision stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct NrpDecisionEngine {
    aggregator: MetricsAggregator,
    selector: CandidateSelector,
    optimizer: SequentialOptimizer,
    reporter: ComparativeReporter,
    insights: InsightBuilder,
}

impl NrpDecisionEngine {
    /// Create a new engine.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            aggregator: MetricsAggregator,
            selector: CandidateSelector,
            optimizer: SequentialOptimizer,
            reporter: ComparativeReporter,
            insights: InsightBuilder,
        }
    }

    /// Evaluate one snapshot.
    ///
    /// Inputs are expected to be validated upstream; any numeric input still
    /// produces a result.
    #[must_use]
    pub fn evaluate(
        &self,
        marketplaces: &[MarketplaceInput],
        parameters: &GlobalParameters,
    ) -> NrpEvaluation {
        let metrics = self.aggregator.aggregate(marketplaces, parameters);
        let candidates = self.selector.select(marketplaces);
        let result = self.optimizer.optimize(&candidates, &metrics, parameters);
        let report = self.reporter.report(
            marketplaces,
            &metrics,
            parameters,
            &result.decisions,
            result.remaining_forecast,
        );
        let insights = self
            .insights
            .build(&metrics, parameters, &result.decisions, &report);

        let status = if candidates.is_empty() {
            EvaluationStatus::NoActionNeeded
        } else if result.turn_off_count() == 0 {
            EvaluationStatus::NoDeactivations
        } else {
            EvaluationStatus::DeactivationsRecommended
        };

        tracing::info!(
            marketplaces = marketplaces.len(),
            candidates = candidates.len(),
            turned_off = result.turn_off_count(),
            mode = %parameters.replenishment_mode,
            coverage_weeks = %metrics.coverage_weeks,
            final_coverage_weeks = %report.after.coverage_weeks,
            profit_improvement = %report.deltas.profit_improvement,
            status = ?status,
            "NRP evaluation complete"
        );

        NrpEvaluation {
            status,
            metrics,
            decisions: result.decisions,
            remaining_forecast: result.remaining_forecast,
            report,
            insights,
        }
    }
}
