//! NRP Decision Bounded Context
//!
//! Decides which zero-stock marketplaces to turn off so the shared stock
//! pool is not drained by unprofitable cross-border demand before the next
//! replenishment lands.
//!
//! # Key Concepts
//!
//! - **Depleted marketplace**: Zero stock on hand; its demand is fulfilled
//!   cross-border at an extra unit cost
//! - **Gates**: Margin, health and depletion checks a candidate must all pass
//! - **Sequential optimization**: Each turn-off changes the running forecast
//!   seen by the next candidate

pub mod services;
pub mod value_objects;

pub use services::{
    CandidateSelector, ComparativeReporter, InsightBuilder, MetricsAggregator, NrpDecisionEngine,
    OptimizerResult, SequentialOptimizer, final_coverage_weeks,
};
pub use value_objects::{
    AggregateMetrics, ComparativeReport, Decision, DepletionOutlook, EvaluationStatus,
    GlobalParameters, Insight, InsightSet, InsightSeverity, MarketplaceInput, MarketplaceProfit,
    NrpEvaluation, Outcome, PeriodSnapshot, ProfitDirection, ReplenishmentMode, ReportDeltas,
};
