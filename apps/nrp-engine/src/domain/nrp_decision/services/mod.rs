//! Domain services for the NRP decision.
//!
//! One stage per module, each consuming the previous stage's output.

mod candidate_selector;
mod comparative_reporter;
mod decision_engine;
mod insight_builder;
mod metrics_aggregator;
mod sequential_optimizer;

pub use candidate_selector::CandidateSelector;
pub use comparative_reporter::{ComparativeReporter, final_coverage_weeks};
pub use decision_engine::NrpDecisionEngine;
pub use insight_builder::InsightBuilder;
pub use metrics_aggregator::MetricsAggregator;
pub use sequential_optimizer::{OptimizerResult, SequentialOptimizer};
