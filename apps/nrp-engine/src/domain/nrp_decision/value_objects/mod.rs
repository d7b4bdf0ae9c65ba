//! Value objects for the NRP decision context.

mod aggregate_metrics;
mod comparative_report;
mod decision;
mod evaluation;
mod global_parameters;
mod insights;
mod marketplace_input;

pub use aggregate_metrics::AggregateMetrics;
pub use comparative_report::{ComparativeReport, MarketplaceProfit, PeriodSnapshot, ReportDeltas};
pub use decision::{Decision, Outcome};
pub use evaluation::{EvaluationStatus, NrpEvaluation};
pub use global_parameters::{GlobalParameters, ReplenishmentMode};
pub use insights::{DepletionOutlook, Insight, InsightSet, InsightSeverity, ProfitDirection};
pub use marketplace_input::MarketplaceInput;
