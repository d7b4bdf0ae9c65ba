//! EU-wide aggregates derived from the marketplace snapshot.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::shared::is_never;

/// Aggregates computed once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateMetrics {
    /// Sum of stock across all marketplaces.
    pub total_stock: Decimal,
    /// Sum of weekly forecast across all marketplaces.
    pub total_forecast: Decimal,
    /// `total_stock / total_forecast`, 0 without demand.
    pub coverage_weeks: Decimal,
    /// Forecast-weighted unit margin of stocked marketplaces.
    pub blended_unit_margin: Decimal,
    /// Weeks until replenishment; the never sentinel for end-of-life.
    pub arrival_weeks: Decimal,
    /// Number of marketplaces with stock.
    pub stocked_count: usize,
    /// Number of marketplaces without stock.
    pub depleted_count: usize,
}

impl AggregateMetrics {
    /// Returns true if no replenishment is expected.
    #[must_use]
    pub fn arrival_is_never(&self) -> bool {
        is_never(self.arrival_weeks)
    }
}
