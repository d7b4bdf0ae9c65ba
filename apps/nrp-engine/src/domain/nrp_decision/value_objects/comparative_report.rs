//! Before/after comparison of the optimizer's final state.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::shared::MarketplaceCode;

/// Totals for one side of the comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSnapshot {
    /// Weekly forecast of the active marketplaces.
    pub active_forecast: Decimal,
    /// Weeks of coverage at that forecast.
    pub coverage_weeks: Decimal,
    /// Active marketplaces, in input order.
    pub active_marketplaces: Vec<MarketplaceCode>,
    /// Number of active marketplaces.
    pub active_marketplace_count: usize,
    /// Units fulfilled cross-border over the coverage horizon.
    pub cross_border_units: Decimal,
    /// `cross_border_units * cross_border_unit_cost`.
    pub cross_border_cost: Decimal,
    /// Contribution profit of the stock sold.
    pub contribution_profit: Decimal,
}

/// Profit allocation for one marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketplaceProfit {
    /// Marketplace identifier.
    pub marketplace: MarketplaceCode,
    /// Marketplace had no stock of its own.
    pub depleted: bool,
    /// Marketplace is still selling after optimization.
    pub active_after: bool,
    /// Units allocated before optimization.
    pub units_before: Decimal,
    /// Profit before optimization.
    pub profit_before: Decimal,
    /// Units allocated after optimization.
    pub units_after: Decimal,
    /// Profit after optimization.
    pub profit_after: Decimal,
    /// `profit_after - profit_before`.
    pub profit_delta: Decimal,
}

/// Differences between the two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDeltas {
    /// `after.contribution_profit - before.contribution_profit`.
    pub profit_improvement: Decimal,
    /// Improvement relative to the before profit, in percent; 0 without a base.
    pub profit_improvement_pct: Decimal,
    /// `before.cross_border_units - after.cross_border_units`.
    pub cross_border_units_avoided: Decimal,
    /// `before.cross_border_cost - after.cross_border_cost`.
    pub cross_border_cost_saved: Decimal,
}

/// Full comparative report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparativeReport {
    /// State before any deactivation.
    pub before: PeriodSnapshot,
    /// State after the optimizer's turn-offs.
    pub after: PeriodSnapshot,
    /// Per-marketplace breakdown, in input order.
    pub marketplaces: Vec<MarketplaceProfit>,
    /// Derived differences.
    pub deltas: ReportDeltas,
}

impl ComparativeReport {
    /// Breakdown row for a marketplace.
    #[must_use]
    pub fn marketplace(&self, code: &str) -> Option<&MarketplaceProfit> {
        self.marketplaces
            .iter()
            .find(|m| m.marketplace.as_str() == code)
    }
}
