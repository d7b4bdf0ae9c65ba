//! Comparative Reporter
//!
//! Compares the state before any deactivation with the state after the
//! optimizer's turn-offs: profit, cross-border volume and cost, and a
//! per-marketplace breakdown.
//!
//! The two sides allocate stock differently. Before optimization every
//! marketplace receives stock in proportion to its share of the total
//! forecast. After optimization the shares are renormalized over the active
//! forecast only, turned-off marketplaces receive nothing, and no
//! marketplace pays the cross-border penalty. Cross-border cost is reported
//! separately on both sides.
//!
//! Arithmetic saturates rather than panicking, so any numeric input yields a
//! report.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::domain::nrp_decision::value_objects::{
    AggregateMetrics, ComparativeReport, Decision, GlobalParameters, MarketplaceInput,
    MarketplaceProfit, PeriodSnapshot, ReportDeltas,
};
use crate::domain::shared::value_objects::weeks::HUNDRED;
use crate::domain::shared::{MarketplaceCode, coverage_or_never, ratio_or};

/// Builds the [`ComparativeReport`] for one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparativeReporter;

/// Unit and profit allocation of one marketplace on one side.
#[derive(Debug, Clone, Copy)]
struct Allocation {
    units: Decimal,
    profit: Decimal,
}

impl ComparativeReporter {
    /// Build the report from the inputs and the optimizer's decisions.
    #[must_use]
    pub fn report(
        &self,
        marketplaces: &[MarketplaceInput],
        metrics: &AggregateMetrics,
        parameters: &GlobalParameters,
        decisions: &[Decision],
        remaining_forecast: Decimal,
    ) -> ComparativeReport {
        let turned_off: HashSet<&MarketplaceCode> = decisions
            .iter()
            .filter(|d| d.is_turn_off())
            .map(|d| &d.marketplace)
            .collect();
        let is_active = |m: &MarketplaceInput| !turned_off.contains(&m.code);

        let cost = parameters.cross_border_unit_cost;
        let coverage_before = metrics.coverage_weeks;
        let coverage_after = final_coverage_weeks(metrics.total_stock, remaining_forecast);
        let active_forecast_after = saturating_sum(
            marketplaces
                .iter()
                .filter(|m| is_active(m))
                .map(|m| m.forecast),
        );

        let rows: Vec<MarketplaceProfit> = marketplaces
            .iter()
            .map(|m| {
                let active_after = is_active(m);
                let before = allocate(m, metrics.total_forecast, metrics.total_stock, cost);
                let after = if active_after {
                    allocate(m, active_forecast_after, metrics.total_stock, Decimal::ZERO)
                } else {
                    Allocation {
                        units: Decimal::ZERO,
                        profit: Decimal::ZERO,
                    }
                };
                MarketplaceProfit {
                    marketplace: m.code.clone(),
                    depleted: m.is_depleted(),
                    active_after,
                    units_before: before.units,
                    profit_before: before.profit,
                    units_after: after.units,
                    profit_after: after.profit,
                    profit_delta: after.profit.saturating_sub(before.profit),
                }
            })
            .collect();

        let cross_border_before = saturating_sum(
            marketplaces
                .iter()
                .filter(|m| m.is_depleted())
                .map(|m| m.forecast.saturating_mul(coverage_before)),
        );
        let cross_border_after = saturating_sum(
            marketplaces
                .iter()
                .filter(|m| m.is_depleted() && is_active(m))
                .map(|m| m.forecast.saturating_mul(coverage_after)),
        );

        let before = PeriodSnapshot {
            active_forecast: metrics.total_forecast,
            coverage_weeks: coverage_before,
            active_marketplaces: marketplaces.iter().map(|m| m.code.clone()).collect(),
            active_marketplace_count: marketplaces.len(),
            cross_border_units: cross_border_before,
            cross_border_cost: cross_border_before.saturating_mul(cost),
            contribution_profit: saturating_sum(rows.iter().map(|r| r.profit_before)),
        };

        let active_after: Vec<MarketplaceCode> = marketplaces
            .iter()
            .filter(|m| is_active(m))
            .map(|m| m.code.clone())
            .collect();
        let after = PeriodSnapshot {
            active_forecast: active_forecast_after,
            coverage_weeks: coverage_after,
            active_marketplace_count: active_after.len(),
            active_marketplaces: active_after,
            cross_border_units: cross_border_after,
            cross_border_cost: cross_border_after.saturating_mul(cost),
            contribution_profit: saturating_sum(rows.iter().map(|r| r.profit_after)),
        };

        let deltas = deltas(&before, &after);

        ComparativeReport {
            before,
            after,
            marketplaces: rows,
            deltas,
        }
    }
}

/// Coverage once the turn-offs are applied; never when no demand is left.
#[must_use]
pub fn final_coverage_weeks(total_stock: Decimal, remaining_forecast: Decimal) -> Decimal {
    coverage_or_never(total_stock, remaining_forecast)
}

/// Forecast-share allocation of the stock pool to one marketplace.
///
/// `cross_border_unit_cost` is deducted from the margin of depleted
/// marketplaces; pass zero for the after side.
fn allocate(
    marketplace: &MarketplaceInput,
    pool_forecast: Decimal,
    total_stock: Decimal,
    cross_border_unit_cost: Decimal,
) -> Allocation {
    let share = ratio_or(marketplace.forecast, pool_forecast, Decimal::ZERO);
    let units = share.saturating_mul(total_stock);
    let unit_profit = if marketplace.is_depleted() {
        marketplace.unit_margin.saturating_sub(cross_border_unit_cost)
    } else {
        marketplace.unit_margin
    };
    Allocation {
        units,
        profit: units.saturating_mul(unit_profit),
    }
}

fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

fn deltas(before: &PeriodSnapshot, after: &PeriodSnapshot) -> ReportDeltas {
    let profit_improvement = after
        .contribution_profit
        .saturating_sub(before.contribution_profit);
    let base = before.contribution_profit.abs();
    let profit_improvement_pct = if base.is_zero() {
        Decimal::ZERO
    } else {
        profit_improvement
            .checked_div(base)
            .and_then(|ratio| ratio.checked_mul(HUNDRED))
            .unwrap_or(if profit_improvement.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            })
    };

    ReportDeltas {
        profit_improvement,
        profit_improvement_pct,
        cross_border_units_avoided: before
            .cross_border_units
            .saturating_sub(after.cross_border_units),
        cross_border_cost_saved: before
            .cross_border_cost
            .saturating_sub(after.cross_border_cost),
    }
}
