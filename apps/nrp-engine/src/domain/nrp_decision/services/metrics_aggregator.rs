//! Metrics Aggregator
//!
//! Reduces the marketplace snapshot to EU-wide aggregates.

use rust_decimal::Decimal;

use crate::domain::nrp_decision::value_objects::{
    AggregateMetrics, GlobalParameters, MarketplaceInput,
};
use crate::domain::shared::{coverage_or_never, ratio_or};

/// Computes [`AggregateMetrics`] from the run inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsAggregator;

impl MetricsAggregator {
    /// Aggregate stock, demand, coverage, blended margin and arrival timing.
    ///
    /// Never fails: divisions without a positive denominator yield 0, and
    /// sums saturate at the decimal range.
    #[must_use]
    pub fn aggregate(
        &self,
        marketplaces: &[MarketplaceInput],
        parameters: &GlobalParameters,
    ) -> AggregateMetrics {
        let total_stock = marketplaces
            .iter()
            .fold(Decimal::ZERO, |sum, m| sum.saturating_add(m.stock));
        let total_forecast = marketplaces
            .iter()
            .fold(Decimal::ZERO, |sum, m| sum.saturating_add(m.forecast));
        let stocked_count = marketplaces.iter().filter(|m| m.is_stocked()).count();
        let depleted_count = marketplaces.iter().filter(|m| m.is_depleted()).count();

        AggregateMetrics {
            total_stock,
            total_forecast,
            coverage_weeks: Self::coverage_weeks(total_stock, total_forecast),
            blended_unit_margin: Self::blended_unit_margin(marketplaces),
            arrival_weeks: parameters.arrival_weeks(),
            stocked_count,
            depleted_count,
        }
    }

    /// Zero without demand; a quotient too large for a `Decimal` never depletes.
    fn coverage_weeks(total_stock: Decimal, total_forecast: Decimal) -> Decimal {
        if total_forecast > Decimal::ZERO {
            coverage_or_never(total_stock, total_forecast)
        } else {
            Decimal::ZERO
        }
    }

    /// Forecast-weighted unit margin over stocked marketplaces only.
    fn blended_unit_margin(marketplaces: &[MarketplaceInput]) -> Decimal {
        let (weighted, weight) = marketplaces
            .iter()
            .filter(|m| m.is_stocked())
            .fold((Decimal::ZERO, Decimal::ZERO), |(weighted, weight), m| {
                (
                    weighted.saturating_add(m.unit_margin.saturating_mul(m.forecast)),
                    weight.saturating_add(m.forecast),
                )
            });
        ratio_or(weighted, weight, Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nrp_decision::services::fixtures;
    use crate::domain::nrp_decision::value_objects::ReplenishmentMode;
    use crate::domain::shared::NEVER_WEEKS;
    use rust_decimal_macros::dec;

    #[test]
    fn reference_scenario_aggregates() {
        let metrics =
            MetricsAggregator.aggregate(&fixtures::eu_marketplaces(), &fixtures::eu_parameters());

        assert_eq!(metrics.total_stock, dec!(200));
        assert_eq!(metrics.total_forecast, dec!(80));
        assert_eq!(metrics.coverage_weeks, dec!(2.5));
        assert_eq!(metrics.arrival_weeks, dec!(2));
        assert_eq!(metrics.stocked_count, 2);
        assert_eq!(metrics.depleted_count, 2);
        // (30 * 3.00 + 25 * 2.80) / 55 = 160 / 55
        assert_eq!(
            metrics.blended_unit_margin.round_dp(10),
            (dec!(160) / dec!(55)).round_dp(10)
        );
        assert_eq!(metrics.blended_unit_margin.round_dp(3), dec!(2.909));
    }

    #[test]
    fn blended_margin_ignores_depleted_marketplaces() {
        let marketplaces = vec![
            fixtures::marketplace("DE", dec!(10), dec!(10), dec!(2)),
            fixtures::marketplace("ES", dec!(0), dec!(1000), dec!(50)),
        ];
        let metrics = MetricsAggregator.aggregate(&marketplaces, &fixtures::eu_parameters());
        assert_eq!(metrics.blended_unit_margin, dec!(2));
    }

    #[test]
    fn zero_forecast_yields_zero_coverage() {
        let marketplaces = vec![fixtures::marketplace("DE", dec!(100), dec!(0), dec!(3))];
        let metrics = MetricsAggregator.aggregate(&marketplaces, &fixtures::eu_parameters());
        assert_eq!(metrics.coverage_weeks, Decimal::ZERO);
        assert_eq!(metrics.blended_unit_margin, Decimal::ZERO);
    }

    #[test]
    fn no_stocked_marketplace_yields_zero_blended_margin() {
        let marketplaces = vec![
            fixtures::marketplace("ES", dec!(0), dec!(15), dec!(2)),
            fixtures::marketplace("IT", dec!(0), dec!(10), dec!(1.8)),
        ];
        let metrics = MetricsAggregator.aggregate(&marketplaces, &fixtures::eu_parameters());
        assert_eq!(metrics.blended_unit_margin, Decimal::ZERO);
        assert_eq!(metrics.coverage_weeks, Decimal::ZERO);
        assert_eq!(metrics.depleted_count, 2);
    }

    #[test]
    fn empty_snapshot_is_all_zero() {
        let metrics = MetricsAggregator.aggregate(&[], &fixtures::eu_parameters());
        assert_eq!(metrics.total_stock, Decimal::ZERO);
        assert_eq!(metrics.total_forecast, Decimal::ZERO);
        assert_eq!(metrics.coverage_weeks, Decimal::ZERO);
        assert_eq!(metrics.stocked_count, 0);
    }

    #[test]
    fn negative_inputs_do_not_panic() {
        let marketplaces = vec![fixtures::marketplace("DE", dec!(-5), dec!(-10), dec!(-1))];
        let metrics = MetricsAggregator.aggregate(&marketplaces, &fixtures::eu_parameters());
        assert_eq!(metrics.coverage_weeks, Decimal::ZERO);
    }

    #[test]
    fn end_of_life_arrival_is_never() {
        let parameters = GlobalParameters {
            replenishment_mode: ReplenishmentMode::EndOfLife,
            ..fixtures::eu_parameters()
        };
        let metrics = MetricsAggregator.aggregate(&fixtures::eu_marketplaces(), &parameters);
        assert_eq!(metrics.arrival_weeks, NEVER_WEEKS);
        assert!(metrics.arrival_is_never());
    }

    #[test]
    fn extreme_values_saturate_instead_of_panicking() {
        let tiny = fixtures::marketplace("DE", dec!(100), Decimal::new(1, 28), dec!(3));
        let metrics = MetricsAggregator.aggregate(&[tiny], &fixtures::eu_parameters());
        assert_eq!(metrics.coverage_weeks, NEVER_WEEKS);

        let huge = vec![
            fixtures::marketplace("DE", Decimal::MAX, dec!(10), dec!(3)),
            fixtures::marketplace("FR", Decimal::MAX, dec!(10), Decimal::MAX),
        ];
        let metrics = MetricsAggregator.aggregate(&huge, &fixtures::eu_parameters());
        assert_eq!(metrics.total_stock, Decimal::MAX);
        assert!(metrics.blended_unit_margin > Decimal::ZERO);
    }
}
