//! HTTP request types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::dto::{CalculateNrpRequestDto, MarketplaceDto, ParametersDto};

/// Request to run one calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateNrpRequest {
    /// Request ID for correlation; generated when absent.
    #[serde(default)]
    pub request_id: Option<String>,
    /// Marketplace snapshot.
    pub marketplaces: Vec<MarketplaceRequest>,
    /// Parameter overrides.
    #[serde(default)]
    pub parameters: Option<ParametersRequest>,
}

/// One marketplace row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketplaceRequest {
    /// Marketplace code.
    pub code: String,
    /// Units on hand.
    pub stock: Decimal,
    /// Weekly forecast.
    pub forecast: Decimal,
    /// Contribution profit per unit.
    pub unit_margin: Decimal,
}

/// Parameter overrides; every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParametersRequest {
    /// Replenishment mode (e.g., "END_OF_LIFE").
    pub replenishment_mode: Option<String>,
    /// Weeks until an incoming order lands.
    pub incoming_order_eta_weeks: Option<Decimal>,
    /// Vendor lead time in days.
    pub vendor_lead_time_days: Option<Decimal>,
    /// Vendor confirmation rate in percent.
    pub confirmation_rate_percent: Option<Decimal>,
    /// Cross-border cost per unit.
    pub cross_border_unit_cost: Option<Decimal>,
    /// Healthy coverage upper bound in weeks.
    pub max_healthy_coverage_weeks: Option<Decimal>,
}

impl CalculateNrpRequest {
    /// Convert to the use case input.
    #[must_use]
    pub fn into_dto(self) -> CalculateNrpRequestDto {
        CalculateNrpRequestDto {
            request_id: self.request_id,
            marketplaces: self
                .marketplaces
                .into_iter()
                .map(|m| MarketplaceDto {
                    code: m.code,
                    stock: m.stock,
                    forecast: m.forecast,
                    unit_margin: m.unit_margin,
                })
                .collect(),
            parameters: self.parameters.map(|p| ParametersDto {
                replenishment_mode: p.replenishment_mode,
                incoming_order_eta_weeks: p.incoming_order_eta_weeks,
                vendor_lead_time_days: p.vendor_lead_time_days,
                confirmation_rate_percent: p.confirmation_rate_percent,
                cross_border_unit_cost: p.cross_border_unit_cost,
                max_healthy_coverage_weeks: p.max_healthy_coverage_weeks,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn accepts_numbers_and_strings() {
        let json = r#"{
            "marketplaces": [
                {"code": "DE", "stock": 120, "forecast": "30", "unit_margin": 3.5}
            ],
            "parameters": {"replenishment_mode": "END_OF_LIFE"}
        }"#;

        let req: CalculateNrpRequest = serde_json::from_str(json).unwrap();
        let dto = req.into_dto();
        assert_eq!(dto.marketplaces[0].forecast, dec!(30));
        assert_eq!(dto.marketplaces[0].unit_margin, dec!(3.5));
        let params = dto.parameters.unwrap();
        assert_eq!(params.replenishment_mode.as_deref(), Some("END_OF_LIFE"));
        assert!(params.cross_border_unit_cost.is_none());
    }

    #[test]
    fn missing_marketplaces_is_a_parse_error() {
        let result: Result<CalculateNrpRequest, _> = serde_json::from_str(r#"{"parameters": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn non_numeric_stock_is_a_parse_error() {
        let json = r#"{"marketplaces": [{"code": "DE", "stock": "lots", "forecast": 1, "unit_margin": 1}]}"#;
        let result: Result<CalculateNrpRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
