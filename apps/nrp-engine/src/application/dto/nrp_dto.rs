//! NRP calculation DTOs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::nrp_decision::value_objects::{GlobalParameters, NrpEvaluation};

/// One marketplace row of a calculation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceDto {
    /// Marketplace code (e.g., "DE").
    pub code: String,
    /// Units on hand.
    pub stock: Decimal,
    /// Expected weekly demand.
    pub forecast: Decimal,
    /// Contribution profit per unit.
    pub unit_margin: Decimal,
}

/// Parameter overrides. Missing fields fall back to the configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParametersDto {
    /// Replenishment mode wire name.
    pub replenishment_mode: Option<String>,
    /// Weeks until an incoming order lands.
    pub incoming_order_eta_weeks: Option<Decimal>,
    /// Vendor lead time in days.
    pub vendor_lead_time_days: Option<Decimal>,
    /// Vendor confirmation rate, 0 to 100.
    pub confirmation_rate_percent: Option<Decimal>,
    /// Cross-border (OOR) cost per unit.
    pub cross_border_unit_cost: Option<Decimal>,
    /// Healthy coverage upper bound in weeks.
    pub max_healthy_coverage_weeks: Option<Decimal>,
}

/// Request DTO for one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculateNrpRequestDto {
    /// Correlation ID; generated when absent.
    #[serde(default)]
    pub request_id: Option<String>,
    /// Marketplace snapshot.
    pub marketplaces: Vec<MarketplaceDto>,
    /// Parameter overrides.
    #[serde(default)]
    pub parameters: Option<ParametersDto>,
}

/// Response DTO for one calculation.
#[derive(Debug, Clone, Serialize)]
pub struct CalculateNrpResponseDto {
    /// Correlation ID.
    pub request_id: String,
    /// When the evaluation was produced.
    pub generated_at: DateTime<Utc>,
    /// Effective parameters after merging defaults.
    pub parameters: GlobalParameters,
    /// Engine output.
    pub evaluation: NrpEvaluation,
    /// Gate explanation lines per candidate marketplace.
    pub explanations: BTreeMap<String, Vec<String>>,
}

/// A single input validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationDto {
    /// Path of the offending field (e.g., "marketplaces[2].stock").
    pub field_path: String,
    /// Human-readable message.
    pub message: String,
    /// Observed value, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed: Option<String>,
}

impl ViolationDto {
    /// Create a violation.
    #[must_use]
    pub fn new(
        field_path: impl Into<String>,
        message: impl Into<String>,
        observed: Option<String>,
    ) -> Self {
        Self {
            field_path: field_path.into(),
            message: message.into(),
            observed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn request_parameters_are_optional() {
        let json = r#"{
            "marketplaces": [
                {"code": "DE", "stock": 120, "forecast": 30, "unit_margin": "3.00"}
            ]
        }"#;

        let req: CalculateNrpRequestDto = serde_json::from_str(json).unwrap();
        assert!(req.request_id.is_none());
        assert!(req.parameters.is_none());
        assert_eq!(req.marketplaces[0].stock, dec!(120));
        assert_eq!(req.marketplaces[0].unit_margin, dec!(3.00));
    }

    #[test]
    fn partial_parameters_leave_rest_unset() {
        let json = r#"{"cross_border_unit_cost": "2.25"}"#;
        let params: ParametersDto = serde_json::from_str(json).unwrap();
        assert_eq!(params.cross_border_unit_cost, Some(dec!(2.25)));
        assert!(params.replenishment_mode.is_none());
        assert!(params.max_healthy_coverage_weeks.is_none());
    }

    #[test]
    fn violation_omits_missing_observed_value() {
        let violation = ViolationDto::new("marketplaces", "At least one marketplace is required", None);
        let json = serde_json::to_string(&violation).unwrap();
        assert!(!json.contains("observed"));
    }
}
