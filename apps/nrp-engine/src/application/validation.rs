//! Request Validation
//!
//! Checks a calculation request before it reaches the engine. Every
//! violation in the request is collected; nothing is clamped.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::application::dto::{CalculateNrpRequestDto, MarketplaceDto, ParametersDto, ViolationDto};
use crate::domain::nrp_decision::value_objects::{
    GlobalParameters, MarketplaceInput, ReplenishmentMode,
};
use crate::domain::shared::{DomainError, MarketplaceCode};

/// Default cap on marketplaces per request.
pub const DEFAULT_MAX_MARKETPLACES: usize = 32;

/// Largest accepted stock, forecast, margin or parameter value.
pub const MAX_INPUT_VALUE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Most decimal places accepted on a numeric input.
pub const MAX_DECIMAL_PLACES: u32 = 6;

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Caller-supplied correlation ID, trimmed.
    pub request_id: Option<String>,
    /// Marketplace snapshot in request order.
    pub marketplaces: Vec<MarketplaceInput>,
    /// Parameters with defaults merged in.
    pub parameters: GlobalParameters,
}

/// Validates calculation requests.
#[derive(Debug, Clone, Copy)]
pub struct RequestValidator {
    max_marketplaces: usize,
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MARKETPLACES)
    }
}

impl RequestValidator {
    /// Create a validator with a marketplace cap.
    #[must_use]
    pub const fn new(max_marketplaces: usize) -> Self {
        Self { max_marketplaces }
    }

    /// Marketplace cap per request.
    #[must_use]
    pub const fn max_marketplaces(&self) -> usize {
        self.max_marketplaces
    }

    /// Validate a request and merge parameter overrides into `defaults`.
    ///
    /// # Errors
    ///
    /// Returns every violation found in the request.
    pub fn validate(
        &self,
        request: &CalculateNrpRequestDto,
        defaults: &GlobalParameters,
    ) -> Result<ValidatedRequest, Vec<ViolationDto>> {
        let mut violations = Vec::new();

        let request_id = match request.request_id.as_deref().map(str::trim) {
            Some("") => {
                violations.push(ViolationDto::new(
                    "request_id",
                    "Request ID must not be blank",
                    None,
                ));
                None
            }
            other => other.map(str::to_string),
        };

        if request.marketplaces.is_empty() {
            violations.push(ViolationDto::new(
                "marketplaces",
                "At least one marketplace is required",
                None,
            ));
        } else if request.marketplaces.len() > self.max_marketplaces {
            violations.push(ViolationDto::new(
                "marketplaces",
                format!("At most {} marketplaces are allowed", self.max_marketplaces),
                Some(request.marketplaces.len().to_string()),
            ));
        }

        let marketplaces = validate_marketplaces(&request.marketplaces, &mut violations);
        let parameters = merge_parameters(request.parameters.as_ref(), defaults, &mut violations);
        violations.extend(parameter_violations(&parameters, "parameters"));

        if violations.is_empty() {
            Ok(ValidatedRequest {
                request_id,
                marketplaces,
                parameters,
            })
        } else {
            Err(violations)
        }
    }
}

fn validate_marketplaces(
    rows: &[MarketplaceDto],
    violations: &mut Vec<ViolationDto>,
) -> Vec<MarketplaceInput> {
    let mut seen: HashSet<MarketplaceCode> = HashSet::with_capacity(rows.len());
    let mut inputs = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let path = format!("marketplaces[{index}]");

        check_non_negative(&format!("{path}.stock"), row.stock, violations);
        check_non_negative(&format!("{path}.forecast"), row.forecast, violations);
        check_non_negative(&format!("{path}.unit_margin"), row.unit_margin, violations);

        match MarketplaceCode::parse(&row.code) {
            Ok(code) if !seen.insert(code.clone()) => violations.push(ViolationDto::new(
                format!("{path}.code"),
                format!("Duplicate marketplace code {code}"),
                Some(row.code.clone()),
            )),
            Ok(code) => {
                inputs.push(MarketplaceInput::new(
                    code,
                    row.stock,
                    row.forecast,
                    row.unit_margin,
                ));
            }
            Err(err) => violations.push(ViolationDto::new(
                format!("{path}.code"),
                domain_message(err),
                Some(row.code.clone()),
            )),
        }
    }

    inputs
}

fn merge_parameters(
    overrides: Option<&ParametersDto>,
    defaults: &GlobalParameters,
    violations: &mut Vec<ViolationDto>,
) -> GlobalParameters {
    let Some(overrides) = overrides else {
        return defaults.clone();
    };

    let replenishment_mode = match overrides.replenishment_mode.as_deref() {
        None => defaults.replenishment_mode,
        Some(raw) => raw.parse::<ReplenishmentMode>().unwrap_or_else(|err| {
            violations.push(ViolationDto::new(
                "parameters.replenishment_mode",
                domain_message(err),
                Some(raw.to_string()),
            ));
            defaults.replenishment_mode
        }),
    };

    GlobalParameters {
        replenishment_mode,
        incoming_order_eta_weeks: overrides
            .incoming_order_eta_weeks
            .unwrap_or(defaults.incoming_order_eta_weeks),
        vendor_lead_time_days: overrides
            .vendor_lead_time_days
            .unwrap_or(defaults.vendor_lead_time_days),
        confirmation_rate_percent: overrides
            .confirmation_rate_percent
            .unwrap_or(defaults.confirmation_rate_percent),
        cross_border_unit_cost: overrides
            .cross_border_unit_cost
            .unwrap_or(defaults.cross_border_unit_cost),
        max_healthy_coverage_weeks: overrides
            .max_healthy_coverage_weeks
            .unwrap_or(defaults.max_healthy_coverage_weeks),
    }
}

/// Range checks on a parameter set, with field paths under `prefix`.
///
/// Shared by request validation and configuration loading.
#[must_use]
pub fn parameter_violations(parameters: &GlobalParameters, prefix: &str) -> Vec<ViolationDto> {
    let mut violations = Vec::new();
    let field = |name: &str| format!("{prefix}.{name}");

    check_non_negative(
        &field("incoming_order_eta_weeks"),
        parameters.incoming_order_eta_weeks,
        &mut violations,
    );
    check_non_negative(
        &field("vendor_lead_time_days"),
        parameters.vendor_lead_time_days,
        &mut violations,
    );
    check_non_negative(
        &field("cross_border_unit_cost"),
        parameters.cross_border_unit_cost,
        &mut violations,
    );
    check_non_negative(
        &field("max_healthy_coverage_weeks"),
        parameters.max_healthy_coverage_weeks,
        &mut violations,
    );

    let rate = parameters.confirmation_rate_percent;
    if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
        violations.push(ViolationDto::new(
            field("confirmation_rate_percent"),
            "Must be between 0 and 100",
            Some(rate.to_string()),
        ));
    }

    violations
}

/// Non-negative, at most [`MAX_INPUT_VALUE`], at most [`MAX_DECIMAL_PLACES`].
///
/// The bounds keep every engine ratio and product inside the `Decimal` range.
fn check_non_negative(field_path: &str, value: Decimal, violations: &mut Vec<ViolationDto>) {
    let message = if value < Decimal::ZERO {
        "Must be non-negative".to_string()
    } else if value > MAX_INPUT_VALUE {
        format!("Must be at most {MAX_INPUT_VALUE}")
    } else if value.normalize().scale() > MAX_DECIMAL_PLACES {
        format!("Must have at most {MAX_DECIMAL_PLACES} decimal places")
    } else {
        return;
    };
    violations.push(ViolationDto::new(field_path, message, Some(value.to_string())));
}

fn domain_message(err: DomainError) -> String {
    match err {
        DomainError::InvalidValue { message, .. } => message,
        other @ DomainError::UnknownVariant { .. } => other.to_string(),
    }
}
