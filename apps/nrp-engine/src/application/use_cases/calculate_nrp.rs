//! Calculate NRP Use Case

use std::collections::BTreeMap;

use chrono::Utc;
use uuid::Uuid;

use crate::application::dto::{CalculateNrpRequestDto, CalculateNrpResponseDto};
use crate::application::validation::RequestValidator;
use crate::domain::nrp_decision::services::NrpDecisionEngine;
use crate::domain::nrp_decision::value_objects::GlobalParameters;
use crate::error::EngineError;

/// Use case for one "Calculate" invocation.
#[derive(Debug, Clone)]
pub struct CalculateNrpUseCase {
    engine: NrpDecisionEngine,
    validator: RequestValidator,
    defaults: GlobalParameters,
}

impl CalculateNrpUseCase {
    /// Create a new CalculateNrpUseCase.
    #[must_use]
    pub const fn new(defaults: GlobalParameters, validator: RequestValidator) -> Self {
        Self {
            engine: NrpDecisionEngine::new(),
            validator,
            defaults,
        }
    }

    /// Parameters applied when a request leaves a field out.
    #[must_use]
    pub const fn defaults(&self) -> &GlobalParameters {
        &self.defaults
    }

    /// Marketplace cap per request.
    #[must_use]
    pub const fn max_marketplaces(&self) -> usize {
        self.validator.max_marketplaces()
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns `VALIDATION_FAILED` with every violation if the request is invalid.
    pub fn execute(
        &self,
        request: &CalculateNrpRequestDto,
    ) -> Result<CalculateNrpResponseDto, EngineError> {
        let validated = self
            .validator
            .validate(request, &self.defaults)
            .map_err(EngineError::validation_failed)?;

        let request_id = validated
            .request_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        tracing::info!(
            request_id = %request_id,
            marketplaces = validated.marketplaces.len(),
            mode = %validated.parameters.replenishment_mode,
            "Calculating NRP"
        );

        let evaluation = self
            .engine
            .evaluate(&validated.marketplaces, &validated.parameters);

        let explanations: BTreeMap<String, Vec<String>> = evaluation
            .decisions
            .iter()
            .map(|d| (d.marketplace.to_string(), d.explain()))
            .collect();

        Ok(CalculateNrpResponseDto {
            request_id,
            generated_at: Utc::now(),
            parameters: validated.parameters,
            evaluation,
            explanations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{MarketplaceDto, ParametersDto};
    use crate::domain::nrp_decision::value_objects::{EvaluationStatus, ReplenishmentMode};
    use crate::error::ErrorCode;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn row(code: &str, stock: Decimal, forecast: Decimal, margin: Decimal) -> MarketplaceDto {
        MarketplaceDto {
            code: code.to_string(),
            stock,
            forecast,
            unit_margin: margin,
        }
    }

    fn use_case() -> CalculateNrpUseCase {
        CalculateNrpUseCase::new(GlobalParameters::default(), RequestValidator::default())
    }

    fn eu_request() -> CalculateNrpRequestDto {
        CalculateNrpRequestDto {
            request_id: Some("req-1".to_string()),
            marketplaces: vec![
                row("DE", dec!(120), dec!(30), dec!(3.00)),
                row("FR", dec!(80), dec!(25), dec!(2.80)),
                row("ES", dec!(0), dec!(15), dec!(2.00)),
                row("IT", dec!(0), dec!(10), dec!(1.80)),
            ],
            parameters: None,
        }
    }

    #[test]
    fn evaluates_with_defaults_and_explains_candidates() {
        let response = use_case().execute(&eu_request()).unwrap();

        assert_eq!(response.request_id, "req-1");
        assert_eq!(response.parameters, GlobalParameters::default());
        assert_eq!(response.evaluation.status, EvaluationStatus::NoDeactivations);
        assert_eq!(
            response.explanations.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["ES", "IT"]
        );
        assert_eq!(response.explanations["IT"].len(), 3);
    }

    #[test]
    fn generates_request_id_when_absent() {
        let mut request = eu_request();
        request.request_id = None;
        let response = use_case().execute(&request).unwrap();
        assert!(Uuid::parse_str(&response.request_id).is_ok());
    }

    #[test]
    fn end_of_life_override_changes_outcome() {
        let mut request = eu_request();
        request.parameters = Some(ParametersDto {
            replenishment_mode: Some("END_OF_LIFE".to_string()),
            ..ParametersDto::default()
        });
        let response = use_case().execute(&request).unwrap();

        assert_eq!(
            response.parameters.replenishment_mode,
            ReplenishmentMode::EndOfLife
        );
        // Without a depletion deadline both candidates pass all gates.
        assert_eq!(
            response.evaluation.status,
            EvaluationStatus::DeactivationsRecommended
        );
    }

    #[test]
    fn invalid_request_is_rejected_before_evaluation() {
        let mut request = eu_request();
        request.marketplaces[0].stock = dec!(-5);
        let err = use_case().execute(&request).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.violations()[0].field_path, "marketplaces[0].stock");
    }
}
