//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the calculation use case.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};

use crate::application::dto::CalculateNrpResponseDto;
use crate::application::use_cases::CalculateNrpUseCase;
use crate::error::EngineError;

use super::request::CalculateNrpRequest;
use super::response::{DefaultsResponse, HealthResponse};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Use case for calculations.
    pub calculate_nrp: Arc<CalculateNrpUseCase>,
    /// Application version.
    pub version: String,
}

impl AppState {
    /// Create state around a use case.
    #[must_use]
    pub fn new(calculate_nrp: CalculateNrpUseCase, version: impl Into<String>) -> Self {
        Self {
            calculate_nrp: Arc::new(calculate_nrp),
            version: version.into(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/nrp/defaults", get(defaults))
        .route("/api/v1/nrp/calculate", post(calculate))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Configured defaults endpoint.
async fn defaults(State(state): State<AppState>) -> impl IntoResponse {
    Json(DefaultsResponse::new(
        state.calculate_nrp.defaults().clone(),
        state.calculate_nrp.max_marketplaces(),
    ))
}

/// Calculation endpoint.
async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculateNrpRequest>, JsonRejection>,
) -> Result<Json<CalculateNrpResponseDto>, EngineError> {
    let Json(request) =
        payload.map_err(|rejection| EngineError::invalid_request(rejection.body_text()))?;

    let use_case = Arc::clone(&state.calculate_nrp);
    let dto = request.into_dto();
    run_blocking(move || use_case.execute(&dto)).await.map(Json)
}

/// Run CPU-bound work off the async workers; a task that dies becomes a 500.
async fn run_blocking<T, F>(work: F) -> Result<T, EngineError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, EngineError> + Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|e| {
        tracing::error!(error = %e, "Calculation task failed");
        EngineError::internal("Calculation failed unexpectedly")
    })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::validation::RequestValidator;
    use crate::domain::nrp_decision::value_objects::GlobalParameters;
    use crate::error::ErrorCode;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(
            CalculateNrpUseCase::new(GlobalParameters::default(), RequestValidator::new(4)),
            "1.0.0-test",
        )
    }

    async fn post_json(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/nrp/calculate")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn health_check_returns_ok() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, "1.0.0-test");
    }

    #[tokio::test]
    async fn defaults_report_marketplace_cap() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/nrp/defaults")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let defaults: DefaultsResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(defaults.max_marketplaces, 4);
        assert_eq!(defaults.parameters, GlobalParameters::default());
    }

    #[tokio::test]
    async fn malformed_json_is_invalid_request() {
        let app = create_router(create_test_state());
        let (status, body) = post_json(app, "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_REQUEST");
        assert!(body["violations"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn cap_violation_is_validation_failed() {
        let app = create_router(create_test_state());
        let body = r#"{"marketplaces": [
            {"code": "DE", "stock": 1, "forecast": 1, "unit_margin": 1},
            {"code": "FR", "stock": 1, "forecast": 1, "unit_margin": 1},
            {"code": "ES", "stock": 0, "forecast": 1, "unit_margin": 1},
            {"code": "IT", "stock": 0, "forecast": 1, "unit_margin": 1},
            {"code": "NL", "stock": 0, "forecast": 1, "unit_margin": 1}
        ]}"#;
        let (status, body) = post_json(app, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["violations"][0]["field_path"], "marketplaces");
        assert_eq!(body["violations"][0]["observed"], "5");
    }

    #[tokio::test]
    async fn calculate_returns_evaluation() {
        let app = create_router(create_test_state());
        let body = r#"{"request_id": "req-42", "marketplaces": [
            {"code": "DE", "stock": 120, "forecast": 30, "unit_margin": "3.00"},
            {"code": "ES", "stock": 0, "forecast": 15, "unit_margin": "2.00"}
        ]}"#;
        let (status, body) = post_json(app, body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["request_id"], "req-42");
        assert!(body["generated_at"].is_string());
        assert!(body["evaluation"]["status"].is_string());
        assert_eq!(body["explanations"]["ES"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn failed_calculation_task_maps_to_internal_error() {
        let result: Result<(), EngineError> = run_blocking(|| panic!("arithmetic overflow")).await;

        let err = result.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn blocking_work_passes_result_through() {
        let ok = run_blocking(|| Ok::<_, EngineError>(7)).await.unwrap();
        assert_eq!(ok, 7);

        let err = run_blocking(|| Err::<(), _>(EngineError::invalid_request("bad")))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }
}
