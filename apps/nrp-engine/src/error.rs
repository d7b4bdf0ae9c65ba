//! Rich error handling for the NRP engine.
//!
//! Errors carry a stable code, a message and, for validation failures, the
//! full list of field violations. Each code maps to an HTTP status.
//!
//! | Code | HTTP | Usage |
//! |------|------|-------|
//! | `INVALID_REQUEST` | 400 | Malformed JSON or missing fields |
//! | `VALIDATION_FAILED` | 400 | Well-formed request with invalid values |
//! | `INTERNAL_ERROR` | 500 | Unexpected server error |

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::dto::ViolationDto;

/// Error codes for the NRP engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Invalid request format or missing fields.
    InvalidRequest,
    /// Request values failed validation.
    ValidationFailed,
    /// Internal server error.
    InternalError,
}

impl ErrorCode {
    /// HTTP status for this error.
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest | Self::ValidationFailed => StatusCode::BAD_REQUEST,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A rich error with field violations.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct EngineError {
    code: ErrorCode,
    message: String,
    violations: Vec<ViolationDto>,
}

impl EngineError {
    /// Create a new error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            violations: Vec::new(),
        }
    }

    /// Attach field violations.
    #[must_use]
    pub fn with_violations(mut self, violations: Vec<ViolationDto>) -> Self {
        self.violations = violations;
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the violations.
    #[must_use]
    pub fn violations(&self) -> &[ViolationDto] {
        &self.violations
    }

    /// Convert to an HTTP error body.
    #[must_use]
    pub fn to_http_response(&self) -> HttpErrorResponse {
        HttpErrorResponse {
            code: self.code.reason().to_string(),
            message: self.message.clone(),
            violations: self.violations.clone(),
        }
    }
}

/// Convenience constructors for common errors.
impl EngineError {
    /// Malformed request body.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Request values failed validation.
    #[must_use]
    pub fn validation_failed(violations: Vec<ViolationDto>) -> Self {
        let message = format!("Request has {} invalid field(s)", violations.len());
        Self::new(ErrorCode::ValidationFailed, message).with_violations(violations)
    }

    /// Internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// HTTP error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpErrorResponse {
    /// Error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Field violations; empty unless validation failed.
    pub violations: Vec<ViolationDto>,
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let status = self.code.http_status();
        if status.is_server_error() {
            tracing::error!(code = %self.code, message = %self.message, "Request failed");
        } else {
            tracing::warn!(
                code = %self.code,
                message = %self.message,
                violations = self.violations.len(),
                "Request rejected"
            );
        }
        (status, Json(self.to_http_response())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_http_mapping() {
        assert_eq!(ErrorCode::InvalidRequest.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::ValidationFailed.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_failed_carries_violations() {
        let error = EngineError::validation_failed(vec![
            ViolationDto::new("marketplaces[0].stock", "Must be non-negative", Some("-1".to_string())),
            ViolationDto::new("parameters.confirmation_rate_percent", "Must be between 0 and 100", None),
        ]);

        assert_eq!(error.code(), ErrorCode::ValidationFailed);
        assert_eq!(error.violations().len(), 2);
        assert_eq!(error.message(), "Request has 2 invalid field(s)");

        let body = error.to_http_response();
        assert_eq!(body.code, "VALIDATION_FAILED");
        assert_eq!(body.violations[0].field_path, "marketplaces[0].stock");
    }

    #[test]
    fn error_display() {
        let error = EngineError::invalid_request("Missing field");
        assert_eq!(error.to_string(), "[INVALID_REQUEST] Missing field");
    }

    #[test]
    fn into_response_uses_mapped_status() {
        let response = EngineError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
