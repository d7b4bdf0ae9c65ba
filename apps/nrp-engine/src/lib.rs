// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! NRP Engine - Rust Core Library
//!
//! Deterministic decision engine for turning off zero-stock marketplaces that
//! share one upstream stock pool.
//!
//! # Architecture (Clean Architecture + DDD)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `shared`: Marketplace codes, week arithmetic, the "never" sentinel
//!   - `nrp_decision`: Aggregation, candidate selection, sequential gated
//!     optimization, before/after reporting, insights
//!
//! - **Application**: Use cases and orchestration
//!   - `validation`: Boundary checks that collect every violation
//!   - `use_cases`: `CalculateNrp`
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters
//!   - `http`: Axum REST controller
//!
//! Cross-cutting: `config` (YAML + env interpolation), `error` (rich error
//! codes mapped to HTTP status), `telemetry` (tracing subscriber).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases, validation and DTOs.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Configuration loading and validation.
pub mod config;

/// Rich error types.
pub mod error;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::nrp_decision::{
    AggregateMetrics, ComparativeReport, Decision, EvaluationStatus, GlobalParameters,
    InsightSet, MarketplaceInput, NrpDecisionEngine, NrpEvaluation, Outcome, ReplenishmentMode,
};
pub use domain::shared::{DomainError, MarketplaceCode, NEVER_WEEKS};

// Application re-exports
pub use application::dto::{CalculateNrpRequestDto, CalculateNrpResponseDto, ViolationDto};
pub use application::use_cases::CalculateNrpUseCase;
pub use application::validation::RequestValidator;

// Infrastructure re-exports
pub use infrastructure::http::{AppState, create_router};

// Cross-cutting re-exports
pub use config::{Config, ConfigError, load_config};
pub use error::{EngineError, ErrorCode};
