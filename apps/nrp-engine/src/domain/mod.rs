//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless decision stages
//!
//! # Bounded Contexts
//!
//! - [`nrp_decision`]: Marketplace deactivation decisions over a shared stock pool

pub mod nrp_decision;
pub mod shared;
