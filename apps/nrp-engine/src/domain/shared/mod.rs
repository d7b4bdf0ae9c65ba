//! Shared Kernel
//!
//! Types used across the decision stages.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::{MarketplaceCode, NEVER_WEEKS, coverage_or_never, is_never, ratio_or};
