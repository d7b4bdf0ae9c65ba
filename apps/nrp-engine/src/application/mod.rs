//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Validation**: Boundary checks applied before the engine runs
//! - **Use Cases**: Application-specific business rules
//! - **DTOs**: Data transfer objects for API boundaries

pub mod dto;
pub mod use_cases;
pub mod validation;

pub use dto::*;
pub use use_cases::*;
pub use validation::{
    DEFAULT_MAX_MARKETPLACES, RequestValidator, ValidatedRequest, parameter_violations,
};
