//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod calculate_nrp;

pub use calculate_nrp::CalculateNrpUseCase;
