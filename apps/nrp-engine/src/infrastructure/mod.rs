//! Infrastructure Layer
//!
//! Adapters that expose the application to the outside world:
//!
//! - **Driver Adapters (Inbound)**
//!   - `http/`: REST API controllers

pub mod http;
