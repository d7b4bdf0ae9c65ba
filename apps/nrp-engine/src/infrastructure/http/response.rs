//! HTTP response types.

use serde::{Deserialize, Serialize};

use crate::domain::nrp_decision::value_objects::{GlobalParameters, ReplenishmentMode};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Defaults a client uses to pre-fill its form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsResponse {
    /// Configured default parameters.
    pub parameters: GlobalParameters,
    /// Accepted replenishment modes.
    pub replenishment_modes: Vec<ReplenishmentMode>,
    /// Marketplace cap per request.
    pub max_marketplaces: usize,
}

impl DefaultsResponse {
    /// Build from the configured defaults.
    #[must_use]
    pub fn new(parameters: GlobalParameters, max_marketplaces: usize) -> Self {
        Self {
            parameters,
            replenishment_modes: ReplenishmentMode::ALL.to_vec(),
            max_marketplaces,
        }
    }
}
