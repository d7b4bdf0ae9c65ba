//! Engine configuration: request limits.
//!
//! Default calculation parameters live under `defaults` and deserialize
//! straight into `GlobalParameters`.

use serde::{Deserialize, Serialize};

use crate::application::validation::DEFAULT_MAX_MARKETPLACES;

/// Request limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum marketplaces per calculation request.
    #[serde(default = "default_max_marketplaces")]
    pub max_marketplaces: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_marketplaces: default_max_marketplaces(),
        }
    }
}

const fn default_max_marketplaces() -> usize {
    DEFAULT_MAX_MARKETPLACES
}
