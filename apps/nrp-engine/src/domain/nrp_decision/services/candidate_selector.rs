//! Candidate Selector
//!
//! Picks the depleted marketplaces and fixes their evaluation order.

use crate::domain::nrp_decision::value_objects::MarketplaceInput;

/// Selects deactivation candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateSelector;

impl CandidateSelector {
    /// Depleted marketplaces, smallest forecast first, ties by code.
    ///
    /// Removing the smallest demand first keeps each step conservative. An
    /// empty result means no action is needed.
    #[must_use]
    pub fn select<'a>(&self, marketplaces: &'a [MarketplaceInput]) -> Vec<&'a MarketplaceInput> {
        let mut candidates: Vec<&MarketplaceInput> =
            marketplaces.iter().filter(|m| m.is_depleted()).collect();
        candidates.sort_by(|a, b| {
            a.forecast
                .cmp(&b.forecast)
                .then_with(|| a.code.cmp(&b.code))
        });
        candidates
    }
}
