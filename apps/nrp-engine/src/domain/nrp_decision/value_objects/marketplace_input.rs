//! Per-marketplace input snapshot.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::shared::{DomainError, MarketplaceCode};

/// Stock, demand and margin for one marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketplaceInput {
    /// Marketplace identifier.
    pub code: MarketplaceCode,
    /// Units on hand.
    pub stock: Decimal,
    /// Expected weekly demand in units.
    pub forecast: Decimal,
    /// Contribution profit per unit sold (CPPU).
    pub unit_margin: Decimal,
}

impl MarketplaceInput {
    /// Create a marketplace input.
    #[must_use]
    pub const fn new(
        code: MarketplaceCode,
        stock: Decimal,
        forecast: Decimal,
        unit_margin: Decimal,
    ) -> Self {
        Self {
            code,
            stock,
            forecast,
            unit_margin,
        }
    }

    /// Create a marketplace input from a raw code.
    ///
    /// # Errors
    ///
    /// Returns error if the code is malformed.
    pub fn try_new(
        code: &str,
        stock: Decimal,
        forecast: Decimal,
        unit_margin: Decimal,
    ) -> Result<Self, DomainError> {
        Ok(Self::new(
            MarketplaceCode::parse(code)?,
            stock,
            forecast,
            unit_margin,
        ))
    }

    /// A depleted marketplace has nothing on hand and is the only kind
    /// eligible for deactivation.
    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.stock.is_zero()
    }

    /// Returns true if the marketplace holds stock.
    #[must_use]
    pub fn is_stocked(&self) -> bool {
        self.stock > Decimal::ZERO
    }
}
