//! Qualitative summary flags derived from the report.

use std::fmt;

use serde::Serialize;

use crate::domain::shared::MarketplaceCode;

/// Direction of the profit change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfitDirection {
    /// Profit goes up.
    Improved,
    /// Profit is unchanged.
    Unchanged,
    /// Profit goes down.
    Declined,
}

/// How the final coverage relates to the next replenishment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepletionOutlook {
    /// No replenishment is expected (end of life).
    NoReplenishment,
    /// Stock runs out before the replenishment lands.
    DepletesBeforeArrival,
    /// Stock is still on hand when the replenishment lands.
    CoversPastArrival,
}

/// Insight severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightSeverity {
    /// Informational.
    Info,
    /// Needs attention.
    Warning,
}

impl fmt::Display for InsightSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
        }
    }
}

/// A single human-readable insight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    /// Stable insight code (e.g., "CROSS_BORDER_SAVINGS").
    pub code: String,
    /// Severity.
    pub severity: InsightSeverity,
    /// Human-readable message.
    pub message: String,
}

impl Insight {
    /// Create an info-level insight.
    #[must_use]
    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            severity: InsightSeverity::Info,
            message: message.into(),
        }
    }

    /// Create a warning-level insight.
    #[must_use]
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            severity: InsightSeverity::Warning,
            message: message.into(),
        }
    }
}

/// Summary flags over the computed numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightSet {
    /// At least one marketplace was turned off.
    pub deactivations_occurred: bool,
    /// Turned-off marketplaces, in evaluation order.
    pub turned_off: Vec<MarketplaceCode>,
    /// Direction of the profit change.
    pub profit_direction: ProfitDirection,
    /// Cross-border cost goes down.
    pub cross_border_savings: bool,
    /// Final coverage against the next replenishment.
    pub depletion_outlook: DepletionOutlook,
    /// Final coverage exceeds the healthy bound.
    pub health_threshold_breached: bool,
    /// Human-readable messages.
    pub messages: Vec<Insight>,
}

impl InsightSet {
    /// Returns true if any message is a warning.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.severity == InsightSeverity::Warning)
    }
}
