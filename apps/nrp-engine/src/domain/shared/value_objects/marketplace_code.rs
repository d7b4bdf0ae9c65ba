//! Marketplace code value object.

use serde::Serialize;
use std::fmt;

use crate::domain::shared::DomainError;

/// Maximum length of a marketplace code.
pub const MAX_CODE_LEN: usize = 8;

/// Identifier of a regional marketplace (e.g., "DE", "FR").
///
/// Codes are ASCII alphanumeric and stored upper case, so ordering by code
/// is stable regardless of how the caller spelled it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MarketplaceCode(String);

impl MarketplaceCode {
    /// Parse and normalize a marketplace code.
    ///
    /// # Errors
    ///
    /// Returns error if the code is empty, too long, or contains
    /// non-alphanumeric characters.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_value(
                "code",
                "Marketplace code must not be empty",
            ));
        }
        if trimmed.len() > MAX_CODE_LEN {
            return Err(DomainError::invalid_value(
                "code",
                format!("Marketplace code exceeds {MAX_CODE_LEN} characters"),
            ));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::invalid_value(
                "code",
                "Marketplace code must be ASCII alphanumeric",
            ));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Get the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarketplaceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for MarketplaceCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let code = MarketplaceCode::parse(" de ").unwrap();
        assert_eq!(code.as_str(), "DE");
        assert_eq!(code.to_string(), "DE");
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "blank")]
    #[test_case("D-E" ; "punctuation")]
    #[test_case("TOOLONGCODE" ; "too long")]
    fn parse_rejects_malformed(raw: &str) {
        assert!(MarketplaceCode::parse(raw).is_err());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let es = MarketplaceCode::parse("ES").unwrap();
        let it = MarketplaceCode::parse("it").unwrap();
        assert!(es < it);
    }

    #[test]
    fn serializes_as_plain_string() {
        let code = MarketplaceCode::parse("FR").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"FR\"");
    }
}
