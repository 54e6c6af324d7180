//! Error types for CineDesk
//!
//! This module provides the error type shared across the CineDesk crates
//! for domain-level failures: form validation and value parsing.
//!
//! Transport-level failures live in the API crate, next to the HTTP client
//! that produces them.

use thiserror::Error;

/// The main domain error type for CineDesk
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// One or more required form fields are empty
    #[error("required fields are missing: {}", fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    /// A gender value outside the supported set
    #[error("unrecognised gender: '{0}'")]
    InvalidGender(String),
}

impl CatalogError {
    /// Create a missing-fields validation error
    pub fn missing(fields: Vec<&'static str>) -> Self {
        CatalogError::MissingFields { fields }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::MissingFields { .. })
    }

    /// The names of the missing fields, if this is a validation error
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            CatalogError::MissingFields { fields } => fields,
            _ => &[],
        }
    }
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_fields_display() {
        let err = CatalogError::missing(vec!["name", "bio"]);
        assert_eq!(err.to_string(), "required fields are missing: name, bio");
        assert!(err.is_validation());
        assert_eq!(err.missing_fields(), ["name", "bio"]);
    }

    #[test]
    fn test_invalid_gender_display() {
        let err = CatalogError::InvalidGender("Other".to_string());
        assert_eq!(err.to_string(), "unrecognised gender: 'Other'");
        assert!(!err.is_validation());
        assert!(err.missing_fields().is_empty());
    }
}
