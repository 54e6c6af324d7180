//! Core traits for CineDesk
//!
//! This module defines the trait that form drafts implement so dialogs can
//! gate submission on a consistent validation check.

use crate::error::CatalogResult;

/// Trait for types that can be validated before submission
///
/// Types implementing this trait can check their internal consistency
/// and return a validation error if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use cinedesk_core::{Validatable, CatalogResult, CatalogError};
///
/// struct Note {
///     text: String,
/// }
///
/// impl Validatable for Note {
///     fn validate(&self) -> CatalogResult<()> {
///         if self.text.is_empty() {
///             return Err(CatalogError::missing(vec!["text"]));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `CatalogError` describing the problem.
    fn validate(&self) -> CatalogResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    struct Demo {
        ok: bool,
    }

    impl Validatable for Demo {
        fn validate(&self) -> CatalogResult<()> {
            if self.ok {
                Ok(())
            } else {
                Err(CatalogError::missing(vec!["ok"]))
            }
        }
    }

    #[test]
    fn test_is_valid_follows_validate() {
        assert!(Demo { ok: true }.is_valid());
        assert!(!Demo { ok: false }.is_valid());
    }
}
