//! # Dialog Components
//!
//! Modal dialogs for the CineDesk UI.
//!
//! ## Dialogs
//!
//! - **PersonDialog**: Create and edit actors/producers
//! - **MovieDialog**: Create and edit movies
//! - **ConfirmDeleteDialog**: Confirmation prompt for destructive actions
//!
//! Each dialog is rendered by the page that owns the corresponding
//! collection, so the page's `refresh` handler is a plain callback prop.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod confirm_delete;
pub mod movie_dialog;
pub mod person_dialog;

// ============================================================================
// Re-exports
// ============================================================================

pub use confirm_delete::ConfirmDeleteDialog;
pub use movie_dialog::{MovieDialog, MovieDialogMode};
pub use person_dialog::{PersonDialog, PersonDialogMode};
