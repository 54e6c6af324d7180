//! # UI Components
//!
//! Reusable Dioxus components for the CineDesk admin console.
//!
//! This module provides:
//! - **Person Table**: Data table for the actor/producer screens
//! - **Movie Card**: Card display for one movie with resolved names
//! - **Inputs**: Form input components (text, select, checkbox)
//! - **Dialogs**: Modal dialogs for create/edit and delete confirmation
//!
//! ## Component Hierarchy
//!
//! ```text
//! PeoplePage (Actors | Producers)
//! ├── PersonTable
//! │   └── PersonRow (multiple)
//! ├── PersonDialog
//! └── ConfirmDeleteDialog
//!
//! MoviesPage
//! ├── MovieCard (multiple)
//! ├── MovieDialog
//! └── ConfirmDeleteDialog
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod dialogs;
pub mod inputs;
pub mod movie_card;
pub mod person_table;

// ============================================================================
// Re-exports
// ============================================================================

// Entity display components
pub use movie_card::MovieCard;
pub use person_table::PersonTable;

// Re-export input components
pub use inputs::{Checkbox, Select, SelectOption, TextArea, TextInput};

// Re-export dialog components
pub use dialogs::{
    ConfirmDeleteDialog, MovieDialog, MovieDialogMode, PersonDialog, PersonDialogMode,
};
