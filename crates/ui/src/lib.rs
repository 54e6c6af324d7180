//! # CineDesk UI
//!
//! Dioxus Desktop UI for CineDesk.
//!
//! This crate provides the admin console interface for the movie catalog:
//! list screens for movies, actors, and producers, with modal dialogs for
//! create/edit and a two-step confirmation for delete.
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use cinedesk_api;
pub use cinedesk_core;

// Re-export main components
pub use app::App;
pub use pages::{ActorsPage, MoviesPage, PeoplePage, ProducersPage};
pub use state::{
    APP_STATE, AppState, DeleteConfirm, ModalState, Page, StatusLevel, StatusMessage, UiState,
};

// Re-export components
pub use components::{
    Checkbox, ConfirmDeleteDialog, MovieCard, MovieDialog, MovieDialogMode, PersonDialog,
    PersonDialogMode, PersonTable, Select, SelectOption, TextArea, TextInput,
};

// Re-export hooks
pub use hooks::{RemoteCollection, use_remote_collection};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "CineDesk";

/// Application display title
pub const TITLE: &str = "CineDesk - Movie Catalog Admin";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the CineDesk desktop application
///
/// This is the main entry point for the Dioxus desktop app.
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     cinedesk_ui::launch();
/// }
/// ```
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    // Configure and launch Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(760.0, 560.0)),
                )
                .with_menu(None) // Disable default menu, we use the in-app navbar
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "CineDesk");
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains("CineDesk"));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".app-container"));
    }
}
