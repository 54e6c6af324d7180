//! Application State Management for CineDesk
//!
//! This module provides centralized state management using Dioxus Signals.
//! Only cross-page UI state lives here: the active page, the status-bar
//! notice, and the theme flag. Collection data is owned by the list view
//! that fetched it, for exactly as long as that view is mounted.
//!
//! The modal and delete-confirmation lifecycles are modelled as explicit
//! state machines so that a stale target id is unrepresentable: the id only
//! exists inside the `Editing` / `Confirming` variants, and leaving those
//! states destroys it.

use dioxus::prelude::*;

// ============================================================================
// Page Navigation
// ============================================================================

/// Application pages/views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Movie catalog grid
    #[default]
    Movies,
    /// Actor management table
    Actors,
    /// Producer management table
    Producers,
}

impl Page {
    /// All pages, in navigation order
    pub const ALL: [Page; 3] = [Page::Movies, Page::Actors, Page::Producers];

    /// Get the display name for this page
    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Movies => "Movies",
            Page::Actors => "Actors",
            Page::Producers => "Producers",
        }
    }

    /// Get the icon emoji for this page (for UI display)
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Movies => "🎬",
            Page::Actors => "🎭",
            Page::Producers => "🎥",
        }
    }
}

// ============================================================================
// Status Messages
// ============================================================================

/// Transient notice shown in the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

// ============================================================================
// Modal State Machine
// ============================================================================

/// Add/Edit modal lifecycle for one entity kind
///
/// The edit target id lives inside the `Editing` variant only; closing the
/// modal destroys it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    /// No dialog visible
    #[default]
    Closed,
    /// Add dialog open over an empty draft
    Adding,
    /// Edit dialog open for the given record id
    Editing(String),
}

impl ModalState {
    /// Open the dialog in add mode
    pub fn open_add(&mut self) {
        *self = ModalState::Adding;
    }

    /// Open the dialog in edit mode for `id`
    pub fn open_edit(&mut self, id: impl Into<String>) {
        *self = ModalState::Editing(id.into());
    }

    /// Close the dialog, discarding any edit target
    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    /// Whether any dialog is visible
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// The id being edited, if the dialog is open in edit mode
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            ModalState::Editing(id) => Some(id),
            _ => None,
        }
    }
}

// ============================================================================
// Delete Confirmation State Machine
// ============================================================================

/// Two-phase delete confirmation
///
/// Phase 1 (`request`) records the target and shows the prompt; no network
/// call happens. Phase 2 is a fork: `take` hands the target to the caller
/// for the actual delete and resets to `Idle` in the same move, `cancel`
/// just resets. Either way the id is gone once the prompt closes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteConfirm {
    /// No deletion pending
    #[default]
    Idle,
    /// Waiting for the user to confirm deletion of the given id
    Confirming(String),
}

impl DeleteConfirm {
    /// Record the target and show the prompt
    pub fn request(&mut self, id: impl Into<String>) {
        *self = DeleteConfirm::Confirming(id.into());
    }

    /// Dismiss the prompt without acting
    pub fn cancel(&mut self) {
        *self = DeleteConfirm::Idle;
    }

    /// Take the confirmed target, leaving the machine idle
    ///
    /// Returns `None` when nothing was requested, so a confirm without a
    /// preceding request can never reach the network.
    pub fn take(&mut self) -> Option<String> {
        match std::mem::take(self) {
            DeleteConfirm::Confirming(id) => Some(id),
            DeleteConfirm::Idle => None,
        }
    }

    /// The pending target id, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            DeleteConfirm::Confirming(id) => Some(id),
            DeleteConfirm::Idle => None,
        }
    }

    /// Whether the prompt is visible
    pub fn is_confirming(&self) -> bool {
        matches!(self, DeleteConfirm::Confirming(_))
    }
}

// ============================================================================
// UI State
// ============================================================================

/// General UI state (navigation, notices, theme)
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Currently active page
    pub active_page: Page,
    /// Status bar message
    pub status_message: Option<StatusMessage>,
    /// Whether dark mode is enabled
    pub dark_mode: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_page: Page::Movies,
            status_message: None,
            dark_mode: true, // Default to dark mode
        }
    }
}

impl UiState {
    /// Create new UI state
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to a page
    pub fn navigate(&mut self, page: Page) {
        self.active_page = page;
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Toggle dark mode
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// UI state
    pub ui: UiState,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
/// Use this in components to access and modify app state
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_modal_transitions() {
        let mut modal = ModalState::default();
        assert!(!modal.is_open());
        assert_eq!(modal.editing_id(), None);

        modal.open_add();
        assert!(modal.is_open());
        assert_eq!(modal.editing_id(), None);

        modal.open_edit("m1");
        assert_eq!(modal.editing_id(), Some("m1"));

        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.editing_id(), None);
    }

    #[test]
    fn test_delete_confirm_take_is_one_shot() {
        let mut confirm = DeleteConfirm::default();
        confirm.request("a1");
        assert!(confirm.is_confirming());
        assert_eq!(confirm.target(), Some("a1"));

        assert_eq!(confirm.take(), Some("a1".to_string()));
        // the target left with take(); a second confirm finds nothing
        assert_eq!(confirm.take(), None);
        assert!(!confirm.is_confirming());
    }

    #[test]
    fn test_delete_confirm_without_request_yields_nothing() {
        let mut confirm = DeleteConfirm::default();
        assert_eq!(confirm.take(), None);
    }

    #[test]
    fn test_delete_confirm_cancel_clears_target() {
        let mut confirm = DeleteConfirm::default();
        confirm.request("a1");
        confirm.cancel();
        assert_eq!(confirm.target(), None);
        assert_eq!(confirm.take(), None);
    }

    #[test]
    fn test_delete_confirm_rerequest_replaces_target() {
        let mut confirm = DeleteConfirm::default();
        confirm.request("a1");
        confirm.request("a2");
        assert_eq!(confirm.take(), Some("a2".to_string()));
    }

    #[test]
    fn test_ui_state_navigation_and_status() {
        let mut ui = UiState::new();
        assert_eq!(ui.active_page, Page::Movies);

        ui.navigate(Page::Actors);
        assert_eq!(ui.active_page, Page::Actors);

        ui.set_status("Actor added successfully.", StatusLevel::Success);
        assert!(ui.status_message.is_some());

        ui.clear_status();
        assert!(ui.status_message.is_none());
    }

    #[test]
    fn test_page_properties() {
        assert_eq!(Page::Movies.display_name(), "Movies");
        assert_eq!(Page::Actors.icon(), "🎭");
        assert_eq!(Page::ALL.len(), 3);
    }
}
