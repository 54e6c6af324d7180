//! # UI Hooks
//!
//! Custom Dioxus hooks for the CineDesk UI.
//!
//! This module provides the remote-collection hook that every list view
//! builds on: fetch on mount, wholesale refresh after mutation.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_collection;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_collection::{RemoteCollection, use_remote_collection};
