//! Main Application Component for CineDesk
//!
//! This module contains the root Dioxus component that renders the entire
//! application: top navigation bar, active page, and the status bar that
//! carries transient notices.

use dioxus::prelude::*;

use crate::pages::{ActorsPage, MoviesPage, ProducersPage};
use crate::state::{APP_STATE, Page, StatusLevel};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("CineDesk UI initialized");
    });

    let dark_mode = APP_STATE.read().ui.dark_mode;

    rsx! {
        div {
            class: if dark_mode { "app-container" } else { "app-container light" },

            Navbar {}
            MainContent {}
            StatusBar {}
        }
    }
}

// ============================================================================
// Navbar Component
// ============================================================================

/// Top navigation bar with brand and page links
#[component]
fn Navbar() -> Element {
    let current_page = APP_STATE.read().ui.active_page;

    rsx! {
        header {
            class: "navbar",

            div {
                class: "navbar-brand",
                span { class: "brand-icon", "🎬" }
                span { class: "brand-name", "CineDesk" }
            }

            nav {
                class: "nav-links",
                for page in Page::ALL {
                    NavButton { page, current: current_page }
                }
            }

            div { class: "navbar-spacer" }

            button {
                class: "nav-btn",
                title: "Toggle theme",
                onclick: move |_| {
                    APP_STATE.write().ui.toggle_dark_mode();
                },
                "🌙"
            }
        }
    }
}

/// Navigation bar item
#[component]
fn NavButton(page: Page, current: Page) -> Element {
    let is_active = page == current;
    let name = page.display_name();
    let icon = page.icon();

    rsx! {
        button {
            class: if is_active { "nav-btn active" } else { "nav-btn" },
            title: "{name}",
            onclick: move |_| {
                APP_STATE.write().ui.navigate(page);
            },
            span { "{icon}" }
            span { "{name}" }
        }
    }
}

// ============================================================================
// Main Content Component
// ============================================================================

/// Main content area that renders the active page
#[component]
fn MainContent() -> Element {
    let current_page = APP_STATE.read().ui.active_page;

    rsx! {
        main {
            class: "main-content",

            match current_page {
                Page::Movies => rsx! { MoviesPage {} },
                Page::Actors => rsx! { ActorsPage {} },
                Page::Producers => rsx! { ProducersPage {} },
            }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Bottom status bar carrying the current transient notice
#[component]
fn StatusBar() -> Element {
    let status = APP_STATE.read().ui.status_message.clone();

    rsx! {
        footer {
            class: "status-bar",

            if let Some(msg) = status {
                span {
                    class: match msg.level {
                        StatusLevel::Info => "status-info",
                        StatusLevel::Success => "status-success",
                        StatusLevel::Warning => "status-warning",
                        StatusLevel::Error => "status-error",
                    },
                    "{msg.text}"
                }
                div { class: "navbar-spacer" }
                button {
                    class: "status-dismiss",
                    title: "Dismiss",
                    onclick: move |_| {
                        APP_STATE.write().ui.clear_status();
                    },
                    "✕"
                }
            } else {
                span { class: "status-info", "Ready" }
            }
        }
    }
}
