//! # Confirm Delete Dialog Component
//!
//! Confirmation prompt for destructive delete operations. Purely
//! presentational: the owning page drives the two-phase
//! [`DeleteConfirm`](crate::state::DeleteConfirm) machine and performs the
//! actual delete from its `on_confirm` handler, so the target id never
//! lives inside this component.

use dioxus::prelude::*;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// What is about to be deleted ("actor", "producer", "movie")
    pub item_label: String,

    /// Called when the user confirms the deletion
    #[props(default)]
    pub on_confirm: EventHandler<()>,

    /// Called when the dialog is dismissed
    #[props(default)]
    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Confirmation dialog for delete operations
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| props.on_cancel.call(()),

            div {
                class: "modal modal-sm",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "modal-header",
                    span { class: "modal-icon warning", "⚠️" }
                    h2 { class: "modal-title", "Are you sure?" }
                }

                p {
                    class: "modal-text",
                    "This will permanently delete the {props.item_label} from your collection. This action cannot be undone."
                }

                div {
                    class: "modal-actions",

                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| props.on_cancel.call(()),
                        "Cancel"
                    }

                    button {
                        r#type: "button",
                        class: "btn btn-danger",
                        onclick: move |_| props.on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}
