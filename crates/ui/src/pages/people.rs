//! # People Pages (Actors & Producers)
//!
//! The actor and producer screens are one screen instantiated twice, so a
//! single `PeoplePage` implements both; `ActorsPage` and `ProducersPage`
//! are the two instantiations.
//!
//! The page owns its collection for as long as it is mounted, and every
//! mutation path ends in a wholesale `refresh()` of that collection.

use dioxus::prelude::*;

use cinedesk_api::ApiClient;
use cinedesk_core::PersonKind;

use crate::components::dialogs::{ConfirmDeleteDialog, PersonDialog, PersonDialogMode};
use crate::components::person_table::PersonTable;
use crate::hooks::use_remote_collection;
use crate::state::{APP_STATE, DeleteConfirm, ModalState, StatusLevel};

// ============================================================================
// Page Components
// ============================================================================

/// Actor management page
#[component]
pub fn ActorsPage() -> Element {
    rsx! {
        PeoplePage { kind: PersonKind::Actor }
    }
}

/// Producer management page
#[component]
pub fn ProducersPage() -> Element {
    rsx! {
        PeoplePage { kind: PersonKind::Producer }
    }
}

/// Shared list/add/edit/delete screen for one person collection
#[component]
pub fn PeoplePage(kind: PersonKind) -> Element {
    let people = use_remote_collection(kind.plural(), move || {
        let client = ApiClient::from_env();
        async move { client.list_people(kind).await }
    });

    let mut modal = use_signal(ModalState::default);
    let mut delete_confirm = use_signal(DeleteConfirm::default);

    // Row actions
    let on_edit = move |id: String| modal.write().open_edit(id);
    let on_request_delete = move |id: String| delete_confirm.write().request(id);

    // Dialog outcomes
    let on_saved = move |_| {
        modal.write().close();
        people.refresh();
    };
    let on_dialog_cancel = move |_| modal.write().close();

    // Phase 2 of the delete gesture: the target leaves the machine before
    // the network call, so the prompt is gone and cannot act twice.
    let handle_confirm_delete = move |_| {
        if let Some(id) = delete_confirm.write().take() {
            spawn(async move {
                let client = ApiClient::from_env();
                match client.delete_person(kind, &id).await {
                    Ok(()) => {
                        APP_STATE.write().ui.set_status(
                            format!("{} deleted successfully.", kind.display_name()),
                            StatusLevel::Success,
                        );
                        people.refresh();
                    }
                    Err(e) => {
                        tracing::error!("failed to delete {} {id}: {e}", kind.display_name());
                        APP_STATE
                            .write()
                            .ui
                            .set_status(e.user_message(), StatusLevel::Error);
                    }
                }
            });
        }
    };
    let handle_cancel_delete = move |_| delete_confirm.write().cancel();

    let singular = kind.display_name();
    let plural = kind.plural();
    let item_label = singular.to_lowercase();

    rsx! {
        div {
            class: "page",

            div {
                class: "page-header",
                h1 { class: "page-title", "{plural}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| modal.write().open_add(),
                    "Add {singular}"
                }
            }

            div {
                class: "panel",
                PersonTable {
                    people: people.items(),
                    loading: people.loading(),
                    on_edit,
                    on_delete: on_request_delete,
                }
            }

            match modal() {
                ModalState::Closed => rsx! {},
                ModalState::Adding => rsx! {
                    PersonDialog {
                        kind,
                        mode: PersonDialogMode::Create,
                        on_saved,
                        on_cancel: on_dialog_cancel,
                    }
                },
                ModalState::Editing(id) => rsx! {
                    PersonDialog {
                        kind,
                        mode: PersonDialogMode::Edit(id.clone()),
                        on_saved,
                        on_cancel: on_dialog_cancel,
                    }
                },
            }

            if delete_confirm.read().is_confirming() {
                ConfirmDeleteDialog {
                    item_label,
                    on_confirm: handle_confirm_delete,
                    on_cancel: handle_cancel_delete,
                }
            }
        }
    }
}
