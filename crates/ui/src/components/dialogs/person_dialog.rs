//! # Person Dialog Component
//!
//! Add/Edit dialog for actors and producers. One implementation serves both
//! collections; [`PersonKind`] picks the labels and API routes.
//!
//! While open, this dialog is the sole owner of the draft. Edit mode fetches
//! the record and replaces the draft wholesale. A failed submit keeps the
//! dialog open with the draft intact so the user can retry without
//! re-entering data.

use dioxus::prelude::*;

use cinedesk_api::ApiClient;
use cinedesk_core::{Gender, PersonDraft, PersonKind, Validatable};

use crate::components::inputs::{Select, SelectOption, TextArea, TextInput};
use crate::state::{APP_STATE, StatusLevel};

// ============================================================================
// Types
// ============================================================================

/// Mode for the person dialog
#[derive(Debug, Clone, PartialEq)]
pub enum PersonDialogMode {
    /// Create a new person from an empty draft
    Create,
    /// Edit an existing person, pre-filling the draft by id
    Edit(String),
}

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct PersonDialogProps {
    /// Which collection this dialog operates on
    pub kind: PersonKind,

    /// Dialog mode (create or edit)
    pub mode: PersonDialogMode,

    /// Called after a successful create/update
    #[props(default)]
    pub on_saved: EventHandler<()>,

    /// Called when the dialog is cancelled
    #[props(default)]
    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Person creation and editing dialog
#[component]
pub fn PersonDialog(props: PersonDialogProps) -> Element {
    let mut draft = use_signal(PersonDraft::default);
    let mut submitting = use_signal(|| false);
    let mut fetching = use_signal(|| false);

    let kind = props.kind;

    // Load the record for edit mode, replacing the draft wholesale
    let load_id = match &props.mode {
        PersonDialogMode::Edit(id) => Some(id.clone()),
        PersonDialogMode::Create => None,
    };
    use_effect(move || {
        if let Some(id) = load_id.clone() {
            spawn(async move {
                fetching.set(true);
                let client = ApiClient::from_env();
                match client.get_person(kind, &id).await {
                    Ok(person) => draft.set(PersonDraft::from_person(&person)),
                    Err(e) => {
                        tracing::error!("failed to load {} {id}: {e}", kind.display_name());
                        APP_STATE
                            .write()
                            .ui
                            .set_status(e.user_message(), StatusLevel::Error);
                    }
                }
                fetching.set(false);
            });
        }
    });

    // Handle form submission
    let mode_for_save = props.mode.clone();
    let on_saved = props.on_saved;
    let mut handle_save = move |_| {
        if *submitting.peek() {
            return;
        }

        let current = draft.peek().clone();
        if let Err(e) = current.validate() {
            tracing::debug!("{} validation failed: {e}", kind.display_name());
            APP_STATE
                .write()
                .ui
                .set_status("All fields are required.", StatusLevel::Warning);
            return;
        }

        submitting.set(true);
        let mode = mode_for_save.clone();
        spawn(async move {
            let client = ApiClient::from_env();
            let result = match &mode {
                PersonDialogMode::Create => {
                    client.create_person(kind, &current).await.map(|_| ())
                }
                PersonDialogMode::Edit(id) => client.update_person(kind, id, &current).await,
            };

            match result {
                Ok(()) => {
                    let verb = match mode {
                        PersonDialogMode::Create => "added",
                        PersonDialogMode::Edit(_) => "updated",
                    };
                    APP_STATE.write().ui.set_status(
                        format!("{} {verb} successfully.", kind.display_name()),
                        StatusLevel::Success,
                    );
                    draft.set(PersonDraft::default());
                    on_saved.call(());
                }
                Err(e) => {
                    tracing::error!("failed to save {}: {e}", kind.display_name());
                    APP_STATE
                        .write()
                        .ui
                        .set_status(e.user_message(), StatusLevel::Error);
                }
            }

            submitting.set(false);
        });
    };

    // Handle cancel: discard the draft, no network call
    let on_cancel = props.on_cancel;
    let handle_cancel = move |_| {
        draft.set(PersonDraft::default());
        on_cancel.call(());
    };

    // Field handlers
    let on_name_change = move |value: String| draft.write().name = value;
    let on_dob_change = move |value: String| draft.write().date_of_birth = value;
    let on_gender_change = move |value: String| draft.write().gender = value;
    let on_bio_change = move |value: String| draft.write().bio = value;

    let gender_options: Vec<SelectOption> = Gender::ALL
        .iter()
        .map(|g| SelectOption::new(g.as_str(), g.as_str()))
        .collect();

    let title = match &props.mode {
        PersonDialogMode::Create => format!("Add {}", kind.display_name()),
        PersonDialogMode::Edit(_) => format!("Edit {}", kind.display_name()),
    };
    let save_button_text = match &props.mode {
        PersonDialogMode::Create => "Add",
        PersonDialogMode::Edit(_) => "Update",
    };

    let form = draft.read();
    let saving = *submitting.read();

    rsx! {
        div {
            class: "modal-backdrop",

            div {
                class: "modal",

                h2 { class: "modal-title", "{title}" }

                if *fetching.read() {
                    div {
                        class: "loading-state",
                        div { class: "spinner" }
                        span { "Loading..." }
                    }
                } else {
                    form {
                        onsubmit: move |e| {
                            e.prevent_default();
                            handle_save(());
                        },

                        TextInput {
                            value: form.name.clone(),
                            label: "Name",
                            required: true,
                            on_change: on_name_change,
                        }

                        TextInput {
                            value: form.date_of_birth.clone(),
                            label: "Date of Birth",
                            input_type: "date".to_string(),
                            required: true,
                            on_change: on_dob_change,
                        }

                        Select {
                            value: form.gender.clone(),
                            options: gender_options,
                            label: "Gender",
                            empty_label: "Select Gender",
                            required: true,
                            on_change: on_gender_change,
                        }

                        TextArea {
                            value: form.bio.clone(),
                            label: "Bio",
                            rows: 4,
                            required: true,
                            on_change: on_bio_change,
                        }

                        div {
                            class: "modal-actions",

                            button {
                                r#type: "button",
                                class: "btn btn-secondary",
                                disabled: saving,
                                onclick: handle_cancel,
                                "Cancel"
                            }

                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: saving,

                                if saving {
                                    span { class: "spinner spinner-sm" }
                                    "Saving..."
                                } else {
                                    "{save_button_text}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
