//! # Movie Dialog Component
//!
//! Add/Edit dialog for movies. The producer select and the cast picker are
//! driven by the lookup collections the Movies page already fetched; the
//! dialog performs no lookup fetches of its own.
//!
//! The cast picker appends ids in the order the user selects them, and a
//! movie must have at least one actor before submission is accepted.

use chrono::Datelike;
use dioxus::prelude::*;

use cinedesk_api::ApiClient;
use cinedesk_core::{MovieDraft, Person, Validatable};

use crate::components::inputs::{Checkbox, Select, SelectOption, TextArea, TextInput};
use crate::state::{APP_STATE, StatusLevel};

/// How many release years the year select offers, counting back from the
/// current year
const YEAR_CHOICES: i32 = 136;

// ============================================================================
// Types
// ============================================================================

/// Mode for the movie dialog
#[derive(Debug, Clone, PartialEq)]
pub enum MovieDialogMode {
    /// Create a new movie from an empty draft
    Create,
    /// Edit an existing movie, pre-filling the draft by id
    Edit(String),
}

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct MovieDialogProps {
    /// Dialog mode (create or edit)
    pub mode: MovieDialogMode,

    /// Producer collection for the producer select
    pub producers: Vec<Person>,

    /// Actor collection for the cast picker
    pub actors: Vec<Person>,

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

/// Movie creation and editing dialog
#[component]
pub fn MovieDialog(props: MovieDialogProps) -> Element {
    let mut draft = use_signal(MovieDraft::default);
    let mut submitting = use_signal(|| false);
    let mut fetching = use_signal(|| false);

    // Load the record for edit mode, replacing the draft wholesale
    let load_id = match &props.mode {
        MovieDialogMode::Edit(id) => Some(id.clone()),
        MovieDialogMode::Create => None,
    };
    use_effect(move || {
        if let Some(id) = load_id.clone() {
            spawn(async move {
                fetching.set(true);
                let client = ApiClient::from_env();
                match client.get_movie(&id).await {
                    Ok(movie) => draft.set(MovieDraft::from_movie(&movie)),
                    Err(e) => {
                        tracing::error!("failed to load movie {id}: {e}");
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
            tracing::debug!("movie validation failed: {e}");
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
                MovieDialogMode::Create => client.create_movie(&current).await.map(|_| ()),
                MovieDialogMode::Edit(id) => client.update_movie(id, &current).await,
            };

            match result {
                Ok(()) => {
                    let verb = match mode {
                        MovieDialogMode::Create => "added",
                        MovieDialogMode::Edit(_) => "updated",
                    };
                    APP_STATE.write().ui.set_status(
                        format!("Movie {verb} successfully."),
                        StatusLevel::Success,
                    );
                    draft.set(MovieDraft::default());
                    on_saved.call(());
                }
                Err(e) => {
                    tracing::error!("failed to save movie: {e}");
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
        draft.set(MovieDraft::default());
        on_cancel.call(());
    };

    // Field handlers
    let on_name_change = move |value: String| draft.write().name = value;
    let on_year_change = move |value: String| draft.write().year_of_release = value;
    let on_plot_change = move |value: String| draft.write().plot = value;
    let on_poster_change = move |value: String| draft.write().poster = value;
    let on_producer_change = move |value: String| draft.write().producer = value;
    let on_toggle_actor = move |id: String| draft.write().toggle_actor(&id);

    let year_options = year_options();
    let producer_options: Vec<SelectOption> = props
        .producers
        .iter()
        .filter_map(|p| p.id.clone().map(|id| SelectOption::new(id, p.name.clone())))
        .collect();

    let form = draft.read();

    let actor_choices: Vec<(String, String, bool)> = props
        .actors
        .iter()
        .filter_map(|a| {
            a.id.clone()
                .map(|id| (id.clone(), a.name.clone(), form.actors.contains(&id)))
        })
        .collect();

    let title = match &props.mode {
        MovieDialogMode::Create => "Add Movie",
        MovieDialogMode::Edit(_) => "Edit Movie",
    };
    let save_button_text = match &props.mode {
        MovieDialogMode::Create => "Add",
        MovieDialogMode::Edit(_) => "Update",
    };

    let saving = *submitting.read();

    rsx! {
        div {
            class: "modal-backdrop",

            div {
                class: "modal modal-lg",

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
                            label: "Movie Name",
                            required: true,
                            on_change: on_name_change,
                        }

                        Select {
                            value: form.year_of_release.clone(),
                            options: year_options,
                            label: "Year of Release",
                            empty_label: "Select year",
                            required: true,
                            on_change: on_year_change,
                        }

                        TextArea {
                            value: form.plot.clone(),
                            label: "Plot",
                            rows: 4,
                            required: true,
                            on_change: on_plot_change,
                        }

                        TextInput {
                            value: form.poster.clone(),
                            label: "Movie Poster",
                            placeholder: "data:image/png;base64,…",
                            help_text: "Data-URL-encoded image, sent to the backend as-is",
                            required: true,
                            on_change: on_poster_change,
                        }

                        Select {
                            value: form.producer.clone(),
                            options: producer_options,
                            label: "Producer",
                            empty_label: "Select Producer",
                            required: true,
                            on_change: on_producer_change,
                        }

                        div {
                            class: "form-group",
                            label {
                                class: "form-label",
                                "Actors"
                                span { class: "required-mark", "*" }
                            }

                            if actor_choices.is_empty() {
                                p { class: "form-help", "No actors available. Add actors first." }
                            } else {
                                div {
                                    class: "checkbox-grid",
                                    for (id, name, checked) in actor_choices {
                                        ActorChoice {
                                            key: "{id}",
                                            id: id.clone(),
                                            name,
                                            checked,
                                            on_toggle: on_toggle_actor,
                                        }
                                    }
                                }
                            }
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

/// One selectable cast entry
#[component]
fn ActorChoice(id: String, name: String, checked: bool, on_toggle: EventHandler<String>) -> Element {
    rsx! {
        Checkbox {
            label: name,
            checked,
            on_change: move |_| on_toggle.call(id.clone()),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Release year choices, newest first
fn year_options() -> Vec<SelectOption> {
    let current = chrono::Utc::now().year();
    (0..YEAR_CHOICES)
        .map(|offset| {
            let year = (current - offset).to_string();
            SelectOption::new(year.clone(), year)
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_options_start_at_current_year() {
        let options = year_options();
        assert_eq!(options.len(), YEAR_CHOICES as usize);
        assert_eq!(options[0].value, chrono::Utc::now().year().to_string());
        // descending, one year per entry
        assert_eq!(
            options[1].value,
            (chrono::Utc::now().year() - 1).to_string()
        );
    }
}
