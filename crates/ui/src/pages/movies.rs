//! # Movies Page
//!
//! Card grid over the movie collection. The producer and actor collections
//! are fetched once here and handed to every card (for name resolution) and
//! to the movie dialog (for its selects), so no card performs lookup fetches
//! of its own.

use dioxus::prelude::*;

use cinedesk_api::ApiClient;
use cinedesk_core::{Movie, PersonKind};

use crate::components::dialogs::{ConfirmDeleteDialog, MovieDialog, MovieDialogMode};
use crate::components::movie_card::MovieCard;
use crate::hooks::use_remote_collection;
use crate::state::{APP_STATE, DeleteConfirm, ModalState, StatusLevel};

// ============================================================================
// Page Component
// ============================================================================

/// Movie catalog page
#[component]
pub fn MoviesPage() -> Element {
    let movies = use_remote_collection("movies", move || {
        let client = ApiClient::from_env();
        async move { client.list_movies().await }
    });

    // Lookup collections for name resolution, fetched once per mount
    let producers = use_remote_collection("producers", move || {
        let client = ApiClient::from_env();
        async move { client.list_people(PersonKind::Producer).await }
    });
    let actors = use_remote_collection("actors", move || {
        let client = ApiClient::from_env();
        async move { client.list_people(PersonKind::Actor).await }
    });

    let mut modal = use_signal(ModalState::default);
    let mut delete_confirm = use_signal(DeleteConfirm::default);

    // Card actions
    let on_edit = move |id: String| modal.write().open_edit(id);
    let on_request_delete = move |id: String| delete_confirm.write().request(id);

    // Dialog outcomes
    let on_saved = move |_| {
        modal.write().close();
        movies.refresh();
    };
    let on_dialog_cancel = move |_| modal.write().close();

    // Phase 2 of the delete gesture
    let handle_confirm_delete = move |_| {
        if let Some(id) = delete_confirm.write().take() {
            spawn(async move {
                let client = ApiClient::from_env();
                match client.delete_movie(&id).await {
                    Ok(()) => {
                        APP_STATE
                            .write()
                            .ui
                            .set_status("Movie deleted successfully.", StatusLevel::Success);
                        movies.refresh();
                    }
                    Err(e) => {
                        tracing::error!("failed to delete movie {id}: {e}");
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

    // Cards keyed by record id, falling back to position for unsaved records
    let movie_rows: Vec<(String, Movie)> = movies
        .items()
        .into_iter()
        .enumerate()
        .map(|(index, movie)| {
            let key = movie.id.clone().unwrap_or_else(|| index.to_string());
            (key, movie)
        })
        .collect();

    rsx! {
        div {
            class: "page",

            div {
                class: "page-header",
                h1 { class: "page-title", "Movies" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| modal.write().open_add(),
                    "Add Movie"
                }
            }

            if movies.loading() {
                div {
                    class: "loading-state",
                    div { class: "spinner" }
                    span { "Loading..." }
                }
            } else if movies.is_empty() {
                div { class: "empty-state", "No data available" }
            } else {
                div {
                    class: "movie-grid",
                    for (key, movie) in movie_rows {
                        MovieCard {
                            key: "{key}",
                            movie,
                            producers: producers.items(),
                            actors: actors.items(),
                            on_edit,
                            on_delete: on_request_delete,
                        }
                    }
                }
            }

            match modal() {
                ModalState::Closed => rsx! {},
                ModalState::Adding => rsx! {
                    MovieDialog {
                        mode: MovieDialogMode::Create,
                        producers: producers.items(),
                        actors: actors.items(),
                        on_saved,
                        on_cancel: on_dialog_cancel,
                    }
                },
                ModalState::Editing(id) => rsx! {
                    MovieDialog {
                        mode: MovieDialogMode::Edit(id.clone()),
                        producers: producers.items(),
                        actors: actors.items(),
                        on_saved,
                        on_cancel: on_dialog_cancel,
                    }
                },
            }

            if delete_confirm.read().is_confirming() {
                ConfirmDeleteDialog {
                    item_label: "movie".to_string(),
                    on_confirm: handle_confirm_delete,
                    on_cancel: handle_cancel_delete,
                }
            }
        }
    }
}
