//! # Movie Card Component
//!
//! Card display for one movie: poster, name, year, plot, and the producer
//! and cast names resolved from the lookup collections the page fetched.
//! Resolution happens on every render; a dangling id shows its sentinel
//! name instead of breaking the card.

use dioxus::prelude::*;

use cinedesk_core::{Movie, NameResolver, Person};

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct MovieCardProps {
    /// The movie to display
    pub movie: Movie,

    /// Producer collection for name lookup (fetched once by the page)
    pub producers: Vec<Person>,

    /// Actor collection for name lookup (fetched once by the page)
    pub actors: Vec<Person>,

    /// Called with the record id when Edit is clicked
    #[props(default)]
    pub on_edit: EventHandler<String>,

    /// Called with the record id when Delete is clicked
    #[props(default)]
    pub on_delete: EventHandler<String>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Movie card with resolved producer and cast names
#[component]
pub fn MovieCard(props: MovieCardProps) -> Element {
    let resolver = NameResolver::new(&props.producers, &props.actors);
    let producer_name = resolver.producer_name(&props.movie.producer);
    let cast = resolver.cast_names(&props.movie.actors);

    let edit_id = props.movie.id.clone();
    let delete_id = props.movie.id.clone();

    rsx! {
        div {
            class: "movie-card",

            img {
                class: "movie-poster",
                src: "{props.movie.poster}",
                alt: "{props.movie.name}",
            }

            div {
                class: "movie-body",

                h2 { class: "movie-title", "{props.movie.name}" }
                span { class: "movie-year", "{props.movie.year_of_release}" }
                p { class: "movie-plot", "{props.movie.plot}" }

                div {
                    class: "movie-meta",

                    div {
                        class: "meta-row",
                        span { class: "meta-label", "Producer:" }
                        span { "{producer_name}" }
                    }

                    div {
                        class: "meta-row",
                        span { class: "meta-label", "Cast:" }
                        div {
                            class: "badge-list",
                            for (index, name) in cast.iter().enumerate() {
                                span { key: "{index}", class: "badge", "{name}" }
                            }
                        }
                    }
                }

                div {
                    class: "row-actions",

                    if let Some(id) = edit_id {
                        button {
                            class: "btn btn-secondary btn-sm",
                            onclick: move |_| props.on_edit.call(id.clone()),
                            "Edit"
                        }
                    }
                    if let Some(id) = delete_id {
                        button {
                            class: "btn btn-danger btn-sm",
                            onclick: move |_| props.on_delete.call(id.clone()),
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
