//! # Person Table Component
//!
//! Data table for the actor and producer screens. Owns the three render
//! branches of a list view: loading indicator, empty state, rows in fetch
//! order.

use dioxus::prelude::*;

use cinedesk_core::Person;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct PersonTableProps {
    /// People to display, in fetch order
    pub people: Vec<Person>,

    /// Whether a fetch is in flight
    pub loading: bool,

    /// Message shown when the collection is empty
    #[props(default = "No data available".to_string())]
    pub empty_text: String,

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

/// Table of actors or producers with per-row Edit/Delete actions
#[component]
pub fn PersonTable(props: PersonTableProps) -> Element {
    if props.loading {
        return rsx! {
            div {
                class: "loading-state",
                div { class: "spinner" }
                span { "Loading..." }
            }
        };
    }

    if props.people.is_empty() {
        return rsx! {
            div { class: "empty-state", "{props.empty_text}" }
        };
    }

    // Rows keyed by record id, falling back to position for unsaved records
    let rows: Vec<(String, usize, Person)> = props
        .people
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, person)| {
            let key = person.id.clone().unwrap_or_else(|| index.to_string());
            (key, index + 1, person)
        })
        .collect();

    rsx! {
        table {
            class: "data-table",

            thead {
                tr {
                    th { "S.No" }
                    th { "Name" }
                    th { "DOB" }
                    th { "Gender" }
                    th { class: "col-wide", "Bio" }
                    th { class: "col-actions", "Actions" }
                }
            }

            tbody {
                for (key, serial, person) in rows {
                    PersonRow {
                        key: "{key}",
                        serial,
                        person,
                        on_edit: props.on_edit,
                        on_delete: props.on_delete,
                    }
                }
            }
        }
    }
}

/// Single table row
///
/// Rows for records the backend has not yet assigned an id (should not
/// happen in practice) render without action buttons.
#[component]
fn PersonRow(
    serial: usize,
    person: Person,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let edit_id = person.id.clone();
    let delete_id = person.id.clone();

    rsx! {
        tr {
            td { "{serial}" }
            td { class: "cell-name", "{person.name}" }
            td { "{person.date_of_birth}" }
            td { "{person.gender}" }
            td { class: "col-wide",
                p { class: "cell-bio", "{person.bio}" }
            }
            td { class: "col-actions",
                div { class: "row-actions",
                    if let Some(id) = edit_id {
                        button {
                            class: "btn btn-secondary btn-sm",
                            onclick: move |_| on_edit.call(id.clone()),
                            "Edit"
                        }
                    }
                    if let Some(id) = delete_id {
                        button {
                            class: "btn btn-danger btn-sm",
                            onclick: move |_| on_delete.call(id.clone()),
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
