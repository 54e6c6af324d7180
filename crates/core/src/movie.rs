//! Movies
//!
//! A movie references its producer and cast by Person id only; no referential
//! integrity is enforced on this side. Dangling ids are resolved to sentinel
//! display names at render time (see [`crate::resolve`]).
//!
//! Wire format: `_id` and `yearOfRelease`; the poster travels inline as a
//! base64 data URL string.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::traits::Validatable;

// ============================================================================
// Movie
// ============================================================================

/// A persisted movie record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Backend-assigned identifier; absent until the record is persisted
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(rename = "yearOfRelease")]
    pub year_of_release: String,

    pub plot: String,

    /// Data-URL-encoded poster image, passed through unmodified
    pub poster: String,

    /// Producer Person id
    pub producer: String,

    /// Cast Person ids, in relevant order; duplicates are preserved
    pub actors: Vec<String>,
}

// ============================================================================
// Movie Draft
// ============================================================================

/// In-progress form state for a movie
///
/// Serialises with the same wire names as [`Movie`], so a validated draft is
/// POSTed or PUT directly as the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MovieDraft {
    pub name: String,

    #[serde(rename = "yearOfRelease")]
    pub year_of_release: String,

    pub plot: String,

    pub poster: String,

    pub producer: String,

    pub actors: Vec<String>,
}

impl MovieDraft {
    /// Pre-fill a draft from an existing record (edit mode)
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            name: movie.name.clone(),
            year_of_release: movie.year_of_release.clone(),
            plot: movie.plot.clone(),
            poster: movie.poster.clone(),
            producer: movie.producer.clone(),
            actors: movie.actors.clone(),
        }
    }

    /// Restore the draft to the all-empty sentinel value
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add or remove an actor id, preserving selection order
    pub fn toggle_actor(&mut self, id: &str) {
        if let Some(pos) = self.actors.iter().position(|a| a == id) {
            self.actors.remove(pos);
        } else {
            self.actors.push(id.to_string());
        }
    }
}

impl Validatable for MovieDraft {
    fn validate(&self) -> CatalogResult<()> {
        let mut missing = Vec::new();

        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.year_of_release.trim().is_empty() {
            missing.push("year of release");
        }
        if self.plot.trim().is_empty() {
            missing.push("plot");
        }
        if self.poster.trim().is_empty() {
            missing.push("poster");
        }
        if self.producer.trim().is_empty() {
            missing.push("producer");
        }
        if self.actors.is_empty() {
            missing.push("actors");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::missing(missing))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn full_draft() -> MovieDraft {
        MovieDraft {
            name: "The Long Take".to_string(),
            year_of_release: "2019".to_string(),
            plot: "A single shot, a whole life.".to_string(),
            poster: "data:image/png;base64,AAAA".to_string(),
            producer: "p1".to_string(),
            actors: vec!["a1".to_string(), "a2".to_string()],
        }
    }

    #[test]
    fn test_movie_wire_format() {
        let json = r#"{
            "_id": "m1",
            "name": "The Long Take",
            "yearOfRelease": "2019",
            "plot": "A single shot.",
            "poster": "data:image/png;base64,AAAA",
            "producer": "p1",
            "actors": ["a1", "a1", "a9"]
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id.as_deref(), Some("m1"));
        assert_eq!(movie.year_of_release, "2019");
        // duplicates and order survive deserialization untouched
        assert_eq!(movie.actors, vec!["a1", "a1", "a9"]);

        let back = serde_json::to_value(&movie).unwrap();
        assert_eq!(back["yearOfRelease"], "2019");
        assert!(back.get("year_of_release").is_none());
    }

    #[test]
    fn test_draft_serialises_wire_names() {
        let value = serde_json::to_value(full_draft()).unwrap();
        assert_eq!(value["yearOfRelease"], "2019");
        assert_eq!(value["actors"][0], "a1");
    }

    #[test]
    fn test_draft_validation_ok_when_complete() {
        assert!(full_draft().is_valid());
    }

    #[test]
    fn test_draft_requires_actors() {
        let mut draft = full_draft();
        draft.actors.clear();

        let err = draft.validate().unwrap_err();
        assert_eq!(err.missing_fields(), ["actors"]);
    }

    #[test]
    fn test_empty_draft_reports_all_fields() {
        let err = MovieDraft::default().validate().unwrap_err();
        assert_eq!(
            err.missing_fields(),
            [
                "name",
                "year of release",
                "plot",
                "poster",
                "producer",
                "actors"
            ]
        );
    }

    #[test]
    fn test_toggle_actor_preserves_selection_order() {
        let mut draft = MovieDraft::default();
        draft.toggle_actor("a2");
        draft.toggle_actor("a1");
        draft.toggle_actor("a3");
        assert_eq!(draft.actors, vec!["a2", "a1", "a3"]);

        // toggling an existing id removes it without reordering the rest
        draft.toggle_actor("a1");
        assert_eq!(draft.actors, vec!["a2", "a3"]);
    }

    #[test]
    fn test_from_movie_prefills_every_field() {
        let movie = Movie {
            id: Some("m1".to_string()),
            name: "The Long Take".to_string(),
            year_of_release: "2019".to_string(),
            plot: "A single shot.".to_string(),
            poster: "data:image/png;base64,AAAA".to_string(),
            producer: "p1".to_string(),
            actors: vec!["a1".to_string()],
        };

        let draft = MovieDraft::from_movie(&movie);
        assert_eq!(draft.name, movie.name);
        assert_eq!(draft.actors, movie.actors);
        assert!(draft.is_valid());
    }
}
