//! People: actors and producers
//!
//! Actors and producers share one record shape, so a single `Person` type
//! serves both collections. `PersonKind` carries the distinction where it
//! matters: labels and API routes.
//!
//! The wire format follows the backend contract: the identifier travels as
//! `_id` and the date of birth as `dob`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, CatalogResult};
use crate::traits::Validatable;

// ============================================================================
// Gender
// ============================================================================

/// Gender of a person as the backend stores it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All supported values, in the order forms present them
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// The wire/display representation of this value
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(CatalogError::InvalidGender(other.to_string())),
        }
    }
}

// ============================================================================
// Person Kind
// ============================================================================

/// Which person-shaped collection an operation targets
///
/// The actor and producer screens are the same screen instantiated twice;
/// this enum is the parameter that instantiates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonKind {
    Actor,
    Producer,
}

impl PersonKind {
    /// Singular display name ("Actor" / "Producer")
    pub fn display_name(&self) -> &'static str {
        match self {
            PersonKind::Actor => "Actor",
            PersonKind::Producer => "Producer",
        }
    }

    /// Plural display name ("Actors" / "Producers")
    pub fn plural(&self) -> &'static str {
        match self {
            PersonKind::Actor => "Actors",
            PersonKind::Producer => "Producers",
        }
    }

    /// Collection route on the backend API
    pub fn api_path(&self) -> &'static str {
        match self {
            PersonKind::Actor => "/api/actors",
            PersonKind::Producer => "/api/producers",
        }
    }
}

// ============================================================================
// Person
// ============================================================================

/// A persisted actor or producer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Backend-assigned identifier; absent until the record is persisted
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    /// ISO date string (e.g. "1990-01-01")
    #[serde(rename = "dob")]
    pub date_of_birth: String,

    pub gender: Gender,

    pub bio: String,
}

// ============================================================================
// Person Draft
// ============================================================================

/// In-progress form state for a person
///
/// Every field is a raw string so the form can hold partial input; `gender`
/// stays empty until the user picks a value from the select. The draft
/// serialises with the same wire names as [`Person`], so a validated draft is
/// POSTed or PUT directly as the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonDraft {
    pub name: String,

    #[serde(rename = "dob")]
    pub date_of_birth: String,

    pub gender: String,

    pub bio: String,
}

impl PersonDraft {
    /// Pre-fill a draft from an existing record (edit mode)
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            date_of_birth: person.date_of_birth.clone(),
            gender: person.gender.to_string(),
            bio: person.bio.clone(),
        }
    }

    /// Restore the draft to the all-empty sentinel value
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Validatable for PersonDraft {
    fn validate(&self) -> CatalogResult<()> {
        let mut missing = Vec::new();

        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.date_of_birth.trim().is_empty() {
            missing.push("date of birth");
        }
        if self.gender.trim().is_empty() {
            missing.push("gender");
        }
        if self.bio.trim().is_empty() {
            missing.push("bio");
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

    fn full_draft() -> PersonDraft {
        PersonDraft {
            name: "Jane".to_string(),
            date_of_birth: "1990-01-01".to_string(),
            gender: "Female".to_string(),
            bio: "An accomplished performer.".to_string(),
        }
    }

    #[test]
    fn test_gender_roundtrip() {
        for gender in Gender::ALL {
            let parsed: Gender = gender.as_str().parse().unwrap();
            assert_eq!(parsed, gender);
        }
    }

    #[test]
    fn test_gender_rejects_unknown() {
        let err = "Unknown".parse::<Gender>().unwrap_err();
        assert_eq!(err, CatalogError::InvalidGender("Unknown".to_string()));
        assert!("male".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_kind_routes_and_labels() {
        assert_eq!(PersonKind::Actor.api_path(), "/api/actors");
        assert_eq!(PersonKind::Producer.api_path(), "/api/producers");
        assert_eq!(PersonKind::Actor.display_name(), "Actor");
        assert_eq!(PersonKind::Producer.plural(), "Producers");
    }

    #[test]
    fn test_person_wire_format() {
        let json = r#"{"_id":"a1","name":"Bob","dob":"1980-05-12","gender":"Male","bio":"Veteran actor."}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.id.as_deref(), Some("a1"));
        assert_eq!(person.date_of_birth, "1980-05-12");
        assert_eq!(person.gender, Gender::Male);

        let back = serde_json::to_value(&person).unwrap();
        assert_eq!(back["_id"], "a1");
        assert_eq!(back["dob"], "1980-05-12");
    }

    #[test]
    fn test_person_without_id_omits_field() {
        let person = Person {
            id: None,
            name: "Bob".to_string(),
            date_of_birth: "1980-05-12".to_string(),
            gender: Gender::Male,
            bio: "bio".to_string(),
        };
        let value = serde_json::to_value(&person).unwrap();
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn test_draft_serialises_wire_names() {
        let value = serde_json::to_value(full_draft()).unwrap();
        assert_eq!(value["name"], "Jane");
        assert_eq!(value["dob"], "1990-01-01");
        assert_eq!(value["gender"], "Female");
        assert!(value.get("date_of_birth").is_none());
    }

    #[test]
    fn test_draft_validation_ok_when_complete() {
        assert!(full_draft().is_valid());
    }

    #[test]
    fn test_draft_validation_reports_each_missing_field() {
        let mut draft = full_draft();
        draft.name.clear();
        draft.bio = "   ".to_string();

        let err = draft.validate().unwrap_err();
        assert_eq!(err.missing_fields(), ["name", "bio"]);
    }

    #[test]
    fn test_empty_draft_reports_all_fields() {
        let err = PersonDraft::default().validate().unwrap_err();
        assert_eq!(
            err.missing_fields(),
            ["name", "date of birth", "gender", "bio"]
        );
    }

    #[test]
    fn test_from_person_prefills_every_field() {
        let person = Person {
            id: Some("p1".to_string()),
            name: "Alice".to_string(),
            date_of_birth: "1975-03-09".to_string(),
            gender: Gender::Female,
            bio: "Producer of note.".to_string(),
        };

        let draft = PersonDraft::from_person(&person);
        assert_eq!(draft.name, "Alice");
        assert_eq!(draft.date_of_birth, "1975-03-09");
        assert_eq!(draft.gender, "Female");
        assert_eq!(draft.bio, "Producer of note.");
        assert!(draft.is_valid());
    }

    #[test]
    fn test_reset_restores_sentinel() {
        let mut draft = full_draft();
        draft.reset();
        assert_eq!(draft, PersonDraft::default());
    }
}
