//! Relation resolution for movie display
//!
//! A movie stores its producer and cast as Person ids. This module maps those
//! ids to display names against the producer and actor collections the caller
//! has already fetched. Pure lookup: no caching, re-resolved on every render.
//!
//! Ids with no match resolve to sentinel names rather than errors; the two
//! collections are fetched independently and are not guaranteed to be fresh
//! relative to the movie being displayed.

use crate::person::Person;

/// Display name substituted for a producer id with no matching record
pub const UNKNOWN_PRODUCER: &str = "Unknown Producer";

/// Display name substituted for an actor id with no matching record
pub const UNKNOWN_ACTOR: &str = "Unknown Actor";

/// Maps producer and actor ids to display names
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    producers: &'a [Person],
    actors: &'a [Person],
}

impl<'a> NameResolver<'a> {
    /// Create a resolver over the currently loaded collections
    pub fn new(producers: &'a [Person], actors: &'a [Person]) -> Self {
        Self { producers, actors }
    }

    /// Resolve a producer id to a display name
    pub fn producer_name(&self, id: &str) -> String {
        lookup(self.producers, id).unwrap_or_else(|| UNKNOWN_PRODUCER.to_string())
    }

    /// Resolve a single actor id to a display name
    pub fn actor_name(&self, id: &str) -> String {
        lookup(self.actors, id).unwrap_or_else(|| UNKNOWN_ACTOR.to_string())
    }

    /// Resolve a cast id sequence to display names
    ///
    /// Order and duplicates are preserved; each unresolvable id yields the
    /// sentinel independently.
    pub fn cast_names(&self, ids: &[String]) -> Vec<String> {
        ids.iter().map(|id| self.actor_name(id)).collect()
    }
}

fn lookup(people: &[Person], id: &str) -> Option<String> {
    people
        .iter()
        .find(|p| p.id.as_deref() == Some(id))
        .map(|p| p.name.clone())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Gender;
    use pretty_assertions::assert_eq;

    fn person(id: &str, name: &str) -> Person {
        Person {
            id: Some(id.to_string()),
            name: name.to_string(),
            date_of_birth: "1990-01-01".to_string(),
            gender: Gender::Female,
            bio: "bio".to_string(),
        }
    }

    #[test]
    fn test_known_producer_resolves_to_name() {
        let producers = vec![person("p1", "Alice")];
        let resolver = NameResolver::new(&producers, &[]);
        assert_eq!(resolver.producer_name("p1"), "Alice");
    }

    #[test]
    fn test_unknown_producer_resolves_to_sentinel() {
        let producers = vec![person("p1", "Alice")];
        let resolver = NameResolver::new(&producers, &[]);
        assert_eq!(resolver.producer_name("p9"), UNKNOWN_PRODUCER);
    }

    #[test]
    fn test_cast_preserves_order_and_duplicates() {
        let actors = vec![person("a1", "Bob")];
        let resolver = NameResolver::new(&[], &actors);

        let ids = vec!["a1".to_string(), "a1".to_string(), "a9".to_string()];
        assert_eq!(
            resolver.cast_names(&ids),
            vec!["Bob", "Bob", UNKNOWN_ACTOR]
        );
    }

    #[test]
    fn test_empty_collections_resolve_to_sentinels() {
        let resolver = NameResolver::new(&[], &[]);
        assert_eq!(resolver.producer_name("p1"), UNKNOWN_PRODUCER);
        assert_eq!(resolver.actor_name("a1"), UNKNOWN_ACTOR);
        assert!(resolver.cast_names(&[]).is_empty());
    }

    #[test]
    fn test_unpersisted_person_never_matches() {
        // a record with no id cannot be referenced by one
        let mut unsaved = person("", "Ghost");
        unsaved.id = None;
        let actors = vec![unsaved];
        let resolver = NameResolver::new(&[], &actors);
        assert_eq!(resolver.actor_name(""), UNKNOWN_ACTOR);
    }
}
