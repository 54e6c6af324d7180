//! # CineDesk Core
//!
//! Domain types and validation for CineDesk.
//!
//! This crate provides the foundational building blocks used throughout
//! the CineDesk application, including:
//!
//! - **People**: `Person` records (actors and producers), the `Gender` enum,
//!   and the `PersonDraft` form representation
//! - **Movies**: `Movie` records and the `MovieDraft` form representation
//! - **Resolution**: `NameResolver` for mapping referenced ids to display names
//! - **Errors**: Unified error handling with `CatalogError` and `CatalogResult`
//!

pub mod error;
pub mod movie;
pub mod person;
pub mod resolve;
pub mod traits;

// Re-export commonly used items at crate root
pub use error::{CatalogError, CatalogResult};
pub use movie::{Movie, MovieDraft};
pub use person::{Gender, Person, PersonDraft, PersonKind};
pub use resolve::{NameResolver, UNKNOWN_ACTOR, UNKNOWN_PRODUCER};
pub use traits::Validatable;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
