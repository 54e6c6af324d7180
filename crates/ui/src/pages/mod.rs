//! Page Components for CineDesk
//!
//! This module contains the page/view components for the application.
//!
//! ## Available Pages
//!
//! - **MoviesPage**: Movie catalog grid with add/edit/delete
//! - **ActorsPage**: Actor management table
//! - **ProducersPage**: Producer management table
//!

pub mod movies;
pub mod people;

// Re-export page components for convenience
pub use movies::MoviesPage;
pub use people::{ActorsPage, PeoplePage, ProducersPage};
