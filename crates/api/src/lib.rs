//! # CineDesk API
//!
//! HTTP repository client for the CineDesk backend REST API.
//!
//! The backend is an external collaborator with a fixed contract; this crate
//! wraps it behind [`ApiClient`] with one method per operation. Each call
//! issues exactly one request: no retries, no caching, no deduplication of
//! concurrent calls. Any non-2xx status or transport failure surfaces as a
//! [`ClientError`].

pub mod client;
pub mod error;

// Re-export commonly used items at crate root
pub use client::{ApiClient, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::ClientError;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
