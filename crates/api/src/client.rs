//! Type-safe API client for communicating with the backend REST API
//!
//! The [`ApiClient`] wraps a `reqwest::Client` and provides per-entity CRUD
//! methods. Actor and producer routes share one record shape, so the person
//! methods take a [`PersonKind`] instead of being duplicated per collection.
//!
//! All methods return `Result<T, ClientError>` where `T` is the expected
//! response type.
//!
//! # Example
//!
//! ```rust,ignore
//! let client = ApiClient::from_env();
//! let actors = client.list_people(PersonKind::Actor).await?;
//! let movie = client.get_movie("some-id").await?;
//! ```

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use cinedesk_core::{Movie, MovieDraft, Person, PersonDraft, PersonKind};

use crate::error::ClientError;

/// Base URL used when no override is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the backend base URL
pub const BASE_URL_ENV: &str = "CINEDESK_API_URL";

/// Collection route for movies
const MOVIES_PATH: &str = "/api/movies";

// ============================================================================
// API Client
// ============================================================================

/// HTTP client for the CineDesk backend REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying reqwest HTTP client
    client: Client,
    /// Base URL of the backend API (e.g. `http://localhost:8000`)
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    ///
    /// Override the base URL with [`with_base_url`](ApiClient::with_base_url)
    /// or construct via [`from_env`](ApiClient::from_env).
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("failed to create HTTP client"),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a client with a custom base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = trim_trailing_slash(base_url.into());
        self
    }

    /// Create a client honouring the `CINEDESK_API_URL` environment variable
    pub fn from_env() -> Self {
        Self::new().with_base_url(base_url_from(std::env::var(BASE_URL_ENV).ok()))
    }

    /// The configured backend base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an API endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // Generic request helpers
    // ========================================================================

    /// Send a GET request and deserialise the response
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Send a POST request with a JSON body and deserialise the response
    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Send a PUT request with a JSON body, discarding any response body
    async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ClientError> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::check_status(response).await
    }

    /// Send a DELETE request. Returns `Ok(())` on success
    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::check_status(response).await
    }

    /// Handle a response: check for errors and deserialise on success
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ClientError::Parse(e.to_string()))
        } else {
            Err(Self::error_from(status.as_u16(), response).await)
        }
    }

    /// Check a response status, ignoring the body on success
    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(Self::error_from(status.as_u16(), response).await)
        }
    }

    /// Build an `Api` error carrying the response body text
    async fn error_from(status: u16, response: reqwest::Response) -> ClientError {
        let message = response.text().await.unwrap_or_default();
        tracing::warn!(status, "backend request failed");
        ClientError::Api { status, message }
    }

    // ========================================================================
    // Person endpoints (actors and producers)
    // ========================================================================

    /// List all people of one kind
    ///
    /// GET /api/actors | /api/producers
    pub async fn list_people(&self, kind: PersonKind) -> Result<Vec<Person>, ClientError> {
        self.get(kind.api_path()).await
    }

    /// Get a single person by ID
    ///
    /// GET /api/{kind}/{id}
    pub async fn get_person(&self, kind: PersonKind, id: &str) -> Result<Person, ClientError> {
        self.get(&format!("{}/{}", kind.api_path(), id)).await
    }

    /// Create a new person; the backend assigns the ID
    ///
    /// POST /api/{kind}
    pub async fn create_person(
        &self,
        kind: PersonKind,
        draft: &PersonDraft,
    ) -> Result<Person, ClientError> {
        self.post(kind.api_path(), draft).await
    }

    /// Update an existing person by ID
    ///
    /// PUT /api/{kind}/{id}
    pub async fn update_person(
        &self,
        kind: PersonKind,
        id: &str,
        draft: &PersonDraft,
    ) -> Result<(), ClientError> {
        self.put_unit(&format!("{}/{}", kind.api_path(), id), draft)
            .await
    }

    /// Delete a person by ID
    ///
    /// DELETE /api/{kind}/{id}
    pub async fn delete_person(&self, kind: PersonKind, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("{}/{}", kind.api_path(), id)).await
    }

    // ========================================================================
    // Movie endpoints
    // ========================================================================

    /// List all movies
    ///
    /// GET /api/movies
    pub async fn list_movies(&self) -> Result<Vec<Movie>, ClientError> {
        self.get(MOVIES_PATH).await
    }

    /// Get a single movie by ID
    ///
    /// GET /api/movies/{id}
    pub async fn get_movie(&self, id: &str) -> Result<Movie, ClientError> {
        self.get(&format!("{}/{}", MOVIES_PATH, id)).await
    }

    /// Create a new movie; the backend assigns the ID
    ///
    /// POST /api/movies
    pub async fn create_movie(&self, draft: &MovieDraft) -> Result<Movie, ClientError> {
        self.post(MOVIES_PATH, draft).await
    }

    /// Update an existing movie by ID
    ///
    /// PUT /api/movies/{id}
    pub async fn update_movie(&self, id: &str, draft: &MovieDraft) -> Result<(), ClientError> {
        self.put_unit(&format!("{}/{}", MOVIES_PATH, id), draft)
            .await
    }

    /// Delete a movie by ID
    ///
    /// DELETE /api/movies/{id}
    pub async fn delete_movie(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("{}/{}", MOVIES_PATH, id)).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Resolve the base URL from an optional environment value
fn base_url_from(env_value: Option<String>) -> String {
    match env_value {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_base_url() {
        let client = ApiClient::new();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_with_base_url_overrides_default() {
        let client = ApiClient::new().with_base_url("http://catalog.example:9000");
        assert_eq!(client.base_url(), "http://catalog.example:9000");
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let client = ApiClient::new().with_base_url("http://catalog.example:9000//");
        assert_eq!(
            client.url("/api/movies"),
            "http://catalog.example:9000/api/movies"
        );
    }

    #[test]
    fn test_base_url_from_env_value() {
        assert_eq!(
            base_url_from(Some("http://other:1234".to_string())),
            "http://other:1234"
        );
        assert_eq!(base_url_from(Some("  ".to_string())), DEFAULT_BASE_URL);
        assert_eq!(base_url_from(None), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_person_routes() {
        let client = ApiClient::new();
        assert_eq!(
            client.url(PersonKind::Actor.api_path()),
            "http://localhost:8000/api/actors"
        );
        assert_eq!(
            client.url(&format!("{}/{}", PersonKind::Producer.api_path(), "p1")),
            "http://localhost:8000/api/producers/p1"
        );
    }

    #[test]
    fn test_movie_routes() {
        let client = ApiClient::new();
        assert_eq!(client.url(MOVIES_PATH), "http://localhost:8000/api/movies");
        assert_eq!(
            client.url(&format!("{}/{}", MOVIES_PATH, "m1")),
            "http://localhost:8000/api/movies/m1"
        );
    }
}
