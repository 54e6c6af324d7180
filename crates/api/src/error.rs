//! Error type for backend API requests
//!
//! Every failure mode of a request collapses into [`ClientError`]. Callers
//! treat all variants uniformly — surface a notice, log, let the user retry —
//! the variants exist so diagnostics keep the underlying detail.

use thiserror::Error;

/// Errors that can occur when making API requests
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived (network error, timeout)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx response
    #[error("server returned status {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body text, kept for diagnostics
        message: String,
    },

    /// A 2xx response body could not be deserialised
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl ClientError {
    /// The HTTP status code, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the user-facing error message
    ///
    /// Deliberately generic: the UI shows the same kind of transient notice
    /// for every remote failure.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Request(e) => {
                if e.is_timeout() {
                    "Request timed out. Please try again.".to_string()
                } else if e.is_connect() {
                    "Unable to connect to the server. Please check your connection.".to_string()
                } else {
                    "An unexpected network error occurred.".to_string()
                }
            }
            ClientError::Api { .. } => "The server rejected the request. Please try again.".to_string(),
            ClientError::Parse(_) => "Received an unexpected response from the server.".to_string(),
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

    #[test]
    fn test_api_error_display() {
        let err = ClientError::Api {
            status: 500,
            message: "internal error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "server returned status 500: internal error"
        );
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_parse_error_display() {
        let err = ClientError::Parse("missing field `name`".to_string());
        assert_eq!(
            err.to_string(),
            "failed to parse response: missing field `name`"
        );
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_user_messages_are_generic() {
        let api = ClientError::Api {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(
            api.user_message(),
            "The server rejected the request. Please try again."
        );

        let parse = ClientError::Parse("bad json".to_string());
        assert_eq!(
            parse.user_message(),
            "Received an unexpected response from the server."
        );
    }
}
