//! Error types for Data API operations.
//!
//! Every failure that crosses the listing/metadata service boundary is mapped
//! into [`ApiError`] here, so business logic never sees raw transport errors
//! or missing JSON keys.

use thiserror::Error;

/// Errors that can occur while calling the listing/metadata service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (DNS, connection refused, TLS, timeout).
    #[error("request to '{endpoint}' failed: {source}\n  Suggestion: Check your network connection")]
    Transport {
        /// The API endpoint that was called (e.g. `search`, `videos`).
        endpoint: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success HTTP status.
    #[error("'{endpoint}' returned HTTP {status}: {message}\n  Suggestion: {suggestion}")]
    Status {
        /// The API endpoint that was called.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Message reported by the service, or a generic description.
        message: String,
        /// How to fix the issue.
        suggestion: String,
    },

    /// The response body did not match the expected shape.
    #[error("unexpected response from '{endpoint}': {reason}")]
    Decode {
        /// The API endpoint that was called.
        endpoint: String,
        /// Why decoding failed.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client construction failed: {reason}")]
    Client {
        /// Why construction failed.
        reason: String,
    },
}

impl ApiError {
    /// Creates a `Transport` error.
    #[must_use]
    pub fn transport(endpoint: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            endpoint: endpoint.to_string(),
            source,
        }
    }

    /// Creates a `Status` error with a suggestion derived from the status code.
    #[must_use]
    pub fn status(endpoint: &str, status: u16, message: Option<String>) -> Self {
        let suggestion = match status {
            400 => "Check the channel or playlist URL",
            401 | 403 => "Check that the API key is valid and the quota is not exhausted",
            404 => "The requested resource does not exist",
            s if s >= 500 => "The service is unavailable; try again later",
            _ => "Check the request and try again",
        };
        Self::Status {
            endpoint: endpoint.to_string(),
            status,
            message: message.unwrap_or_else(|| format!("HTTP status {status}")),
            suggestion: suggestion.to_string(),
        }
    }

    /// Creates a `Decode` error.
    #[must_use]
    pub fn decode(endpoint: &str, reason: &str) -> Self {
        Self::Decode {
            endpoint: endpoint.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a `Client` error.
    #[must_use]
    pub fn client(reason: &str) -> Self {
        Self::Client {
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_forbidden_mentions_api_key() {
        let err = ApiError::status("search", 403, Some("quotaExceeded".to_string()));
        let msg = err.to_string();
        assert!(msg.contains("search"), "should contain endpoint");
        assert!(msg.contains("403"), "should contain status");
        assert!(msg.contains("quotaExceeded"), "should contain service message");
        assert!(msg.contains("API key"), "suggestion should mention API key");
    }

    #[test]
    fn test_api_error_status_without_message_uses_generic_text() {
        let err = ApiError::status("videos", 502, None);
        let msg = err.to_string();
        assert!(msg.contains("HTTP status 502"));
        assert!(msg.contains("try again later"));
    }

    #[test]
    fn test_api_error_decode_message() {
        let err = ApiError::decode("playlistItems", "missing field `items`");
        let msg = err.to_string();
        assert!(msg.contains("playlistItems"));
        assert!(msg.contains("missing field"));
    }
}
