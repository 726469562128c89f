//! Run-level error taxonomy.
//!
//! Errors follow the What/Suggestion pattern used across the crate. Whether an
//! error is fatal depends on where it surfaces: resolution and pagination
//! failures abort the run, per-item failures only skip one item.

use thiserror::Error;

use crate::api::ApiError;
use crate::transcript::TranscriptError;

/// Errors surfaced while resolving a target or listing its videos.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The input URL lacks the expected marker (handle or playlist).
    #[error("malformed input '{input}': {reason}\n  Suggestion: {suggestion}")]
    MalformedInput {
        /// The rejected input.
        input: String,
        /// Why the input was rejected.
        reason: String,
        /// How to fix the issue.
        suggestion: String,
    },

    /// A lookup returned no results.
    #[error("{what} not found for '{query}'\n  Suggestion: {suggestion}")]
    NotFound {
        /// What was being looked up (e.g. "channel").
        what: String,
        /// The query that yielded nothing.
        query: String,
        /// How to fix the issue.
        suggestion: String,
    },

    /// A transcript could not be fetched.
    ///
    /// Lets callers of a [`TranscriptSource`](crate::TranscriptSource) outside
    /// the batch pipeline propagate with `?`. The pipeline never raises it; it
    /// writes the sentinel instead.
    #[error(transparent)]
    TranscriptUnavailable(#[from] TranscriptError),

    /// Transport- or protocol-level failure from the listing/metadata service.
    #[error(transparent)]
    UpstreamService(#[from] ApiError),

    /// Reading an answer from the user failed.
    #[error("failed to read user input: {0}")]
    Prompt(#[from] std::io::Error),
}

impl ScrapeError {
    /// Creates a `MalformedInput` error for a URL without a handle marker.
    #[must_use]
    pub fn missing_handle(input: &str) -> Self {
        Self::MalformedInput {
            input: input.to_string(),
            reason: "no '@' handle marker found".to_string(),
            suggestion: "Use a channel URL like https://www.youtube.com/@handle".to_string(),
        }
    }

    /// Creates a `MalformedInput` error for a URL without a playlist marker.
    #[must_use]
    pub fn missing_playlist(input: &str) -> Self {
        Self::MalformedInput {
            input: input.to_string(),
            reason: "no 'list=' playlist marker found".to_string(),
            suggestion: "Use a playlist URL like https://www.youtube.com/playlist?list=<id>"
                .to_string(),
        }
    }

    /// Creates a `MalformedInput` error for a marker followed by nothing.
    #[must_use]
    pub fn empty_identifier(input: &str, marker: &str) -> Self {
        Self::MalformedInput {
            input: input.to_string(),
            reason: format!("nothing follows the '{marker}' marker"),
            suggestion: "Copy the full URL from the browser address bar".to_string(),
        }
    }

    /// Creates a `NotFound` error for a handle with no matching channel.
    #[must_use]
    pub fn channel_not_found(handle: &str) -> Self {
        Self::NotFound {
            what: "channel".to_string(),
            query: handle.to_string(),
            suggestion: "Check the handle spelling in the channel URL".to_string(),
        }
    }

    /// Returns true if this error is a `MalformedInput`.
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }

    /// Returns true if this error is a `NotFound`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
