//! The persisted per-video record and its file naming.

use chrono::DateTime;

use crate::api::{VideoMetadata, watch_url};

/// One video's archived text record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    /// Channel title of the uploader.
    pub author: String,
    /// Video title.
    pub title: String,
    /// ISO-8601 publish timestamp, verbatim from the service.
    pub published_at: String,
    /// Free-text description.
    pub description: String,
    /// Canonical watch URL.
    pub url: String,
    /// Joined transcript text or the unavailable sentinel.
    pub transcript: String,
}

/// The publish timestamp could not be parsed into a date.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid publish timestamp '{timestamp}': {reason}")]
pub struct InvalidTimestamp {
    /// The rejected timestamp.
    pub timestamp: String,
    /// Parser message.
    pub reason: String,
}

impl VideoRecord {
    /// Builds a record from fetched metadata and transcript text.
    #[must_use]
    pub fn new(video_id: &str, metadata: VideoMetadata, transcript: String) -> Self {
        Self {
            author: metadata.author,
            title: metadata.title,
            published_at: metadata.published_at,
            description: metadata.description,
            url: watch_url(video_id),
            transcript,
        }
    }

    /// Derives `<YYYY-MM-DD> <sanitized title>.txt`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTimestamp`] if `published_at` is not RFC 3339.
    pub fn file_name(&self) -> Result<String, InvalidTimestamp> {
        let date = publish_date(&self.published_at)?;
        Ok(format!("{date} {}.txt", sanitize_title(&self.title)))
    }

    /// Renders the fixed five-field text layout.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "Title: {}\nPublished At: {}\nURL: {}\nDescription: {}\nTranscript: {}\n",
            self.title, self.published_at, self.url, self.description, self.transcript
        )
    }
}

/// Formats the date part of an RFC 3339 timestamp as `YYYY-MM-DD`.
///
/// The date is taken as written (no timezone conversion).
///
/// # Errors
///
/// Returns [`InvalidTimestamp`] if the timestamp does not parse.
pub fn publish_date(timestamp: &str) -> Result<String, InvalidTimestamp> {
    DateTime::parse_from_rfc3339(timestamp.trim())
        .map(|parsed| parsed.format("%Y-%m-%d").to_string())
        .map_err(|e| InvalidTimestamp {
            timestamp: timestamp.to_string(),
            reason: e.to_string(),
        })
}

/// Keeps letters, digits and spaces; trims trailing whitespace.
///
/// Runs of spaces left behind by dropped characters are not collapsed.
#[must_use]
pub fn sanitize_title(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect();
    kept.trim_end().to_string()
}
