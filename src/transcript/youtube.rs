//! Transcript source backed by the `yt-transcript-rs` client.

use async_trait::async_trait;
use tracing::debug;
use yt_transcript_rs::api::YouTubeTranscriptApi;
use yt_transcript_rs::errors::{CouldNotRetrieveTranscript, CouldNotRetrieveTranscriptReason};

use super::{TranscriptError, TranscriptSource};

/// Language requested when none is configured.
const FALLBACK_LANGUAGE: &str = "en";

/// Fetches transcripts through [`YouTubeTranscriptApi`], preferring the
/// configured languages in order.
#[derive(Clone)]
pub struct YouTubeTranscripts {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
}

impl YouTubeTranscripts {
    /// Creates a source preferring `languages` in order.
    ///
    /// # Errors
    ///
    /// Returns [`TranscriptError::Upstream`] if the underlying client cannot
    /// be constructed.
    pub fn new(languages: Vec<String>) -> Result<Self, TranscriptError> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| TranscriptError::upstream("-", &e.to_string()))?;
        Ok(Self { api, languages })
    }

    fn language_codes(&self) -> Vec<&str> {
        if self.languages.is_empty() {
            return vec![FALLBACK_LANGUAGE];
        }
        self.languages.iter().map(String::as_str).collect()
    }
}

impl std::fmt::Debug for YouTubeTranscripts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeTranscripts")
            .field("languages", &self.languages)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TranscriptSource for YouTubeTranscripts {
    #[tracing::instrument(skip(self))]
    async fn fetch_transcript(&self, video_id: &str) -> Result<String, TranscriptError> {
        let languages = self.language_codes();
        let fetched = self
            .api
            .fetch_transcript(video_id, &languages, false)
            .await
            .map_err(|e| classify_failure(video_id, &e))?;
        debug!(snippets = fetched.parts().len(), "Fetched transcript");

        let text = join_snippets(fetched.parts().iter().map(|part| part.text.as_str()));
        if text.is_empty() {
            return Err(TranscriptError::not_found(video_id, "empty transcript"));
        }
        Ok(text)
    }
}

/// Maps a client failure onto [`TranscriptError`]. Only disabled captions and
/// a missing language track count as expected absence.
fn classify_failure(video_id: &str, error: &CouldNotRetrieveTranscript) -> TranscriptError {
    match failure_kind(error.reason.as_ref()) {
        FailureKind::Disabled => TranscriptError::disabled(video_id),
        FailureKind::Missing => TranscriptError::not_found(video_id, &error.to_string()),
        FailureKind::Service => TranscriptError::upstream(video_id, &error.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureKind {
    Disabled,
    Missing,
    Service,
}

fn failure_kind(reason: Option<&CouldNotRetrieveTranscriptReason>) -> FailureKind {
    match reason {
        Some(CouldNotRetrieveTranscriptReason::TranscriptsDisabled { .. }) => FailureKind::Disabled,
        Some(CouldNotRetrieveTranscriptReason::NoTranscriptFound { .. }) => FailureKind::Missing,
        _ => FailureKind::Service,
    }
}

/// Joins snippet texts with single spaces, dropping blank snippets and
/// collapsing line breaks inside a snippet.
fn join_snippets<'a>(snippets: impl IntoIterator<Item = &'a str>) -> String {
    snippets
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
