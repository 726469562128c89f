//! Transcript retrieval.
//!
//! Transcripts are best-effort: the pipeline turns every [`TranscriptError`]
//! into the [`TRANSCRIPT_UNAVAILABLE`] sentinel instead of skipping the video.

mod youtube;

pub use youtube::YouTubeTranscripts;

use async_trait::async_trait;
use thiserror::Error;

/// Text written in place of a transcript that could not be fetched.
pub const TRANSCRIPT_UNAVAILABLE: &str = "Transcript not available.";

/// Why a transcript could not be fetched.
#[derive(Debug, Clone, Error)]
pub enum TranscriptError {
    /// Captions are turned off for the video.
    #[error("transcripts are disabled for video {video_id}")]
    Disabled {
        /// The video whose captions are disabled.
        video_id: String,
    },

    /// Captions are enabled but no usable track or text exists.
    #[error("no transcript found for video {video_id}: {reason}")]
    NotFound {
        /// The video that has no transcript.
        video_id: String,
        /// What was missing.
        reason: String,
    },

    /// The transcript service failed or answered with something unreadable.
    #[error("transcript service error for video {video_id}: {reason}")]
    Upstream {
        /// The video being fetched.
        video_id: String,
        /// What went wrong.
        reason: String,
    },
}

impl TranscriptError {
    /// Creates a `Disabled` error.
    #[must_use]
    pub fn disabled(video_id: &str) -> Self {
        Self::Disabled {
            video_id: video_id.to_string(),
        }
    }

    /// Creates a `NotFound` error.
    #[must_use]
    pub fn not_found(video_id: &str, reason: &str) -> Self {
        Self::NotFound {
            video_id: video_id.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an `Upstream` error.
    #[must_use]
    pub fn upstream(video_id: &str, reason: &str) -> Self {
        Self::Upstream {
            video_id: video_id.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Returns true for the expected "no transcript" conditions
    /// (disabled or not found), false for service failures.
    #[must_use]
    pub fn is_expected_absence(&self) -> bool {
        matches!(self, Self::Disabled { .. } | Self::NotFound { .. })
    }
}

/// A source of transcript text for a video.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetches the full transcript for a video as one space-joined string.
    async fn fetch_transcript(&self, video_id: &str) -> Result<String, TranscriptError>;
}
