//! Per-video fetch, transform and persist.
//!
//! [`process_item`] never fails: every problem with one video is folded into
//! [`ItemOutcome::Skipped`] so [`process_batch`] can log it and move on.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::api::{ApiError, VideoApi};
use crate::record::{InvalidTimestamp, VideoRecord};
use crate::storage::{RecordSink, StorageError};
use crate::transcript::{TRANSCRIPT_UNAVAILABLE, TranscriptSource};

/// Why a video produced no record.
#[derive(Debug)]
pub enum SkipReason {
    /// The metadata service had no entry for the id.
    NotFound,
    /// The metadata request failed.
    Upstream(ApiError),
    /// The metadata could not be turned into a file name.
    InvalidMetadata(InvalidTimestamp),
    /// Writing the record failed.
    Storage(StorageError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "no metadata returned"),
            Self::Upstream(e) => write!(f, "metadata request failed: {e}"),
            Self::InvalidMetadata(e) => write!(f, "{e}"),
            Self::Storage(e) => write!(f, "{e}"),
        }
    }
}

impl From<StorageError> for SkipReason {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::InvalidRecord(e) => Self::InvalidMetadata(e),
            io @ StorageError::Io { .. } => Self::Storage(io),
        }
    }
}

/// Result of processing one video.
#[derive(Debug)]
pub enum ItemOutcome {
    /// A record was written.
    Saved {
        /// The processed video.
        video_id: String,
        /// Where the record landed.
        path: PathBuf,
    },
    /// No record was written.
    Skipped {
        /// The processed video.
        video_id: String,
        /// Why it was skipped.
        reason: SkipReason,
    },
}

impl ItemOutcome {
    /// Returns true if a record was written.
    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

/// Totals for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Records written.
    pub saved: usize,
    /// Videos skipped.
    pub skipped: usize,
    /// Videos attempted (after de-duplication).
    pub total: usize,
}

/// Removes repeated ids, keeping the first occurrence of each.
#[must_use]
pub fn dedupe_ids(ids: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}

/// Fetches metadata and transcript for one video and persists its record.
///
/// Transcript failures never skip the video; the record carries
/// [`TRANSCRIPT_UNAVAILABLE`] instead.
#[tracing::instrument(skip(api, transcripts, sink))]
pub async fn process_item(
    api: &dyn VideoApi,
    transcripts: &dyn TranscriptSource,
    sink: &dyn RecordSink,
    video_id: &str,
) -> ItemOutcome {
    let skipped = |reason| ItemOutcome::Skipped {
        video_id: video_id.to_string(),
        reason,
    };

    let metadata = match api.video_details(video_id).await {
        Ok(Some(metadata)) => metadata,
        Ok(None) => return skipped(SkipReason::NotFound),
        Err(e) => return skipped(SkipReason::Upstream(e)),
    };

    let transcript = match transcripts.fetch_transcript(video_id).await {
        Ok(text) => text,
        Err(e) if e.is_expected_absence() => {
            warn!(video_id, error = %e, "Transcript not available");
            TRANSCRIPT_UNAVAILABLE.to_string()
        }
        Err(e) => {
            error!(video_id, error = %e, "Transcript fetch failed");
            TRANSCRIPT_UNAVAILABLE.to_string()
        }
    };

    let record = VideoRecord::new(video_id, metadata, transcript);
    match sink.persist(&record) {
        Ok(path) => ItemOutcome::Saved {
            video_id: video_id.to_string(),
            path,
        },
        Err(e) => skipped(SkipReason::from(e)),
    }
}

/// Processes every id in order, one at a time, and tallies the outcomes.
///
/// Duplicate ids are processed once.
pub async fn process_batch(
    api: &dyn VideoApi,
    transcripts: &dyn TranscriptSource,
    sink: &dyn RecordSink,
    ids: Vec<String>,
) -> BatchStats {
    let ids = dedupe_ids(ids);
    let total = ids.len();
    let mut stats = BatchStats {
        total,
        ..BatchStats::default()
    };

    for (index, video_id) in ids.iter().enumerate() {
        info!(video_id = %video_id, "Processing video {}/{}", index + 1, total);
        match process_item(api, transcripts, sink, video_id).await {
            ItemOutcome::Saved { path, .. } => {
                info!(path = %path.display(), "Saved record");
                stats.saved += 1;
            }
            ItemOutcome::Skipped { video_id, reason } => {
                if matches!(reason, SkipReason::NotFound) {
                    warn!(video_id = %video_id, "No metadata found, skipping");
                } else {
                    error!(video_id = %video_id, reason = %reason, "Skipping video");
                }
                stats.skipped += 1;
            }
        }
    }

    info!(
        saved = stats.saved,
        skipped = stats.skipped,
        total = stats.total,
        "Batch complete"
    );
    stats
}
