//! Channel and playlist archiver.
//!
//! Turns a `youtube.com` channel or playlist URL into one plain-text record
//! per video (title, publish time, URL, description, transcript).
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`target`] - URL parsing and channel handle resolution
//! - [`listing`] - Cursor pagination over channel and playlist listings
//! - [`api`] - Data API client behind the [`VideoApi`] trait
//! - [`transcript`] - Best-effort transcript retrieval
//! - [`pipeline`] - Per-video fetch, transform and persist
//! - [`record`] / [`storage`] - Record layout, file naming and atomic writes
//! - [`credentials`] / [`prompt`] - API key provisioning and user interaction
//! - [`app`] - One complete run wiring the above together

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod app;
pub mod credentials;
pub mod error;
pub mod http_client;
pub mod listing;
pub mod pipeline;
pub mod prompt;
pub mod record;
pub mod storage;
pub mod target;
pub mod transcript;

#[cfg(test)]
pub(crate) mod test_support;
mod user_agent;

// Re-export commonly used types
pub use api::{ApiError, DEFAULT_API_BASE_URL, VideoApi, YouTubeClient};
pub use app::{RunContext, RunOutcome, RunRequest, run};
pub use credentials::{CredentialError, CredentialProvider, FileCredentialProvider};
pub use error::ScrapeError;
pub use http_client::HttpTimeouts;
pub use pipeline::{BatchStats, ItemOutcome, SkipReason};
pub use prompt::{Prompter, ScriptedPrompter, StdioPrompter};
pub use record::VideoRecord;
pub use storage::{FolderSink, RecordSink, StorageError};
pub use target::{Target, TargetRef};
pub use transcript::{TRANSCRIPT_UNAVAILABLE, TranscriptError, TranscriptSource, YouTubeTranscripts};
