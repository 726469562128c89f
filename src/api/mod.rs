//! Listing and metadata service (Data API v3).
//!
//! # Architecture
//!
//! - [`VideoApi`] - Async trait the resolver, lister and pipeline call through
//! - [`YouTubeClient`] - HTTP implementation against the Data API
//! - [`ApiError`] - Typed failure for every transport/status/shape problem
//!
//! Responses are decoded into typed structs at the boundary; callers only ever
//! see [`IdPage`], [`ChannelMatch`] and [`VideoMetadata`].

mod client;
mod error;
mod wire;

pub use client::{DEFAULT_API_BASE_URL, YouTubeClient};
pub use error::ApiError;

use async_trait::async_trait;

/// Page size requested from every paginated endpoint (the API maximum).
pub const PAGE_SIZE: u32 = 50;

/// One page of video identifiers plus the continuation cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdPage {
    /// Identifiers in the order the service returned them.
    pub ids: Vec<String>,
    /// Cursor for the next page; `None` when the listing is exhausted.
    pub next_cursor: Option<String>,
}

/// A channel returned by a handle search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMatch {
    /// Stable channel identifier.
    pub channel_id: String,
    /// Display title, when the service reported a non-blank one.
    pub title: Option<String>,
}

/// Per-video metadata as reported by the `videos` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    /// Channel title of the uploader.
    pub author: String,
    /// Video title.
    pub title: String,
    /// ISO-8601 publish timestamp, kept verbatim.
    pub published_at: String,
    /// Free-text description (may be empty or multi-line).
    pub description: String,
}

/// Operations the scraper needs from the listing/metadata service.
///
/// This trait uses `async_trait` so implementations can be swapped for
/// in-memory fakes behind `&dyn VideoApi`.
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// Searches channels matching a handle, in the service's relevance order.
    async fn search_channels(&self, handle: &str) -> Result<Vec<ChannelMatch>, ApiError>;

    /// Fetches one page of a channel's search results, keeping only videos.
    async fn channel_video_page(
        &self,
        channel_id: &str,
        cursor: Option<&str>,
    ) -> Result<IdPage, ApiError>;

    /// Fetches one page of a playlist's items.
    async fn playlist_item_page(
        &self,
        playlist_id: &str,
        cursor: Option<&str>,
    ) -> Result<IdPage, ApiError>;

    /// Fetches metadata for one video; `Ok(None)` when the service has no match.
    async fn video_details(&self, video_id: &str) -> Result<Option<VideoMetadata>, ApiError>;

    /// Returns the channel's reported video count, if known.
    async fn channel_video_count(&self, channel_id: &str) -> Result<Option<u64>, ApiError>;

    /// Returns the playlist's title, if the playlist exists.
    async fn playlist_title(&self, playlist_id: &str) -> Result<Option<String>, ApiError>;
}

/// Canonical watch URL for a video id.
#[must_use]
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url_pattern() {
        assert_eq!(
            watch_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }
}
