//! Wire types for Data API v3 responses.
//!
//! Only the fields the scraper reads are modelled. Everything else in the
//! payload is ignored by serde.

use serde::Deserialize;

use super::{ChannelMatch, IdPage, VideoMetadata};

/// Kind tag the search endpoint attaches to video results.
pub(crate) const VIDEO_KIND: &str = "youtube#video";

/// Generic `*.list` envelope shared by every endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl<T> ListResponse<T> {
    /// Next-page cursor, treating an empty token as end of sequence.
    pub(crate) fn take_cursor(&mut self) -> Option<String> {
        self.next_page_token.take().filter(|token| !token.is_empty())
    }
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// ==================== search?type=channel ====================

#[derive(Debug, Deserialize)]
pub(crate) struct ChannelSearchItem {
    pub snippet: ChannelSearchSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChannelSearchSnippet {
    pub channel_id: String,
    #[serde(default)]
    pub channel_title: Option<String>,
}

impl From<ChannelSearchItem> for ChannelMatch {
    fn from(item: ChannelSearchItem) -> Self {
        Self {
            channel_id: item.snippet.channel_id,
            title: item.snippet.channel_title.filter(|t| !t.trim().is_empty()),
        }
    }
}

// ==================== search?channelId=... ====================

#[derive(Debug, Deserialize)]
pub(crate) struct VideoSearchItem {
    pub id: SearchResultId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchResultId {
    pub kind: String,
    #[serde(default)]
    pub video_id: Option<String>,
}

impl SearchResultId {
    /// Returns the video id when this result is a video.
    pub(crate) fn into_video_id(self) -> Option<String> {
        if self.kind == VIDEO_KIND {
            self.video_id
        } else {
            None
        }
    }
}

// ==================== playlistItems ====================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistItem {
    pub content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistItemContentDetails {
    pub video_id: String,
}

// ==================== videos ====================

#[derive(Debug, Deserialize)]
pub(crate) struct VideoItem {
    pub snippet: VideoSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoSnippet {
    pub channel_title: String,
    pub title: String,
    pub published_at: String,
    #[serde(default)]
    pub description: String,
}

impl From<VideoItem> for VideoMetadata {
    fn from(item: VideoItem) -> Self {
        Self {
            author: item.snippet.channel_title,
            title: item.snippet.title,
            published_at: item.snippet.published_at,
            description: item.snippet.description,
        }
    }
}

// ==================== channels?part=statistics ====================

#[derive(Debug, Deserialize)]
pub(crate) struct ChannelItem {
    pub statistics: ChannelStatistics,
}

/// Counts are encoded as decimal strings by the API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChannelStatistics {
    #[serde(default)]
    pub video_count: Option<String>,
}

// ==================== playlists?part=snippet ====================

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistResource {
    pub snippet: PlaylistSnippet,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistSnippet {
    pub title: String,
}

/// Builds an [`IdPage`] from a decoded listing and a per-item id extractor.
pub(crate) fn into_id_page<T>(
    mut response: ListResponse<T>,
    extract: impl Fn(T) -> Option<String>,
) -> IdPage {
    let next_cursor = response.take_cursor();
    let ids = response.items.into_iter().filter_map(extract).collect();
    IdPage { ids, next_cursor }
}
