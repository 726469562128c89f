//! HTTP implementation of [`VideoApi`] against the Data API v3.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::http_client::{HttpTimeouts, build_http_client};

use super::wire::{
    ChannelItem, ChannelSearchItem, ErrorEnvelope, ListResponse, PlaylistItem, PlaylistResource,
    VideoItem, VideoSearchItem, into_id_page,
};
use super::{ApiError, ChannelMatch, IdPage, PAGE_SIZE, VideoApi, VideoMetadata};

/// Default Data API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Data API v3 client authenticated with an API key.
pub struct YouTubeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    /// Creates a client against the public Data API.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Client`] if HTTP client construction fails.
    pub fn new(api_key: impl Into<String>, timeouts: HttpTimeouts) -> Result<Self, ApiError> {
        Self::with_base_url(api_key, DEFAULT_API_BASE_URL, timeouts)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Client`] if HTTP client construction fails.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeouts: HttpTimeouts,
    ) -> Result<Self, ApiError> {
        let client = build_http_client("youtube-api", timeouts)
            .map_err(|e| ApiError::client(&e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn endpoint_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}/{endpoint}", self.base_url))
            .map_err(|e| ApiError::client(&format!("invalid API base URL: {e}")))?;
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("key", &self.api_key);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint_url(endpoint, params)?;
        debug!(endpoint, ?params, "Calling Data API");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::transport(endpoint, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(endpoint, e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.error.message);
            debug!(endpoint, status = status.as_u16(), ?message, "Data API error");
            return Err(ApiError::status(endpoint, status.as_u16(), message));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::decode(endpoint, &e.to_string()))
    }
}

impl std::fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl VideoApi for YouTubeClient {
    #[tracing::instrument(skip(self))]
    async fn search_channels(&self, handle: &str) -> Result<Vec<ChannelMatch>, ApiError> {
        let response: ListResponse<ChannelSearchItem> = self
            .get_json(
                "search",
                &[("part", "snippet"), ("q", handle), ("type", "channel")],
            )
            .await?;
        Ok(response.items.into_iter().map(ChannelMatch::from).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn channel_video_page(
        &self,
        channel_id: &str,
        cursor: Option<&str>,
    ) -> Result<IdPage, ApiError> {
        let page_size = PAGE_SIZE.to_string();
        let mut params = vec![
            ("part", "id"),
            ("channelId", channel_id),
            ("maxResults", page_size.as_str()),
        ];
        if let Some(token) = cursor {
            params.push(("pageToken", token));
        }
        let response: ListResponse<VideoSearchItem> = self.get_json("search", &params).await?;
        Ok(into_id_page(response, |item| item.id.into_video_id()))
    }

    #[tracing::instrument(skip(self))]
    async fn playlist_item_page(
        &self,
        playlist_id: &str,
        cursor: Option<&str>,
    ) -> Result<IdPage, ApiError> {
        let page_size = PAGE_SIZE.to_string();
        let mut params = vec![
            ("part", "contentDetails"),
            ("playlistId", playlist_id),
            ("maxResults", page_size.as_str()),
        ];
        if let Some(token) = cursor {
            params.push(("pageToken", token));
        }
        let response: ListResponse<PlaylistItem> =
            self.get_json("playlistItems", &params).await?;
        Ok(into_id_page(response, |item| {
            Some(item.content_details.video_id)
        }))
    }

    #[tracing::instrument(skip(self))]
    async fn video_details(&self, video_id: &str) -> Result<Option<VideoMetadata>, ApiError> {
        let response: ListResponse<VideoItem> = self
            .get_json("videos", &[("part", "snippet,contentDetails"), ("id", video_id)])
            .await?;
        Ok(response.items.into_iter().next().map(VideoMetadata::from))
    }

    #[tracing::instrument(skip(self))]
    async fn channel_video_count(&self, channel_id: &str) -> Result<Option<u64>, ApiError> {
        let response: ListResponse<ChannelItem> = self
            .get_json("channels", &[("part", "statistics"), ("id", channel_id)])
            .await?;
        let Some(raw) = response
            .items
            .into_iter()
            .next()
            .and_then(|item| item.statistics.video_count)
        else {
            return Ok(None);
        };
        raw.trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ApiError::decode("channels", &format!("videoCount '{raw}' is not a number")))
    }

    #[tracing::instrument(skip(self))]
    async fn playlist_title(&self, playlist_id: &str) -> Result<Option<String>, ApiError> {
        let response: ListResponse<PlaylistResource> = self
            .get_json("playlists", &[("part", "snippet"), ("id", playlist_id)])
            .await?;
        Ok(response
            .items
            .into_iter()
            .next()
            .map(|item| item.snippet.title))
    }
}
