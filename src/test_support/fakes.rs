//! In-memory [`VideoApi`] and [`TranscriptSource`] fakes that record calls.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{ApiError, ChannelMatch, IdPage, VideoApi, VideoMetadata};
use crate::transcript::{TranscriptError, TranscriptSource};

/// How the fake answers a metadata request for one id.
#[derive(Debug, Clone)]
pub enum FakeVideo {
    Found(VideoMetadata),
    Missing,
    Failing,
}

/// Fake listing/metadata service. Pages are addressed by index; the cursor
/// handed out for page `i` is `"p{i}"`.
#[derive(Debug, Default)]
pub struct FakeApi {
    pub channels: Vec<ChannelMatch>,
    pub pages: Vec<Vec<String>>,
    pub videos: HashMap<String, FakeVideo>,
    pub video_count: Option<u64>,
    pub playlist_title: Option<String>,
    pub(crate) calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_pages(pages: &[&[&str]]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|page| page.iter().map(ToString::to_string).collect())
                .collect(),
            ..Self::default()
        }
    }

    pub fn found(mut self, id: &str, title: &str, published_at: &str) -> Self {
        self.videos.insert(
            id.to_string(),
            FakeVideo::Found(metadata(title, published_at)),
        );
        self
    }

    pub fn with_video(mut self, id: &str, video: FakeVideo) -> Self {
        self.videos.insert(id.to_string(), video);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn page(&self, cursor: Option<&str>) -> IdPage {
        let index = cursor
            .and_then(|c| c.strip_prefix('p'))
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap_or(0);
        IdPage {
            ids: self.pages.get(index).cloned().unwrap_or_default(),
            next_cursor: (index + 1 < self.pages.len()).then(|| format!("p{}", index + 1)),
        }
    }
}

pub fn metadata(title: &str, published_at: &str) -> VideoMetadata {
    VideoMetadata {
        author: "Fake Channel".to_string(),
        title: title.to_string(),
        published_at: published_at.to_string(),
        description: format!("About {title}"),
    }
}

#[async_trait]
impl VideoApi for FakeApi {
    async fn search_channels(&self, handle: &str) -> Result<Vec<ChannelMatch>, ApiError> {
        self.record(format!("search:{handle}"));
        Ok(self.channels.clone())
    }

    async fn channel_video_page(
        &self,
        channel_id: &str,
        cursor: Option<&str>,
    ) -> Result<IdPage, ApiError> {
        self.record(format!("channel_page:{channel_id}:{}", cursor.unwrap_or("-")));
        Ok(self.page(cursor))
    }

    async fn playlist_item_page(
        &self,
        playlist_id: &str,
        cursor: Option<&str>,
    ) -> Result<IdPage, ApiError> {
        self.record(format!("playlist_page:{playlist_id}:{}", cursor.unwrap_or("-")));
        Ok(self.page(cursor))
    }

    async fn video_details(&self, video_id: &str) -> Result<Option<VideoMetadata>, ApiError> {
        self.record(format!("video:{video_id}"));
        match self.videos.get(video_id) {
            Some(FakeVideo::Found(meta)) => Ok(Some(meta.clone())),
            Some(FakeVideo::Missing) | None => Ok(None),
            Some(FakeVideo::Failing) => Err(ApiError::status(
                "videos",
                500,
                Some("backend error".to_string()),
            )),
        }
    }

    async fn channel_video_count(&self, channel_id: &str) -> Result<Option<u64>, ApiError> {
        self.record(format!("count:{channel_id}"));
        Ok(self.video_count)
    }

    async fn playlist_title(&self, playlist_id: &str) -> Result<Option<String>, ApiError> {
        self.record(format!("playlist_title:{playlist_id}"));
        Ok(self.playlist_title.clone())
    }
}

/// Fake transcript source; ids without an entry report captions disabled.
#[derive(Debug, Default)]
pub struct FakeTranscripts {
    pub texts: HashMap<String, Result<String, TranscriptError>>,
}

impl FakeTranscripts {
    pub fn with_text(mut self, id: &str, text: &str) -> Self {
        self.texts.insert(id.to_string(), Ok(text.to_string()));
        self
    }

    pub fn with_error(mut self, id: &str, error: TranscriptError) -> Self {
        self.texts.insert(id.to_string(), Err(error));
        self
    }
}

#[async_trait]
impl TranscriptSource for FakeTranscripts {
    async fn fetch_transcript(&self, video_id: &str) -> Result<String, TranscriptError> {
        self.texts
            .get(video_id)
            .cloned()
            .unwrap_or_else(|| Err(TranscriptError::disabled(video_id)))
    }
}
