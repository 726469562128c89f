//! Shared helpers for integration tests.
#![allow(dead_code)]

pub mod socket_guard;

use serde_json::{Value, json};
use yt_scraper_core::{TranscriptError, TranscriptSource};

/// One `search?channelId=` page of video results.
pub fn video_search_page(ids: &[String], next: Option<&str>) -> Value {
    let items: Vec<Value> = ids
        .iter()
        .map(|id| json!({ "kind": "youtube#searchResult", "id": { "kind": "youtube#video", "videoId": id } }))
        .collect();
    json!({ "items": items, "nextPageToken": next })
}

/// One `playlistItems` page.
pub fn playlist_page(ids: &[&str], next: Option<&str>) -> Value {
    let items: Vec<Value> = ids
        .iter()
        .map(|id| json!({ "contentDetails": { "videoId": id } }))
        .collect();
    json!({ "items": items, "nextPageToken": next })
}

/// A `videos` response with a single video.
pub fn video_details(title: &str, published_at: &str) -> Value {
    json!({
        "items": [{
            "snippet": {
                "channelTitle": "Test Channel",
                "title": title,
                "publishedAt": published_at,
                "description": format!("About {title}")
            }
        }]
    })
}

/// Ids `vid000`, `vid001`, ... for `range`.
pub fn video_ids(range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|i| format!("vid{i:03}")).collect()
}

/// Transcript source answering from a fixed table; ids not in the table
/// have captions disabled.
#[derive(Debug, Default)]
pub struct StubTranscripts {
    texts: std::collections::HashMap<String, Result<String, TranscriptError>>,
    calls: std::sync::Mutex<Vec<String>>,
}

impl StubTranscripts {
    pub fn with_text(mut self, video_id: &str, text: &str) -> Self {
        self.texts.insert(video_id.to_string(), Ok(text.to_string()));
        self
    }

    pub fn with_error(mut self, video_id: &str, error: TranscriptError) -> Self {
        self.texts.insert(video_id.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TranscriptSource for StubTranscripts {
    async fn fetch_transcript(&self, video_id: &str) -> Result<String, TranscriptError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        self.texts
            .get(video_id)
            .cloned()
            .unwrap_or_else(|| Err(TranscriptError::disabled(video_id)))
    }
}
