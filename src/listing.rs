//! Paginated listing of a target's videos.
//!
//! [`paginate`] is the single cursor-following loop; the playlist and channel
//! listings only differ in which page call they hand it.

use std::future::Future;

use tracing::{debug, info, trace};

use crate::api::{ApiError, IdPage, VideoApi};
use crate::target::Target;

/// Follows a page cursor until the service stops returning one.
///
/// The first call receives `None`. Identifiers are appended in the order
/// received. There is no iteration bound, and a failing page aborts the whole
/// listing (the partial accumulator is dropped).
///
/// # Errors
///
/// Returns the first [`ApiError`] produced by `fetch_page`.
pub async fn paginate<F, Fut>(mut fetch_page: F) -> Result<Vec<String>, ApiError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<IdPage, ApiError>>,
{
    let mut ids = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0_usize;

    loop {
        let page = fetch_page(cursor.take()).await?;
        pages += 1;
        trace!(page = pages, received = page.ids.len(), "Fetched listing page");
        ids.extend(page.ids);

        match page.next_cursor {
            Some(next) if !next.is_empty() => cursor = Some(next),
            _ => break,
        }
    }

    debug!(pages, total = ids.len(), "Listing exhausted");
    Ok(ids)
}

/// Lists every video id in a playlist.
///
/// # Errors
///
/// Returns [`ApiError`] if any page request fails.
#[tracing::instrument(skip(api))]
pub async fn list_playlist_videos(
    api: &dyn VideoApi,
    playlist_id: &str,
) -> Result<Vec<String>, ApiError> {
    paginate(|cursor| async move { api.playlist_item_page(playlist_id, cursor.as_deref()).await })
        .await
}

/// Lists every video id a channel search returns, excluding non-video results.
///
/// # Errors
///
/// Returns [`ApiError`] if any page request fails.
#[tracing::instrument(skip(api))]
pub async fn list_channel_videos(
    api: &dyn VideoApi,
    channel_id: &str,
) -> Result<Vec<String>, ApiError> {
    paginate(|cursor| async move { api.channel_video_page(channel_id, cursor.as_deref()).await })
        .await
}

/// Lists every video id belonging to a resolved target.
///
/// # Errors
///
/// Returns [`ApiError`] if any page request fails.
pub async fn list_target_videos(api: &dyn VideoApi, target: &Target) -> Result<Vec<String>, ApiError> {
    let ids = match target {
        Target::Playlist { id } => list_playlist_videos(api, id).await?,
        Target::Channel { id, .. } => list_channel_videos(api, id).await?,
    };
    info!(
        kind = target.kind_label(),
        id = target.id(),
        videos = ids.len(),
        "Collected video ids"
    );
    Ok(ids)
}
