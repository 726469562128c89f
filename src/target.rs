//! Identifier resolution: turning a user-supplied URL into a listing target.
//!
//! Parsing is pure string work. Only channel handles need a network call to
//! become a stable channel id; playlist ids are taken from the URL as-is and
//! first validated by the listing call that uses them.

use tracing::{debug, info};

use crate::api::VideoApi;
use crate::error::ScrapeError;

/// Marker preceding a playlist id in a URL query.
pub const PLAYLIST_MARKER: &str = "list=";

/// Marker preceding a channel handle in a URL path.
pub const HANDLE_MARKER: char = '@';

/// A parsed but not yet resolved reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetRef {
    /// A playlist id taken verbatim from the URL.
    Playlist(String),
    /// A channel handle that still needs resolving.
    ChannelHandle(String),
}

/// A resolved listing target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A channel, addressed by its stable id.
    Channel {
        /// Stable channel identifier.
        id: String,
        /// Display title from the handle search, if reported.
        title: Option<String>,
    },
    /// A playlist, addressed by the id taken from the URL.
    Playlist {
        /// Playlist identifier.
        id: String,
    },
}

impl Target {
    /// Returns the target's identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Channel { id, .. } | Self::Playlist { id } => id,
        }
    }

    /// Returns a short label for log and prompt text.
    #[must_use]
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Channel { .. } => "channel",
            Self::Playlist { .. } => "playlist",
        }
    }
}

/// Classifies a URL as a playlist or channel reference.
///
/// A URL containing `list=` is a playlist; anything else must carry an
/// `@handle`.
///
/// # Errors
///
/// Returns [`ScrapeError::MalformedInput`] when neither form can be extracted.
pub fn parse_target_url(url: &str) -> Result<TargetRef, ScrapeError> {
    let url = url.trim();
    if url.contains(PLAYLIST_MARKER) {
        parse_playlist_id(url).map(TargetRef::Playlist)
    } else {
        parse_channel_handle(url).map(TargetRef::ChannelHandle)
    }
}

/// Extracts the playlist id following `list=`, up to the next `&` or `#`.
///
/// # Errors
///
/// Returns [`ScrapeError::MalformedInput`] when the marker is absent or
/// nothing follows it.
pub fn parse_playlist_id(url: &str) -> Result<String, ScrapeError> {
    let Some((_, rest)) = url.split_once(PLAYLIST_MARKER) else {
        return Err(ScrapeError::missing_playlist(url));
    };
    let id = rest.split(['&', '#']).next().unwrap_or_default();
    if id.is_empty() {
        return Err(ScrapeError::empty_identifier(url, PLAYLIST_MARKER));
    }
    Ok(id.to_string())
}

/// Extracts the handle between `@` and the next path separator.
///
/// # Errors
///
/// Returns [`ScrapeError::MalformedInput`] when there is no `@` or the handle
/// is empty.
pub fn parse_channel_handle(url: &str) -> Result<String, ScrapeError> {
    let Some((_, rest)) = url.split_once(HANDLE_MARKER) else {
        return Err(ScrapeError::missing_handle(url));
    };
    let handle = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if handle.is_empty() {
        return Err(ScrapeError::empty_identifier(url, "@"));
    }
    Ok(handle.to_string())
}

/// Resolves a parsed reference into a listing target.
///
/// Playlists resolve without any call. Channel handles are searched and the
/// first result is taken unconditionally.
///
/// # Errors
///
/// Returns [`ScrapeError::NotFound`] when the handle search is empty, or
/// [`ScrapeError::UpstreamService`] when the search call fails.
#[tracing::instrument(skip(api))]
pub async fn resolve_target(
    api: &dyn VideoApi,
    target_ref: TargetRef,
) -> Result<Target, ScrapeError> {
    match target_ref {
        TargetRef::Playlist(id) => {
            debug!(playlist_id = %id, "Playlist id taken from URL");
            Ok(Target::Playlist { id })
        }
        TargetRef::ChannelHandle(handle) => {
            let matches = api.search_channels(&handle).await?;
            let Some(first) = matches.into_iter().next() else {
                return Err(ScrapeError::channel_not_found(&handle));
            };
            info!(handle = %handle, channel_id = %first.channel_id, "Resolved channel handle");
            Ok(Target::Channel {
                id: first.channel_id,
                title: first.title,
            })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_playlist_url() {
        let target =
            parse_target_url("https://www.youtube.com/playlist?list=PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf")
                .unwrap();
        assert_eq!(
            target,
            TargetRef::Playlist("PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf".to_string())
        );
    }

    #[test]
    fn test_parse_playlist_id_stops_at_next_query_param() {
        let id = parse_playlist_id("https://www.youtube.com/watch?v=abc&list=PL123&index=4").unwrap();
        assert_eq!(id, "PL123");
    }

    #[test]
    fn test_parse_playlist_id_stops_at_fragment() {
        let id = parse_playlist_id("https://www.youtube.com/playlist?list=PL9#top").unwrap();
        assert_eq!(id, "PL9");
    }

    #[test]
    fn test_parse_playlist_id_without_marker_is_malformed() {
        let err = parse_playlist_id("https://www.youtube.com/@somebody").unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_parse_playlist_id_with_empty_id_is_malformed() {
        let err = parse_target_url("https://www.youtube.com/playlist?list=").unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_parse_channel_handle_url() {
        let target = parse_target_url("https://www.youtube.com/@LinusTechTips/videos").unwrap();
        assert_eq!(target, TargetRef::ChannelHandle("LinusTechTips".to_string()));
    }

    #[test]
    fn test_parse_channel_handle_without_trailing_path() {
        assert_eq!(
            parse_channel_handle("https://www.youtube.com/@veritasium").unwrap(),
            "veritasium"
        );
    }

    #[test]
    fn test_parse_channel_handle_drops_query() {
        assert_eq!(
            parse_channel_handle("https://youtube.com/@veritasium?si=xyz").unwrap(),
            "veritasium"
        );
    }

    #[test]
    fn test_channel_url_without_handle_is_malformed() {
        let inputs = [
            "https://www.youtube.com/channel/UC_x5XG1OV2P6uZZ5FSM9Ttw",
            "https://www.youtube.com/c/SomeName",
            "not a url at all",
            "",
        ];
        for input in inputs {
            let err = parse_target_url(input).unwrap_err();
            assert!(err.is_malformed_input(), "expected MalformedInput for {input:?}");
        }
    }

    #[test]
    fn test_channel_url_with_empty_handle_is_malformed() {
        let err = parse_target_url("https://www.youtube.com/@/videos").unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_target_accessors() {
        let channel = Target::Channel {
            id: "UC1".to_string(),
            title: None,
        };
        let playlist = Target::Playlist {
            id: "PL1".to_string(),
        };
        assert_eq!(channel.id(), "UC1");
        assert_eq!(channel.kind_label(), "channel");
        assert_eq!(playlist.id(), "PL1");
        assert_eq!(playlist.kind_label(), "playlist");
    }

    #[tokio::test]
    async fn test_resolve_channel_takes_first_match() {
        use crate::api::ChannelMatch;
        use crate::test_support::fakes::FakeApi;

        let api = FakeApi {
            channels: vec![
                ChannelMatch {
                    channel_id: "UCfirst".to_string(),
                    title: Some("First".to_string()),
                },
                ChannelMatch {
                    channel_id: "UCsecond".to_string(),
                    title: None,
                },
            ],
            ..FakeApi::default()
        };
        let target = resolve_target(&api, TargetRef::ChannelHandle("first".to_string()))
            .await
            .unwrap();
        assert_eq!(
            target,
            Target::Channel {
                id: "UCfirst".to_string(),
                title: Some("First".to_string()),
            }
        );
        assert_eq!(api.calls(), vec!["search:first"]);
    }

    #[tokio::test]
    async fn test_resolve_channel_with_no_match_is_not_found() {
        use crate::test_support::fakes::FakeApi;

        let api = FakeApi::default();
        let err = resolve_target(&api, TargetRef::ChannelHandle("ghost".to_string()))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(api.calls(), vec!["search:ghost"]);
    }

    #[tokio::test]
    async fn test_resolve_playlist_makes_no_calls() {
        use crate::test_support::fakes::FakeApi;

        let api = FakeApi::default();
        let target = resolve_target(&api, TargetRef::Playlist("PL1".to_string()))
            .await
            .unwrap();
        assert_eq!(target.id(), "PL1");
        assert!(api.calls().is_empty());
    }
}
