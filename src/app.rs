//! One scraping run: resolve, list, confirm, process.
//!
//! Collaborators are injected so the whole flow runs against fakes in tests
//! and against the real services from the binary.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::api::VideoApi;
use crate::error::ScrapeError;
use crate::listing::list_target_videos;
use crate::pipeline::{BatchStats, process_batch};
use crate::prompt::{Prompter, ask_with_default, confirm};
use crate::record::sanitize_title;
use crate::storage::FolderSink;
use crate::target::{Target, parse_target_url, resolve_target};
use crate::transcript::TranscriptSource;

/// Question asked once the video count is known.
pub const CONFIRM_QUESTION: &str = "Do you want to proceed with processing these videos?";

/// Inputs for one run. Anything left `None` is asked for.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Channel or playlist URL.
    pub url: Option<String>,
    /// Output folder name under `output_base`.
    pub folder: Option<String>,
    /// Directory the output folder is created in.
    pub output_base: PathBuf,
    /// Skip the confirmation gate and the folder prompt.
    pub assume_yes: bool,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The user declined at the confirmation gate. Nothing was written.
    Cancelled,
    /// The target had no videos.
    Empty,
    /// The batch ran to completion.
    Completed {
        /// Folder the records were written to.
        folder: PathBuf,
        /// Batch totals.
        stats: BatchStats,
    },
}

/// Services a run talks to.
pub struct RunContext<'a> {
    /// Listing and metadata service.
    pub api: &'a dyn VideoApi,
    /// Transcript service.
    pub transcripts: &'a dyn TranscriptSource,
    /// Source of interactive answers.
    pub prompter: &'a mut dyn Prompter,
}

/// Executes one run end to end.
///
/// # Errors
///
/// Returns [`ScrapeError`] when the URL is malformed, the channel cannot be
/// found, listing fails, or the user cannot be prompted. Per-video failures
/// are not errors; they show up in [`BatchStats::skipped`].
pub async fn run(ctx: RunContext<'_>, request: RunRequest) -> Result<RunOutcome, ScrapeError> {
    let RunContext {
        api,
        transcripts,
        prompter,
    } = ctx;

    let url = match request.url {
        Some(url) => url,
        None => ask_with_default(prompter, "Enter your YouTube channel or playlist URL", None)?,
    };

    let target = resolve_target(api, parse_target_url(&url)?).await?;
    log_expected_count(api, &target).await;

    let ids = list_target_videos(api, &target).await?;
    if ids.is_empty() {
        info!(target_id = %target.id(), "No videos found for {}", target.kind_label());
        return Ok(RunOutcome::Empty);
    }

    let folder = match request.folder {
        Some(folder) => folder,
        None => {
            let default = default_folder_name(api, &target).await;
            if request.assume_yes {
                default
            } else {
                ask_with_default(prompter, "Enter the folder name", Some(&default))?
            }
        }
    };

    info!(videos = ids.len(), folder = %folder, "Ready to process videos");
    if !request.assume_yes && !confirm(prompter, CONFIRM_QUESTION)? {
        info!("Operation cancelled by the user.");
        return Ok(RunOutcome::Cancelled);
    }

    let sink = FolderSink::new(&request.output_base, &folder);
    let stats = process_batch(api, transcripts, &sink, ids).await;
    Ok(RunOutcome::Completed {
        folder: sink.dir().to_path_buf(),
        stats,
    })
}

async fn log_expected_count(api: &dyn VideoApi, target: &Target) {
    let Target::Channel { id, .. } = target else {
        return;
    };
    match api.channel_video_count(id).await {
        Ok(Some(count)) => info!(channel_id = %id, "Channel reports {count} videos"),
        Ok(None) => {}
        Err(e) => warn!(channel_id = %id, error = %e, "Could not fetch channel video count"),
    }
}

/// Suggested folder name: the channel or playlist title, else the target id.
async fn default_folder_name(api: &dyn VideoApi, target: &Target) -> String {
    let title = match target {
        Target::Channel { title, .. } => title.clone(),
        Target::Playlist { id } => match api.playlist_title(id).await {
            Ok(title) => title,
            Err(e) => {
                warn!(playlist_id = %id, error = %e, "Could not fetch playlist title");
                None
            }
        },
    };
    title
        .map(|title| sanitize_title(&title).trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| target.id().to_string())
}
