//! CLI entry point for the yt-scraper tool.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info};
use yt_scraper_core::{
    CredentialProvider, FileCredentialProvider, RunContext, RunOutcome, RunRequest, StdioPrompter,
    YouTubeClient, YouTubeTranscripts, run,
};

mod cli;
mod config;

use cli::Args;
use config::{load_default_file_config, resolve_settings};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    // Every failure ends the run with a log line; the process still exits normally.
    if let Err(e) = run_cli(args).await {
        error!("{e:#}");
    }
    Ok(())
}

async fn run_cli(args: Args) -> Result<()> {
    let loaded = load_default_file_config()?;
    if let Some(path) = loaded.path.as_deref().filter(|_| loaded.config.is_some()) {
        debug!(path = %path.display(), "Loaded config file");
    }
    let settings = resolve_settings(&args, loaded.config.as_ref())?;
    debug!(?settings, "Resolved settings");

    let api_key = FileCredentialProvider::new(&settings.api_key_file, StdioPrompter)
        .api_key()
        .context("Failed to obtain the YouTube API key")?;

    let api = YouTubeClient::with_base_url(api_key, &settings.api_base_url, settings.timeouts)?;
    let transcripts = YouTubeTranscripts::new(settings.languages.clone())?;
    let mut prompter = StdioPrompter;

    let outcome = run(
        RunContext {
            api: &api,
            transcripts: &transcripts,
            prompter: &mut prompter,
        },
        RunRequest {
            url: args.url,
            folder: args.folder,
            output_base: settings.output_base,
            assume_yes: args.yes,
        },
    )
    .await?;

    match outcome {
        RunOutcome::Cancelled | RunOutcome::Empty => {}
        RunOutcome::Completed { folder, stats } => info!(
            folder = %folder.display(),
            saved = stats.saved,
            skipped = stats.skipped,
            total = stats.total,
            "Done"
        ),
    }
    Ok(())
}
