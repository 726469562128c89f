//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Archive a YouTube channel or playlist as one text file per video.
///
/// Each file holds the video's title, publish time, URL, description and
/// transcript. Anything not given on the command line is asked for
/// interactively.
#[derive(Parser, Debug)]
#[command(name = "yt-scraper")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Channel (`https://www.youtube.com/@handle`) or playlist (`...?list=ID`) URL
    #[arg(short, long)]
    pub url: Option<String>,

    /// Folder name under the output directory (prompted for when omitted)
    #[arg(short, long)]
    pub folder: Option<String>,

    /// Base directory for output folders [default: ~/Downloads]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// File holding the Data API key [default: .yt_api_key]
    #[arg(long)]
    pub api_key_file: Option<PathBuf>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Preferred transcript language code [default: en]
    #[arg(short, long)]
    pub language: Option<String>,

    /// Override the Data API base URL
    #[arg(long, hide = true)]
    pub api_base_url: Option<String>,
}
