//! File configuration and CLI merging.
//!
//! The config file is optional and uses simple `key = value` lines:
//!
//! ```text
//! output_dir = "/data/transcripts"
//! transcript_language = "en"   # preferred caption track
//! read_timeout_secs = 60
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use yt_scraper_core::credentials::DEFAULT_API_KEY_FILE;
use yt_scraper_core::storage::default_output_base;
use yt_scraper_core::{DEFAULT_API_BASE_URL, HttpTimeouts};

use crate::cli::Args;

const CONFIG_DIR_NAME: &str = "yt-scraper";
const DEFAULT_TRANSCRIPT_LANGUAGE: &str = "en";

/// File-backed defaults. Every field is optional; CLI flags win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    /// Base directory for output folders.
    pub output_dir: Option<PathBuf>,
    /// API key file location.
    pub api_key_file: Option<PathBuf>,
    /// Data API base URL.
    pub api_base_url: Option<String>,
    /// Preferred caption language code.
    pub transcript_language: Option<String>,
    /// HTTP connect timeout in seconds.
    pub connect_timeout_secs: Option<u64>,
    /// HTTP request timeout in seconds.
    pub read_timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Validates config values against runtime constraints.
    pub fn validate(&self) -> Result<()> {
        validate_timeout_secs("connect_timeout_secs", self.connect_timeout_secs)?;
        validate_timeout_secs("read_timeout_secs", self.read_timeout_secs)?;
        if let Some(language) = &self.transcript_language
            && language.trim().is_empty()
        {
            bail!("Invalid config value for `transcript_language`: must not be empty");
        }
        Ok(())
    }
}

fn validate_timeout_secs(field: &str, value: Option<u64>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    if !(1..=3600).contains(&value) {
        bail!("Invalid config value for `{field}`: {value}. Expected range: 1..=3600");
    }
    Ok(())
}

/// Loaded config metadata.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Resolved config path if a base directory is known.
    pub path: Option<PathBuf>,
    /// Parsed file config when a config file exists and was valid.
    pub config: Option<FileConfig>,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output_base: PathBuf,
    pub api_key_file: PathBuf,
    pub api_base_url: String,
    pub languages: Vec<String>,
    pub timeouts: HttpTimeouts,
}

/// Resolves default config path.
///
/// Priority:
/// 1. `$XDG_CONFIG_HOME/yt-scraper/config.toml`
/// 2. `$HOME/.config/yt-scraper/config.toml`
#[must_use]
pub fn resolve_default_config_path() -> Option<PathBuf> {
    if let Some(xdg_config_home) = env_var_non_empty_os("XDG_CONFIG_HOME") {
        return Some(
            PathBuf::from(xdg_config_home)
                .join(CONFIG_DIR_NAME)
                .join("config.toml"),
        );
    }

    let home = env_var_non_empty_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join(CONFIG_DIR_NAME)
            .join("config.toml"),
    )
}

fn env_var_non_empty_os(name: &str) -> Option<std::ffi::OsString> {
    let value = env::var_os(name)?;
    if value.is_empty() { None } else { Some(value) }
}

/// Loads config from the default path if present.
pub fn load_default_file_config() -> Result<LoadedConfig> {
    let path = resolve_default_config_path();
    let config = match path.as_deref() {
        Some(path_ref) if path_ref.exists() => Some(load_file_config(path_ref)?),
        _ => None,
    };
    Ok(LoadedConfig { path, config })
}

fn load_file_config(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    parse_config_str(&raw)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))
}

fn parse_config_str(raw: &str) -> Result<FileConfig> {
    let mut cfg = FileConfig::default();
    for (line_index, raw_line) in raw.lines().enumerate() {
        let line_no = line_index + 1;
        let line = strip_inline_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        let Some((raw_key, raw_value)) = line.split_once('=') else {
            bail!("Invalid config syntax on line {line_no}: expected key = value");
        };

        let key = raw_key.trim();
        let value = raw_value.trim();
        let string_value = || {
            parse_string_literal(value)
                .with_context(|| format!("Invalid `{key}` value on line {line_no}"))
        };
        let integer_value = || {
            parse_integer_u64(value)
                .with_context(|| format!("Invalid `{key}` value on line {line_no}"))
        };

        match key {
            "output_dir" => cfg.output_dir = Some(PathBuf::from(string_value()?)),
            "api_key_file" => cfg.api_key_file = Some(PathBuf::from(string_value()?)),
            "api_base_url" => cfg.api_base_url = Some(string_value()?),
            "transcript_language" => cfg.transcript_language = Some(string_value()?),
            "connect_timeout_secs" => cfg.connect_timeout_secs = Some(integer_value()?),
            "read_timeout_secs" => cfg.read_timeout_secs = Some(integer_value()?),
            unknown => {
                bail!("Unknown configuration key: '{unknown}' on line {line_no}");
            }
        }
    }
    cfg.validate()?;
    Ok(cfg)
}

fn strip_inline_comment(line: &str) -> &str {
    let mut in_string = false;
    for (index, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..index],
            _ => {}
        }
    }
    line
}

fn parse_string_literal(raw_value: &str) -> Result<String> {
    if raw_value.len() < 2 || !raw_value.starts_with('"') || !raw_value.ends_with('"') {
        bail!("Expected double-quoted string");
    }
    Ok(raw_value[1..raw_value.len() - 1].to_string())
}

fn parse_integer_u64(raw_value: &str) -> Result<u64> {
    let token = raw_value.trim();
    if token.is_empty() {
        bail!("Expected integer value");
    }
    let value = token.parse::<i128>()?;
    if value < 0 {
        bail!("Expected non-negative integer");
    }
    u64::try_from(value).map_err(|_| anyhow::anyhow!("Integer value out of range for u64"))
}

/// Merges CLI flags over file config over built-in defaults.
pub fn resolve_settings(args: &Args, file: Option<&FileConfig>) -> Result<Settings> {
    let file = file.cloned().unwrap_or_default();

    let output_base = match args.output_dir.clone().or(file.output_dir) {
        Some(dir) => dir,
        None => default_output_base().context(
            "Cannot determine the home directory for the default output location; pass --output-dir",
        )?,
    };

    let language = args
        .language
        .clone()
        .or(file.transcript_language)
        .unwrap_or_else(|| DEFAULT_TRANSCRIPT_LANGUAGE.to_string());

    Ok(Settings {
        output_base,
        api_key_file: args
            .api_key_file
            .clone()
            .or(file.api_key_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_API_KEY_FILE)),
        api_base_url: args
            .api_base_url
            .clone()
            .or(file.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        languages: vec![language.trim().to_string()],
        timeouts: HttpTimeouts {
            connect_secs: file.connect_timeout_secs,
            read_secs: file.read_timeout_secs,
        },
    })
}
