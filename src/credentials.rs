//! API key provisioning.
//!
//! [`FileCredentialProvider`] implements load-or-prompt-and-persist: the key
//! is read from a local file when present, otherwise asked for once and
//! written to that file for later runs.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::prompt::Prompter;

/// Default API key file, relative to the working directory.
pub const DEFAULT_API_KEY_FILE: &str = ".yt_api_key";

/// Errors while obtaining the API key.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Reading or writing the key file failed.
    #[error("IO error on API key file {path}: {source}")]
    Io {
        /// The key file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The prompt failed.
    #[error("failed to read API key from prompt: {0}")]
    Prompt(#[source] std::io::Error),

    /// The user entered nothing.
    #[error("no API key provided\n  Suggestion: Create a Data API key in the Google Cloud console")]
    Empty,
}

/// Supplies the API key for the metadata service.
pub trait CredentialProvider {
    /// Returns the API key, acquiring it if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] if no key can be obtained.
    fn api_key(&mut self) -> Result<String, CredentialError>;
}

/// Key file backed provider that prompts once when the file is missing.
#[derive(Debug)]
pub struct FileCredentialProvider<P> {
    path: PathBuf,
    prompter: P,
}

impl<P: Prompter> FileCredentialProvider<P> {
    /// Creates a provider reading `path` and asking `prompter` on a miss.
    pub fn new(path: impl Into<PathBuf>, prompter: P) -> Self {
        Self {
            path: path.into(),
            prompter,
        }
    }

    /// The key file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_existing(&self) -> Result<Option<String>, CredentialError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let key = raw.trim();
                Ok((!key.is_empty()).then(|| key.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(CredentialError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl<P: Prompter> CredentialProvider for FileCredentialProvider<P> {
    fn api_key(&mut self) -> Result<String, CredentialError> {
        if let Some(key) = self.read_existing()? {
            debug!(path = %self.path.display(), "Loaded API key from file");
            return Ok(key);
        }

        let answer = self
            .prompter
            .ask("Enter your YouTube API key: ")
            .map_err(CredentialError::Prompt)?;
        let key = answer.trim().to_string();
        if key.is_empty() {
            return Err(CredentialError::Empty);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| CredentialError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, &key).map_err(|source| CredentialError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), "Saved API key for future runs");
        Ok(key)
    }
}
