//! Record persistence.
//!
//! A record is written to `<name>.part` and renamed into place, so an
//! interrupted or failed write never leaves a truncated `.txt` behind.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::record::{InvalidTimestamp, VideoRecord};

/// Errors that can occur while persisting a record.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The record's file name could not be derived.
    #[error(transparent)]
    InvalidRecord(#[from] InvalidTimestamp),

    /// Filesystem I/O failed.
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The path being written.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Accepts finished records and writes them to stable storage.
pub trait RecordSink {
    /// Persists one record, returning where it was written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the record cannot be named or written. No
    /// partial output remains on error.
    fn persist(&self, record: &VideoRecord) -> Result<PathBuf, StorageError>;
}

/// Writes each record as a text file inside one destination folder.
#[derive(Debug, Clone)]
pub struct FolderSink {
    dir: PathBuf,
}

impl FolderSink {
    /// Creates a sink writing into `<base>/<folder>`.
    #[must_use]
    pub fn new(base: impl AsRef<Path>, folder: &str) -> Self {
        Self {
            dir: base.as_ref().join(folder),
        }
    }

    /// The destination directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl RecordSink for FolderSink {
    fn persist(&self, record: &VideoRecord) -> Result<PathBuf, StorageError> {
        let file_name = record.file_name()?;
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::io(&self.dir, e))?;

        let final_path = self.dir.join(&file_name);
        let part_path = self.dir.join(format!("{file_name}.part"));

        if let Err(e) = fs::write(&part_path, record.render()) {
            let _ = fs::remove_file(&part_path);
            return Err(StorageError::io(&part_path, e));
        }
        if let Err(e) = fs::rename(&part_path, &final_path) {
            debug!(path = %part_path.display(), "cleaning up partial file after error");
            let _ = fs::remove_file(&part_path);
            return Err(StorageError::io(&final_path, e));
        }

        Ok(final_path)
    }
}

/// Default base directory for output: `$HOME/Downloads`.
#[must_use]
pub fn default_output_base() -> Option<PathBuf> {
    ["HOME", "USERPROFILE"]
        .iter()
        .find_map(|name| env::var_os(name).filter(|value| !value.is_empty()))
        .map(|home| PathBuf::from(home).join("Downloads"))
}
