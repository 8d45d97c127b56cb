//! File persistence for statistics, preferences and the character profile
//!
//! Everything is stored as pretty-printed JSON under one data directory
//! (`<platform data dir>/hangman-rpg` unless overridden). A missing file is not an
//! error: loaders fall back to the type's default.

pub mod preferences;
pub mod profile;
pub mod stats;

pub use preferences::Preferences;
pub use profile::ProfileStore;
pub use stats::{GameRecord, Outcome, PlayerStats, StatsStore};

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name under the platform data directory
pub const APP_DIR_NAME: &str = "hangman-rpg";

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not determine a data directory for this platform")]
    NoDataDir,

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Location of every file the game writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Use `override_dir` if given, otherwise the platform data directory
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoDataDir`] when no override is given and the
    /// platform has no data directory.
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self, StorageError> {
        if let Some(dir) = override_dir {
            return Ok(Self::new(dir));
        }

        let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(Self::new(base.join(APP_DIR_NAME)))
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn stats_path(&self) -> PathBuf {
        self.root.join("stats.json")
    }

    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.root.join("preferences.json")
    }

    #[must_use]
    pub fn profile_path(&self) -> PathBuf {
        self.root.join("profile.json")
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.root.join("hangman.log")
    }

    /// Create the directory if it does not exist yet
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn ensure_exists(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|source| StorageError::Io {
            path: self.root.clone(),
            source,
        })
    }
}

/// Read a JSON file, returning `None` if it does not exist
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no file yet");
            return Ok(None);
        }
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| StorageError::Json {
            path: path.to_path_buf(),
            source,
        })
}

/// Write a value as pretty-printed JSON, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if serialization or any file operation fails.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StorageError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(value).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "saved");
    Ok(())
}
