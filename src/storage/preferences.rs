//! Remembered language and difficulty

use super::{StorageError, read_json, write_json};
use crate::core::Difficulty;
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl Preferences {
    /// Load preferences, falling back to defaults if the file is missing or unreadable
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match read_json(path) {
            Ok(Some(prefs)) => prefs,
            Ok(None) => Self::default(),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable preferences");
                Self::default()
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        info!(language = %self.language, difficulty = %self.difficulty, "saving preferences");
        write_json(path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_are_polish_medium() {
        let prefs = Preferences::default();
        assert_eq!(prefs.language, Language::Polish);
        assert_eq!(prefs.difficulty, Difficulty::Medium);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load_or_default(&dir.path().join("preferences.json"));
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let prefs = Preferences {
            language: Language::English,
            difficulty: Difficulty::Hard,
        };
        prefs.save(&path).unwrap();

        assert_eq!(Preferences::load_or_default(&path), prefs);
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{ "language": "en" }"#).unwrap();

        let prefs = Preferences::load_or_default(&path);
        assert_eq!(prefs.language, Language::English);
        assert_eq!(prefs.difficulty, Difficulty::Medium);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "garbage").unwrap();

        assert_eq!(Preferences::load_or_default(&path), Preferences::default());
    }
}
