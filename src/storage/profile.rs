//! Character profile persistence

use super::{StorageError, read_json, write_json};
use crate::rpg::Profile;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Reads and writes the [`Profile`] file
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved character, or a fresh one if none is saved or it cannot be read
    #[must_use]
    pub fn load_or_new(&self) -> Profile {
        match read_json::<Profile>(&self.path) {
            Ok(Some(profile)) => {
                info!(level = profile.progression.level(), "loaded profile");
                profile
            }
            Ok(None) => {
                info!("no saved profile, starting a new character");
                Profile::new()
            }
            Err(e) => {
                warn!(error = %e, "profile unreadable, starting a new character");
                Profile::new()
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, profile: &Profile) -> Result<(), StorageError> {
        write_json(&self.path, profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpg::basic_items;
    use std::fs;

    #[test]
    fn missing_profile_is_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));
        assert_eq!(store.load_or_new(), Profile::new());
    }

    #[test]
    fn save_and_reload_keeps_progress() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));

        let mut profile = Profile::new();
        profile.progression.add_experience(150);
        profile.quests[0].progress = 2;
        for item in basic_items() {
            assert!(profile.inventory.add_item(item));
        }
        assert!(profile.inventory.use_item("potion_hint").is_some());
        store.save(&profile).unwrap();

        let loaded = store.load_or_new();
        assert_eq!(loaded, profile);
        assert_eq!(loaded.progression.level(), 2);
        assert!(loaded.inventory.items()[0].used);
    }

    #[test]
    fn corrupt_profile_is_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "[1, 2").unwrap();

        let store = ProfileStore::new(&path);
        assert_eq!(store.load_or_new(), Profile::new());
    }

    const ATTRIBUTES: &str =
        r#""attributes":{"intelligence":3,"luck":1,"perception":1,"resilience":1}"#;

    #[test]
    fn zero_level_threshold_is_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(
            &path,
            format!(
                r#"{{"progression":{{"level":2,"experience":10,"next_level_threshold":0,{ATTRIBUTES}}}}}"#
            ),
        )
        .unwrap();

        let mut profile = ProfileStore::new(&path).load_or_new();
        assert_eq!(profile, Profile::new());
        assert_eq!(profile.progression.add_experience(10).levels_gained, 0);
    }

    #[test]
    fn surplus_experience_is_levelled_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(
            &path,
            format!(
                r#"{{"progression":{{"level":1,"experience":500,"next_level_threshold":100,{ATTRIBUTES}}}}}"#
            ),
        )
        .unwrap();

        let profile = ProfileStore::new(&path).load_or_new();
        let progression = &profile.progression;
        assert_eq!(progression.level(), 4);
        assert!(progression.experience() < progression.next_level_threshold());
    }
}
