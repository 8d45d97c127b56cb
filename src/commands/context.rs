//! Shared state of the playable front ends
//!
//! Bundles the session with the word list and the stores so the line-mode game and
//! the TUI save progress the same way.

use crate::core::{Difficulty, Round};
use crate::i18n::{Language, Texts};
use crate::rpg::Item;
use crate::session::{Activation, Purchase, RoundReport, Session, shop_catalogue};
use crate::storage::{DataDir, Preferences, ProfileStore, StatsStore};
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct GameContext {
    session: Session,
    words: WordList,
    custom_words: bool,
    stats: StatsStore,
    profiles: ProfileStore,
    preferences: Preferences,
    preferences_path: PathBuf,
}

impl GameContext {
    /// Load everything stored under `data_dir`
    ///
    /// `wordlist` replaces the embedded list for every language.
    ///
    /// # Errors
    ///
    /// Returns an error if the statistics file is corrupt or the custom word list
    /// cannot be loaded.
    pub fn open(
        data_dir: &DataDir,
        preferences: Preferences,
        wordlist: Option<&Path>,
    ) -> Result<Self> {
        let words = match wordlist {
            Some(path) => WordList::from_file(path)?,
            None => WordList::embedded(preferences.language),
        };

        let stats = StatsStore::open(data_dir.stats_path()).context("failed to load statistics")?;
        let profiles = ProfileStore::new(data_dir.profile_path());
        let session = Session::new(profiles.load_or_new(), preferences.difficulty);

        info!(
            language = %preferences.language,
            difficulty = %preferences.difficulty,
            words = words.len(),
            "game context ready"
        );

        Ok(Self {
            session,
            words,
            custom_words: wordlist.is_some(),
            stats,
            profiles,
            preferences,
            preferences_path: data_dir.preferences_path(),
        })
    }

    #[must_use]
    pub fn texts(&self) -> &'static Texts {
        self.preferences.language.texts()
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn stats(&self) -> &StatsStore {
        &self.stats
    }

    #[must_use]
    pub const fn preferences(&self) -> Preferences {
        self.preferences
    }

    /// Start a round with a random word, or `None` if the list is empty
    #[must_use]
    pub fn new_round(&self) -> Option<Round> {
        let word = self.words.random_word(&mut rand::rng())?;
        Some(self.session.start_round(word))
    }

    /// Apply a finished round to the character and save both stores
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be written.
    pub fn finish_round(&mut self, round: &Round) -> Result<RoundReport> {
        let report = self.session.finish_round(round);
        self.stats
            .record(report.record.clone())
            .context("failed to save statistics")?;
        self.save_profile()?;
        Ok(report)
    }

    /// Use the item in 1-based inventory `slot`
    ///
    /// An empty slot or a used-up item is [`Activation::NotFound`]. The profile is
    /// saved only when an item was actually used.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be saved.
    pub fn use_slot(&mut self, slot: usize, round: Option<&mut Round>) -> Result<Activation> {
        let Some(id) = slot
            .checked_sub(1)
            .and_then(|i| self.session.profile().inventory.items().get(i))
            .filter(|item| !item.used)
            .map(|item| item.id.clone())
        else {
            return Ok(Activation::NotFound);
        };

        let activation = self.session.use_item(&id, round, &mut rand::rng());
        if matches!(activation, Activation::Used(_)) {
            self.save_profile()?;
        }
        Ok(activation)
    }

    /// Buy the item in 1-based catalogue `slot`
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be saved.
    pub fn buy_slot(&mut self, slot: usize) -> Result<Option<(Item, Purchase)>> {
        let Some(item) = slot
            .checked_sub(1)
            .and_then(|i| shop_catalogue().into_iter().nth(i))
        else {
            return Ok(None);
        };

        let purchase = self.session.buy(&item);
        if purchase == Purchase::Bought {
            self.save_profile()?;
        }
        Ok(Some((item, purchase)))
    }

    /// Change difficulty for the next rounds and remember it
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences cannot be saved.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<()> {
        self.session.set_difficulty(difficulty);
        self.preferences.difficulty = difficulty;
        self.save_preferences()
    }

    /// Switch the interface language and remember it
    ///
    /// The embedded word list follows the language unless a custom list is in use.
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences cannot be saved.
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.preferences.language = language;
        if !self.custom_words {
            self.words = WordList::embedded(language);
        }
        self.save_preferences()
    }

    fn save_profile(&self) -> Result<()> {
        self.profiles
            .save(self.session.profile())
            .context("failed to save character profile")
    }

    fn save_preferences(&self) -> Result<()> {
        if let Err(e) = self.preferences.save(&self.preferences_path) {
            warn!(error = %e, "could not save preferences");
            return Err(e).context("failed to save preferences");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoundStatus;
    use crate::storage::Outcome;

    fn context(dir: &Path) -> GameContext {
        GameContext::open(&DataDir::new(dir), Preferences::default(), None).unwrap()
    }

    fn win(round: &mut Round) {
        for letter in round.unrevealed_letters() {
            round.guess(letter);
        }
    }

    #[test]
    fn rounds_use_preferred_difficulty() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(dir.path());
        ctx.set_difficulty(Difficulty::Hard).unwrap();

        let round = ctx.new_round().unwrap();
        assert_eq!(round.max_attempts(), 4);
        let saved = Preferences::load_or_default(&dir.path().join("preferences.json"));
        assert_eq!(saved.difficulty, Difficulty::Hard);
    }

    #[test]
    fn finished_round_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(dir.path());

        let mut round = ctx.new_round().unwrap();
        win(&mut round);
        assert_eq!(round.status(), RoundStatus::Won);

        let report = ctx.finish_round(&round).unwrap();
        assert_eq!(report.outcome, Outcome::Win);
        assert!(report.xp_gained > 0);

        let reopened = context(dir.path());
        assert_eq!(reopened.stats().stats().games_won, 1);
        assert_eq!(reopened.session().profile(), ctx.session().profile());
    }

    #[test]
    fn buying_and_using_by_slot() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("words.txt");
        std::fs::write(&list, "kot\n").unwrap();
        let mut ctx =
            GameContext::open(&DataDir::new(dir.path()), Preferences::default(), Some(&list))
                .unwrap();

        let (_, purchase) = ctx.buy_slot(1).unwrap().unwrap();
        assert_eq!(purchase, Purchase::NotEnoughXp);
        assert!(ctx.buy_slot(0).unwrap().is_none());
        assert!(ctx.buy_slot(99).unwrap().is_none());

        // 110 points plus the perfect game reward: level 2 with 110 XP left
        let mut round = ctx.new_round().unwrap();
        win(&mut round);
        ctx.finish_round(&round).unwrap();
        assert_eq!(ctx.session().profile().progression.experience(), 110);

        let (item, purchase) = ctx.buy_slot(1).unwrap().unwrap();
        assert_eq!(item.id, "potion_hint");
        assert_eq!(purchase, Purchase::Bought);
        assert_eq!(ctx.session().profile().progression.experience(), 60);

        // Outside a round the potion is kept
        assert_eq!(ctx.use_slot(1, None).unwrap(), Activation::NeedsRound);
        assert!(!ctx.session().profile().inventory.items()[0].used);

        let mut round = ctx.new_round().unwrap();
        let Activation::Used(used) = ctx.use_slot(1, Some(&mut round)).unwrap() else {
            panic!("potion was not used");
        };
        assert_eq!(used.revealed.len(), 1);
        assert_eq!(ctx.use_slot(1, Some(&mut round)).unwrap(), Activation::NotFound);
        assert_eq!(ctx.use_slot(2, None).unwrap(), Activation::NotFound);
    }

    #[test]
    fn language_switch_changes_word_list() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(dir.path());
        ctx.set_language(Language::English).unwrap();

        assert_eq!(ctx.texts().new_game, "New game");
        let round = ctx.new_round().unwrap();
        assert!(
            WordList::embedded(Language::English)
                .words()
                .iter()
                .any(|w| w == round.word())
        );
    }

    #[test]
    fn custom_word_list_survives_language_switch() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("words.txt");
        std::fs::write(&list, "zamek\n").unwrap();

        let mut ctx =
            GameContext::open(&DataDir::new(dir.path()), Preferences::default(), Some(&list))
                .unwrap();
        ctx.set_language(Language::English).unwrap();
        assert_eq!(ctx.new_round().unwrap().word(), "zamek");
    }
}
