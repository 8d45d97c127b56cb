//! Word lists for the game
//!
//! Provides embedded per-language word lists compiled into the binary, plus a
//! [`WordList`] that hands out one random word per round.

mod embedded;
pub mod loader;

pub use embedded::{WORDS_EN, WORDS_PL};
pub use loader::WordListError;

use crate::i18n::Language;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::Path;

/// Source of candidate words, one per new round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// The list compiled in for a language
    #[must_use]
    pub fn embedded(language: Language) -> Self {
        let slice = match language {
            Language::Polish => WORDS_PL,
            Language::English => WORDS_EN,
        };
        Self::new(loader::words_from_slice(slice))
    }

    /// Load a custom list from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains no words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        loader::load_from_file(path).map(Self::new)
    }

    /// Pick a random word, or `None` if the list is empty
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
