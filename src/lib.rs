//! Hangman RPG
//!
//! A terminal word-guessing game with light role-playing progression: rounds earn
//! experience, levels grant attribute points, quests pay bonus experience and the
//! shop sells items for it.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_rpg::core::{Difficulty, Round, RoundStatus};
//! use hangman_rpg::rpg::Progression;
//!
//! let mut round = Round::new("żółw", Difficulty::Medium);
//! for letter in ['z', 'o', 'l', 'w'] {
//!     round.guess(letter);
//! }
//! assert_eq!(round.status(), RoundStatus::Won);
//!
//! let mut progression = Progression::new();
//! progression.add_experience(u64::try_from(round.score()).unwrap());
//! assert_eq!(progression.level(), 2);
//! ```

// Core game rules
pub mod core;

// Experience, attributes, quests and items
pub mod rpg;

// Rounds folded into the character
pub mod session;

// Automatic guessers
pub mod autoplay;

// Localized text
pub mod i18n;

// Word lists
pub mod wordlists;

// Statistics, preferences and profile files
pub mod storage;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
