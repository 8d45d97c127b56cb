//! Difficulty levels and their attempt budgets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty of a round
///
/// Fixes the number of wrong guesses a round tolerates before it is lost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in menu order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Map a menu selector (1, 2, 3) to a difficulty
    ///
    /// Any other value falls back to [`Difficulty::Medium`].
    ///
    /// # Examples
    /// ```
    /// use hangman_rpg::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_selector(1), Difficulty::Easy);
    /// assert_eq!(Difficulty::from_selector(3), Difficulty::Hard);
    /// assert_eq!(Difficulty::from_selector(42), Difficulty::Medium);
    /// ```
    #[must_use]
    pub const fn from_selector(selector: i64) -> Self {
        match selector {
            1 => Self::Easy,
            3 => Self::Hard,
            _ => Self::Medium,
        }
    }

    /// Menu selector for this difficulty
    #[must_use]
    pub const fn selector(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Maximum number of wrong guesses before the round is lost
    #[inline]
    #[must_use]
    pub const fn max_attempts(self) -> usize {
        match self {
            Self::Easy => 8,
            Self::Medium => 6,
            Self::Hard => 4,
        }
    }

    /// Recover a difficulty from a stored attempt budget
    #[must_use]
    pub const fn from_max_attempts(max_attempts: usize) -> Option<Self> {
        match max_attempts {
            8 => Some(Self::Easy),
            6 => Some(Self::Medium),
            4 => Some(Self::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        write!(f, "{name}")
    }
}
