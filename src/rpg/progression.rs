//! Experience and leveling
//!
//! Experience carries over between levels: whatever exceeds the current threshold
//! counts towards the next one, so a single large award can grant several levels.

use super::attributes::Attributes;
use serde::{Deserialize, Serialize};

/// Experience needed to go from level 1 to level 2
pub const BASE_LEVEL_THRESHOLD: u64 = 100;

/// Attribute points granted per level gained
pub const POINTS_PER_LEVEL: u32 = 2;

/// Result of adding experience
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelUp {
    pub leveled_up: bool,
    pub levels_gained: u32,
}

/// Persistent level, experience and attributes of the player's character
///
/// `experience` is always strictly below `next_level_threshold` once
/// [`Progression::add_experience`] returns, and the threshold never drops below
/// [`BASE_LEVEL_THRESHOLD`]. Deserialization enforces the same: a level of 0 or a
/// lower threshold is rejected, and surplus experience is levelled up on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredProgression")]
pub struct Progression {
    level: u32,
    experience: u64,
    next_level_threshold: u64,
    attributes: Attributes,
}

/// Progression as written on disk, before validation
#[derive(Deserialize)]
struct StoredProgression {
    level: u32,
    experience: u64,
    next_level_threshold: u64,
    attributes: Attributes,
}

impl TryFrom<StoredProgression> for Progression {
    type Error = String;

    fn try_from(stored: StoredProgression) -> Result<Self, Self::Error> {
        if stored.level == 0 {
            return Err("level must be at least 1".to_string());
        }
        if stored.next_level_threshold < BASE_LEVEL_THRESHOLD {
            return Err(format!(
                "level threshold {} is below {BASE_LEVEL_THRESHOLD}",
                stored.next_level_threshold
            ));
        }

        let mut progression = Self {
            level: stored.level,
            experience: 0,
            next_level_threshold: stored.next_level_threshold,
            attributes: stored.attributes,
        };
        progression.add_experience(stored.experience);
        Ok(progression)
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}

impl Progression {
    /// Level 1, no experience, threshold 100
    #[must_use]
    pub const fn new() -> Self {
        Self {
            level: 1,
            experience: 0,
            next_level_threshold: BASE_LEVEL_THRESHOLD,
            attributes: Attributes::new(),
        }
    }

    /// Add experience, processing every level-up it triggers
    ///
    /// Each level gained subtracts the current threshold, grows the threshold by half
    /// (truncated) and grants [`POINTS_PER_LEVEL`] attribute points.
    ///
    /// # Examples
    /// ```
    /// use hangman_rpg::rpg::Progression;
    ///
    /// let mut progression = Progression::new();
    /// let result = progression.add_experience(250);
    ///
    /// assert!(result.leveled_up);
    /// assert_eq!(result.levels_gained, 2);
    /// assert_eq!(progression.level(), 3);
    /// assert_eq!(progression.experience(), 0);
    /// assert_eq!(progression.next_level_threshold(), 225);
    /// ```
    pub fn add_experience(&mut self, xp: u64) -> LevelUp {
        self.experience = self.experience.saturating_add(xp);
        let mut levels_gained = 0;

        while self.experience >= self.next_level_threshold {
            self.level += 1;
            levels_gained += 1;
            self.experience -= self.next_level_threshold;
            self.next_level_threshold += self.next_level_threshold / 2;
            self.attributes.add_points(POINTS_PER_LEVEL);
        }

        LevelUp {
            leveled_up: levels_gained > 0,
            levels_gained,
        }
    }

    /// Spend experience from the current level's progress
    ///
    /// Returns `false` without spending when `cost` exceeds the available
    /// experience. Spending never lowers the level.
    pub fn spend_experience(&mut self, cost: u64) -> bool {
        if cost > self.experience {
            return false;
        }
        self.experience -= cost;
        true
    }

    #[inline]
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    #[must_use]
    pub const fn experience(&self) -> u64 {
        self.experience
    }

    #[inline]
    #[must_use]
    pub const fn next_level_threshold(&self) -> u64 {
        self.next_level_threshold
    }

    #[inline]
    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Fraction (0.0-1.0) of the way to the next level
    #[must_use]
    pub fn xp_progress(&self) -> f64 {
        (self.experience as f64 / self.next_level_threshold as f64).min(1.0)
    }
}
