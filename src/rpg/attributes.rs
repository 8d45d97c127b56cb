//! Character attributes and the bonuses derived from them

use serde::{Deserialize, Serialize};

/// Number of character attributes
pub const NUM_ATTRIBUTES: usize = 4;

/// Starting value of every attribute on a new character
pub const BASE_ATTRIBUTE_VALUE: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeType {
    Intelligence,
    Luck,
    Perception,
    Resilience,
}

impl AttributeType {
    #[must_use]
    pub const fn all() -> [Self; NUM_ATTRIBUTES] {
        [
            Self::Intelligence,
            Self::Luck,
            Self::Perception,
            Self::Resilience,
        ]
    }

    #[must_use]
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Intelligence => "INT",
            Self::Luck => "LCK",
            Self::Perception => "PER",
            Self::Resilience => "RES",
        }
    }
}

/// The four character stats
///
/// Values only ever grow: level-ups add points and nothing drains them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub intelligence: u32,
    pub luck: u32,
    pub perception: u32,
    pub resilience: u32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

impl Attributes {
    /// A fresh character with every attribute at [`BASE_ATTRIBUTE_VALUE`]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            intelligence: BASE_ATTRIBUTE_VALUE,
            luck: BASE_ATTRIBUTE_VALUE,
            perception: BASE_ATTRIBUTE_VALUE,
            resilience: BASE_ATTRIBUTE_VALUE,
        }
    }

    /// All attributes at zero, used to accumulate equipment bonuses
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            intelligence: 0,
            luck: 0,
            perception: 0,
            resilience: 0,
        }
    }

    #[must_use]
    pub const fn get(&self, attr: AttributeType) -> u32 {
        match attr {
            AttributeType::Intelligence => self.intelligence,
            AttributeType::Luck => self.luck,
            AttributeType::Perception => self.perception,
            AttributeType::Resilience => self.resilience,
        }
    }

    pub fn raise(&mut self, attr: AttributeType, amount: u32) {
        let value = match attr {
            AttributeType::Intelligence => &mut self.intelligence,
            AttributeType::Luck => &mut self.luck,
            AttributeType::Perception => &mut self.perception,
            AttributeType::Resilience => &mut self.resilience,
        };
        *value = value.saturating_add(amount);
    }

    /// Distribute attribute points
    ///
    /// Every attribute receives `points / 4`; the remainder (0-3) goes entirely to
    /// Intelligence.
    ///
    /// # Examples
    /// ```
    /// use hangman_rpg::rpg::Attributes;
    ///
    /// let mut attrs = Attributes::new();
    /// attrs.add_points(2);
    /// assert_eq!(attrs.intelligence, 3);
    /// assert_eq!(attrs.luck, 1);
    /// ```
    pub fn add_points(&mut self, points: u32) {
        let share = points / NUM_ATTRIBUTES as u32;
        let remainder = points % NUM_ATTRIBUTES as u32;

        self.intelligence = self.intelligence.saturating_add(share + remainder);
        self.luck = self.luck.saturating_add(share);
        self.perception = self.perception.saturating_add(share);
        self.resilience = self.resilience.saturating_add(share);
    }

    /// Sum in another set, e.g. equipment bonuses
    pub fn add(&mut self, other: &Self) {
        self.intelligence = self.intelligence.saturating_add(other.intelligence);
        self.luck = self.luck.saturating_add(other.luck);
        self.perception = self.perception.saturating_add(other.perception);
        self.resilience = self.resilience.saturating_add(other.resilience);
    }

    /// Chance of receiving a hint: 2% per Intelligence point
    #[must_use]
    pub fn hint_chance(&self) -> f64 {
        f64::from(self.intelligence) * 0.02
    }

    /// Chance of a mistake not costing an attempt: 1.5% per Luck point
    #[must_use]
    pub fn mistake_avoidance_chance(&self) -> f64 {
        f64::from(self.luck) * 0.015
    }

    /// Flat score bonus per correct letter: one per Perception point
    #[must_use]
    pub const fn hit_bonus(&self) -> u32 {
        self.perception
    }

    /// Extra attempts: one per three Resilience points
    #[must_use]
    pub const fn extra_attempts(&self) -> u32 {
        self.resilience / 3
    }
}
