//! Localized interface text
//!
//! One [`Texts`] table per [`Language`]. Callers look the table up once and pass it
//! to whatever renders; nothing here is global.

mod english;
mod polish;

use crate::core::Difficulty;
use crate::rpg::{AttributeType, Item, Quest, Rarity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::Polish, Self::English];

    /// ISO 639-1 code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Polish => "pl",
            Self::English => "en",
        }
    }

    /// The language's name written in that language
    #[must_use]
    pub const fn self_name(self) -> &'static str {
        match self {
            Self::Polish => "Polski",
            Self::English => "English",
        }
    }

    /// The text table for this language
    #[must_use]
    pub fn texts(self) -> &'static Texts {
        match self {
            Self::Polish => &polish::TEXTS,
            Self::English => &english::TEXTS,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pl" | "polish" | "polski" => Ok(Self::Polish),
            "en" | "english" => Ok(Self::English),
            other => Err(format!("Unknown language: {other}")),
        }
    }
}

/// Translated name and description of a catalogue item or quest
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

fn find_entry(entries: &'static [Entry], id: &str) -> Option<&'static Entry> {
    entries.iter().find(|entry| entry.id == id)
}

/// Every user-facing string of the game
#[derive(Debug)]
pub struct Texts {
    // Menus
    pub title: &'static str,
    pub main_menu: &'static str,
    pub new_game: &'static str,
    pub difficulty: &'static str,
    pub statistics: &'static str,
    pub inventory: &'static str,
    pub quest_log: &'static str,
    pub shop: &'static str,
    pub character: &'static str,
    pub language: &'static str,
    pub exit: &'static str,
    pub select_option: &'static str,
    pub invalid_option: &'static str,
    pub press_enter: &'static str,

    // Difficulty
    pub easy: &'static str,
    pub medium: &'static str,
    pub hard: &'static str,
    pub difficulty_set: &'static str,
    pub default_difficulty: &'static str,

    // Gameplay
    pub word: &'static str,
    pub wrong_guesses: &'static str,
    pub remaining_attempts: &'static str,
    pub points: &'static str,
    pub progress: &'static str,
    pub enter_letter: &'static str,
    pub invalid_character: &'static str,
    pub already_guessed: &'static str,

    // Round end
    pub congratulations: &'static str,
    pub you_won: &'static str,
    pub you_lost: &'static str,
    pub you_earned: &'static str,
    pub points_suffix: &'static str,

    // Character
    pub level: &'static str,
    pub experience: &'static str,
    pub intelligence: &'static str,
    pub luck: &'static str,
    pub perception: &'static str,
    pub resilience: &'static str,
    pub hint_chance: &'static str,
    pub mistake_avoidance: &'static str,
    pub points_per_hit: &'static str,
    pub extra_attempts: &'static str,
    pub level_up: &'static str,
    pub quest_completed: &'static str,

    // Quests, items, shop
    pub active_quests: &'static str,
    pub completed_quests: &'static str,
    pub no_active_quests: &'static str,
    pub reward: &'static str,
    pub empty_inventory: &'static str,
    pub used: &'static str,
    pub price: &'static str,
    pub your_xp: &'static str,
    pub bought: &'static str,
    pub not_enough_xp: &'static str,
    pub inventory_full: &'static str,
    pub item_not_found: &'static str,
    pub back: &'static str,
    pub item_used: &'static str,
    pub item_no_effect: &'static str,
    pub revealed: &'static str,
    pub select_item: &'static str,
    pub select_purchase: &'static str,
    pub item_hint: &'static str,
    pub round_over_hint: &'static str,
    pub item_needs_round: &'static str,
    /// Indexed by [`Rarity`] discriminant
    pub rarities: [&'static str; 5],
    /// Translated catalogue entries; ids missing here keep their stored text
    pub items: &'static [Entry],
    pub quests: &'static [Entry],

    // Statistics
    pub games_played: &'static str,
    pub games_won: &'static str,
    pub win_rate: &'static str,
    pub total_points: &'static str,
    pub average_score: &'static str,
    pub highest_score: &'static str,
    pub recent_games: &'static str,
    pub won: &'static str,
    pub lost: &'static str,
}

impl Texts {
    /// Menu label of a difficulty, including its attempt budget
    #[must_use]
    pub const fn difficulty_name(&self, difficulty: Difficulty) -> &'static str {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    #[must_use]
    pub const fn attribute_name(&self, attribute: AttributeType) -> &'static str {
        match attribute {
            AttributeType::Intelligence => self.intelligence,
            AttributeType::Luck => self.luck,
            AttributeType::Perception => self.perception,
            AttributeType::Resilience => self.resilience,
        }
    }

    #[must_use]
    pub const fn rarity_name(&self, rarity: Rarity) -> &'static str {
        self.rarities[rarity as usize]
    }

    #[must_use]
    pub fn item_name<'a>(&self, item: &'a Item) -> &'a str {
        find_entry(self.items, &item.id).map_or(item.name.as_str(), |entry| entry.name)
    }

    #[must_use]
    pub fn item_description<'a>(&self, item: &'a Item) -> &'a str {
        find_entry(self.items, &item.id).map_or(item.description.as_str(), |entry| {
            entry.description
        })
    }

    #[must_use]
    pub fn quest_name<'a>(&self, quest: &'a Quest) -> &'a str {
        find_entry(self.quests, &quest.id).map_or(quest.name.as_str(), |entry| entry.name)
    }

    #[must_use]
    pub fn quest_description<'a>(&self, quest: &'a Quest) -> &'a str {
        find_entry(self.quests, &quest.id).map_or(quest.description.as_str(), |entry| {
            entry.description
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpg::{basic_items, basic_quests};

    #[test]
    fn language_codes() {
        assert_eq!(Language::Polish.code(), "pl");
        assert_eq!(Language::English.code(), "en");
    }

    #[test]
    fn language_from_str() {
        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert_eq!(" PL ".parse::<Language>(), Ok(Language::Polish));
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn language_serializes_as_code() {
        let json = serde_json::to_string(&Language::English).unwrap();
        assert_eq!(json, "\"en\"");
        let parsed: Language = serde_json::from_str("\"pl\"").unwrap();
        assert_eq!(parsed, Language::Polish);
    }

    #[test]
    fn tables_differ_per_language() {
        assert_ne!(Language::Polish.texts().new_game, Language::English.texts().new_game);
        assert_eq!(Language::English.texts().new_game, "New game");
    }

    #[test]
    fn catalogue_is_translated_to_polish() {
        let texts = Language::Polish.texts();
        let potion = basic_items().into_iter().find(|i| i.id == "potion_hint").unwrap();

        assert_eq!(texts.item_name(&potion), "Mikstura Podpowiedzi");
        assert_eq!(texts.rarity_name(potion.rarity), "Pospolity");
        assert_eq!(texts.quest_name(&basic_quests()[1]), "Perfekcyjna Gra");
    }

    #[test]
    fn every_catalogue_entry_has_polish_text() {
        let texts = Language::Polish.texts();
        for item in basic_items() {
            assert_ne!(texts.item_name(&item), item.name, "{}", item.id);
            assert_ne!(texts.item_description(&item), item.description, "{}", item.id);
        }
        for quest in basic_quests() {
            assert_ne!(texts.quest_name(&quest), quest.name, "{}", quest.id);
            assert_ne!(texts.quest_description(&quest), quest.description, "{}", quest.id);
        }
    }

    #[test]
    fn english_keeps_catalogue_text() {
        let texts = Language::English.texts();
        let ring = basic_items().into_iter().find(|i| i.id == "ring_fortune").unwrap();

        assert_eq!(texts.item_name(&ring), "Ring of Fortune");
        assert_eq!(texts.rarity_name(ring.rarity), "Rare");
    }

    #[test]
    fn unknown_ids_keep_stored_text() {
        let quest = Quest::new("custom", "Custom", "Do a thing", "win_games", 1, 10);
        assert_eq!(Language::Polish.texts().quest_name(&quest), "Custom");
    }

    #[test]
    fn difficulty_names_mention_budget() {
        for language in Language::ALL {
            let texts = language.texts();
            for difficulty in Difficulty::ALL {
                let name = texts.difficulty_name(difficulty);
                assert!(name.contains(&difficulty.max_attempts().to_string()));
            }
        }
    }
}
