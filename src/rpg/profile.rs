//! The persistent character: progression, quest log and inventory

use super::inventory::Inventory;
use super::progression::Progression;
use super::quest::{Quest, basic_quests};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub progression: Progression,
    #[serde(default = "basic_quests")]
    pub quests: Vec<Quest>,
    #[serde(default)]
    pub inventory: Inventory,
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}

impl Profile {
    /// A fresh level 1 character with the starting quest set and an empty inventory
    #[must_use]
    pub fn new() -> Self {
        Self {
            progression: Progression::new(),
            quests: basic_quests(),
            inventory: Inventory::default(),
        }
    }

    /// Quests still open, in list order
    pub fn active_quests(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(|q| !q.completed)
    }

    /// Finished quests, in list order
    pub fn completed_quests(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(|q| q.completed)
    }
}
