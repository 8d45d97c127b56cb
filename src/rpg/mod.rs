//! RPG progression layer
//!
//! Experience and levels, attributes, quests and the inventory. Like [`crate::core`],
//! this module is pure state and arithmetic; persistence and display live elsewhere.

mod attributes;
mod inventory;
mod item;
mod profile;
mod progression;
mod quest;

pub use attributes::{AttributeType, Attributes, BASE_ATTRIBUTE_VALUE, NUM_ATTRIBUTES};
pub use inventory::{DEFAULT_CAPACITY, Inventory};
pub use item::{Effect, Item, ItemKind, Rarity, basic_items};
pub use profile::Profile;
pub use progression::{BASE_LEVEL_THRESHOLD, LevelUp, POINTS_PER_LEVEL, Progression};
pub use quest::{Quest, QuestUpdate, basic_quests, events, update_quests};
