//! Items, rarities and effects

use super::attributes::AttributeType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Single use; marked used on activation
    Consumable,
    /// Passive while carried
    Equipment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl Rarity {
    /// Shop price in experience points
    #[must_use]
    pub const fn price(self) -> u64 {
        match self {
            Self::Common => 50,
            Self::Uncommon => 100,
            Self::Rare => 250,
            Self::Epic => 500,
            Self::Legendary => 1000,
        }
    }
}

/// An item effect with its magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Effect {
    /// Uncover this many hidden letters of the current word
    RevealLetter(u32),
    /// Additional attempts
    ExtraLife(u32),
    IntelligenceBoost(u32),
    LuckBoost(u32),
    PerceptionBoost(u32),
    ResilienceBoost(u32),
}

impl Effect {
    #[must_use]
    pub const fn magnitude(self) -> u32 {
        match self {
            Self::RevealLetter(n)
            | Self::ExtraLife(n)
            | Self::IntelligenceBoost(n)
            | Self::LuckBoost(n)
            | Self::PerceptionBoost(n)
            | Self::ResilienceBoost(n) => n,
        }
    }

    /// The attribute a boost raises, `None` for active effects
    #[must_use]
    pub const fn attribute(self) -> Option<AttributeType> {
        match self {
            Self::IntelligenceBoost(_) => Some(AttributeType::Intelligence),
            Self::LuckBoost(_) => Some(AttributeType::Luck),
            Self::PerceptionBoost(_) => Some(AttributeType::Perception),
            Self::ResilienceBoost(_) => Some(AttributeType::Resilience),
            Self::RevealLetter(_) | Self::ExtraLife(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: ItemKind,
    pub rarity: Rarity,
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub used: bool,
}

impl Item {
    #[must_use]
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        kind: ItemKind,
        rarity: Rarity,
        effects: Vec<Effect>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            kind,
            rarity,
            effects,
            used: false,
        }
    }

    #[must_use]
    pub fn is_consumable(&self) -> bool {
        self.kind == ItemKind::Consumable
    }
}

/// The shop catalogue
#[must_use]
pub fn basic_items() -> Vec<Item> {
    vec![
        Item::new(
            "potion_hint",
            "Potion of Hints",
            "Reveals a random letter in the current word",
            ItemKind::Consumable,
            Rarity::Common,
            vec![Effect::RevealLetter(1)],
        ),
        Item::new(
            "scroll_extra_life",
            "Scroll of Extra Life",
            "Grants one additional attempt",
            ItemKind::Consumable,
            Rarity::Uncommon,
            vec![Effect::ExtraLife(1)],
        ),
        Item::new(
            "amulet_wisdom",
            "Amulet of Wisdom",
            "Increases intelligence by 2 while carried",
            ItemKind::Equipment,
            Rarity::Rare,
            vec![Effect::IntelligenceBoost(2)],
        ),
        Item::new(
            "ring_fortune",
            "Ring of Fortune",
            "Increases luck by 3 while carried",
            ItemKind::Equipment,
            Rarity::Rare,
            vec![Effect::LuckBoost(3)],
        ),
    ]
}
