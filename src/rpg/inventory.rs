//! Capacity-bounded item storage

use super::attributes::Attributes;
use super::item::{Effect, Item, ItemKind};
use serde::{Deserialize, Serialize};

/// Default number of item slots
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Inventory {
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Add an item
    ///
    /// Returns `false` and leaves the inventory unchanged when it is full.
    pub fn add_item(&mut self, item: Item) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Activate the first unused item with the given id
    ///
    /// Consumables are marked used and stay in the inventory; equipment is left as
    /// is. Returns the item's effects, or `None` when no unused item matches.
    pub fn use_item(&mut self, item_id: &str) -> Option<Vec<Effect>> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == item_id && !item.used)?;

        if item.kind == ItemKind::Consumable {
            item.used = true;
        }

        Some(item.effects.clone())
    }

    /// Attribute boosts granted by every piece of equipment carried
    #[must_use]
    pub fn equipment_bonus(&self) -> Attributes {
        let mut bonus = Attributes::zero();

        let effects = self
            .items
            .iter()
            .filter(|item| item.kind == ItemKind::Equipment)
            .flat_map(|item| item.effects.iter());

        for effect in effects {
            if let Some(attr) = effect.attribute() {
                bonus.raise(attr, effect.magnitude());
            }
        }

        bonus
    }

    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpg::item::{Rarity, basic_items};

    fn potion(id: &str) -> Item {
        Item::new(
            id,
            "Potion",
            "",
            ItemKind::Consumable,
            Rarity::Common,
            vec![Effect::RevealLetter(1)],
        )
    }

    #[test]
    fn eleventh_item_is_rejected() {
        let mut inventory = Inventory::default();
        for i in 0..10 {
            assert!(inventory.add_item(potion(&format!("p{i}"))));
        }

        assert!(inventory.is_full());
        assert!(!inventory.add_item(potion("overflow")));
        assert_eq!(inventory.len(), 10);
        assert!(inventory.items().iter().all(|item| item.id != "overflow"));
    }

    #[test]
    fn consumable_is_marked_used_and_kept() {
        let mut inventory = Inventory::default();
        inventory.add_item(potion("p"));

        let effects = inventory.use_item("p");
        assert_eq!(effects, Some(vec![Effect::RevealLetter(1)]));
        assert_eq!(inventory.len(), 1);
        assert!(inventory.items()[0].used);

        assert_eq!(inventory.use_item("p"), None);
    }

    #[test]
    fn duplicate_ids_use_next_unused() {
        let mut inventory = Inventory::default();
        inventory.add_item(potion("p"));
        inventory.add_item(potion("p"));

        assert!(inventory.use_item("p").is_some());
        assert!(inventory.use_item("p").is_some());
        assert!(inventory.use_item("p").is_none());
        assert!(inventory.items().iter().all(|item| item.used));
    }

    #[test]
    fn equipment_returns_effects_and_stays_unused() {
        let mut inventory = Inventory::default();
        let amulet = basic_items().swap_remove(2);
        inventory.add_item(amulet);

        let effects = inventory.use_item("amulet_wisdom");
        assert_eq!(effects, Some(vec![Effect::IntelligenceBoost(2)]));
        assert!(!inventory.items()[0].used);
        assert!(inventory.use_item("amulet_wisdom").is_some());
    }

    #[test]
    fn unknown_item_is_not_found() {
        let mut inventory = Inventory::default();
        inventory.add_item(potion("p"));
        assert_eq!(inventory.use_item("missing"), None);
        assert!(!inventory.items()[0].used);
    }

    #[test]
    fn equipment_bonus_sums_boosts() {
        let mut inventory = Inventory::default();
        for item in basic_items() {
            inventory.add_item(item);
        }

        let bonus = inventory.equipment_bonus();
        assert_eq!(bonus.intelligence, 2);
        assert_eq!(bonus.luck, 3);
        assert_eq!(bonus.perception, 0);
        assert_eq!(bonus.resilience, 0);
    }

    #[test]
    fn zero_capacity_inventory_rejects_everything() {
        let mut inventory = Inventory::new(0);
        assert!(!inventory.add_item(potion("p")));
        assert!(inventory.is_empty());
    }
}
