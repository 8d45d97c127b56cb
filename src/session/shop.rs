//! Item shop: items are paid for with experience

use crate::rpg::{Item, Profile, basic_items};
use tracing::info;

/// Result of a purchase attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purchase {
    Bought,
    NotEnoughXp,
    InventoryFull,
}

/// Items on sale, in display order
#[must_use]
pub fn shop_catalogue() -> Vec<Item> {
    basic_items()
}

pub(super) fn buy(profile: &mut Profile, item: &Item) -> Purchase {
    if profile.inventory.is_full() {
        return Purchase::InventoryFull;
    }

    let price = item.rarity.price();
    if !profile.progression.spend_experience(price) {
        return Purchase::NotEnoughXp;
    }

    let mut bought = item.clone();
    bought.used = false;
    profile.inventory.add_item(bought);

    info!(item = %item.id, price, "item bought");
    Purchase::Bought
}
