//! Loot exchange - moving items between chests and inventories
//!
//! A move takes the item out of its source slot (leaving Empty) and puts
//! it into the destination's first Empty slot. When the destination is
//! full nothing moves; no item is ever dropped.

use crate::core::error::{check_slot, Result};
use crate::inventory::Inventory;
use crate::items::Item;
use crate::loot::container::LootContainer;

/// A collection of slots that items can be moved in and out of
pub trait SlotStore {
    fn slot_count(&self) -> usize;

    fn slot(&self, index: usize) -> Result<&Item>;

    /// Put `item` into `index`, returning the previous occupant
    fn replace(&mut self, index: usize, item: Item) -> Result<Item>;

    fn first_empty(&self) -> Option<usize>;
}

impl SlotStore for Inventory {
    fn slot_count(&self) -> usize {
        self.len()
    }

    fn slot(&self, index: usize) -> Result<&Item> {
        self.get_item(index)
    }

    fn replace(&mut self, index: usize, item: Item) -> Result<Item> {
        self.set_item(index, item)
    }

    fn first_empty(&self) -> Option<usize> {
        self.first_empty_slot()
    }
}

impl SlotStore for LootContainer {
    fn slot_count(&self) -> usize {
        self.len()
    }

    fn slot(&self, index: usize) -> Result<&Item> {
        self.get_item(index)
    }

    fn replace(&mut self, index: usize, item: Item) -> Result<Item> {
        check_slot(index, self.slots.len())?;
        Ok(std::mem::replace(&mut self.slots[index], item))
    }

    fn first_empty(&self) -> Option<usize> {
        self.first_empty_slot()
    }
}

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    Moved { from: usize, to: usize },
    /// Destination had no Empty slot
    NoRoom,
    /// Source slot was Empty
    NothingToMove,
}

/// Move the item in `source[slot]` to the first Empty slot of `destination`
pub fn move_item<S, D>(source: &mut S, slot: usize, destination: &mut D) -> Result<Exchange>
where
    S: SlotStore + ?Sized,
    D: SlotStore + ?Sized,
{
    if source.slot(slot)?.is_empty() {
        return Ok(Exchange::NothingToMove);
    }
    let Some(to) = destination.first_empty() else {
        return Ok(Exchange::NoRoom);
    };

    let item = source.replace(slot, Item::Empty)?;
    tracing::debug!("Moved {} from slot {} to slot {}", item, slot, to);
    destination.replace(to, item)?;
    Ok(Exchange::Moved { from: slot, to })
}

/// Take an item out of a chest into the inventory
pub fn loot_to_inventory(
    container: &mut LootContainer,
    slot: usize,
    inventory: &mut Inventory,
) -> Result<Exchange> {
    move_item(container, slot, inventory)
}

/// Stash an inventory item into a chest
pub fn inventory_to_loot(
    inventory: &mut Inventory,
    slot: usize,
    container: &mut LootContainer,
) -> Result<Exchange> {
    move_item(inventory, slot, container)
}
