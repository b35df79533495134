//! Chests and the two-way item exchange with soldier inventories

pub mod container;
pub mod exchange;

pub use container::LootContainer;
pub use exchange::{inventory_to_loot, loot_to_inventory, move_item, Exchange, SlotStore};
