//! Soldier inventory
//!
//! A fixed number of general slots plus two equipment slots kept apart
//! from them. Every slot always holds an `Item`; removing an item leaves
//! `Item::Empty` behind.

pub mod transfer;

use serde::{Deserialize, Serialize};

use crate::core::error::{check_slot, RendezvousError, Result};
use crate::items::{AmmoType, Item};

pub use transfer::AmmoTransfer;

/// The two fixed equipment positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Helmet = 0,
    Armor = 1,
}

impl EquipmentSlot {
    pub const COUNT: usize = 2;

    /// Equipment slot a protection item belongs in, if any
    pub fn for_item(item: &Item) -> Option<Self> {
        match item {
            Item::Helmet(_) => Some(EquipmentSlot::Helmet),
            Item::Armor(_) => Some(EquipmentSlot::Armor),
            _ => None,
        }
    }
}

impl TryFrom<usize> for EquipmentSlot {
    type Error = RendezvousError;

    fn try_from(index: usize) -> Result<Self> {
        match index {
            0 => Ok(EquipmentSlot::Helmet),
            1 => Ok(EquipmentSlot::Armor),
            _ => Err(RendezvousError::OutOfRange {
                index,
                len: Self::COUNT,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    equipment: [Item; EquipmentSlot::COUNT],
}

impl Inventory {
    /// Inventory with `slots` general slots, all Empty
    pub fn new(slots: usize) -> Self {
        Self {
            items: vec![Item::Empty; slots],
            equipment: [Item::Empty, Item::Empty],
        }
    }

    /// Number of general slots
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.iter().all(Item::is_empty)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get_item(&self, slot: usize) -> Result<&Item> {
        check_slot(slot, self.items.len())?;
        Ok(&self.items[slot])
    }

    pub fn get_item_mut(&mut self, slot: usize) -> Result<&mut Item> {
        check_slot(slot, self.items.len())?;
        Ok(&mut self.items[slot])
    }

    /// Replace a slot's occupant, returning the previous one.
    ///
    /// No kind check happens here; callers decide what may go where.
    pub fn set_item(&mut self, slot: usize, item: Item) -> Result<Item> {
        let current = self.get_item_mut(slot)?;
        Ok(std::mem::replace(current, item))
    }

    /// Move an item out, leaving Empty in its slot
    pub fn take_item(&mut self, slot: usize) -> Result<Item> {
        self.set_item(slot, Item::Empty)
    }

    pub fn get_equipment(&self, slot: EquipmentSlot) -> &Item {
        &self.equipment[slot as usize]
    }

    pub fn get_equipment_mut(&mut self, slot: EquipmentSlot) -> &mut Item {
        &mut self.equipment[slot as usize]
    }

    /// Index form of `get_equipment` (0 = helmet, 1 = armor)
    pub fn get_equipment_at(&self, index: usize) -> Result<&Item> {
        let slot = EquipmentSlot::try_from(index)?;
        Ok(self.get_equipment(slot))
    }

    pub fn set_equipment(&mut self, slot: EquipmentSlot, item: Item) -> Item {
        std::mem::replace(&mut self.equipment[slot as usize], item)
    }

    pub fn first_empty_slot(&self) -> Option<usize> {
        self.items.iter().position(Item::is_empty)
    }

    /// Total rounds held in boxes of `ammo_type`
    pub fn ammo_count(&self, ammo_type: AmmoType) -> u32 {
        self.items
            .iter()
            .filter_map(Item::as_ammo)
            .filter(|a| a.ammo_type == ammo_type)
            .map(|a| a.amount())
            .sum()
    }

    pub fn has_ammo_for(&self, ammo_type: AmmoType) -> bool {
        self.ammo_count(ammo_type) > 0
    }

    /// Bullets loaded in the selected weapon, None if it is not a weapon
    pub fn bullets_in_magazine(&self, selected: usize) -> Result<Option<u32>> {
        Ok(self.get_item(selected)?.as_weapon().map(|w| w.bullets()))
    }

    /// Matching rounds in boxes for the selected weapon, None if it is not a weapon
    pub fn bullets_in_ammo_boxes(&self, selected: usize) -> Result<Option<u32>> {
        Ok(self
            .get_item(selected)?
            .as_weapon()
            .map(|w| self.ammo_count(w.ammo_type)))
    }

    /// Integrity of the equipped armor, 0 when none is worn
    pub fn armor_points(&self) -> u32 {
        match self.get_equipment(EquipmentSlot::Armor) {
            Item::Armor(armor) => armor.protection.integrity(),
            _ => 0,
        }
    }

    /// Move an armor or helmet from a general slot into its equipment slot.
    ///
    /// Whatever was equipped there before takes the general slot. Returns
    /// false without touching anything when the slot holds another kind.
    pub fn equip_from_slot(&mut self, slot: usize) -> Result<bool> {
        let Some(target) = EquipmentSlot::for_item(self.get_item(slot)?) else {
            return Ok(false);
        };
        let incoming = self.take_item(slot)?;
        let previous = self.set_equipment(target, incoming);
        self.items[slot] = previous;
        Ok(true)
    }

    /// Move an equipped piece into the first Empty general slot.
    ///
    /// Returns false when nothing is equipped or no slot is free.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> bool {
        if self.get_equipment(slot).is_empty() {
            return false;
        }
        let Some(free) = self.first_empty_slot() else {
            return false;
        };
        let removed = self.set_equipment(slot, Item::Empty);
        self.items[free] = removed;
        true
    }
}
