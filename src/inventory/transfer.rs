//! Ammo transfer - refills the selected weapon's magazine from ammo boxes
//!
//! Boxes are drained strictly in ascending slot order. A depleted box is
//! replaced by Empty; a partially used box keeps its slot with a refreshed
//! name. Partial reloads are accepted when the boxes run out.

use crate::core::error::Result;
use crate::inventory::Inventory;
use crate::items::Item;

/// What a single transfer did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmmoTransfer {
    /// Bullets in the magazine after the transfer
    pub bullets: u32,
    /// Rounds moved from boxes into the magazine
    pub loaded: u32,
    /// Rounds the magazine still lacks
    pub still_needed: u32,
    /// Slots whose box was emptied and replaced
    pub depleted_slots: Vec<usize>,
}

impl Inventory {
    /// Fill the weapon in `selected` starting from `bullets_in_weapon`.
    ///
    /// Returns None (and changes nothing) when the slot is not a weapon.
    pub fn transfer_ammo(
        &mut self,
        selected: usize,
        bullets_in_weapon: u32,
    ) -> Result<Option<AmmoTransfer>> {
        let (capacity, ammo_type) = match self.get_item(selected)? {
            Item::Weapon(w) => (w.magazine_capacity, w.ammo_type),
            _ => return Ok(None),
        };

        let mut bullets = bullets_in_weapon.min(capacity);
        let mut needed = capacity - bullets;
        let mut depleted_slots = Vec::new();

        for (slot, item) in self.items.iter_mut().enumerate() {
            if needed == 0 {
                break;
            }
            let Item::Ammo(ammo_box) = item else {
                continue;
            };
            if ammo_box.ammo_type != ammo_type {
                continue;
            }

            if ammo_box.amount() >= needed {
                ammo_box.use_amount(needed);
                bullets += needed;
                needed = 0;
            } else {
                let taken = ammo_box.use_all();
                bullets += taken;
                needed -= taken;
            }

            if ammo_box.is_depleted() {
                *item = Item::Empty;
                depleted_slots.push(slot);
            } else {
                ammo_box.update_name();
            }
        }

        if let Some(weapon) = self.items[selected].as_weapon_mut() {
            weapon.set_bullets(bullets);
        }

        let transfer = AmmoTransfer {
            bullets,
            loaded: bullets - bullets_in_weapon.min(capacity),
            still_needed: needed,
            depleted_slots,
        };
        tracing::debug!(
            "Ammo transfer into slot {}: loaded {}, now {}/{}, boxes emptied {:?}",
            selected,
            transfer.loaded,
            transfer.bullets,
            capacity,
            transfer.depleted_slots
        );
        Ok(Some(transfer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{AmmoType, ItemCatalog, WeaponModel};

    fn rifle_with_bullets(catalog: &ItemCatalog, bullets: u32) -> Item {
        let mut rifle = catalog.weapon(WeaponModel::M20);
        rifle.as_weapon_mut().unwrap().set_bullets(bullets);
        rifle
    }

    #[test]
    fn test_two_boxes_fill_magazine() {
        let catalog = ItemCatalog::with_defaults();
        let mut inventory = Inventory::new(5);
        inventory.set_item(0, rifle_with_bullets(&catalog, 5)).unwrap();
        inventory.set_item(2, catalog.ammo_box(AmmoType::FiveFiveSix, 10)).unwrap();
        inventory.set_item(3, catalog.ammo_box(AmmoType::FiveFiveSix, 20)).unwrap();

        let transfer = inventory.transfer_ammo(0, 5).unwrap().unwrap();

        assert_eq!(transfer.bullets, 30);
        assert_eq!(transfer.loaded, 25);
        assert_eq!(transfer.still_needed, 0);
        assert_eq!(transfer.depleted_slots, vec![2]);
        assert_eq!(inventory.bullets_in_magazine(0).unwrap(), Some(30));
        assert!(inventory.get_item(2).unwrap().is_empty());

        let remaining = inventory.get_item(3).unwrap().as_ammo().unwrap();
        assert_eq!(remaining.amount(), 15);
        assert_eq!(remaining.name(), "5.56mm (15)");
    }

    #[test]
    fn test_partial_reload_when_short() {
        let catalog = ItemCatalog::with_defaults();
        let mut inventory = Inventory::new(3);
        inventory.set_item(0, rifle_with_bullets(&catalog, 0)).unwrap();
        inventory.set_item(1, catalog.ammo_box(AmmoType::FiveFiveSix, 7)).unwrap();

        let transfer = inventory.transfer_ammo(0, 0).unwrap().unwrap();
        assert_eq!(transfer.bullets, 7);
        assert_eq!(transfer.still_needed, 23);
        assert!(inventory.get_item(1).unwrap().is_empty());
    }

    #[test]
    fn test_other_ammo_types_untouched() {
        let catalog = ItemCatalog::with_defaults();
        let mut inventory = Inventory::new(3);
        inventory.set_item(0, rifle_with_bullets(&catalog, 10)).unwrap();
        inventory.set_item(1, catalog.ammo_box(AmmoType::Nine, 30)).unwrap();
        inventory.set_item(2, catalog.ammo_box(AmmoType::FiveFiveSix, 30)).unwrap();

        inventory.transfer_ammo(0, 10).unwrap();
        assert_eq!(inventory.ammo_count(AmmoType::Nine), 30);
        assert_eq!(inventory.ammo_count(AmmoType::FiveFiveSix), 10);
    }

    #[test]
    fn test_exact_fit_depletes_box() {
        let catalog = ItemCatalog::with_defaults();
        let mut inventory = Inventory::new(2);
        inventory.set_item(0, rifle_with_bullets(&catalog, 20)).unwrap();
        inventory.set_item(1, catalog.ammo_box(AmmoType::FiveFiveSix, 10)).unwrap();

        let transfer = inventory.transfer_ammo(0, 20).unwrap().unwrap();
        assert_eq!(transfer.bullets, 30);
        assert_eq!(transfer.depleted_slots, vec![1]);
    }

    #[test]
    fn test_non_weapon_selection_is_noop() {
        let catalog = ItemCatalog::with_defaults();
        let mut inventory = Inventory::new(2);
        inventory.set_item(0, catalog.medkit()).unwrap();
        inventory.set_item(1, catalog.ammo_box(AmmoType::Nine, 5)).unwrap();
        let before = inventory.clone();

        assert_eq!(inventory.transfer_ammo(0, 0).unwrap(), None);
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_full_magazine_consumes_nothing() {
        let catalog = ItemCatalog::with_defaults();
        let mut inventory = Inventory::new(2);
        inventory.set_item(0, catalog.loaded_weapon(WeaponModel::M20)).unwrap();
        inventory.set_item(1, catalog.ammo_box(AmmoType::FiveFiveSix, 5)).unwrap();

        let transfer = inventory.transfer_ammo(0, 30).unwrap().unwrap();
        assert_eq!(transfer.loaded, 0);
        assert_eq!(inventory.ammo_count(AmmoType::FiveFiveSix), 5);
        // Untouched box keeps its spawn name
        assert_eq!(inventory.get_item(1).unwrap().as_ammo().unwrap().name(), "5.56mm (5)");
    }
}
