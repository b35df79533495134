//! Property tests for ammo transfer bookkeeping

use proptest::prelude::*;

use rendezvous::inventory::Inventory;
use rendezvous::items::{AmmoType, Item, ItemCatalog, WeaponModel};

/// Slot layout after the weapon in slot 0: None = Empty, Some((matching, amount))
fn layout() -> impl Strategy<Value = Vec<Option<(bool, u32)>>> {
    prop::collection::vec(prop::option::of((any::<bool>(), 1u32..40)), 1..8)
}

fn build(bullets: u32, slots: &[Option<(bool, u32)>]) -> Inventory {
    let catalog = ItemCatalog::with_defaults();
    let mut inventory = Inventory::new(slots.len() + 1);
    let mut rifle = catalog.weapon(WeaponModel::M20);
    if let Some(weapon) = rifle.as_weapon_mut() {
        weapon.set_bullets(bullets);
    }
    inventory.set_item(0, rifle).unwrap();

    for (i, slot) in slots.iter().enumerate() {
        let item = match slot {
            Some((true, amount)) => catalog.ammo_box(AmmoType::FiveFiveSix, *amount),
            Some((false, amount)) => catalog.ammo_box(AmmoType::Nine, *amount),
            None => Item::Empty,
        };
        inventory.set_item(i + 1, item).unwrap();
    }
    inventory
}

proptest! {
    #[test]
    fn prop_transfer_conserves_ammo(bullets in 0u32..=30, slots in layout()) {
        let mut inventory = build(bullets, &slots);
        let before_boxes = inventory.ammo_count(AmmoType::FiveFiveSix);
        let other_before = inventory.ammo_count(AmmoType::Nine);

        let transfer = inventory.transfer_ammo(0, bullets).unwrap().unwrap();

        let after_boxes = inventory.ammo_count(AmmoType::FiveFiveSix);
        prop_assert_eq!(bullets + before_boxes, transfer.bullets + after_boxes);
        prop_assert_eq!(inventory.ammo_count(AmmoType::Nine), other_before);
        prop_assert!(transfer.bullets <= 30);
        prop_assert_eq!(inventory.bullets_in_magazine(0).unwrap(), Some(transfer.bullets));
    }

    #[test]
    fn prop_boxes_drain_in_slot_order(bullets in 0u32..=30, slots in layout()) {
        let mut inventory = build(bullets, &slots);
        inventory.transfer_ammo(0, bullets).unwrap();

        // Once a matching box survives, every later matching box is untouched
        let mut survivor_seen = false;
        for (i, slot) in slots.iter().enumerate() {
            let Some((true, amount)) = slot else { continue };
            let item = inventory.get_item(i + 1).unwrap();
            if survivor_seen {
                prop_assert_eq!(item.as_ammo().map(|a| a.amount()), Some(*amount));
            }
            if item.as_ammo().is_some() {
                survivor_seen = true;
            }
        }
    }

    #[test]
    fn prop_no_depleted_box_remains(bullets in 0u32..=30, slots in layout()) {
        let mut inventory = build(bullets, &slots);
        inventory.transfer_ammo(0, bullets).unwrap();
        for item in inventory.items() {
            if let Some(ammo_box) = item.as_ammo() {
                prop_assert!(ammo_box.amount() > 0);
            }
        }
    }
}
