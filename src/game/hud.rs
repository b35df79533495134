//! HUD-side state: slot selection and the values shown on screen

use serde::{Deserialize, Serialize};

use crate::core::error::{check_slot, Result};
use crate::inventory::EquipmentSlot;
use crate::soldier::Soldier;

/// Owns the selected inventory slot. Selection is always in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    selected: usize,
    slots: usize,
}

impl Hud {
    pub fn new(slots: usize) -> Self {
        Self { selected: 0, slots }
    }

    pub fn selected_slot(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, slot: usize) -> Result<()> {
        check_slot(slot, self.slots)?;
        self.selected = slot;
        Ok(())
    }

    /// Mouse-wheel style selection, wrapping at both ends
    pub fn scroll(&mut self, step: i32) {
        if self.slots == 0 {
            return;
        }
        let slots = self.slots as i64;
        self.selected = (self.selected as i64 + step as i64).rem_euclid(slots) as usize;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityProgress {
    pub activity: String,
    pub progress: f32,
}

/// Everything the HUD draws for the player in one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub health: u32,
    pub armor: u32,
    pub selected_slot: usize,
    pub slots: Vec<String>,
    pub helmet: String,
    pub armor_piece: String,
    pub bullets_in_magazine: Option<u32>,
    pub bullets_in_ammo_boxes: Option<u32>,
    pub activity: Option<ActivityProgress>,
    pub firing: bool,
}

impl HudSnapshot {
    pub fn capture(hud: &Hud, soldier: &Soldier) -> Result<Self> {
        let selected = hud.selected_slot();
        let inventory = soldier.inventory();

        Ok(Self {
            health: soldier.health(),
            armor: soldier.armor_points(),
            selected_slot: selected,
            slots: inventory.items().iter().map(|item| item.name()).collect(),
            helmet: inventory.get_equipment(EquipmentSlot::Helmet).name(),
            armor_piece: inventory.get_equipment(EquipmentSlot::Armor).name(),
            bullets_in_magazine: soldier.bullets_in_magazine(selected)?,
            bullets_in_ammo_boxes: soldier.bullets_in_ammo_boxes(selected)?,
            activity: soldier.activity().map(|a| ActivityProgress {
                activity: a.kind.label().to_string(),
                progress: a.progress(),
            }),
            firing: soldier.is_firing(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MatchConfig;
    use crate::items::{AmmoType, ItemCatalog, WeaponModel};

    #[test]
    fn test_select_rejects_out_of_range() {
        let mut hud = Hud::new(5);
        assert!(hud.select(4).is_ok());
        assert!(hud.select(5).is_err());
        assert_eq!(hud.selected_slot(), 4);
    }

    #[test]
    fn test_scroll_wraps() {
        let mut hud = Hud::new(5);
        hud.scroll(-1);
        assert_eq!(hud.selected_slot(), 4);
        hud.scroll(3);
        assert_eq!(hud.selected_slot(), 2);
    }

    #[test]
    fn test_snapshot_weapon_counts() {
        let catalog = ItemCatalog::with_defaults();
        let mut soldier = Soldier::new(&MatchConfig::default());
        soldier
            .inventory_mut()
            .set_item(0, catalog.loaded_weapon(WeaponModel::G21))
            .unwrap();
        soldier
            .inventory_mut()
            .set_item(1, catalog.ammo_box(AmmoType::Nine, 20))
            .unwrap();

        let mut hud = Hud::new(5);
        let snapshot = HudSnapshot::capture(&hud, &soldier).unwrap();
        assert_eq!(snapshot.bullets_in_magazine, Some(17));
        assert_eq!(snapshot.bullets_in_ammo_boxes, Some(20));
        assert_eq!(snapshot.slots[1], "9mm (20)");

        hud.select(1).unwrap();
        let snapshot = HudSnapshot::capture(&hud, &soldier).unwrap();
        assert_eq!(snapshot.bullets_in_magazine, None);
        assert_eq!(snapshot.bullets_in_ammo_boxes, None);
    }
}
