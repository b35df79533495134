//! Incoming hits and armor mitigation
//!
//! Head hits are taken by the helmet, body hits by the armor. A piece
//! absorbs damage until its rated capacity is used up; whatever it cannot
//! absorb reaches health.

use serde::{Deserialize, Serialize};

use super::Soldier;
use crate::inventory::EquipmentSlot;
use crate::items::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitZone {
    Head,
    Body,
}

impl HitZone {
    fn protected_by(&self) -> EquipmentSlot {
        match self {
            HitZone::Head => EquipmentSlot::Helmet,
            HitZone::Body => EquipmentSlot::Armor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HitReport {
    /// Damage soaked up by the protecting piece
    pub absorbed: u32,
    /// Damage that reached health
    pub health_damage: u32,
    /// Integrity of the protecting piece after the hit, if one is worn
    pub integrity: Option<u32>,
}

impl Soldier {
    pub fn take_hit(&mut self, damage: u32, zone: HitZone) -> HitReport {
        let piece = self.inventory.get_equipment_mut(zone.protected_by());
        let protection = match piece {
            Item::Armor(armor) => Some(&mut armor.protection),
            Item::Helmet(helmet) => Some(&mut helmet.protection),
            _ => None,
        };

        let (absorbed, integrity) = match protection {
            Some(p) => {
                let absorbed = p.absorb(damage);
                (absorbed, Some(p.integrity()))
            }
            None => (0, None),
        };

        let health_damage = damage - absorbed;
        self.change_health(-(health_damage.min(i32::MAX as u32) as i32));
        self.armor_points = self.inventory.armor_points();

        tracing::debug!(
            "{:?} hit for {}: absorbed {}, health now {}",
            zone,
            damage,
            absorbed,
            self.health
        );

        HitReport {
            absorbed,
            health_damage,
            integrity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MatchConfig;
    use crate::items::{ArmorModel, HelmetModel, ItemCatalog};

    fn armored_soldier() -> Soldier {
        let catalog = ItemCatalog::with_defaults();
        let mut soldier = Soldier::new(&MatchConfig::default());
        soldier
            .inventory_mut()
            .set_equipment(EquipmentSlot::Armor, catalog.armor(ArmorModel::SoftVest));
        soldier
            .inventory_mut()
            .set_equipment(EquipmentSlot::Helmet, catalog.helmet(HelmetModel::HalfHelmet));
        soldier
    }

    #[test]
    fn test_unprotected_hit_goes_to_health() {
        let mut soldier = Soldier::new(&MatchConfig::default());
        let report = soldier.take_hit(30, HitZone::Body);
        assert_eq!(report.absorbed, 0);
        assert_eq!(report.integrity, None);
        assert_eq!(soldier.health(), 70);
    }

    #[test]
    fn test_armor_absorbs_body_hit() {
        let mut soldier = armored_soldier();
        let report = soldier.take_hit(40, HitZone::Body);
        assert_eq!(report.absorbed, 40);
        assert_eq!(report.health_damage, 0);
        // Soft vest rated 80
        assert_eq!(report.integrity, Some(50));
        assert_eq!(soldier.armor_points(), 50);
        assert_eq!(soldier.health(), 100);
    }

    #[test]
    fn test_exhausted_armor_passes_remainder() {
        let mut soldier = armored_soldier();
        soldier.take_hit(70, HitZone::Body);
        let report = soldier.take_hit(30, HitZone::Body);
        assert_eq!(report.absorbed, 10);
        assert_eq!(report.health_damage, 20);
        assert_eq!(report.integrity, Some(0));
        assert_eq!(soldier.health(), 80);
    }

    #[test]
    fn test_head_hit_uses_helmet_only() {
        let mut soldier = armored_soldier();
        let report = soldier.take_hit(60, HitZone::Head);
        // Half helmet rated 50
        assert_eq!(report.absorbed, 50);
        assert_eq!(soldier.health(), 90);
        assert_eq!(soldier.armor_points(), 100);
    }

    #[test]
    fn test_lethal_hit_clamps_to_zero() {
        let mut soldier = Soldier::new(&MatchConfig::default());
        soldier.take_hit(250, HitZone::Head);
        assert_eq!(soldier.health(), 0);
        assert!(soldier.is_dead());
    }
}
