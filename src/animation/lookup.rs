//! Equipment triple -> animation set

use super::region::AnimationRegion;
use super::resolver::EquipmentKey;
use crate::items::{ArmorModel, HelmetModel, ItemClass};

/// Read-only animation source injected into the resolver
pub trait AnimationLookup {
    fn lookup(&self, key: &EquipmentKey) -> AnimationRegion;
}

const SOLDIER: &str = "textures/animations/soldier-animation.pack";
const MEDKIT: &str = "textures/animations/soldier-medkit-animation.pack";
const MILITARY_VEST: &str = "textures/animations/soldier-military-vest-animation.pack";
const SOFT_VEST: &str = "textures/animations/soldier-soft-vest-animation.pack";
const COMBAT_HELMET: &str = "textures/animations/soldier-combat-helmet-animation.pack";
const HALF_HELMET: &str = "textures/animations/soldier-half-helmet-animation.pack";
const MV_COMBAT_HELMET: &str = "textures/animations/soldier-mv-combat-helmet-animation.pack";
const MV_HALF_HELMET: &str = "textures/animations/soldier-mv-half-helmet-animation.pack";
const SV_COMBAT_HELMET: &str = "textures/animations/soldier-sv-combat-helmet-animation.pack";
const SV_HALF_HELMET: &str = "textures/animations/soldier-sv-half-helmet-animation.pack";

/// Built-in soldier atlases
///
/// Holding a medkit has its own sheet; otherwise the worn armor and
/// helmet pick the sheet. Weapons share the unarmed body sheets.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtlasTable;

impl AtlasTable {
    pub fn new() -> Self {
        Self
    }

    pub fn atlas_for(key: &EquipmentKey) -> &'static str {
        if key.held == ItemClass::Medkit {
            return MEDKIT;
        }

        let armor = match key.armor {
            ItemClass::Armor(model) => Some(model),
            _ => None,
        };
        let helmet = match key.helmet {
            ItemClass::Helmet(model) => Some(model),
            _ => None,
        };

        match (armor, helmet) {
            (None, None) => SOLDIER,
            (Some(ArmorModel::MilitaryVest), None) => MILITARY_VEST,
            (Some(ArmorModel::SoftVest), None) => SOFT_VEST,
            (None, Some(HelmetModel::CombatHelmet)) => COMBAT_HELMET,
            (None, Some(HelmetModel::HalfHelmet)) => HALF_HELMET,
            (Some(ArmorModel::MilitaryVest), Some(HelmetModel::CombatHelmet)) => MV_COMBAT_HELMET,
            (Some(ArmorModel::MilitaryVest), Some(HelmetModel::HalfHelmet)) => MV_HALF_HELMET,
            (Some(ArmorModel::SoftVest), Some(HelmetModel::CombatHelmet)) => SV_COMBAT_HELMET,
            (Some(ArmorModel::SoftVest), Some(HelmetModel::HalfHelmet)) => SV_HALF_HELMET,
        }
    }
}

impl AnimationLookup for AtlasTable {
    fn lookup(&self, key: &EquipmentKey) -> AnimationRegion {
        AnimationRegion::soldier(Self::atlas_for(key))
    }
}
