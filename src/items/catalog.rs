//! Item catalog - static stats for every item model
//!
//! The catalog is always complete: TOML files only override the stats of
//! the models they name, everything else keeps its built-in value.

use ahash::AHashMap;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::path::Path;

use super::item::{AmmoBox, Armor, Helmet, Item, ItemClass, Medkit, Protection, Weapon};
use crate::core::error::{RendezvousError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponModel {
    /// Bolt-action rifle
    Aw3,
    /// Pistol
    G21,
    /// Assault rifle
    M20,
    /// Compact pistol
    P26,
    /// Submachine gun
    Star,
    /// Battle rifle
    W16a,
}

impl WeaponModel {
    pub const ALL: [WeaponModel; 6] = [
        WeaponModel::Aw3,
        WeaponModel::G21,
        WeaponModel::M20,
        WeaponModel::P26,
        WeaponModel::Star,
        WeaponModel::W16a,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WeaponModel::Aw3 => "AW3",
            WeaponModel::G21 => "G21",
            WeaponModel::M20 => "M20",
            WeaponModel::P26 => "P26",
            WeaponModel::Star => "Star",
            WeaponModel::W16a => "W16A",
        }
    }
}

/// Ammo-type tag linking weapons to the boxes that reload them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmmoType {
    FiveFiveSix,
    Nine,
    SevenSixTwo,
}

impl AmmoType {
    pub const ALL: [AmmoType; 3] = [AmmoType::FiveFiveSix, AmmoType::Nine, AmmoType::SevenSixTwo];

    pub fn label(&self) -> &'static str {
        match self {
            AmmoType::FiveFiveSix => "5.56mm",
            AmmoType::Nine => "9mm",
            AmmoType::SevenSixTwo => "7.62mm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorModel {
    MilitaryVest,
    SoftVest,
}

impl ArmorModel {
    pub const ALL: [ArmorModel; 2] = [ArmorModel::MilitaryVest, ArmorModel::SoftVest];

    pub fn label(&self) -> &'static str {
        match self {
            ArmorModel::MilitaryVest => "Military Vest",
            ArmorModel::SoftVest => "Soft Vest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HelmetModel {
    CombatHelmet,
    HalfHelmet,
}

impl HelmetModel {
    pub const ALL: [HelmetModel; 2] = [HelmetModel::CombatHelmet, HelmetModel::HalfHelmet];

    pub fn label(&self) -> &'static str {
        match self {
            HelmetModel::CombatHelmet => "Combat Helmet",
            HelmetModel::HalfHelmet => "Half Helmet",
        }
    }
}

impl fmt::Display for WeaponModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for AmmoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub magazine_capacity: u32,
    pub ammo_type: AmmoType,
    pub time_to_reload: f32,
    pub time_to_fire: f32,
    pub damage: u32,
    #[serde(default)]
    pub automatic: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmmoStats {
    /// Rounds in a freshly spawned box
    pub box_size: u32,
}

/// Rated capacity of an armor or helmet model
///
/// Zero is unrepresentable; a zero in a catalog file is a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtectionStats {
    pub capacity: NonZeroU32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedkitStats {
    pub heal_amount: u32,
    pub time_to_use: f32,
}

/// Catalog of every item model's static stats
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    weapons: AHashMap<WeaponModel, WeaponStats>,
    ammo: AHashMap<AmmoType, AmmoStats>,
    armor: AHashMap<ArmorModel, ProtectionStats>,
    helmets: AHashMap<HelmetModel, ProtectionStats>,
    medkit: MedkitStats,
}

/// Partial catalog as written in TOML
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogOverrides {
    weapons: AHashMap<WeaponModel, WeaponStats>,
    ammo: AHashMap<AmmoType, AmmoStats>,
    armor: AHashMap<ArmorModel, ProtectionStats>,
    helmets: AHashMap<HelmetModel, ProtectionStats>,
    medkit: Option<MedkitStats>,
}

fn weapon(
    magazine_capacity: u32,
    ammo_type: AmmoType,
    time_to_reload: f32,
    time_to_fire: f32,
    damage: u32,
    automatic: bool,
) -> WeaponStats {
    WeaponStats {
        magazine_capacity,
        ammo_type,
        time_to_reload,
        time_to_fire,
        damage,
        automatic,
    }
}

fn protection(capacity: u32) -> ProtectionStats {
    ProtectionStats {
        capacity: NonZeroU32::new(capacity).unwrap_or(NonZeroU32::MIN),
    }
}

impl ItemCatalog {
    /// Built-in stats for every model
    pub fn with_defaults() -> Self {
        use AmmoType::*;

        let weapons = AHashMap::from_iter([
            (WeaponModel::Aw3, weapon(5, SevenSixTwo, 3.0, 1.2, 90, false)),
            (WeaponModel::G21, weapon(17, Nine, 1.5, 0.25, 20, false)),
            (WeaponModel::M20, weapon(30, FiveFiveSix, 2.5, 0.1, 25, true)),
            (WeaponModel::P26, weapon(12, Nine, 1.2, 0.3, 22, false)),
            (WeaponModel::Star, weapon(32, Nine, 2.0, 0.07, 15, true)),
            (WeaponModel::W16a, weapon(30, FiveFiveSix, 2.8, 0.15, 28, true)),
        ]);

        let ammo = AHashMap::from_iter([
            (FiveFiveSix, AmmoStats { box_size: 30 }),
            (Nine, AmmoStats { box_size: 34 }),
            (SevenSixTwo, AmmoStats { box_size: 10 }),
        ]);

        let armor = AHashMap::from_iter([
            (ArmorModel::MilitaryVest, protection(150)),
            (ArmorModel::SoftVest, protection(80)),
        ]);

        let helmets = AHashMap::from_iter([
            (HelmetModel::CombatHelmet, protection(100)),
            (HelmetModel::HalfHelmet, protection(50)),
        ]);

        Self {
            weapons,
            ammo,
            armor,
            helmets,
            medkit: MedkitStats {
                heal_amount: 50,
                time_to_use: 3.0,
            },
        }
    }

    /// Load catalog overrides from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse catalog overrides from a TOML string on top of the defaults
    pub fn parse_toml(content: &str) -> Result<Self> {
        let overrides: CatalogOverrides = toml::from_str(content)?;

        let mut catalog = Self::with_defaults();
        catalog.weapons.extend(overrides.weapons);
        catalog.ammo.extend(overrides.ammo);
        catalog.armor.extend(overrides.armor);
        catalog.helmets.extend(overrides.helmets);
        if let Some(medkit) = overrides.medkit {
            catalog.medkit = medkit;
        }

        catalog.validate()?;
        Ok(catalog)
    }

    /// Reject data-authoring defects before any item is built from them
    pub fn validate(&self) -> Result<()> {
        for (model, stats) in &self.weapons {
            if stats.magazine_capacity == 0 {
                return Err(RendezvousError::InvalidCatalog(format!(
                    "{} has a zero magazine capacity",
                    model
                )));
            }
            if !(stats.time_to_reload >= 0.0 && stats.time_to_fire >= 0.0) {
                return Err(RendezvousError::InvalidCatalog(format!(
                    "{} has a negative or undefined timing",
                    model
                )));
            }
        }

        for (ammo_type, stats) in &self.ammo {
            if stats.box_size == 0 {
                return Err(RendezvousError::InvalidCatalog(format!(
                    "{} boxes spawn empty",
                    ammo_type
                )));
            }
        }

        if self.medkit.heal_amount == 0 || !(self.medkit.time_to_use >= 0.0) {
            return Err(RendezvousError::InvalidCatalog(
                "medkit must heal a positive amount in a non-negative time".into(),
            ));
        }

        Ok(())
    }

    // Maps are complete by construction: built from defaults, only extended.

    pub fn weapon_stats(&self, model: WeaponModel) -> &WeaponStats {
        &self.weapons[&model]
    }

    pub fn ammo_stats(&self, ammo_type: AmmoType) -> &AmmoStats {
        &self.ammo[&ammo_type]
    }

    pub fn armor_stats(&self, model: ArmorModel) -> &ProtectionStats {
        &self.armor[&model]
    }

    pub fn helmet_stats(&self, model: HelmetModel) -> &ProtectionStats {
        &self.helmets[&model]
    }

    pub fn medkit_stats(&self) -> &MedkitStats {
        &self.medkit
    }

    /// A weapon with an empty magazine
    pub fn weapon(&self, model: WeaponModel) -> Item {
        let s = self.weapon_stats(model);
        Item::Weapon(Weapon::new(
            model,
            s.magazine_capacity,
            s.ammo_type,
            s.time_to_reload,
            s.time_to_fire,
            s.damage,
            s.automatic,
        ))
    }

    /// A weapon with a full magazine
    pub fn loaded_weapon(&self, model: WeaponModel) -> Item {
        let mut item = self.weapon(model);
        if let Some(w) = item.as_weapon_mut() {
            let capacity = w.magazine_capacity;
            w.set_bullets(capacity);
        }
        item
    }

    pub fn ammo_box(&self, ammo_type: AmmoType, amount: u32) -> Item {
        Item::Ammo(AmmoBox::new(ammo_type, amount))
    }

    pub fn full_ammo_box(&self, ammo_type: AmmoType) -> Item {
        self.ammo_box(ammo_type, self.ammo_stats(ammo_type).box_size)
    }

    pub fn armor(&self, model: ArmorModel) -> Item {
        Item::Armor(Armor {
            model,
            protection: Protection::new(self.armor_stats(model).capacity),
        })
    }

    pub fn helmet(&self, model: HelmetModel) -> Item {
        Item::Helmet(Helmet {
            model,
            protection: Protection::new(self.helmet_stats(model).capacity),
        })
    }

    pub fn medkit(&self) -> Item {
        Item::Medkit(Medkit {
            heal_amount: self.medkit.heal_amount,
            time_to_use: self.medkit.time_to_use,
        })
    }

    /// Fresh instance of a class, as it would spawn in the world
    pub fn instantiate(&self, class: ItemClass) -> Item {
        match class {
            ItemClass::Empty => Item::Empty,
            ItemClass::Weapon(model) => self.weapon(model),
            ItemClass::Ammo(ammo_type) => self.full_ammo_box(ammo_type),
            ItemClass::Armor(model) => self.armor(model),
            ItemClass::Helmet(model) => self.helmet(model),
            ItemClass::Medkit => self.medkit(),
        }
    }

    /// Roll one random loot item
    pub fn random_loot<R: Rng + ?Sized>(&self, rng: &mut R) -> Item {
        match ItemClass::LOOT.choose(rng) {
            Some(class) => self.instantiate(*class),
            None => Item::Empty,
        }
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}
