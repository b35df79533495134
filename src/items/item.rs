//! Item instances held by inventory and chest slots
//!
//! `Item` is a closed set of kinds. Behavior that depends on the kind is
//! pattern matched; `ItemClass` is the cheap identity used wherever two
//! items only need to be compared by kind and model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

use super::catalog::{AmmoType, ArmorModel, HelmetModel, WeaponModel};

/// Kind + model of an item, without any per-instance state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemClass {
    Empty,
    Weapon(WeaponModel),
    Ammo(AmmoType),
    Armor(ArmorModel),
    Helmet(HelmetModel),
    Medkit,
}

impl ItemClass {
    /// Every class that can be rolled into a chest
    pub const LOOT: [ItemClass; 16] = [
        ItemClass::Weapon(WeaponModel::Aw3),
        ItemClass::Weapon(WeaponModel::G21),
        ItemClass::Weapon(WeaponModel::M20),
        ItemClass::Weapon(WeaponModel::P26),
        ItemClass::Weapon(WeaponModel::Star),
        ItemClass::Weapon(WeaponModel::W16a),
        ItemClass::Ammo(AmmoType::FiveFiveSix),
        ItemClass::Ammo(AmmoType::Nine),
        ItemClass::Ammo(AmmoType::SevenSixTwo),
        ItemClass::Armor(ArmorModel::MilitaryVest),
        ItemClass::Armor(ArmorModel::SoftVest),
        ItemClass::Helmet(HelmetModel::CombatHelmet),
        ItemClass::Helmet(HelmetModel::HalfHelmet),
        ItemClass::Medkit,
        ItemClass::Medkit,
        ItemClass::Ammo(AmmoType::Nine),
    ];
}

/// A firearm. Bullets never exceed the magazine capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub model: WeaponModel,
    pub magazine_capacity: u32,
    bullets: u32,
    /// Only ammo boxes of this type reload the weapon
    pub ammo_type: AmmoType,
    /// Seconds
    pub time_to_reload: f32,
    /// Seconds between shots
    pub time_to_fire: f32,
    pub damage: u32,
    pub automatic: bool,
}

impl Weapon {
    pub fn new(
        model: WeaponModel,
        magazine_capacity: u32,
        ammo_type: AmmoType,
        time_to_reload: f32,
        time_to_fire: f32,
        damage: u32,
        automatic: bool,
    ) -> Self {
        Self {
            model,
            magazine_capacity,
            bullets: 0,
            ammo_type,
            time_to_reload,
            time_to_fire,
            damage,
            automatic,
        }
    }

    pub fn bullets(&self) -> u32 {
        self.bullets
    }

    /// Set the loaded bullet count, clamped to the magazine
    pub fn set_bullets(&mut self, bullets: u32) {
        debug_assert!(bullets <= self.magazine_capacity);
        self.bullets = bullets.min(self.magazine_capacity);
    }

    /// Bullets required to fill the magazine
    pub fn missing(&self) -> u32 {
        self.magazine_capacity - self.bullets
    }

    /// Spend one bullet. Returns false on an empty magazine.
    pub fn shoot(&mut self) -> bool {
        if self.bullets == 0 {
            return false;
        }
        self.bullets -= 1;
        true
    }
}

/// A box of loose rounds of one ammo type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoBox {
    pub ammo_type: AmmoType,
    amount: u32,
    name: String,
}

impl AmmoBox {
    pub fn new(ammo_type: AmmoType, amount: u32) -> Self {
        Self {
            ammo_type,
            amount,
            name: Self::display_name(ammo_type, amount),
        }
    }

    fn display_name(ammo_type: AmmoType, amount: u32) -> String {
        format!("{} ({})", ammo_type.label(), amount)
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Remove `amount` rounds (saturating)
    pub fn use_amount(&mut self, amount: u32) {
        self.amount = self.amount.saturating_sub(amount);
    }

    /// Empty the box, returning how many rounds it held
    pub fn use_all(&mut self) -> u32 {
        std::mem::take(&mut self.amount)
    }

    pub fn is_depleted(&self) -> bool {
        self.amount == 0
    }

    /// Refresh the display name after the remaining count changed
    pub fn update_name(&mut self) {
        self.name = Self::display_name(self.ammo_type, self.amount);
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Damage absorbed so far against a rated capacity
///
/// The capacity is non-zero by construction, so the integrity percentage
/// is always defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protection {
    damage: u32,
    capacity: NonZeroU32,
}

impl Protection {
    pub fn new(capacity: NonZeroU32) -> Self {
        Self { damage: 0, capacity }
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn capacity(&self) -> u32 {
        self.capacity.get()
    }

    pub fn remaining(&self) -> u32 {
        self.capacity.get().saturating_sub(self.damage)
    }

    /// Integrity percentage: 100 - damage/capacity*100
    pub fn integrity(&self) -> u32 {
        let damage = self.damage.min(self.capacity.get()) as u64;
        100 - (damage * 100 / self.capacity.get() as u64) as u32
    }

    /// Absorb up to the remaining capacity, returning the amount absorbed
    pub fn absorb(&mut self, amount: u32) -> u32 {
        let absorbed = amount.min(self.remaining());
        self.damage += absorbed;
        absorbed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armor {
    pub model: ArmorModel,
    pub protection: Protection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Helmet {
    pub model: HelmetModel,
    pub protection: Protection,
}

/// Single-use heal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medkit {
    pub heal_amount: u32,
    /// Seconds
    pub time_to_use: f32,
}

/// Occupant of exactly one slot. `Empty` is a real occupant, never a hole.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Item {
    #[default]
    Empty,
    Weapon(Weapon),
    Ammo(AmmoBox),
    Armor(Armor),
    Helmet(Helmet),
    Medkit(Medkit),
}

impl Item {
    pub fn class(&self) -> ItemClass {
        match self {
            Item::Empty => ItemClass::Empty,
            Item::Weapon(w) => ItemClass::Weapon(w.model),
            Item::Ammo(a) => ItemClass::Ammo(a.ammo_type),
            Item::Armor(a) => ItemClass::Armor(a.model),
            Item::Helmet(h) => ItemClass::Helmet(h.model),
            Item::Medkit(_) => ItemClass::Medkit,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Item::Empty)
    }

    /// Name shown in HUD slots
    pub fn name(&self) -> String {
        match self {
            Item::Empty => String::new(),
            Item::Weapon(w) => w.model.label().to_string(),
            Item::Ammo(a) => a.name().to_string(),
            Item::Armor(a) => format!("{} {}%", a.model.label(), a.protection.integrity()),
            Item::Helmet(h) => format!("{} {}%", h.model.label(), h.protection.integrity()),
            Item::Medkit(_) => "Medkit".to_string(),
        }
    }

    pub fn as_weapon(&self) -> Option<&Weapon> {
        match self {
            Item::Weapon(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_weapon_mut(&mut self) -> Option<&mut Weapon> {
        match self {
            Item::Weapon(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_ammo(&self) -> Option<&AmmoBox> {
        match self {
            Item::Ammo(a) => Some(a),
            _ => None,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Empty => write!(f, "<empty>"),
            other => write!(f, "{}", other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capacity(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_ammo_name_tracks_update() {
        let mut ammo = AmmoBox::new(AmmoType::Nine, 20);
        assert_eq!(ammo.name(), "9mm (20)");

        ammo.use_amount(5);
        // Name is refreshed explicitly
        assert_eq!(ammo.name(), "9mm (20)");
        ammo.update_name();
        assert_eq!(ammo.name(), "9mm (15)");
    }

    #[test]
    fn test_use_all_returns_remaining() {
        let mut ammo = AmmoBox::new(AmmoType::FiveFiveSix, 12);
        assert_eq!(ammo.use_all(), 12);
        assert!(ammo.is_depleted());
    }

    #[test]
    fn test_integrity_percentage() {
        let mut protection = Protection::new(capacity(200));
        assert_eq!(protection.integrity(), 100);

        protection.absorb(50);
        assert_eq!(protection.integrity(), 75);

        protection.absorb(500);
        assert_eq!(protection.damage(), 200);
        assert_eq!(protection.integrity(), 0);
    }

    #[test]
    fn test_absorb_caps_at_remaining() {
        let mut protection = Protection::new(capacity(30));
        assert_eq!(protection.absorb(20), 20);
        assert_eq!(protection.absorb(20), 10);
        assert_eq!(protection.absorb(20), 0);
    }

    #[test]
    fn test_shoot_empty_magazine() {
        let mut weapon = Weapon::new(WeaponModel::G21, 2, AmmoType::Nine, 1.0, 0.2, 20, false);
        assert!(!weapon.shoot());

        weapon.set_bullets(2);
        assert!(weapon.shoot());
        assert_eq!(weapon.bullets(), 1);
        assert_eq!(weapon.missing(), 1);
    }

    #[test]
    fn test_class_identity() {
        let medkit = Item::Medkit(Medkit { heal_amount: 50, time_to_use: 3.0 });
        assert_eq!(medkit.class(), ItemClass::Medkit);
        assert_eq!(Item::Empty.class(), ItemClass::Empty);
        assert!(Item::default().is_empty());
    }
}
