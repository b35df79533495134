//! Item catalog and item instances

pub mod catalog;
pub mod item;

pub use catalog::{
    AmmoStats, AmmoType, ArmorModel, HelmetModel, ItemCatalog, MedkitStats, ProtectionStats,
    WeaponModel, WeaponStats,
};
pub use item::{AmmoBox, Armor, Helmet, Item, ItemClass, Medkit, Protection, Weapon};
