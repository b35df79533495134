//! Rendezvous - equipment-driven inventory and combat state for a top-down shooter

pub mod animation;
pub mod combat;
pub mod core;
pub mod game;
pub mod inventory;
pub mod items;
pub mod loot;
pub mod soldier;
