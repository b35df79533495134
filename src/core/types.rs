//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use glam::Vec2;

/// Unique identifier for soldiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoldierId(pub Uuid);

impl SoldierId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SoldierId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier for a world loot container (chest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(pub u32);

/// Frame counter (simulation time unit)
pub type Tick = u64;
