//! Match configuration with documented constants
//!
//! Every tunable of the inventory/combat core lives here. Values can be
//! overridden from a TOML file; keys that are absent keep their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{RendezvousError, Result};

/// Configuration for a single match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    // === INVENTORY ===
    /// Number of general-purpose inventory slots shown on the HUD bar
    pub inventory_slots: usize,

    /// Number of slots in every spawned chest
    ///
    /// Must leave room for the two medkits every chest starts with.
    pub chest_slots: usize,

    /// Random catalog items rolled into a chest on top of its medkits
    pub chest_loot_rolls: usize,

    // === SOLDIER ===
    /// Upper bound for soldier health; health is clamped to [0, max_health]
    pub max_health: u32,

    /// Base movement speed handed to the movement system (world units/s)
    pub base_speed: f32,

    /// Speed multiplier applied while an activity slows the soldier
    ///
    /// Reloading slows; healing blocks entirely (factor 0).
    pub slowed_speed_factor: f32,

    // === WORLD ===
    /// Maximum distance between the player and a chest for a loot exchange
    pub loot_interaction_range: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            inventory_slots: 5,
            chest_slots: 6,
            chest_loot_rolls: 3,

            max_health: 100,
            base_speed: 10.0,
            slowed_speed_factor: 0.5,

            loot_interaction_range: 2.0,
        }
    }
}

impl MatchConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML, filling missing keys with defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MatchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.inventory_slots == 0 {
            return Err(RendezvousError::InvalidConfig(
                "inventory_slots must be at least 1".into(),
            ));
        }

        // Every chest spawns with two medkits
        if self.chest_slots < 2 {
            return Err(RendezvousError::InvalidConfig(format!(
                "chest_slots ({}) must hold at least the two starting medkits",
                self.chest_slots
            )));
        }

        if self.max_health == 0 {
            return Err(RendezvousError::InvalidConfig(
                "max_health must be positive".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.slowed_speed_factor) {
            return Err(RendezvousError::InvalidConfig(format!(
                "slowed_speed_factor ({}) must be within [0, 1]",
                self.slowed_speed_factor
            )));
        }

        if self.base_speed < 0.0 || self.loot_interaction_range < 0.0 {
            return Err(RendezvousError::InvalidConfig(
                "speeds and ranges must not be negative".into(),
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<MatchConfig> = OnceLock::new();

/// Get the global match config (initializes with defaults if not set)
pub fn config() -> &'static MatchConfig {
    CONFIG.get_or_init(MatchConfig::default)
}

/// Set the global match config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: MatchConfig) -> std::result::Result<(), MatchConfig> {
    CONFIG.set(config)
}
