//! Timed activities (fire, reload, heal)

use serde::{Deserialize, Serialize};

use crate::core::types::SoldierId;
use crate::items::ItemClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Firing,
    Reloading,
    Healing,
}

/// Movement signal consumed by the movement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mobility {
    #[default]
    Free,
    Slowed,
    Blocked,
}

impl ActivityKind {
    pub fn mobility(&self) -> Mobility {
        match self {
            ActivityKind::Firing => Mobility::Free,
            ActivityKind::Reloading => Mobility::Slowed,
            ActivityKind::Healing => Mobility::Blocked,
        }
    }

    /// Label shown on the HUD progress bar
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Firing => "firing",
            ActivityKind::Reloading => "reloading",
            ActivityKind::Healing => "healing",
        }
    }
}

/// An in-flight timed action
///
/// Remembers the slot and the class of the item it acts on so the owner
/// can tell when the action no longer applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatActivity {
    pub kind: ActivityKind,
    pub slot: usize,
    pub class: ItemClass,
    pub target: SoldierId,
    /// Seconds
    pub duration: f32,
    elapsed: f32,
}

impl CombatActivity {
    pub fn new(
        kind: ActivityKind,
        slot: usize,
        class: ItemClass,
        target: SoldierId,
        duration: f32,
    ) -> Self {
        Self {
            kind,
            slot,
            class,
            target,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advance by `delta` seconds. Returns true once the duration is reached.
    pub fn advance(&mut self, delta: f32) -> bool {
        self.elapsed += delta.max(0.0);
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Completion ratio in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heal(duration: f32) -> CombatActivity {
        CombatActivity::new(ActivityKind::Healing, 0, ItemClass::Medkit, SoldierId::new(), duration)
    }

    #[test]
    fn test_activity_completes_after_duration() {
        let mut activity = heal(1.0);
        assert!(!activity.advance(0.4));
        assert!((activity.progress() - 0.4).abs() < 1e-6);
        assert!(!activity.advance(0.4));
        assert!(activity.advance(0.4));
        assert_eq!(activity.progress(), 1.0);
    }

    #[test]
    fn test_negative_delta_ignored() {
        let mut activity = heal(1.0);
        activity.advance(-5.0);
        assert_eq!(activity.elapsed(), 0.0);
    }

    #[test]
    fn test_mobility_per_kind() {
        assert_eq!(ActivityKind::Healing.mobility(), Mobility::Blocked);
        assert_eq!(ActivityKind::Reloading.mobility(), Mobility::Slowed);
        assert_eq!(ActivityKind::Firing.mobility(), Mobility::Free);
    }
}
