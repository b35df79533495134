//! Combat state machine
//!
//! A soldier is always in exactly one of Idle, Firing, Reloading or
//! Healing. Only Idle accepts new actions; every active state returns to
//! Idle when its activity completes or is cancelled.

use serde::{Deserialize, Serialize};

use super::activity::{ActivityKind, CombatActivity, Mobility};
use super::outcome::{ActionOutcome, NoEffect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CombatState {
    #[default]
    Idle,
    Firing,
    Reloading,
    Healing,
}

impl CombatState {
    pub fn is_idle(&self) -> bool {
        matches!(self, CombatState::Idle)
    }
}

impl From<ActivityKind> for CombatState {
    fn from(kind: ActivityKind) -> Self {
        match kind {
            ActivityKind::Firing => CombatState::Firing,
            ActivityKind::Reloading => CombatState::Reloading,
            ActivityKind::Healing => CombatState::Healing,
        }
    }
}

/// Events that drive state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombatTrigger {
    Fire,
    Reload,
    UseMedkit,
    /// The activity's duration elapsed
    Completed,
    /// The blocking condition was cleared externally
    Cancelled,
}

/// Next state for a trigger; invalid transitions leave the state unchanged
pub fn transition(current: CombatState, trigger: CombatTrigger) -> CombatState {
    use CombatState::*;
    use CombatTrigger::*;

    match (current, trigger) {
        (Idle, Fire) => Firing,
        (Idle, Reload) => Reloading,
        (Idle, UseMedkit) => Healing,

        (Firing | Reloading | Healing, Completed) => Idle,
        (Firing | Reloading | Healing, Cancelled) => Idle,

        _ => current,
    }
}

/// Holds at most one in-flight activity per soldier
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatMachine {
    activity: Option<CombatActivity>,
}

impl CombatMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CombatState {
        self.activity
            .as_ref()
            .map(|a| CombatState::from(a.kind))
            .unwrap_or_default()
    }

    pub fn activity(&self) -> Option<&CombatActivity> {
        self.activity.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        !self.state().is_idle()
    }

    /// Movement signal for the current state
    pub fn mobility(&self) -> Mobility {
        self.activity
            .as_ref()
            .map(|a| a.kind.mobility())
            .unwrap_or_default()
    }

    /// Start an activity. Rejected without side effects while busy.
    pub fn begin(&mut self, activity: CombatActivity) -> ActionOutcome {
        let trigger = match activity.kind {
            ActivityKind::Firing => CombatTrigger::Fire,
            ActivityKind::Reloading => CombatTrigger::Reload,
            ActivityKind::Healing => CombatTrigger::UseMedkit,
        };
        let current = self.state();
        if transition(current, trigger) == current {
            return ActionOutcome::Ignored(NoEffect::Busy);
        }

        tracing::debug!(
            "Activity {} started on slot {} ({:.2}s)",
            activity.kind.label(),
            activity.slot,
            activity.duration
        );
        let kind = activity.kind;
        self.activity = Some(activity);
        ActionOutcome::Started(kind)
    }

    /// Apply `trigger`, releasing the activity once the table returns to Idle
    fn release(&mut self, trigger: CombatTrigger) -> Option<CombatActivity> {
        let current = self.state();
        if !transition(current, trigger).is_idle() || current.is_idle() {
            return None;
        }
        self.activity.take()
    }

    /// Advance the in-flight activity, handing it back once complete
    pub fn advance(&mut self, delta: f32) -> Option<CombatActivity> {
        let done = self.activity.as_mut()?.advance(delta);
        if !done {
            return None;
        }
        let finished = self.release(CombatTrigger::Completed)?;
        tracing::debug!("Activity {} completed", finished.kind.label());
        Some(finished)
    }

    /// Drop the in-flight activity, discarding its progress
    pub fn cancel(&mut self) -> Option<CombatActivity> {
        let cancelled = self.release(CombatTrigger::Cancelled)?;
        tracing::debug!(
            "Activity {} cancelled at {:.0}%",
            cancelled.kind.label(),
            cancelled.progress() * 100.0
        );
        Some(cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SoldierId;
    use crate::items::{ItemClass, WeaponModel};

    fn activity(kind: ActivityKind, duration: f32) -> CombatActivity {
        let class = match kind {
            ActivityKind::Healing => ItemClass::Medkit,
            _ => ItemClass::Weapon(WeaponModel::M20),
        };
        CombatActivity::new(kind, 0, class, SoldierId::new(), duration)
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(transition(CombatState::Idle, CombatTrigger::Fire), CombatState::Firing);
        assert_eq!(transition(CombatState::Idle, CombatTrigger::Reload), CombatState::Reloading);
        assert_eq!(transition(CombatState::Idle, CombatTrigger::UseMedkit), CombatState::Healing);
        assert_eq!(transition(CombatState::Healing, CombatTrigger::Completed), CombatState::Idle);
        assert_eq!(transition(CombatState::Firing, CombatTrigger::Cancelled), CombatState::Idle);

        // Busy states ignore new requests
        assert_eq!(transition(CombatState::Reloading, CombatTrigger::UseMedkit), CombatState::Reloading);
        assert_eq!(transition(CombatState::Idle, CombatTrigger::Completed), CombatState::Idle);
    }

    #[test]
    fn test_begin_rejects_while_busy() {
        let mut machine = CombatMachine::new();
        assert_eq!(
            machine.begin(activity(ActivityKind::Reloading, 2.0)),
            ActionOutcome::Started(ActivityKind::Reloading)
        );
        assert_eq!(
            machine.begin(activity(ActivityKind::Healing, 1.0)),
            ActionOutcome::Ignored(NoEffect::Busy)
        );
        assert_eq!(machine.state(), CombatState::Reloading);
    }

    #[test]
    fn test_advance_returns_completed_activity() {
        let mut machine = CombatMachine::new();
        machine.begin(activity(ActivityKind::Healing, 1.0));

        assert!(machine.advance(0.5).is_none());
        assert_eq!(machine.state(), CombatState::Healing);

        let done = machine.advance(0.6).expect("heal should complete");
        assert_eq!(done.kind, ActivityKind::Healing);
        assert_eq!(machine.state(), CombatState::Idle);
        assert!(machine.advance(1.0).is_none());
    }

    #[test]
    fn test_cancel_discards_progress() {
        let mut machine = CombatMachine::new();
        machine.begin(activity(ActivityKind::Reloading, 2.0));
        machine.advance(1.9);

        assert!(machine.cancel().is_some());
        assert_eq!(machine.state(), CombatState::Idle);
        assert_eq!(machine.mobility(), Mobility::Free);

        // A fresh reload starts from zero
        machine.begin(activity(ActivityKind::Reloading, 2.0));
        assert!(machine.advance(0.5).is_none());
    }

    #[test]
    fn test_idle_machine_has_nothing_to_release() {
        let mut machine = CombatMachine::new();
        assert!(machine.cancel().is_none());
        assert!(machine.advance(10.0).is_none());
        assert_eq!(machine.state(), CombatState::Idle);
    }

    #[test]
    fn test_completion_and_cancel_follow_table() {
        for kind in [ActivityKind::Firing, ActivityKind::Reloading, ActivityKind::Healing] {
            let state = CombatState::from(kind);
            assert!(transition(state, CombatTrigger::Completed).is_idle());

            let mut machine = CombatMachine::new();
            machine.begin(activity(kind, 1.0));
            assert_eq!(machine.state(), state);
            assert_eq!(machine.advance(1.5).map(|a| a.kind), Some(kind));
            assert!(machine.state().is_idle());
        }
    }

    #[test]
    fn test_mobility_follows_state() {
        let mut machine = CombatMachine::new();
        assert_eq!(machine.mobility(), Mobility::Free);
        machine.begin(activity(ActivityKind::Healing, 1.0));
        assert_eq!(machine.mobility(), Mobility::Blocked);
    }
}
