//! Results of action requests
//!
//! Rejected actions are values, not errors: the request simply has no
//! effect and the reason is reported back for logging and tests.

use serde::{Deserialize, Serialize};

use super::activity::ActivityKind;

/// Why an action request changed nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoEffect {
    /// The selected item does not support the action
    InvalidAction,
    /// Reload requested without a matching, non-empty ammo box
    InsufficientAmmo,
    /// Another activity is already in flight
    Busy,
    /// Trigger pulled on an empty magazine
    EmptyMagazine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// A timed activity began
    Started(ActivityKind),
    /// A shot went off without entering a timed state
    Fired,
    /// Nothing happened
    Ignored(NoEffect),
}

impl ActionOutcome {
    /// Did the request change any state?
    pub fn took_effect(&self) -> bool {
        !matches!(self, ActionOutcome::Ignored(_))
    }
}
