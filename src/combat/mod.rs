//! Per-soldier combat activity: what the soldier is doing with the item in hand

pub mod activity;
pub mod outcome;
pub mod state;

pub use activity::{ActivityKind, CombatActivity, Mobility};
pub use outcome::{ActionOutcome, NoEffect};
pub use state::{transition, CombatMachine, CombatState, CombatTrigger};
