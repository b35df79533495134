//! Match glue: HUD, movement bodies and the per-frame session loop

pub mod hud;
pub mod session;
pub mod world;

pub use hud::{ActivityProgress, Hud, HudSnapshot};
pub use session::{PlayerInput, Session, SessionEvent};
pub use world::{KinematicBody, RigidBody};
