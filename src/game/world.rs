//! Rigid-body collaborator
//!
//! The physics engine is outside this crate. The core only reads position
//! and hands the movement system a speed multiplier.

use crate::core::types::Vec2;

pub trait RigidBody {
    fn position(&self) -> Vec2;

    fn velocity(&self) -> Vec2;

    /// Drive the body in `direction` at `speed` for `delta` seconds
    fn drive(&mut self, direction: Vec2, speed: f32, delta: f32);
}

/// Frictionless point body used when no physics engine is attached
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicBody {
    position: Vec2,
    velocity: Vec2,
}

impl KinematicBody {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }
}

impl RigidBody for KinematicBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn drive(&mut self, direction: Vec2, speed: f32, delta: f32) {
        self.velocity = direction.normalize_or_zero() * speed;
        self.position += self.velocity * delta;
    }
}
