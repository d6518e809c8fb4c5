//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::components::Facing;

/// Movement constants in world units (y up) per second.
/// Every field may be overridden by assets/data/tuning.ron.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub accel: f32,
    pub drag: f32,
    pub gravity: f32,
    /// Upward speed a ground or wall jump sets.
    pub jump_velocity: f32,
    /// Horizontal push away from the wall on a wall jump.
    pub wall_jump: f32,
    /// Per-axis speed cap.
    pub max_speed: f32,
    /// Depth below the level origin past which the player has fallen out.
    pub fall_depth: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            accel: 150.0,
            drag: 1000.0,
            gravity: 1000.0,
            jump_velocity: 300.0,
            wall_jump: 200.0,
            max_speed: 10_000.0,
            fall_depth: 320.0,
        }
    }
}

/// Immutable per-frame snapshot of player intent.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    /// True only on the frame `up` goes from released to held.
    pub up_just_pressed: bool,
}

impl InputSnapshot {
    /// Held horizontal direction. Left wins when both are held.
    pub fn horizontal(&self) -> Option<Facing> {
        if self.left {
            Some(Facing::Left)
        } else if self.right {
            Some(Facing::Right)
        } else {
            None
        }
    }
}

/// Edge memory for the jump key; the only state the sampler keeps.
#[derive(Resource, Debug, Default)]
pub struct InputSampler {
    up_was_held: bool,
}

impl InputSampler {
    pub fn sample(&mut self, left: bool, right: bool, up: bool) -> InputSnapshot {
        let up_just_pressed = up && !self.up_was_held;
        self.up_was_held = up;
        InputSnapshot {
            left,
            right,
            up,
            up_just_pressed,
        }
    }
}
