//! Movement domain: frame-local velocity integration.
//!
//! Pure functions over the current velocity, contacts and input snapshot; the
//! systems module applies them to the player body. Position integration and
//! penetration solving belong to the physics substrate.

use bevy::prelude::*;

use crate::movement::components::{ContactFlags, Facing, MovementState, WallSide};
use crate::movement::resources::{InputSnapshot, MovementTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Wall(WallSide),
}

impl JumpKind {
    pub fn wall(&self) -> Option<WallSide> {
        match self {
            JumpKind::Ground => None,
            JumpKind::Wall(side) => Some(*side),
        }
    }
}

/// Drag toward zero. Stops at zero, never reverses direction.
pub fn apply_drag(vx: f32, drag: f32, dt: f32) -> f32 {
    let decel = drag * dt;
    if vx > 0.0 {
        (vx - decel).max(0.0)
    } else {
        (vx + decel).min(0.0)
    }
}

/// Constant acceleration toward the held direction, drag when none is held.
pub fn apply_horizontal(vx: f32, input: &InputSnapshot, tuning: &MovementTuning, dt: f32) -> f32 {
    match input.horizontal() {
        Some(Facing::Left) => vx - tuning.accel * dt,
        Some(Facing::Right) => vx + tuning.accel * dt,
        None => apply_drag(vx, tuning.drag, dt),
    }
}

/// Pick at most one jump for this tick.
///
/// Ground and wall conditions can hold together (standing in a corner); the
/// first match in the order ground, wall left, wall right wins.
pub fn resolve_jump(contacts: ContactFlags, input: &InputSnapshot) -> Option<JumpKind> {
    if !input.up_just_pressed {
        return None;
    }

    if contacts.grounded() {
        Some(JumpKind::Ground)
    } else if contacts.blocked(WallSide::Left) {
        Some(JumpKind::Wall(WallSide::Left))
    } else if contacts.blocked(WallSide::Right) {
        Some(JumpKind::Wall(WallSide::Right))
    } else {
        None
    }
}

/// Integrate one tick: horizontal accel/drag, facing, gravity, then the jump
/// overwrite. Returns the new velocity and the jump that fired, if any.
pub fn step_velocity(
    velocity: Vec2,
    state: &mut MovementState,
    input: &InputSnapshot,
    tuning: &MovementTuning,
    dt: f32,
) -> (Vec2, Option<JumpKind>) {
    let mut v = velocity;

    v.x = apply_horizontal(v.x, input, tuning, dt);
    if let Some(direction) = input.horizontal() {
        state.facing = direction;
    }

    v.y -= tuning.gravity * dt;

    let jump = resolve_jump(state.contacts, input);
    match jump {
        Some(JumpKind::Ground) => {
            v.y = tuning.jump_velocity;
        }
        Some(JumpKind::Wall(side)) => {
            v.y = tuning.jump_velocity;
            let holding_away = match side {
                WallSide::Left => input.right,
                WallSide::Right => input.left,
            };
            if holding_away {
                v.x = side.push_sign() * tuning.wall_jump;
            }
        }
        None => {}
    }

    let cap = Vec2::splat(tuning.max_speed);
    (v.clamp(-cap, cap), jump)
}

/// World y at or below which the player has fallen out. Taller levels push
/// the threshold down to their own bottom edge.
pub fn fall_threshold(tuning: &MovementTuning, level_height: f32) -> f32 {
    -tuning.fall_depth.max(level_height)
}

pub fn has_fallen_out(y: f32, threshold: f32) -> bool {
    y <= threshold
}
