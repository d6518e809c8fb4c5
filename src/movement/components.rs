//! Movement domain: player components, contact flags and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::resources::InputSnapshot;

/// Player collision box, slightly narrower than a tile so one-tile gaps fit.
pub const PLAYER_SIZE: Vec2 = Vec2::new(14.0, 16.0);

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Solid level regions and world bounds
    Solid,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

bitflags::bitflags! {
    /// Sides of the player in resolved contact with a Solid region this tick.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ContactFlags: u8 {
        const GROUNDED_BELOW = 1 << 0;
        const BLOCKED_LEFT = 1 << 1;
        const BLOCKED_RIGHT = 1 << 2;
    }
}

impl ContactFlags {
    pub fn grounded(&self) -> bool {
        self.contains(ContactFlags::GROUNDED_BELOW)
    }

    pub fn blocked(&self, side: WallSide) -> bool {
        match side {
            WallSide::Left => self.contains(ContactFlags::BLOCKED_LEFT),
            WallSide::Right => self.contains(ContactFlags::BLOCKED_RIGHT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
}

impl WallSide {
    /// Horizontal sign pointing away from a wall on this side.
    pub fn push_sign(&self) -> f32 {
        match self {
            WallSide::Left => 1.0,
            WallSide::Right => -1.0,
        }
    }
}

/// Starts Airborne: a fresh or respawned player has no resolved contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    Idle,
    Walking,
    #[default]
    Airborne,
}

impl MotionState {
    /// Airborne whenever not grounded; otherwise horizontal intent decides.
    pub fn derive(contacts: ContactFlags, input: &InputSnapshot) -> Self {
        if !contacts.grounded() {
            MotionState::Airborne
        } else if input.horizontal().is_some() {
            MotionState::Walking
        } else {
            MotionState::Idle
        }
    }
}

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MovementState {
    pub facing: Facing,
    pub contacts: ContactFlags,
    pub motion: MotionState,
}
