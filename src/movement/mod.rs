//! Movement domain: input sampling, velocity integration and player lifecycle.

mod bootstrap;
mod components;
pub mod controller;
mod resources;
mod systems;


pub use components::{
    ContactFlags, Facing, GameLayer, MotionState, MovementState, PLAYER_SIZE, Player, WallSide,
};
pub use controller::JumpKind;
pub use resources::{InputSampler, InputSnapshot, MovementTuning};

use bevy::prelude::*;

use crate::core::{GameState, TickSet};
use crate::level::spawn_level;
use crate::movement::bootstrap::{load_tuning, respawn_player, spawn_player};
use crate::movement::systems::{apply_movement, check_fall_out, sample_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<InputSampler>()
            .init_resource::<InputSnapshot>()
            .add_systems(Startup, load_tuning)
            .add_systems(OnEnter(GameState::Playing), spawn_player.after(spawn_level))
            .add_systems(Update, sample_input.in_set(TickSet::Input))
            .add_systems(
                Update,
                (apply_movement, check_fall_out)
                    .chain()
                    .in_set(TickSet::Movement),
            )
            .add_systems(Update, respawn_player.in_set(TickSet::Flow));
    }
}
