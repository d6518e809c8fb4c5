//! Run domain: the score and gem tally that persists across restarts and levels.

mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use state::{GEM_DISPLAY_CAP, LevelDirective, RunHandoff, RunSnapshot, RunState};

use bevy::prelude::*;

use crate::core::{GameState, TickSet};
use crate::level::LevelSession;
use crate::run::systems::{apply_gameplay_events, apply_results_choice, resume_from_handoff};

pub struct RunPlugin;

impl Plugin for RunPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunState>()
            .init_resource::<RunHandoff>()
            .init_resource::<LevelSession>()
            .add_systems(OnEnter(GameState::Playing), resume_from_handoff)
            .add_systems(Update, apply_gameplay_events.in_set(TickSet::Run))
            .add_systems(
                Update,
                apply_results_choice.run_if(in_state(GameState::Results)),
            );
    }
}
