//! Core domain: scene states, tick ordering, shared events and config.

pub mod config;
mod events;
mod state;
mod systems;

pub use config::{AssetPaths, ConfigError};
pub use events::{GameplayEvent, RestartCause, RestartLevelEvent, ResultsChoice};
pub use state::{GameState, TickSet};

use bevy::prelude::*;

use crate::core::systems::{leave_boot, log_gameplay_events};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<AssetPaths>()
            .add_message::<GameplayEvent>()
            .add_message::<RestartLevelEvent>()
            .add_message::<ResultsChoice>()
            .configure_sets(
                Update,
                (
                    TickSet::Input,
                    TickSet::Movement,
                    TickSet::Contact,
                    TickSet::Run,
                    TickSet::Flow,
                    TickSet::Presentation,
                )
                    .chain(),
            );

        // Presentation keeps running on the results screen (popups finish fading).
        for set in [
            TickSet::Input,
            TickSet::Movement,
            TickSet::Contact,
            TickSet::Run,
            TickSet::Flow,
        ] {
            app.configure_sets(Update, set.run_if(in_state(GameState::Playing)));
        }

        app.add_systems(Update, leave_boot.run_if(in_state(GameState::Boot)))
            .add_systems(Update, log_gameplay_events.in_set(TickSet::Presentation));
    }
}
