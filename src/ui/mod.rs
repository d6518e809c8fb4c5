//! UI domain: camera, HUD, pickup popups and the results screen.

mod camera;
mod hud;
mod popup;
mod results;


pub use camera::{CAMERA_ZOOM, FOLLOW_LERP, MainCamera, follow_target};
pub use hud::{gem_label, score_label};
pub use popup::{ScorePopup, popup_frame};

use bevy::prelude::*;

use crate::core::{GameState, TickSet};
use crate::ui::camera::{follow_player, spawn_camera};
use crate::ui::hud::{spawn_hud, update_level_text, update_run_text};
use crate::ui::popup::{animate_popups, spawn_pickup_popups};
use crate::ui::results::{despawn_results_screen, handle_results_input, spawn_results_screen};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_camera, spawn_hud))
            .add_systems(
                Update,
                (
                    spawn_pickup_popups,
                    animate_popups,
                    update_run_text,
                    update_level_text,
                )
                    .in_set(TickSet::Presentation),
            )
            .add_systems(
                PostUpdate,
                follow_player
                    .before(TransformSystems::Propagate)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnEnter(GameState::Results), spawn_results_screen)
            .add_systems(
                Update,
                handle_results_input.run_if(in_state(GameState::Results)),
            )
            .add_systems(OnExit(GameState::Results), despawn_results_screen);
    }
}
