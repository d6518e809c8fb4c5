//! Debug tools for fast iteration (dev-tools feature).
//!
//! Features:
//! - Toggle collider and probe gizmos with [D]
//! - Log the player's movement state with [F1]

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementState, Player};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsDebugPlugin::default())
            .add_systems(Startup, hide_physics_gizmos)
            .add_systems(Update, (toggle_physics_gizmos, log_player_state));
    }
}

fn hide_physics_gizmos(mut store: ResMut<GizmoConfigStore>) {
    let (config, _) = store.config_mut::<PhysicsGizmos>();
    config.enabled = false;
}

fn toggle_physics_gizmos(keyboard: Res<ButtonInput<KeyCode>>, mut store: ResMut<GizmoConfigStore>) {
    if !keyboard.just_pressed(KeyCode::KeyD) {
        return;
    }
    let (config, _) = store.config_mut::<PhysicsGizmos>();
    config.enabled = !config.enabled;
    info!("[DEBUG] Physics gizmos: {}", config.enabled);
}

fn log_player_state(
    keyboard: Res<ButtonInput<KeyCode>>,
    query: Query<(&Transform, &LinearVelocity, &MovementState), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }
    for (transform, velocity, state) in &query {
        info!(
            "[DEBUG] pos={:?} vel={:?} state={:?}",
            transform.translation.truncate(),
            velocity.0,
            state
        );
    }
}
