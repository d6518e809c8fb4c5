//! Game composition root.
//!
//! - `configure_full`: window, rendering, physics and every gameplay plugin.
//! - `configure_headless`: scene flow and run state only, for integration tests.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::contact::ContactPlugin;
use crate::core::CorePlugin;
use crate::level::LevelPlugin;
use crate::movement::MovementPlugin;
use crate::run::RunPlugin;
use crate::ui::UiPlugin;

/// Pixels per physics length unit; one tile.
const PHYSICS_LENGTH_UNIT: f32 = 16.0;

pub fn run() {
    App::new().add_plugins(configure_full).run();
}

pub fn configure_full(app: &mut App) {
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Tile Platformer".into(),
            resolution: WindowResolution::new(1280, 720),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default().with_length_unit(PHYSICS_LENGTH_UNIT))
    // Gravity is integrated by the movement controller
    .insert_resource(Gravity(Vec2::ZERO))
    .add_plugins((
        CorePlugin,
        LevelPlugin,
        MovementPlugin,
        ContactPlugin,
        RunPlugin,
        UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(crate::debug::DebugPlugin);
}

/// Headless configuration for integration tests.
///
/// No window, renderer or physics; callers provide the campaign resource.
pub fn configure_headless(app: &mut App) {
    app.add_plugins((CorePlugin, RunPlugin));
}
