//! Movement domain: tuning load, player spawn at level entry and reset on restart.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::config::load_ron_file;
use crate::core::{AssetPaths, RestartLevelEvent};
use crate::level::{ActiveLevel, LevelEntity};
use crate::movement::{GameLayer, MovementState, MovementTuning, PLAYER_SIZE, Player};

/// Override the built-in tuning with assets/data/tuning.ron when present.
pub(crate) fn load_tuning(mut commands: Commands, paths: Res<AssetPaths>) {
    let path = paths.tuning_file();
    if !path.exists() {
        debug!("No tuning file at {}, using defaults", path.display());
        commands.insert_resource(MovementTuning::default());
        return;
    }

    let tuning = match load_ron_file::<MovementTuning>(&path) {
        Ok(tuning) => {
            info!("Loaded movement tuning from {}", path.display());
            tuning
        }
        Err(e) => {
            warn!("{}; using default movement tuning", e);
            MovementTuning::default()
        }
    };
    commands.insert_resource(tuning);
}

/// Spawn the player at the active level's spawn point.
/// Runs on entering Playing, after the level itself has been spawned.
pub(crate) fn spawn_player(
    mut commands: Commands,
    level: Option<Res<ActiveLevel>>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let Some(level) = level else {
        warn!("No active level, cannot spawn player");
        return;
    };
    let spawn = level.0.spawn;

    commands.spawn((
        (Player, LevelEntity, MovementState::default()),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(spawn.extend(1.0)),
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is integrated by the movement controller
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Solid]),
        ),
    ));

    info!("Spawned player at {:?}", spawn);
}

/// Put the player back at spawn with no momentum and cleared contacts.
pub(crate) fn respawn_player(
    mut events: MessageReader<RestartLevelEvent>,
    level: Option<Res<ActiveLevel>>,
    mut query: Query<(&mut Transform, &mut LinearVelocity, &mut MovementState), With<Player>>,
) {
    if events.read().last().is_none() {
        return;
    }
    let Some(level) = level else {
        return;
    };

    for (mut transform, mut velocity, mut state) in &mut query {
        transform.translation = level.0.spawn.extend(transform.translation.z);
        velocity.0 = Vec2::ZERO;
        *state = MovementState::default();
    }
}
