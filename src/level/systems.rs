//! Level domain: campaign loading, level spawning, restart and cleanup.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{AssetPaths, RestartLevelEvent};
use crate::level::campaign::{ActiveLevel, Campaign, LevelSession};
use crate::level::components::{Collectible, LevelEntity, RegionTile, WorldBound};
use crate::level::data::{CollectibleKind, TileClass};
use crate::level::grid::LevelGrid;
use crate::level::loader::{Level, load_campaign};
use crate::movement::GameLayer;

/// Share of a tile covered by a collectible's pickup box.
const COLLECTIBLE_FRACTION: f32 = 0.75;

fn region_color(class: TileClass) -> Color {
    match class {
        TileClass::Solid => Color::srgb(0.45, 0.45, 0.5),
        TileClass::Hazard => Color::srgb(0.85, 0.2, 0.2),
        TileClass::Exit => Color::srgb(0.3, 0.85, 0.4),
        TileClass::Decorative => Color::srgb(0.2, 0.22, 0.28),
    }
}

fn collectible_color(kind: CollectibleKind) -> Color {
    match kind {
        CollectibleKind::Coin => Color::srgb(0.95, 0.8, 0.2),
        CollectibleKind::Gem => Color::srgb(0.3, 0.8, 0.95),
    }
}

/// Load the campaign unless one was provided up front.
/// Any invalid level is fatal: the app exits before gameplay activates.
pub(crate) fn load_campaign_on_startup(
    mut commands: Commands,
    paths: Res<AssetPaths>,
    existing: Option<Res<Campaign>>,
    mut exit: MessageWriter<AppExit>,
) {
    if existing.is_some() {
        return;
    }

    match load_campaign(&paths.levels_dir) {
        Ok(campaign) => {
            info!("[LEVEL] Campaign loaded: {} level(s)", campaign.len());
            commands.insert_resource(campaign);
        }
        Err(e) => {
            error!("[LEVEL] Failed to load campaign: {}", e);
            exit.write(AppExit::error());
        }
    }
}

pub(crate) fn spawn_level(
    mut commands: Commands,
    campaign: Res<Campaign>,
    mut session: ResMut<LevelSession>,
) {
    let Some(level) = campaign.get(session.index) else {
        error!("[LEVEL] No level at campaign index {}", session.index);
        return;
    };

    session.begin();
    let tile_size = level.grid.tile_size();

    for region in level.grid.regions() {
        let rect = region.world_rect(tile_size);
        let z = if region.class == TileClass::Decorative {
            -1.0
        } else {
            0.0
        };

        let mut entity = commands.spawn((
            LevelEntity,
            RegionTile {
                class: region.class,
            },
            Sprite {
                color: region_color(region.class),
                custom_size: Some(rect.size()),
                ..default()
            },
            Transform::from_translation(rect.center().extend(z)),
        ));

        if region.class == TileClass::Solid {
            entity.insert((
                RigidBody::Static,
                Collider::rectangle(rect.width(), rect.height()),
                CollisionLayers::new(GameLayer::Solid, [GameLayer::Player]),
            ));
        }
    }

    spawn_world_bounds(&mut commands, &level.grid);
    spawn_collectibles(&mut commands, level);
    commands.insert_resource(ActiveLevel(level.clone()));

    info!(
        "[LEVEL] Entered '{}' ({} of {})",
        level.name,
        session.index + 1,
        campaign.len()
    );
}

/// Left and right walls plus a ceiling. The bottom stays open.
fn spawn_world_bounds(commands: &mut Commands, grid: &LevelGrid) {
    let ts = grid.tile_size();
    let size = grid.pixel_size();
    let wall_height = size.y + ts * 4.0;
    let wall_center_y = -size.y * 0.5 + ts;

    let bounds = [
        (
            Vec2::new(-ts * 0.5, wall_center_y),
            Vec2::new(ts, wall_height),
        ),
        (
            Vec2::new(size.x + ts * 0.5, wall_center_y),
            Vec2::new(ts, wall_height),
        ),
        (
            Vec2::new(size.x * 0.5, ts * 0.5),
            Vec2::new(size.x + ts * 2.0, ts),
        ),
    ];

    for (center, extent) in bounds {
        commands.spawn((
            LevelEntity,
            WorldBound,
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(extent.x, extent.y),
            CollisionLayers::new(GameLayer::Solid, [GameLayer::Player]),
        ));
    }
}

fn spawn_collectibles(commands: &mut Commands, level: &Level) {
    let tile_size = level.grid.tile_size();
    let half_size = Vec2::splat(tile_size * COLLECTIBLE_FRACTION * 0.5);

    for spawn in &level.collectibles {
        commands.spawn((
            LevelEntity,
            Collectible::new(spawn.kind, spawn.position, half_size),
            Sprite {
                color: collectible_color(spawn.kind),
                custom_size: Some(half_size * 2.0),
                ..default()
            },
            Transform::from_translation(spawn.position.extend(0.5)),
        ));
    }
}

/// Reinitialize collectibles for an in-place restart.
/// The grid is immutable and stays spawned.
pub(crate) fn restart_level(
    mut commands: Commands,
    mut events: MessageReader<RestartLevelEvent>,
    active: Option<Res<ActiveLevel>>,
    collectibles: Query<Entity, With<Collectible>>,
    mut session: ResMut<LevelSession>,
) {
    let Some(event) = events.read().last() else {
        return;
    };
    let Some(active) = active else {
        warn!("[LEVEL] Restart requested with no active level");
        return;
    };

    for entity in &collectibles {
        commands.entity(entity).despawn();
    }
    spawn_collectibles(&mut commands, &active.0);
    session.record_restart();

    info!(
        "[LEVEL] Restarting '{}' after {:?} (attempt {})",
        active.0.name, event.cause, session.attempt
    );
}

pub(crate) fn cleanup_level(mut commands: Commands, query: Query<Entity, With<LevelEntity>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<ActiveLevel>();
}
