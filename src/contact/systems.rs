//! Contact domain: solid probes, collectible pickup and region overlap.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::math::bounding::IntersectsVolume;
use bevy::prelude::*;

use crate::contact::classify::{
    classify_hit, contact_transitions, flags_from_contacts, player_bounds,
};
use crate::core::GameplayEvent;
use crate::level::{ActiveLevel, Collectible};
use crate::movement::{GameLayer, InputSnapshot, MotionState, MovementState, PLAYER_SIZE, Player};

/// How far past the player's edges a probe reaches to count as contact.
const PROBE_DISTANCE: f32 = 2.0;
/// Probes start this far inside the player box so a resting contact is seen.
const PROBE_INSET: f32 = 1.0;

pub(crate) fn resolve_solid_contacts(
    spatial_query: SpatialQuery,
    input: Res<InputSnapshot>,
    mut query: Query<(&Transform, &mut MovementState), With<Player>>,
    mut events: MessageWriter<GameplayEvent>,
) {
    // Filter to only hit Solid layer entities
    let solid_filter = SpatialQueryFilter::from_mask(GameLayer::Solid);
    let half = PLAYER_SIZE * 0.5;

    for (transform, mut state) in &mut query {
        let center = transform.translation.truncate();
        let reach = PROBE_INSET + PROBE_DISTANCE;

        // Two foot probes near the bottom corners, one probe per side
        let probes = [
            (
                center + Vec2::new(-half.x + PROBE_INSET, -half.y + PROBE_INSET),
                Dir2::NEG_Y,
                reach,
            ),
            (
                center + Vec2::new(half.x - PROBE_INSET, -half.y + PROBE_INSET),
                Dir2::NEG_Y,
                reach,
            ),
            (center, Dir2::NEG_X, half.x + PROBE_DISTANCE),
            (center, Dir2::X, half.x + PROBE_DISTANCE),
        ];

        let contacts = probes.iter().filter_map(|&(origin, direction, distance)| {
            spatial_query
                .cast_ray(origin, direction, distance, true, &solid_filter)
                .and_then(|hit| classify_hit(hit.normal, direction))
        });
        let flags = flags_from_contacts(contacts);

        for event in contact_transitions(state.contacts, flags) {
            debug!("Contact: {:?}", event);
            events.write(event);
        }

        state.contacts = flags;
        state.motion = MotionState::derive(flags, &input);
    }
}

/// Pick up every alive collectible the player overlaps this tick.
pub(crate) fn collect_items(
    mut commands: Commands,
    player: Query<&Transform, With<Player>>,
    mut items: Query<(Entity, &mut Collectible)>,
    mut events: MessageWriter<GameplayEvent>,
) {
    let Ok(transform) = player.single() else {
        return;
    };
    let bounds = player_bounds(transform.translation.truncate(), PLAYER_SIZE);

    for (entity, mut item) in &mut items {
        if !item.is_alive() || !bounds.intersects(&item.bounds()) {
            continue;
        }
        if item.collect() {
            events.write(GameplayEvent::ItemCollected {
                kind: item.kind,
                position: item.position,
            });
            commands.entity(entity).despawn();
        }
    }
}

/// Report Hazard and Exit overlaps, hazard first.
pub(crate) fn resolve_region_overlaps(
    level: Option<Res<ActiveLevel>>,
    player: Query<&Transform, With<Player>>,
    mut events: MessageWriter<GameplayEvent>,
) {
    let Some(level) = level else {
        return;
    };
    let Ok(transform) = player.single() else {
        return;
    };

    let bounds = player_bounds(transform.translation.truncate(), PLAYER_SIZE);
    let overlap = level.0.grid.overlap(&bounds);

    if overlap.hazard {
        events.write(GameplayEvent::PlayerHitHazard);
    }
    if overlap.exit {
        events.write(GameplayEvent::PlayerReachedExit);
    }
}
