//! Contact domain: tests for contact classification and overlap events.

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::systems::{collect_items, resolve_region_overlaps};
use super::{
    ContactKind, classify_hit, classify_normal, contact_transitions, flags_from_contacts,
    player_bounds,
};
use crate::core::GameplayEvent;
use crate::level::{
    ActiveLevel, Collectible, CollectibleKind, Level, LevelGrid, TileClass,
};
use crate::movement::{ContactFlags, Player, WallSide};
use crate::test_utils::{buffered_messages, run_system_once};

fn world_with_player(position: Vec2) -> World {
    let mut world = World::new();
    world.init_resource::<Messages<GameplayEvent>>();
    world.spawn((Player, Transform::from_translation(position.extend(1.0))));
    world
}

// -----------------------------------------------------------------------------
// Classification tests
// -----------------------------------------------------------------------------

#[test]
fn test_classify_normal() {
    assert_eq!(classify_normal(Vec2::Y), Some(ContactKind::Ground));
    assert_eq!(classify_normal(Vec2::NEG_Y), Some(ContactKind::Ceiling));
    assert_eq!(
        classify_normal(Vec2::X),
        Some(ContactKind::Wall(WallSide::Left))
    );
    assert_eq!(
        classify_normal(Vec2::NEG_X),
        Some(ContactKind::Wall(WallSide::Right))
    );
    assert_eq!(classify_normal(Vec2::ZERO), None);
}

#[test]
fn test_steep_slope_is_wall() {
    let steep = Vec2::new(0.8, 0.6);
    assert_eq!(
        classify_normal(steep),
        Some(ContactKind::Wall(WallSide::Left))
    );
    let shallow = Vec2::new(0.3, 0.95);
    assert_eq!(classify_normal(shallow), Some(ContactKind::Ground));
}

#[test]
fn test_degenerate_hit_faces_back_along_probe() {
    assert_eq!(
        classify_hit(Vec2::ZERO, Dir2::NEG_Y),
        Some(ContactKind::Ground)
    );
    assert_eq!(
        classify_hit(Vec2::ZERO, Dir2::X),
        Some(ContactKind::Wall(WallSide::Right))
    );
}

#[test]
fn test_flags_from_contacts_ignores_ceiling() {
    let flags = flags_from_contacts([
        ContactKind::Ground,
        ContactKind::Ceiling,
        ContactKind::Wall(WallSide::Right),
    ]);
    assert_eq!(
        flags,
        ContactFlags::GROUNDED_BELOW | ContactFlags::BLOCKED_RIGHT
    );
    assert!(flags_from_contacts([ContactKind::Ceiling]).is_empty());
}

#[test]
fn test_contact_transitions() {
    assert_eq!(
        contact_transitions(ContactFlags::empty(), ContactFlags::GROUNDED_BELOW),
        vec![GameplayEvent::Landed]
    );
    assert_eq!(
        contact_transitions(ContactFlags::GROUNDED_BELOW, ContactFlags::BLOCKED_LEFT),
        vec![
            GameplayEvent::BecameAirborne,
            GameplayEvent::HitWall {
                side: WallSide::Left
            }
        ]
    );
    // Steady contact emits nothing
    assert!(contact_transitions(ContactFlags::all(), ContactFlags::all()).is_empty());
}

// -----------------------------------------------------------------------------
// Collectible tests
// -----------------------------------------------------------------------------

#[test]
fn test_item_collected_once() {
    let mut world = world_with_player(Vec2::ZERO);
    let item = world
        .spawn(Collectible::new(
            CollectibleKind::Gem,
            Vec2::new(4.0, 0.0),
            Vec2::splat(6.0),
        ))
        .id();

    run_system_once(&mut world, collect_items);
    run_system_once(&mut world, collect_items);

    assert_eq!(
        buffered_messages::<GameplayEvent>(&world),
        vec![GameplayEvent::ItemCollected {
            kind: CollectibleKind::Gem,
            position: Vec2::new(4.0, 0.0),
        }]
    );
    assert!(world.get_entity(item).is_err());
}

#[test]
fn test_dead_item_not_recollected() {
    let mut world = world_with_player(Vec2::ZERO);
    let mut item = Collectible::new(CollectibleKind::Coin, Vec2::ZERO, Vec2::splat(6.0));
    assert!(item.collect());
    assert!(!item.collect());
    world.spawn(item);

    run_system_once(&mut world, collect_items);

    assert!(buffered_messages::<GameplayEvent>(&world).is_empty());
}

#[test]
fn test_distant_item_untouched() {
    let mut world = world_with_player(Vec2::ZERO);
    world.spawn(Collectible::new(
        CollectibleKind::Coin,
        Vec2::new(40.0, 0.0),
        Vec2::splat(6.0),
    ));

    run_system_once(&mut world, collect_items);

    assert!(buffered_messages::<GameplayEvent>(&world).is_empty());
    let alive = world
        .query::<&Collectible>()
        .iter(&world)
        .all(|c| c.is_alive());
    assert!(alive);
}

// -----------------------------------------------------------------------------
// Region overlap tests
// -----------------------------------------------------------------------------

fn hazard_exit_level() -> Level {
    let mut grid = LevelGrid::new(4, 3, 16.0);
    grid.set(0, 2, Some(TileClass::Solid));
    grid.set(1, 2, Some(TileClass::Hazard));
    grid.set(2, 2, Some(TileClass::Exit));
    Level {
        id: "overlap".to_string(),
        name: "Overlap".to_string(),
        grid,
        spawn: Vec2::new(8.0, -8.0),
        collectibles: Vec::new(),
    }
}

#[test]
fn test_hazard_reported_before_exit() {
    // Straddling the hazard and exit tiles of the bottom row
    let mut world = world_with_player(Vec2::new(32.0, -40.0));
    world.insert_resource(ActiveLevel(hazard_exit_level()));

    run_system_once(&mut world, resolve_region_overlaps);

    assert_eq!(
        buffered_messages::<GameplayEvent>(&world),
        vec![GameplayEvent::PlayerHitHazard, GameplayEvent::PlayerReachedExit]
    );
}

#[test]
fn test_solid_and_empty_tiles_emit_nothing() {
    let mut world = world_with_player(Vec2::new(8.0, -24.0));
    world.insert_resource(ActiveLevel(hazard_exit_level()));

    run_system_once(&mut world, resolve_region_overlaps);

    assert!(buffered_messages::<GameplayEvent>(&world).is_empty());
}

#[test]
fn test_player_bounds_centered() {
    let bounds = player_bounds(Vec2::new(10.0, -10.0), Vec2::new(14.0, 16.0));
    assert_eq!(bounds.min, Vec2::new(3.0, -18.0));
    assert_eq!(bounds.max, Vec2::new(17.0, -2.0));
}
