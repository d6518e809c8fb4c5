//! Run domain: tests for tally updates, restarts and the exit hand-off.

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::systems::{apply_gameplay_events, resume_from_handoff};
use super::{GEM_DISPLAY_CAP, LevelDirective, RunHandoff, RunSnapshot, RunState};
use crate::core::{GameplayEvent, RestartCause, RestartLevelEvent};
use crate::level::CollectibleKind;
use crate::test_utils::{buffered_messages, run_system_once};

fn collected(kind: CollectibleKind) -> GameplayEvent {
    GameplayEvent::ItemCollected {
        kind,
        position: Vec2::new(64.0, -32.0),
    }
}

fn run_with(score_events: &[GameplayEvent]) -> RunState {
    let mut run = RunState::default();
    assert_eq!(run.apply_all(score_events), None);
    run
}

// -----------------------------------------------------------------------------
// RunState tests
// -----------------------------------------------------------------------------

#[test]
fn test_coin_and_gem_values() {
    let run = run_with(&[collected(CollectibleKind::Coin)]);
    assert_eq!((run.score(), run.gem_count()), (10, 0));

    let run = run_with(&[collected(CollectibleKind::Gem)]);
    assert_eq!((run.score(), run.gem_count()), (50, 1));
}

#[test]
fn test_gem_counted_once_across_overlapping_frames() {
    let mut world = World::new();
    world.init_resource::<Messages<GameplayEvent>>();
    let mut item = crate::level::Collectible::new(
        CollectibleKind::Gem,
        Vec2::new(64.0, -32.0),
        Vec2::splat(6.0),
    );
    let mut run = RunState::default();

    // First overlap plus five more before removal propagates
    for _ in 0..6 {
        if item.collect() {
            world.write_message(collected(item.kind));
        }
    }
    let events = buffered_messages::<GameplayEvent>(&world);
    run.apply_all(&events);

    assert_eq!(run.gem_count(), 1);
    assert_eq!(run.score(), 50);
}

#[test]
fn test_hazard_restart_keeps_tally() {
    let mut run = run_with(&[
        collected(CollectibleKind::Gem),
        collected(CollectibleKind::Gem),
        collected(CollectibleKind::Coin),
        collected(CollectibleKind::Coin),
    ]);
    assert_eq!((run.score(), run.gem_count()), (120, 2));

    let directive = run.apply(&GameplayEvent::PlayerHitHazard);
    assert_eq!(directive, Some(LevelDirective::Restart(RestartCause::Hazard)));
    assert_eq!((run.score(), run.gem_count()), (120, 2));
    assert!(!run.is_sealed());
}

#[test]
fn test_fall_out_restart_keeps_tally() {
    let mut run = run_with(&[collected(CollectibleKind::Coin)]);
    assert_eq!(
        run.apply(&GameplayEvent::PlayerFellOutOfWorld),
        Some(LevelDirective::Restart(RestartCause::FellOutOfWorld))
    );
    assert_eq!(run.score(), 10);
}

#[test]
fn test_exit_hands_off_and_ignores_stray_events() {
    let mut run = RunState::default();
    run.resume(RunSnapshot {
        score: 370,
        gem_count: 6,
    });

    let tick = [
        GameplayEvent::PlayerReachedExit,
        collected(CollectibleKind::Gem),
        GameplayEvent::PlayerHitHazard,
    ];
    let directive = run.apply_all(&tick);

    let expected = RunSnapshot {
        score: 370,
        gem_count: 6,
    };
    assert_eq!(directive, Some(LevelDirective::Advance(expected)));
    assert!(run.is_sealed());

    // Sealed: later events change nothing
    assert_eq!(run.apply(&collected(CollectibleKind::Coin)), None);
    assert_eq!(run.apply(&GameplayEvent::PlayerReachedExit), None);
    assert_eq!(run.snapshot(), expected);
}

#[test]
fn test_pickup_before_exit_in_same_tick_counts() {
    let mut run = RunState::default();
    let directive = run.apply_all(&[
        collected(CollectibleKind::Coin),
        GameplayEvent::PlayerReachedExit,
    ]);
    assert_eq!(
        directive,
        Some(LevelDirective::Advance(RunSnapshot {
            score: 10,
            gem_count: 0,
        }))
    );
}

#[test]
fn test_displayed_gems_capped() {
    let events: Vec<GameplayEvent> = (0..10).map(|_| collected(CollectibleKind::Gem)).collect();
    let run = run_with(&events);
    assert_eq!(run.gem_count(), 10);
    assert_eq!(run.displayed_gems(), GEM_DISPLAY_CAP);
}

#[test]
fn test_reset_clears_everything() {
    let mut run = run_with(&[collected(CollectibleKind::Gem)]);
    run.apply(&GameplayEvent::PlayerReachedExit);
    run.reset();
    assert_eq!(run, RunState::default());
}

// -----------------------------------------------------------------------------
// System tests
// -----------------------------------------------------------------------------

fn run_world() -> World {
    let mut world = World::new();
    world.init_resource::<RunState>();
    world.init_resource::<RunHandoff>();
    world.init_resource::<Messages<GameplayEvent>>();
    world.init_resource::<Messages<RestartLevelEvent>>();
    world.init_resource::<NextState<crate::core::GameState>>();
    world
}

#[test]
fn test_hazard_event_requests_restart() {
    let mut world = run_world();
    world.write_message(collected(CollectibleKind::Coin));
    world.write_message(GameplayEvent::PlayerHitHazard);

    run_system_once(&mut world, apply_gameplay_events);

    let restarts = buffered_messages::<RestartLevelEvent>(&world);
    assert_eq!(restarts.len(), 1);
    assert_eq!(restarts[0].cause, RestartCause::Hazard);
    assert_eq!(world.resource::<RunState>().score(), 10);
}

#[test]
fn test_exit_event_stores_handoff() {
    let mut world = run_world();
    world.write_message(collected(CollectibleKind::Gem));
    world.write_message(GameplayEvent::PlayerReachedExit);

    run_system_once(&mut world, apply_gameplay_events);

    let expected = RunSnapshot {
        score: 50,
        gem_count: 1,
    };
    assert_eq!(world.resource::<RunHandoff>().peek(), Some(expected));
    assert!(buffered_messages::<RestartLevelEvent>(&world).is_empty());

    run_system_once(&mut world, resume_from_handoff);

    let run = world.resource::<RunState>();
    assert!(!run.is_sealed());
    assert_eq!(run.snapshot(), expected);
    assert_eq!(world.resource::<RunHandoff>().peek(), None);
}
