//! Core domain: gameplay events shared between the tick stages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::level::CollectibleKind;
use crate::movement::WallSide;

/// Domain events emitted by the Movement Controller and the Contact Resolver.
///
/// A single channel keeps emission order intact across event kinds, which the
/// Run State Manager relies on when a tick carries both a pickup and an exit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameplayEvent {
    Landed,
    BecameAirborne,
    /// A side of the player became blocked by a Solid region this tick.
    HitWall { side: WallSide },
    /// A ground jump (`wall: None`) or wall jump fired this tick.
    Jumped { wall: Option<WallSide> },
    ItemCollected {
        kind: CollectibleKind,
        position: Vec2,
    },
    PlayerHitHazard,
    PlayerReachedExit,
    PlayerFellOutOfWorld,
}

impl Message for GameplayEvent {}

/// Why the current level is being restarted in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartCause {
    Hazard,
    FellOutOfWorld,
}

/// Fired by the Run State Manager when the level must restart in place
#[derive(Debug, Clone, Copy)]
pub struct RestartLevelEvent {
    pub cause: RestartCause,
}

impl Message for RestartLevelEvent {}

/// Choice made on the results screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsChoice {
    /// Advance to the next level, carrying the hand-off. Starts a new run
    /// when the campaign has no further level.
    Continue,
    NewRun,
}

impl Message for ResultsChoice {}
