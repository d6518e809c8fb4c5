//! Run domain: persistent score and gem tally, and the level-exit hand-off.

use bevy::prelude::*;

use crate::core::{GameplayEvent, RestartCause};

/// Gem count shown on the HUD never exceeds this.
pub const GEM_DISPLAY_CAP: u32 = 8;

/// Frozen copy of the run tally handed from a finished level to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSnapshot {
    pub score: u32,
    pub gem_count: u32,
}

/// What the level flow must do after applying an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelDirective {
    /// Restart the current level in place. The tally is kept.
    Restart(RestartCause),
    /// The level was completed; the tally is frozen into the snapshot.
    Advance(RunSnapshot),
}

/// Score and gem tally for the current run.
///
/// Only mutated through [`RunState::apply`]; once sealed by an exit it ignores
/// every event until resumed or reset.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    score: u32,
    gem_count: u32,
    sealed: bool,
}

impl RunState {
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn gem_count(&self) -> u32 {
        self.gem_count
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn displayed_gems(&self) -> u32 {
        self.gem_count.min(GEM_DISPLAY_CAP)
    }

    pub fn snapshot(&self) -> RunSnapshot {
        RunSnapshot {
            score: self.score,
            gem_count: self.gem_count,
        }
    }

    /// Continue a run from a hand-off at the start of the next level.
    pub fn resume(&mut self, snapshot: RunSnapshot) {
        self.score = snapshot.score;
        self.gem_count = snapshot.gem_count;
        self.sealed = false;
    }

    /// Start a brand new run.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply one gameplay event.
    pub fn apply(&mut self, event: &GameplayEvent) -> Option<LevelDirective> {
        if self.sealed {
            return None;
        }

        match event {
            GameplayEvent::ItemCollected { kind, .. } => {
                self.score = self.score.saturating_add(kind.score_value());
                self.gem_count = self.gem_count.saturating_add(kind.gem_value());
                None
            }
            GameplayEvent::PlayerHitHazard => Some(LevelDirective::Restart(RestartCause::Hazard)),
            GameplayEvent::PlayerFellOutOfWorld => {
                Some(LevelDirective::Restart(RestartCause::FellOutOfWorld))
            }
            GameplayEvent::PlayerReachedExit => {
                self.sealed = true;
                Some(LevelDirective::Advance(self.snapshot()))
            }
            GameplayEvent::Landed
            | GameplayEvent::BecameAirborne
            | GameplayEvent::HitWall { .. }
            | GameplayEvent::Jumped { .. } => None,
        }
    }

    /// Apply a tick's events in order, stopping at the first directive.
    /// Events after a restart or exit belong to a discarded tick.
    pub fn apply_all<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a GameplayEvent>,
    ) -> Option<LevelDirective> {
        events.into_iter().find_map(|event| self.apply(event))
    }
}

/// Slot carrying the frozen tally from a finished level into the next one.
#[derive(Resource, Debug, Default)]
pub struct RunHandoff {
    snapshot: Option<RunSnapshot>,
}

impl RunHandoff {
    pub fn store(&mut self, snapshot: RunSnapshot) {
        self.snapshot = Some(snapshot);
    }

    pub fn peek(&self) -> Option<RunSnapshot> {
        self.snapshot
    }

    pub fn take(&mut self) -> Option<RunSnapshot> {
        self.snapshot.take()
    }

    pub fn clear(&mut self) {
        self.snapshot = None;
    }
}
