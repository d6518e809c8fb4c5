//! Level domain: the loaded campaign, the level in play and its session.

use bevy::prelude::*;

use super::loader::Level;

/// All levels of a run, in play order. Immutable after load.
#[derive(Resource, Debug, Clone)]
pub struct Campaign {
    levels: Vec<Level>,
}

impl Campaign {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn has_level_after(&self, index: usize) -> bool {
        index + 1 < self.levels.len()
    }
}

/// Position in the campaign and attempts at the current level.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelSession {
    pub index: usize,
    /// 1 on first entry, +1 per in-place restart.
    pub attempt: u32,
}

impl LevelSession {
    pub fn begin(&mut self) {
        self.attempt = 1;
    }

    pub fn record_restart(&mut self) {
        self.attempt += 1;
    }

    pub fn advance(&mut self) {
        self.index += 1;
        self.attempt = 0;
    }

    pub fn rewind(&mut self) {
        self.index = 0;
        self.attempt = 0;
    }
}

/// The level currently in play; inserted when a level is spawned.
#[derive(Resource, Debug, Clone)]
pub struct ActiveLevel(pub Level);
