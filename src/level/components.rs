//! Level domain: components for spawned level content.

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use super::data::{CollectibleKind, TileClass};

/// Marker for everything that belongs to the level in play.
#[derive(Component, Debug)]
pub struct LevelEntity;

/// A spawned merged region of the level grid.
#[derive(Component, Debug, Clone, Copy)]
pub struct RegionTile {
    pub class: TileClass,
}

/// Invisible wall or ceiling keeping the player inside the map horizontally.
#[derive(Component, Debug)]
pub struct WorldBound;

/// A coin or gem waiting to be picked up.
#[derive(Component, Debug, Clone)]
pub struct Collectible {
    pub kind: CollectibleKind,
    pub position: Vec2,
    pub half_size: Vec2,
    alive: bool,
}

impl Collectible {
    pub fn new(kind: CollectibleKind, position: Vec2, half_size: Vec2) -> Self {
        Self {
            kind,
            position,
            half_size,
            alive: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn bounds(&self) -> Aabb2d {
        Aabb2d::new(self.position, self.half_size)
    }

    /// Flip alive to dead. Returns true only the first time; repeated
    /// overlaps with an already collected item are a no-op.
    pub fn collect(&mut self) -> bool {
        std::mem::replace(&mut self.alive, false)
    }
}
