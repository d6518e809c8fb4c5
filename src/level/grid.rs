//! Level grid: per-tile classification, region merging and overlap queries.
//!
//! Tile (col, row) has row 0 at the top of the map. World space is y-up with
//! the map's top-left corner at the origin, so the whole level lies at y <= 0.

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use super::data::TileClass;

#[derive(Debug, Clone, PartialEq)]
pub struct LevelGrid {
    width: usize,
    height: usize,
    tile_size: f32,
    tiles: Vec<Option<TileClass>>,
}

/// A tile-aligned rectangle of one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRegion {
    pub class: TileClass,
    pub col: usize,
    pub row: usize,
    pub cols: usize,
    pub rows: usize,
}

impl LevelRegion {
    /// World-space rectangle covered by this region.
    pub fn world_rect(&self, tile_size: f32) -> Rect {
        let min = Vec2::new(
            self.col as f32 * tile_size,
            -((self.row + self.rows) as f32 * tile_size),
        );
        let size = Vec2::new(self.cols as f32, self.rows as f32) * tile_size;
        Rect::from_corners(min, min + size)
    }
}

/// Interactive classes a player box overlaps this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionOverlap {
    pub hazard: bool,
    pub exit: bool,
}

impl LevelGrid {
    pub fn new(width: usize, height: usize, tile_size: f32) -> Self {
        Self {
            width,
            height,
            tile_size,
            tiles: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn get(&self, col: usize, row: usize) -> Option<TileClass> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.tiles[row * self.width + col]
    }

    pub fn set(&mut self, col: usize, row: usize, class: Option<TileClass>) {
        if col < self.width && row < self.height {
            self.tiles[row * self.width + col] = class;
        }
    }

    pub fn contains_tile(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height
    }

    pub fn count(&self, class: TileClass) -> usize {
        self.tiles.iter().filter(|t| **t == Some(class)).count()
    }

    /// Level size in world units.
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) * self.tile_size
    }

    pub fn tile_center(&self, col: usize, row: usize) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.tile_size,
            -((row as f32 + 0.5) * self.tile_size),
        )
    }

    /// Convert map pixels (y down) to world space (y up).
    pub fn map_to_world(&self, map: Vec2) -> Vec2 {
        Vec2::new(map.x, -map.y)
    }

    /// Merge tiles into rectangles: horizontal runs first, then runs with an
    /// identical span in consecutive rows.
    pub fn regions(&self) -> Vec<LevelRegion> {
        let mut done = Vec::new();
        let mut open: Vec<LevelRegion> = Vec::new();

        for row in 0..self.height {
            let mut next_open = Vec::new();
            let mut col = 0;
            while col < self.width {
                let Some(class) = self.get(col, row) else {
                    col += 1;
                    continue;
                };
                let start = col;
                while col < self.width && self.get(col, row) == Some(class) {
                    col += 1;
                }
                let cols = col - start;

                let extended = open
                    .iter()
                    .position(|r| r.class == class && r.col == start && r.cols == cols);
                match extended {
                    Some(index) => {
                        let mut region = open.swap_remove(index);
                        region.rows += 1;
                        next_open.push(region);
                    }
                    None => next_open.push(LevelRegion {
                        class,
                        col: start,
                        row,
                        cols,
                        rows: 1,
                    }),
                }
            }
            done.append(&mut open);
            open = next_open;
        }
        done.append(&mut open);

        done.sort_by_key(|r| (r.row, r.col));
        done
    }

    /// Classify the interactive tiles a world-space box overlaps.
    ///
    /// Touching a tile edge is not an overlap.
    pub fn overlap(&self, aabb: &Aabb2d) -> RegionOverlap {
        let mut overlap = RegionOverlap::default();
        let ts = self.tile_size;

        let col_min = (aabb.min.x / ts).floor() as i32;
        let col_max = (aabb.max.x / ts).ceil() as i32 - 1;
        // Rows grow downward while world y grows upward.
        let row_min = (-aabb.max.y / ts).floor() as i32;
        let row_max = (-aabb.min.y / ts).ceil() as i32 - 1;

        for row in row_min.max(0)..=row_max.min(self.height as i32 - 1) {
            for col in col_min.max(0)..=col_max.min(self.width as i32 - 1) {
                match self.get(col as usize, row as usize) {
                    Some(TileClass::Hazard) => overlap.hazard = true,
                    Some(TileClass::Exit) => overlap.exit = true,
                    _ => {}
                }
            }
        }

        overlap
    }
}
