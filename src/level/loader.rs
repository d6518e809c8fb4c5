//! Level and campaign loading with validation.

use bevy::prelude::*;
use std::path::Path;

use super::campaign::Campaign;
use super::data::*;
use super::error::LevelLoadError;
use super::grid::LevelGrid;
use super::tiled::parse_tiled_map;
use crate::core::config::{load_ron_file, parse_ron, read_text};

/// A validated, ready-to-spawn level.
#[derive(Debug, Clone)]
pub struct Level {
    pub id: String,
    pub name: String,
    pub grid: LevelGrid,
    /// Player spawn in world space.
    pub spawn: Vec2,
    pub collectibles: Vec<CollectibleSpawn>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectibleSpawn {
    pub kind: CollectibleKind,
    pub position: Vec2,
}

impl Level {
    /// Validate a level definition and build its grid.
    pub fn from_def(def: &LevelDef) -> Result<Self, LevelLoadError> {
        let level = def.id.clone();

        if !(def.tile_size.is_finite() && def.tile_size > 0.0) {
            return Err(LevelLoadError::InvalidTileSize {
                level,
                size: def.tile_size,
            });
        }

        for symbol in def.legend.keys() {
            if EMPTY_SYMBOLS.contains(symbol) {
                return Err(LevelLoadError::ReservedSymbol {
                    level,
                    symbol: *symbol,
                });
            }
        }

        let width = def.grid.first().map(|r| r.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(LevelLoadError::EmptyGrid { level });
        }

        let mut grid = LevelGrid::new(width, def.grid.len(), def.tile_size);
        for (row, line) in def.grid.iter().enumerate() {
            let actual = line.chars().count();
            if actual != width {
                return Err(LevelLoadError::RaggedRow {
                    level,
                    row,
                    expected: width,
                    actual,
                });
            }

            for (col, symbol) in line.chars().enumerate() {
                if EMPTY_SYMBOLS.contains(&symbol) {
                    continue;
                }
                let Some(class) = def.legend.get(&symbol) else {
                    return Err(LevelLoadError::UnknownSymbol {
                        level,
                        symbol,
                        col,
                        row,
                    });
                };
                grid.set(col, row, Some(*class));
            }
        }

        for class in [TileClass::Solid, TileClass::Exit] {
            if grid.count(class) == 0 {
                return Err(LevelLoadError::MissingClassification { level, class });
            }
        }

        let mut collectibles = Vec::with_capacity(def.collectibles.len());
        for marker in &def.collectibles {
            let Some(kind) = CollectibleKind::from_marker(&marker.kind) else {
                return Err(LevelLoadError::UnknownCollectibleKind {
                    level,
                    kind: marker.kind.clone(),
                });
            };
            let (col, row) = marker.tile;
            if !grid.contains_tile(col, row) {
                return Err(LevelLoadError::MarkerOutOfBounds {
                    level,
                    kind: marker.kind.clone(),
                    col,
                    row,
                });
            }
            collectibles.push(CollectibleSpawn {
                kind,
                position: grid.tile_center(col as usize, row as usize),
            });
        }

        let spawn = grid.map_to_world(Vec2::new(def.spawn.0, def.spawn.1));
        let name = if def.name.is_empty() {
            def.id.clone()
        } else {
            def.name.clone()
        };

        Ok(Self {
            id: def.id.clone(),
            name,
            grid,
            spawn,
            collectibles,
        })
    }

    pub fn from_ron_str(source: &str, contents: &str) -> Result<Self, LevelLoadError> {
        let def: LevelDef = parse_ron(source, contents)?;
        Self::from_def(&def)
    }
}

/// Load one level file. The extension picks the format.
pub fn load_level_file(path: &Path) -> Result<Level, LevelLoadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("ron") => {
            let def: LevelDef = load_ron_file(path)?;
            Level::from_def(&def)
        }
        Some("tmj") | Some("json") => {
            let contents = read_text(path)?;
            let id = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("tiled_map");
            let def = parse_tiled_map(id, &contents)?;
            Level::from_def(&def)
        }
        _ => Err(LevelLoadError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Load every level listed in `<levels_dir>/campaign.ron`.
/// Fails on the first invalid level.
pub fn load_campaign(levels_dir: &Path) -> Result<Campaign, LevelLoadError> {
    let def: CampaignDef = load_ron_file(&levels_dir.join("campaign.ron"))?;
    if def.levels.is_empty() {
        return Err(LevelLoadError::EmptyCampaign);
    }

    let mut levels = Vec::with_capacity(def.levels.len());
    for file in &def.levels {
        let level = load_level_file(&levels_dir.join(file))?;
        info!(
            "[LEVEL] Loaded '{}' ({}x{} tiles, {} collectible(s))",
            level.id,
            level.grid.width(),
            level.grid.height(),
            level.collectibles.len()
        );
        levels.push(level);
    }

    Ok(Campaign::new(levels))
}
