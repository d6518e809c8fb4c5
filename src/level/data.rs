//! Level data definitions mirroring assets/levels/*.ron.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tile size used by levels that do not declare one.
pub const DEFAULT_TILE_SIZE: f32 = 16.0;

/// Spawn point (map pixels, y down) used when a level does not declare one.
pub const DEFAULT_SPAWN: (f32, f32) = (125.0, 200.0);

/// Grid symbols that always mean "no tile".
pub const EMPTY_SYMBOLS: [char; 2] = ['.', ' '];

/// Classification of a tile. Exactly one per occupied tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum TileClass {
    Solid,
    Hazard,
    Exit,
    /// Background art; never interacts with the player.
    Decorative,
}

impl TileClass {
    /// Whether the class takes part in gameplay contact at all.
    pub fn is_interactive(&self) -> bool {
        !matches!(self, TileClass::Decorative)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "solid" => Some(TileClass::Solid),
            "hazard" => Some(TileClass::Hazard),
            "exit" => Some(TileClass::Exit),
            "decorative" | "background" => Some(TileClass::Decorative),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectibleKind {
    Coin,
    Gem,
}

impl CollectibleKind {
    /// Resolve a marker name from level data. Case-insensitive.
    pub fn from_marker(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "coin" => Some(CollectibleKind::Coin),
            "gem" => Some(CollectibleKind::Gem),
            _ => None,
        }
    }

    pub fn score_value(&self) -> u32 {
        match self {
            CollectibleKind::Coin => 10,
            CollectibleKind::Gem => 50,
        }
    }

    pub fn gem_value(&self) -> u32 {
        match self {
            CollectibleKind::Coin => 0,
            CollectibleKind::Gem => 1,
        }
    }
}

/// A level as authored in RON.
///
/// Grid rows run top to bottom; `spawn` is in map pixels with y pointing down,
/// the same convention tile editors use.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
    #[serde(default = "default_spawn")]
    pub spawn: (f32, f32),
    pub legend: HashMap<char, TileClass>,
    pub grid: Vec<String>,
    #[serde(default)]
    pub collectibles: Vec<MarkerDef>,
}

/// Collectible placement marker, in tile coordinates (column, row).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarkerDef {
    pub kind: String,
    pub tile: (i32, i32),
}

/// Ordered list of level files making up one run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CampaignDef {
    pub levels: Vec<String>,
}

fn default_tile_size() -> f32 {
    DEFAULT_TILE_SIZE
}

fn default_spawn() -> (f32, f32) {
    DEFAULT_SPAWN
}
