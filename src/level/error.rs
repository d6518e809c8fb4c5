//! Error types for level data loading.

use thiserror::Error;

use super::data::TileClass;
use crate::core::ConfigError;

/// Errors that make a level or campaign unusable. All are fatal at load time.
#[derive(Debug, Error)]
pub enum LevelLoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unsupported level format '{path}' (expected .ron, .tmj or .json)")]
    UnsupportedFormat { path: String },

    #[error("Campaign lists no levels")]
    EmptyCampaign,

    #[error("Level '{level}': invalid tile size {size}")]
    InvalidTileSize { level: String, size: f32 },

    #[error("Level '{level}': grid is empty")]
    EmptyGrid { level: String },

    #[error("Level '{level}': row {row} has {actual} tiles, expected {expected}")]
    RaggedRow {
        level: String,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Level '{level}': symbol '{symbol}' is reserved for empty tiles")]
    ReservedSymbol { level: String, symbol: char },

    #[error("Level '{level}': unknown tile symbol '{symbol}' at ({col}, {row})")]
    UnknownSymbol {
        level: String,
        symbol: char,
        col: usize,
        row: usize,
    },

    #[error("Level '{level}': no {class:?} tiles")]
    MissingClassification { level: String, class: TileClass },

    #[error("Level '{level}': unknown collectible kind '{kind}'")]
    UnknownCollectibleKind { level: String, kind: String },

    #[error("Level '{level}': {kind} marker at ({col}, {row}) is outside the grid")]
    MarkerOutOfBounds {
        level: String,
        kind: String,
        col: i32,
        row: i32,
    },

    #[error("Level '{level}': layer '{layer}' has {actual} tiles, expected {expected}")]
    LayerShape {
        level: String,
        layer: String,
        expected: usize,
        actual: usize,
    },

    #[error("Level '{level}': tile ({col}, {row}) is both {first:?} and {second:?}")]
    OverlappingLayers {
        level: String,
        col: usize,
        row: usize,
        first: TileClass,
        second: TileClass,
    },
}
