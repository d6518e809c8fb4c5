//! Import of Tiled JSON maps (.tmj) into a `LevelDef`.
//!
//! Tile layers are classified by a `classification` layer property, or by the
//! conventional layer names when the property is absent. Object groups named
//! after a collectible kind become markers.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use super::data::{DEFAULT_SPAWN, LevelDef, MarkerDef, TileClass};
use super::error::LevelLoadError;
use crate::core::ConfigError;

#[derive(Debug, Deserialize)]
struct TiledMap {
    width: usize,
    height: usize,
    tilewidth: u32,
    #[serde(default)]
    properties: Vec<TiledProperty>,
    layers: Vec<TiledLayer>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TiledLayer {
    Tilelayer {
        name: String,
        #[serde(default)]
        data: Vec<u32>,
        #[serde(default)]
        properties: Vec<TiledProperty>,
    },
    Objectgroup {
        name: String,
        #[serde(default)]
        objects: Vec<TiledObject>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct TiledProperty {
    name: String,
    #[serde(default)]
    value: Value,
}

#[derive(Debug, Deserialize)]
struct TiledObject {
    x: f32,
    y: f32,
    #[serde(default)]
    width: f32,
    #[serde(default)]
    height: f32,
    /// Tile objects are anchored at their bottom-left corner.
    #[serde(default)]
    gid: Option<u32>,
}

const SYMBOLS: [(TileClass, char); 4] = [
    (TileClass::Solid, '#'),
    (TileClass::Hazard, '^'),
    (TileClass::Exit, 'E'),
    (TileClass::Decorative, '~'),
];

fn property<'a>(properties: &'a [TiledProperty], name: &str) -> Option<&'a Value> {
    properties.iter().find(|p| p.name == name).map(|p| &p.value)
}

fn classify_layer(name: &str, properties: &[TiledProperty]) -> TileClass {
    if let Some(class) = property(properties, "classification")
        .and_then(Value::as_str)
        .and_then(TileClass::from_name)
    {
        return class;
    }

    match name {
        "Ground-Layer" | "Ground" => TileClass::Solid,
        "Traps" | "Hazards" => TileClass::Hazard,
        "Exit" => TileClass::Exit,
        _ => TileClass::Decorative,
    }
}

fn symbol_for(class: TileClass) -> char {
    SYMBOLS
        .iter()
        .find(|(c, _)| *c == class)
        .map(|(_, s)| *s)
        .unwrap_or('.')
}

/// Convert a Tiled JSON document into a level definition.
///
/// Two interactive layers painting the same tile is rejected; decorative
/// layers never override an interactive tile.
pub fn parse_tiled_map(id: &str, contents: &str) -> Result<LevelDef, LevelLoadError> {
    let map: TiledMap = serde_json::from_str(contents).map_err(|e| ConfigError::Parse {
        path: id.to_string(),
        details: e.to_string(),
    })?;

    let tile_size = map.tilewidth as f32;
    let mut cells: Vec<Option<TileClass>> = vec![None; map.width * map.height];
    let mut collectibles = Vec::new();

    for layer in &map.layers {
        match layer {
            TiledLayer::Tilelayer {
                name,
                data,
                properties,
            } => {
                if data.len() != cells.len() {
                    return Err(LevelLoadError::LayerShape {
                        level: id.to_string(),
                        layer: name.clone(),
                        expected: cells.len(),
                        actual: data.len(),
                    });
                }

                let class = classify_layer(name, properties);
                for (index, gid) in data.iter().enumerate() {
                    if *gid == 0 {
                        continue;
                    }
                    match cells[index] {
                        Some(existing) if existing.is_interactive() && class.is_interactive() => {
                            if existing != class {
                                return Err(LevelLoadError::OverlappingLayers {
                                    level: id.to_string(),
                                    col: index % map.width,
                                    row: index / map.width,
                                    first: existing,
                                    second: class,
                                });
                            }
                        }
                        Some(existing) if existing.is_interactive() => {}
                        _ => cells[index] = Some(class),
                    }
                }
            }
            TiledLayer::Objectgroup { name, objects } => {
                for object in objects {
                    let center_x = object.x + object.width * 0.5;
                    let center_y = if object.gid.is_some() {
                        object.y - object.height * 0.5
                    } else {
                        object.y + object.height * 0.5
                    };
                    collectibles.push(MarkerDef {
                        kind: name.clone(),
                        tile: (
                            (center_x / tile_size).floor() as i32,
                            (center_y / tile_size).floor() as i32,
                        ),
                    });
                }
            }
            TiledLayer::Other => {}
        }
    }

    let grid = cells
        .chunks(map.width.max(1))
        .map(|row| {
            row.iter()
                .map(|cell| cell.map(symbol_for).unwrap_or('.'))
                .collect::<String>()
        })
        .collect();

    let spawn_x = property(&map.properties, "spawn_x").and_then(Value::as_f64);
    let spawn_y = property(&map.properties, "spawn_y").and_then(Value::as_f64);
    let spawn = match (spawn_x, spawn_y) {
        (Some(x), Some(y)) => (x as f32, y as f32),
        _ => DEFAULT_SPAWN,
    };

    Ok(LevelDef {
        id: id.to_string(),
        name: id.to_string(),
        tile_size,
        spawn,
        legend: SYMBOLS.iter().map(|(class, s)| (*s, *class)).collect::<HashMap<_, _>>(),
        grid,
        collectibles,
    })
}
