//! Level domain: tile grid, level data loading and level lifecycle.

mod campaign;
mod components;
mod data;
mod error;
mod grid;
mod loader;
mod systems;
mod tiled;


pub use campaign::{ActiveLevel, Campaign, LevelSession};
pub use components::{Collectible, LevelEntity, RegionTile, WorldBound};
pub use data::{CampaignDef, CollectibleKind, LevelDef, MarkerDef, TileClass};
pub use error::LevelLoadError;
pub use grid::{LevelGrid, LevelRegion, RegionOverlap};
pub use loader::{CollectibleSpawn, Level, load_campaign, load_level_file};
pub use tiled::parse_tiled_map;

pub(crate) use systems::spawn_level;

use bevy::prelude::*;

use crate::core::{GameState, TickSet};
use crate::level::systems::{cleanup_level, load_campaign_on_startup, restart_level};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelSession>()
            .add_systems(Startup, load_campaign_on_startup)
            .add_systems(OnEnter(GameState::Playing), spawn_level)
            .add_systems(OnExit(GameState::Playing), cleanup_level)
            .add_systems(Update, restart_level.in_set(TickSet::Flow));
    }
}
