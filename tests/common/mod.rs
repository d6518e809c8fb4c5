//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - `tile_platformer::game::configure_headless` installs scene flow and run state.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use tile_platformer::core::GameState;
use tile_platformer::level::{Campaign, Level};

const TINY_LEVEL: &str = r######"(
    id: "tiny",
    legend: { '#': Solid, 'E': Exit },
    grid: ["....E", "#####"],
)"######;

pub fn tiny_campaign(levels: usize) -> Campaign {
    let level = Level::from_ron_str("tiny.ron", TINY_LEVEL).expect("tiny level is valid");
    Campaign::new(vec![level; levels])
}

pub fn app_headless(levels: usize) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));

    // Provided up front, so boot does not read assets from disk
    app.insert_resource(tiny_campaign(levels));
    tile_platformer::game::configure_headless(&mut app);
    app
}

/// Current state; None until the first update installs it.
pub fn current_state(app: &App) -> Option<GameState> {
    app.world()
        .get_resource::<State<GameState>>()
        .map(|s| *s.get())
}

pub fn state(app: &App) -> GameState {
    current_state(app).expect("state initialized")
}

/// Tick until the app reaches `target`, failing after a handful of frames.
pub fn update_until(app: &mut App, target: GameState) {
    for _ in 0..5 {
        if current_state(app) == Some(target) {
            return;
        }
        app.update();
    }
    assert_eq!(current_state(app), Some(target));
}
