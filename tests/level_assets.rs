use bevy::math::bounding::Aabb2d;
use std::path::Path;
use tile_platformer::level::{TileClass, load_campaign};
use tile_platformer::movement::{MovementTuning, PLAYER_SIZE};

#[test]
fn shipped_campaign_loads() {
    let campaign = load_campaign(Path::new("assets/levels")).expect("shipped campaign is valid");
    assert_eq!(campaign.len(), 2);

    for index in 0..campaign.len() {
        let level = campaign.get(index).expect("level in range");
        assert!(level.grid.count(TileClass::Solid) > 0);
        assert!(level.grid.count(TileClass::Exit) > 0);
        assert!(!level.collectibles.is_empty());

        // Spawning straight into a hazard or the exit would end the attempt at once
        let spawn_box = Aabb2d::new(level.spawn, PLAYER_SIZE * 0.5);
        let overlap = level.grid.overlap(&spawn_box);
        assert!(!overlap.hazard && !overlap.exit, "{} spawn overlaps", level.id);
    }
}

#[test]
fn shipped_tuning_parses() {
    let tuning: MovementTuning =
        ron::from_str(&std::fs::read_to_string("assets/data/tuning.ron").expect("tuning file"))
            .expect("tuning parses");
    assert_eq!(tuning, MovementTuning::default());
}
