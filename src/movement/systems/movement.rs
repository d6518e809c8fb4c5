//! Movement domain: velocity integration and fall-out detection.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::GameplayEvent;
use crate::level::ActiveLevel;
use crate::movement::controller::{fall_threshold, has_fallen_out, step_velocity};
use crate::movement::{InputSnapshot, MovementState, MovementTuning, Player};

pub(crate) fn apply_movement(
    time: Res<Time>,
    input: Res<InputSnapshot>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
    mut events: MessageWriter<GameplayEvent>,
) {
    let dt = time.delta_secs();

    for (mut state, mut velocity) in &mut query {
        let (next, jump) = step_velocity(velocity.0, &mut state, &input, &tuning, dt);
        velocity.0 = next;

        if let Some(jump) = jump {
            debug!("Jump: {:?}, velocity={:?}", jump, velocity.0);
            events.write(GameplayEvent::Jumped { wall: jump.wall() });
        }
    }
}

pub(crate) fn check_fall_out(
    tuning: Res<MovementTuning>,
    level: Option<Res<ActiveLevel>>,
    query: Query<&Transform, With<Player>>,
    mut events: MessageWriter<GameplayEvent>,
) {
    let level_height = level.map(|l| l.0.grid.pixel_size().y).unwrap_or(0.0);
    let threshold = fall_threshold(&tuning, level_height);

    for transform in &query {
        if has_fallen_out(transform.translation.y, threshold) {
            events.write(GameplayEvent::PlayerFellOutOfWorld);
        }
    }
}
