//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{InputSampler, InputSnapshot};

pub(crate) fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sampler: ResMut<InputSampler>,
    mut snapshot: ResMut<InputSnapshot>,
) {
    let left = keyboard.pressed(KeyCode::ArrowLeft);
    let right = keyboard.pressed(KeyCode::ArrowRight);
    let up = keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::Space);

    *snapshot = sampler.sample(left, right, up);
}
