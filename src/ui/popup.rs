//! UI domain: floating pickup text.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::GameplayEvent;
use crate::level::CollectibleKind;
use crate::movement::Player;
use crate::run::{GEM_DISPLAY_CAP, RunState};
use crate::ui::hud::score_label;

pub const POPUP_RISE: f32 = 15.0;
pub const POPUP_LIFETIME: f32 = 1.0;
/// Delay before a gem's score line follows its gem line.
pub const GEM_SCORE_DELAY: f32 = 0.3;

#[derive(Component, Debug)]
pub struct ScorePopup {
    pub origin: Vec2,
    pub elapsed: f32,
    pub delay: f32,
    pub color: Color,
}

/// Rise and opacity of a popup `age` seconds after it became visible,
/// or None once it has fully faded.
pub fn popup_frame(age: f32) -> Option<(f32, f32)> {
    if age >= POPUP_LIFETIME {
        return None;
    }
    let t = (age / POPUP_LIFETIME).clamp(0.0, 1.0);
    Some((POPUP_RISE * t, 1.0 - t))
}

fn spawn_popup(commands: &mut Commands, origin: Vec2, text: String, delay: f32, color: Color) {
    commands.spawn((
        ScorePopup {
            origin,
            elapsed: 0.0,
            delay,
            color,
        },
        Text2d::new(text),
        TextFont {
            font_size: 10.0,
            ..default()
        },
        TextColor(color),
        Transform::from_translation(origin.extend(10.0)),
        if delay > 0.0 {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        },
    ));
}

pub(crate) fn spawn_pickup_popups(
    mut commands: Commands,
    mut events: MessageReader<GameplayEvent>,
    run: Res<RunState>,
    player: Query<&Transform, With<Player>>,
) {
    let coin_color = Color::srgb(0.95, 0.85, 0.4);
    let gem_color = Color::srgb(0.4, 0.85, 0.95);

    for event in events.read() {
        let GameplayEvent::ItemCollected { kind, position } = event else {
            continue;
        };
        // Rise from the player; fall back to the item when there is none.
        let origin = player
            .single()
            .map(|t| t.translation.truncate())
            .unwrap_or(*position);
        match kind {
            CollectibleKind::Coin => {
                spawn_popup(
                    &mut commands,
                    origin,
                    score_label(run.score()),
                    0.0,
                    coin_color,
                );
            }
            CollectibleKind::Gem => {
                let label = format!("Gem Count: {}/{}", run.displayed_gems(), GEM_DISPLAY_CAP);
                spawn_popup(&mut commands, origin, label, 0.0, gem_color);
                spawn_popup(
                    &mut commands,
                    origin,
                    score_label(run.score()),
                    GEM_SCORE_DELAY,
                    coin_color,
                );
            }
        }
    }
}

pub(crate) fn animate_popups(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(
        Entity,
        &mut ScorePopup,
        &mut Transform,
        &mut TextColor,
        &mut Visibility,
    )>,
) {
    let dt = time.delta_secs();

    for (entity, mut popup, mut transform, mut color, mut visibility) in &mut query {
        popup.elapsed += dt;
        let age = popup.elapsed - popup.delay;
        if age < 0.0 {
            continue;
        }

        match popup_frame(age) {
            Some((rise, alpha)) => {
                *visibility = Visibility::Inherited;
                transform.translation.y = popup.origin.y + rise;
                color.0 = popup.color.with_alpha(alpha);
            }
            None => {
                commands.entity(entity).despawn();
            }
        }
    }
}
