//! UI domain: score, gem and attempt HUD.

use bevy::prelude::*;

use crate::level::{ActiveLevel, LevelSession};
use crate::run::{GEM_DISPLAY_CAP, RunState};

const HUD_PADDING: f32 = 16.0;

/// Marker for the HUD container
#[derive(Component)]
pub struct HudUI;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct GemText;

#[derive(Component)]
pub struct LevelText;

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn gem_label(displayed: u32) -> String {
    format!("Gems: {}/{}", displayed, GEM_DISPLAY_CAP)
}

fn hud_text(text: String, size: f32, color: Color) -> (Text, TextFont, TextColor) {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

pub(crate) fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            HudUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                LevelText,
                hud_text(String::new(), 16.0, Color::srgb(0.7, 0.7, 0.75)),
            ));
            parent.spawn((
                ScoreText,
                hud_text(score_label(0), 20.0, Color::srgb(0.95, 0.85, 0.4)),
            ));
            parent.spawn((
                GemText,
                hud_text(gem_label(0), 20.0, Color::srgb(0.4, 0.85, 0.95)),
            ));
        });
}

pub(crate) fn update_run_text(
    run: Res<RunState>,
    mut score_query: Query<&mut Text, (With<ScoreText>, Without<GemText>)>,
    mut gem_query: Query<&mut Text, (With<GemText>, Without<ScoreText>)>,
) {
    if !run.is_changed() {
        return;
    }
    for mut text in &mut score_query {
        **text = score_label(run.score());
    }
    for mut text in &mut gem_query {
        **text = gem_label(run.displayed_gems());
    }
}

pub(crate) fn update_level_text(
    level: Option<Res<ActiveLevel>>,
    session: Res<LevelSession>,
    mut query: Query<&mut Text, With<LevelText>>,
) {
    let level_changed = level.as_ref().is_some_and(|l| l.is_changed());
    if !level_changed && !session.is_changed() {
        return;
    }
    let Some(level) = level else {
        return;
    };

    for mut text in &mut query {
        **text = format!("{} - attempt {}", level.0.name, session.attempt);
    }
}
