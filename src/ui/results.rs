//! UI domain: level results screen and continue flow.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::ResultsChoice;
use crate::level::{Campaign, LevelSession};
use crate::run::{GEM_DISPLAY_CAP, RunHandoff, RunState};

/// Marker for the results screen overlay
#[derive(Component)]
pub struct ResultsScreenUI;

pub(crate) fn spawn_results_screen(
    mut commands: Commands,
    handoff: Res<RunHandoff>,
    run: Res<RunState>,
    campaign: Option<Res<Campaign>>,
    session: Res<LevelSession>,
) {
    let snapshot = handoff.peek().unwrap_or_else(|| run.snapshot());
    let campaign = campaign.as_deref();
    let has_next = campaign.is_some_and(|c| c.has_level_after(session.index));
    let title = campaign
        .and_then(|c| c.get(session.index))
        .map(|level| format!("{} complete", level.name))
        .unwrap_or_else(|| "Level complete".to_string());
    let hint = if has_next {
        "Press [Enter] for the next level, [R] to start over"
    } else {
        "Campaign complete! Press [Enter] or [R] to start a new run"
    };

    // Full screen dark overlay
    commands
        .spawn((
            ResultsScreenUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title.to_uppercase()),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(Color::srgb(0.3, 0.85, 0.4)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(format!("Score: {}", snapshot.score)),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.85, 0.4)),
            ));

            parent.spawn((
                Text::new(format!(
                    "Gems: {}/{}",
                    snapshot.gem_count.min(GEM_DISPLAY_CAP),
                    GEM_DISPLAY_CAP
                )),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.4, 0.85, 0.95)),
                Node {
                    margin: UiRect::bottom(Val::Px(60.0)),
                    ..default()
                },
            ));

            // Hint text
            parent.spawn((
                Text::new(hint),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.4, 0.4, 0.45)),
            ));
        });
}

pub(crate) fn handle_results_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut choices: MessageWriter<ResultsChoice>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        choices.write(ResultsChoice::NewRun);
    } else if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter)
    {
        choices.write(ResultsChoice::Continue);
    }
}

pub(crate) fn despawn_results_screen(
    mut commands: Commands,
    query: Query<Entity, With<ResultsScreenUI>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
