//! UI domain: main camera and player follow.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::level::ActiveLevel;
use crate::movement::Player;

/// Fraction of the remaining distance the camera covers each frame.
pub const FOLLOW_LERP: f32 = 0.25;
pub const CAMERA_ZOOM: f32 = 2.0;

#[derive(Component)]
pub struct MainCamera;

pub(crate) fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        Transform::from_xyz(0.0, 0.0, 999.0).with_scale(Vec3::splat(1.0 / CAMERA_ZOOM)),
    ));
}

/// Next camera center: lerp toward the target, then keep the view inside the
/// level rect. A level smaller than the view is centered on that axis.
pub fn follow_target(camera: Vec2, target: Vec2, bounds: Rect, half_view: Vec2) -> Vec2 {
    let next = camera.lerp(target, FOLLOW_LERP);

    let clamp_axis = |value: f32, min: f32, max: f32, half: f32| {
        if max - min <= half * 2.0 {
            (min + max) * 0.5
        } else {
            value.clamp(min + half, max - half)
        }
    };

    Vec2::new(
        clamp_axis(next.x, bounds.min.x, bounds.max.x, half_view.x),
        clamp_axis(next.y, bounds.min.y, bounds.max.y, half_view.y),
    )
}

pub(crate) fn follow_player(
    level: Option<Res<ActiveLevel>>,
    window: Query<&Window, With<PrimaryWindow>>,
    q_player: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut q_cam: Query<&mut Transform, (With<MainCamera>, Without<Player>)>,
) {
    let Some(level) = level else {
        return;
    };
    let Ok(player) = q_player.single() else {
        return;
    };
    let Ok(mut cam) = q_cam.single_mut() else {
        return;
    };

    let size = level.0.grid.pixel_size();
    let bounds = Rect::new(0.0, -size.y, size.x, 0.0);
    let half_view = window
        .single()
        .map(|w| Vec2::new(w.width(), w.height()) * 0.5 / CAMERA_ZOOM)
        .unwrap_or(Vec2::ZERO);

    let next = follow_target(
        cam.translation.truncate(),
        player.translation.truncate(),
        bounds,
        half_view,
    );
    cam.translation.x = next.x;
    cam.translation.y = next.y;
}
