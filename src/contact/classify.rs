//! Contact domain: classification of solid contacts into player contact flags.

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use crate::core::GameplayEvent;
use crate::movement::{ContactFlags, WallSide};

/// Minimum upward normal component for a surface to count as ground.
pub const GROUND_NORMAL_MIN: f32 = 0.7;

/// What a resolved contact with a Solid region means for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Ground,
    Wall(WallSide),
    Ceiling,
}

/// Classify a surface normal as seen from the player.
///
/// Ground normals point up toward the player, a wall on the player's left has
/// a normal pointing right. Returns None for a degenerate normal.
pub fn classify_normal(normal: Vec2) -> Option<ContactKind> {
    if normal.length_squared() <= f32::EPSILON {
        return None;
    }
    let normal = normal.normalize();

    if normal.y >= GROUND_NORMAL_MIN {
        Some(ContactKind::Ground)
    } else if normal.y <= -GROUND_NORMAL_MIN {
        Some(ContactKind::Ceiling)
    } else if normal.x > 0.0 {
        Some(ContactKind::Wall(WallSide::Left))
    } else {
        Some(ContactKind::Wall(WallSide::Right))
    }
}

/// Classify a probe hit. A cast starting inside a collider reports no normal;
/// the surface is then taken to face back along the probe.
pub fn classify_hit(normal: Vec2, cast: Dir2) -> Option<ContactKind> {
    classify_normal(normal).or_else(|| classify_normal(-cast.as_vec2()))
}

pub fn flags_from_contacts(contacts: impl IntoIterator<Item = ContactKind>) -> ContactFlags {
    contacts
        .into_iter()
        .fold(ContactFlags::empty(), |flags, kind| match kind {
            ContactKind::Ground => flags | ContactFlags::GROUNDED_BELOW,
            ContactKind::Wall(WallSide::Left) => flags | ContactFlags::BLOCKED_LEFT,
            ContactKind::Wall(WallSide::Right) => flags | ContactFlags::BLOCKED_RIGHT,
            ContactKind::Ceiling => flags,
        })
}

/// Events for the edges between last tick's contacts and this tick's.
pub fn contact_transitions(was: ContactFlags, now: ContactFlags) -> Vec<GameplayEvent> {
    let mut events = Vec::new();

    match (was.grounded(), now.grounded()) {
        (false, true) => events.push(GameplayEvent::Landed),
        (true, false) => events.push(GameplayEvent::BecameAirborne),
        _ => {}
    }

    for side in [WallSide::Left, WallSide::Right] {
        if now.blocked(side) && !was.blocked(side) {
            events.push(GameplayEvent::HitWall { side });
        }
    }

    events
}

pub fn player_bounds(center: Vec2, size: Vec2) -> Aabb2d {
    Aabb2d::new(center, size * 0.5)
}
