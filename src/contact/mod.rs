//! Contact domain: turns post-integration overlaps into gameplay events.

mod classify;
mod systems;

#[cfg(test)]
mod tests;

pub use classify::{
    ContactKind, GROUND_NORMAL_MIN, classify_hit, classify_normal, contact_transitions,
    flags_from_contacts, player_bounds,
};

use bevy::prelude::*;

use crate::contact::systems::{collect_items, resolve_region_overlaps, resolve_solid_contacts};
use crate::core::TickSet;

pub struct ContactPlugin;

impl Plugin for ContactPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (resolve_solid_contacts, collect_items, resolve_region_overlaps)
                .chain()
                .in_set(TickSet::Contact),
        );
    }
}
