//! Test helpers.
//!
//! Systems that use `Commands` enqueue structural changes; we call
//! `world.flush()` after running so queued commands are applied before
//! assertions.

use bevy::ecs::message::{Message, Messages};
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;
use std::time::Duration;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Every message of type `T` currently buffered in the world.
pub fn buffered_messages<T: Message + Clone>(world: &World) -> Vec<T> {
    let messages = world.resource::<Messages<T>>();
    let mut cursor = messages.get_cursor();
    cursor.read(messages).cloned().collect()
}

/// Insert a clock whose last tick lasted `seconds`.
pub fn insert_time_with_delta(world: &mut World, seconds: f32) {
    let mut time = Time::<()>::default();
    time.advance_by(Duration::from_secs_f32(seconds));
    world.insert_resource(time);
}
