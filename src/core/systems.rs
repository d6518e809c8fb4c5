//! Core domain: boot flow and event logging.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::GameplayEvent;
use crate::core::state::GameState;
use crate::level::Campaign;

/// Leave Boot as soon as a validated campaign is available.
pub(crate) fn leave_boot(
    campaign: Option<Res<Campaign>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(campaign) = campaign else {
        return;
    };

    info!(
        "[BOOT] Campaign ready with {} level(s), starting play",
        campaign.len()
    );
    next_state.set(GameState::Playing);
}

pub(crate) fn log_gameplay_events(mut events: MessageReader<GameplayEvent>) {
    for event in events.read() {
        debug!("[EVENT] {:?}", event);
    }
}
