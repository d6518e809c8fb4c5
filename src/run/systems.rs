//! Run domain: event application, level-exit hand-off and results flow.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{GameState, GameplayEvent, RestartLevelEvent, ResultsChoice};
use crate::level::{Campaign, LevelSession};
use crate::run::state::{LevelDirective, RunHandoff, RunState};

/// Apply this tick's gameplay events to the run tally, in emission order.
pub(crate) fn apply_gameplay_events(
    mut events: MessageReader<GameplayEvent>,
    mut run: ResMut<RunState>,
    mut handoff: ResMut<RunHandoff>,
    mut restart: MessageWriter<RestartLevelEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let tick: Vec<GameplayEvent> = events.read().copied().collect();
    if tick.is_empty() {
        return;
    }

    match run.apply_all(&tick) {
        Some(LevelDirective::Restart(cause)) => {
            info!(
                "[RUN] Restarting level ({:?}), keeping score={} gems={}",
                cause,
                run.score(),
                run.gem_count()
            );
            restart.write(RestartLevelEvent { cause });
        }
        Some(LevelDirective::Advance(snapshot)) => {
            info!(
                "[RUN] Level complete: score={} gems={}",
                snapshot.score, snapshot.gem_count
            );
            handoff.store(snapshot);
            next_state.set(GameState::Results);
        }
        None => {}
    }
}

/// Pick up the tally handed over by the previous level, if any.
pub(crate) fn resume_from_handoff(mut run: ResMut<RunState>, mut handoff: ResMut<RunHandoff>) {
    if let Some(snapshot) = handoff.take() {
        run.resume(snapshot);
        debug!("[RUN] Resumed from hand-off: {:?}", snapshot);
    }
}

pub(crate) fn apply_results_choice(
    mut choices: MessageReader<ResultsChoice>,
    campaign: Option<Res<Campaign>>,
    mut session: ResMut<LevelSession>,
    mut run: ResMut<RunState>,
    mut handoff: ResMut<RunHandoff>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(choice) = choices.read().last().copied() else {
        return;
    };

    let has_next = campaign.is_some_and(|c| c.has_level_after(session.index));

    match choice {
        ResultsChoice::Continue if has_next => {
            session.advance();
            info!("[RUN] Advancing to level {}", session.index + 1);
        }
        ResultsChoice::Continue | ResultsChoice::NewRun => {
            run.reset();
            handoff.clear();
            session.rewind();
            info!("[RUN] Starting a new run");
        }
    }

    next_state.set(GameState::Playing);
}
