//! Core domain: scene flow states and per-tick stage ordering.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    /// Tuning and campaign are being loaded; gameplay is inactive.
    #[default]
    Boot,
    Playing,
    /// Level exit reached; shows the hand-off and waits for a choice.
    Results,
}

/// Fixed stage ordering inside one gameplay tick.
///
/// Later stages never feed back into earlier ones within the same tick.
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum TickSet {
    Input,
    Movement,
    Contact,
    Run,
    /// Level restart bookkeeping driven by the Run stage's directive.
    Flow,
    Presentation,
}
