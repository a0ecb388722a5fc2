//! Match phases.

use serde::{Deserialize, Serialize};

/// Where a match is in its lifecycle.
///
/// ```text
/// Configuring -> TurnPending -> TurnInProgress -> Scoring -> TurnPending
///                                                        \-> MatchComplete
/// ```
///
/// `Configuring` is re-entered on reset. A turn may also be started
/// straight from `Configuring`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    Configuring,
    /// Waiting for the next team to start its turn.
    TurnPending,
    /// A batch is dealt and the caller's timer is running.
    TurnInProgress,
    /// Time is up; correct words are being marked or have been scored.
    Scoring,
    /// A team reached the target score.
    MatchComplete,
}

impl MatchPhase {
    /// Config may only change outside a turn.
    #[must_use]
    pub const fn is_mid_turn(self) -> bool {
        matches!(self, MatchPhase::TurnInProgress | MatchPhase::Scoring)
    }
}

impl std::fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            MatchPhase::Configuring => "configuring",
            MatchPhase::TurnPending => "a turn is pending",
            MatchPhase::TurnInProgress => "a turn is in progress",
            MatchPhase::Scoring => "scoring",
            MatchPhase::MatchComplete => "the match is complete",
        };
        f.write_str(text)
    }
}
