//! Errors returned by match operations.
//!
//! Every error is a local validation failure: the operation is rejected and
//! the match state is left exactly as it was.

use thiserror::Error;

use crate::game::MatchPhase;
use crate::words::WordId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The operation would leave no category enabled.
    #[error("at least one category must stay enabled")]
    EmptyCategorySelection,

    /// `submit_round` named words that are not in the current batch.
    #[error("words not in the current batch: {unknown:?}")]
    InvalidCorrectIdSet { unknown: Vec<WordId> },

    /// The operation is not valid in the current phase.
    #[error("cannot {operation} while {phase}")]
    PhaseMismatch {
        operation: &'static str,
        phase: MatchPhase,
    },

    /// The turn in progress has already been scored.
    #[error("round already submitted for this turn")]
    RoundAlreadySubmitted,

    /// Scoring cannot finish before the round is submitted.
    #[error("round has not been submitted yet")]
    RoundNotSubmitted,

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl MatchError {
    pub(crate) fn phase(operation: &'static str, phase: MatchPhase) -> Self {
        MatchError::PhaseMismatch { operation, phase }
    }
}
