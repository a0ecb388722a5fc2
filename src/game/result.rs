//! Match outcome.

use serde::{Deserialize, Serialize};

use crate::core::TeamSlot;

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Single winner.
    Winner(TeamSlot),
    /// Equal scores at completion.
    Draw,
}

impl MatchResult {
    /// Check if a team won.
    #[must_use]
    pub fn is_winner(&self, team: TeamSlot) -> bool {
        matches!(self, MatchResult::Winner(t) if *t == team)
    }

    /// The winning slot, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<TeamSlot> {
        match self {
            MatchResult::Winner(t) => Some(*t),
            MatchResult::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_result_is_winner() {
        let result = MatchResult::Winner(TeamSlot::B);
        assert!(!result.is_winner(TeamSlot::A));
        assert!(result.is_winner(TeamSlot::B));
        assert_eq!(result.winner(), Some(TeamSlot::B));

        let draw = MatchResult::Draw;
        assert!(!draw.is_winner(TeamSlot::A));
        assert!(!draw.is_winner(TeamSlot::B));
        assert_eq!(draw.winner(), None);
    }
}
