//! Match state.
//!
//! Everything the presentation layer renders between operations: phase,
//! scores, whose turn it is, the dealt batch and the last round's result.
//!
//! Uses `im` persistent sets for the used-word history so snapshots for
//! rendering are O(1) clones.

use im::HashSet as ImHashSet;
use serde::Serialize;
use std::collections::BTreeSet;

use super::phase::MatchPhase;
use super::result::MatchResult;
use crate::core::{TeamMap, TeamSlot};
use crate::words::{Batch, WordEntry, WordId};

/// Mutable state of one match. Only `MatchEngine` writes to it.
#[derive(Clone, Debug, Serialize)]
pub struct MatchState {
    pub phase: MatchPhase,

    /// Points per team. Never decreases during a match.
    pub scores: TeamMap<u32>,

    /// Team whose turn it is.
    pub active_team: TeamSlot,

    /// Starts at 1; incremented on every hand-off.
    pub round_number: u32,

    /// Words already dealt this match.
    pub used_word_ids: ImHashSet<WordId>,

    /// Words dealt for the current (or last) turn.
    pub current_batch: Batch,

    /// Words credited in the most recent submission.
    pub last_round_correct_ids: BTreeSet<WordId>,

    /// Whether the current turn has been scored.
    pub turn_submitted: bool,

    /// Times the used history was cleared because the pool ran low.
    pub deck_recycles: u32,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Fresh match: zero scores, team A, round 1, `Configuring`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: MatchPhase::Configuring,
            scores: TeamMap::with_value(0),
            active_team: TeamSlot::A,
            round_number: 1,
            used_word_ids: ImHashSet::new(),
            current_batch: Batch::new(),
            last_round_correct_ids: BTreeSet::new(),
            turn_submitted: false,
            deck_recycles: 0,
        }
    }

    /// Return to a fresh match.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn score(&self, team: TeamSlot) -> u32 {
        self.scores[team]
    }

    /// Highest score on the board.
    #[must_use]
    pub fn top_score(&self) -> u32 {
        self.scores.iter().map(|(_, &s)| s).max().unwrap_or(0)
    }

    /// Team strictly ahead, `None` when level.
    #[must_use]
    pub fn leader(&self) -> Option<TeamSlot> {
        let (a, b) = (self.scores[TeamSlot::A], self.scores[TeamSlot::B]);
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Some(TeamSlot::A),
            std::cmp::Ordering::Less => Some(TeamSlot::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Leader as a result: a winner, or a draw when level.
    #[must_use]
    pub fn standing(&self) -> MatchResult {
        self.leader().map_or(MatchResult::Draw, MatchResult::Winner)
    }

    /// Whether any team has reached `target`.
    #[must_use]
    pub fn target_reached(&self, target: u32) -> bool {
        self.scores.iter().any(|(_, &s)| s >= target)
    }

    /// Look up a word in the current batch.
    #[must_use]
    pub fn batch_word(&self, id: WordId) -> Option<&WordEntry> {
        self.current_batch.iter().find(|w| w.id == id)
    }

    /// Give the turn to the other team.
    pub fn hand_off(&mut self) {
        self.active_team = self.active_team.other();
        self.round_number += 1;
    }
}
