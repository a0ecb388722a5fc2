//! The match state machine.
//!
//! `MatchEngine` owns the config, the state and the RNG for one match and
//! exposes the operations the presentation layer invokes. Each operation
//! either applies completely or returns an error and changes nothing.
//!
//! ## Turn Cycle
//!
//! ```
//! use std::sync::Arc;
//! use charades_engine::core::{GameRng, MatchConfig, TeamSlot};
//! use charades_engine::game::{MatchEngine, MatchPhase};
//! use charades_engine::words::WordCatalog;
//!
//! let catalog = Arc::new(WordCatalog::builtin().unwrap());
//! let config = MatchConfig::new().with_target_score(2);
//! let mut engine = MatchEngine::with_rng(catalog, config, GameRng::new(7)).unwrap();
//!
//! let batch = engine.start_turn().unwrap();
//! let guessed: Vec<_> = batch.iter().take(2).map(|w| w.id).collect();
//!
//! engine.end_turn().unwrap();
//! engine.submit_round(guessed).unwrap();
//!
//! assert_eq!(engine.advance_to_next_turn().unwrap(), MatchPhase::MatchComplete);
//! assert!(engine.winner().unwrap().is_winner(TeamSlot::A));
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info};

use super::phase::MatchPhase;
use super::result::MatchResult;
use super::state::MatchState;
use crate::core::{GameRng, MatchConfig, MatchError, RandomSource, TeamSlot};
use crate::words::{Batch, Category, CategorySet, WordCatalog, WordEntry, WordId, WordPoolSelector};

/// Runs one match at a time.
pub struct MatchEngine<R: RandomSource = GameRng> {
    catalog: Arc<WordCatalog>,
    config: MatchConfig,
    selector: WordPoolSelector,
    state: MatchState,
    rng: R,
}

impl MatchEngine<GameRng> {
    /// Create an engine with an unseeded RNG.
    pub fn new(catalog: Arc<WordCatalog>, config: MatchConfig) -> Result<Self, MatchError> {
        Self::with_rng(catalog, config, GameRng::from_entropy())
    }
}

impl<R: RandomSource> MatchEngine<R> {
    /// Create an engine drawing from `rng`.
    pub fn with_rng(catalog: Arc<WordCatalog>, config: MatchConfig, rng: R) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            selector: WordPoolSelector::default(),
            state: MatchState::new(),
            rng,
        })
    }

    /// Replace the batch selector.
    #[must_use]
    pub fn with_selector(mut self, selector: WordPoolSelector) -> Self {
        self.selector = selector;
        self
    }

    // === Read-only views ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Owned copy of the state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> MatchState {
        self.state.clone()
    }

    #[must_use]
    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    #[must_use]
    pub fn enabled_categories(&self) -> CategorySet {
        self.config.enabled_categories
    }

    #[must_use]
    pub fn team_name(&self, team: TeamSlot) -> &str {
        self.config.team_name(team)
    }

    #[must_use]
    pub fn active_team_name(&self) -> &str {
        self.config.team_name(self.state.active_team)
    }

    /// Team strictly ahead on points, `None` when level.
    #[must_use]
    pub fn leader(&self) -> Option<TeamSlot> {
        self.state.leader()
    }

    /// How close the leading team is to the target, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let ratio = self.state.top_score() as f32 / self.config.target_score as f32;
        ratio.min(1.0)
    }

    /// `progress` rounded onto a row of `total` dots.
    #[must_use]
    pub fn progress_dots(&self, total: usize) -> usize {
        ((self.progress() * total as f32).round() as usize).min(total)
    }

    /// The current batch, each word paired with whether it was credited.
    pub fn turn_highlights(&self) -> impl Iterator<Item = (&WordEntry, bool)> {
        self.state
            .current_batch
            .iter()
            .map(|w| (w, self.state.last_round_correct_ids.contains(&w.id)))
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.phase == MatchPhase::MatchComplete
    }

    /// Outcome of a completed match; `None` until then.
    #[must_use]
    pub fn winner(&self) -> Option<MatchResult> {
        self.is_complete().then(|| self.state.standing())
    }

    // === Configuration ===

    /// Replace the match settings. Not allowed mid-turn.
    pub fn configure(&mut self, config: MatchConfig) -> Result<(), MatchError> {
        if self.state.phase.is_mid_turn() {
            return Err(MatchError::phase("configure the match", self.state.phase));
        }
        config.validate()?;

        info!(
            target_score = config.target_score,
            round_secs = config.round_duration_secs,
            categories = config.enabled_categories.len(),
            "match configured"
        );
        self.config = config;
        Ok(())
    }

    /// Flip a category on or off. Returns whether it is now enabled.
    ///
    /// Turning off the last enabled category is rejected.
    pub fn toggle_category(&mut self, category: Category) -> Result<bool, MatchError> {
        let enabled = &mut self.config.enabled_categories;

        if enabled.contains(category) {
            if enabled.len() == 1 {
                debug!(%category, "refusing to disable the last category");
                return Err(MatchError::EmptyCategorySelection);
            }
            enabled.remove(category);
        } else {
            enabled.insert(category);
        }

        let now_enabled = enabled.contains(category);
        debug!(%category, enabled = now_enabled, "category toggled");
        Ok(now_enabled)
    }

    pub fn select_all_categories(&mut self) {
        self.config.enabled_categories = CategorySet::all();
    }

    // === Turn cycle ===

    /// Deal a batch for the active team and start its turn.
    pub fn start_turn(&mut self) -> Result<&Batch, MatchError> {
        match self.state.phase {
            MatchPhase::Configuring | MatchPhase::TurnPending => {}
            phase => return Err(MatchError::phase("start a turn", phase)),
        }

        let outcome = self.selector.generate_batch(
            &self.catalog,
            self.config.enabled_categories,
            &self.state.used_word_ids,
            &mut self.rng,
        );
        outcome.merge_into(&mut self.state.used_word_ids);
        if outcome.recycled {
            self.state.deck_recycles += 1;
        }

        self.state.current_batch = outcome.batch;
        self.state.turn_submitted = false;
        self.state.phase = MatchPhase::TurnInProgress;

        info!(
            team = %self.state.active_team,
            round = self.state.round_number,
            words = self.state.current_batch.len(),
            recycled = outcome.recycled,
            "turn started"
        );
        Ok(&self.state.current_batch)
    }

    /// The caller's timer ran out.
    pub fn end_turn(&mut self) -> Result<(), MatchError> {
        if self.state.phase != MatchPhase::TurnInProgress {
            return Err(MatchError::phase("end the turn", self.state.phase));
        }
        self.state.phase = MatchPhase::Scoring;
        debug!(team = %self.state.active_team, "turn ended");
        Ok(())
    }

    /// Credit the active team with the words it guessed.
    ///
    /// Duplicate ids count once. Any id outside the current batch rejects
    /// the whole submission. Returns the points awarded.
    pub fn submit_round(&mut self, correct_ids: impl IntoIterator<Item = WordId>) -> Result<u32, MatchError> {
        match self.state.phase {
            MatchPhase::TurnInProgress | MatchPhase::Scoring => {}
            phase => return Err(MatchError::phase("submit a round", phase)),
        }
        if self.state.turn_submitted {
            return Err(MatchError::RoundAlreadySubmitted);
        }

        let correct: BTreeSet<WordId> = correct_ids.into_iter().collect();
        let unknown: Vec<WordId> = correct
            .iter()
            .copied()
            .filter(|&id| self.state.batch_word(id).is_none())
            .collect();
        if !unknown.is_empty() {
            debug!(?unknown, "rejecting submission with words outside the batch");
            return Err(MatchError::InvalidCorrectIdSet { unknown });
        }

        let points = correct.len() as u32;
        let team = self.state.active_team;
        let score = &mut self.state.scores[team];
        *score = score.saturating_add(points);

        info!(%team, points, total = *score, "round scored");

        self.state.last_round_correct_ids = correct;
        self.state.turn_submitted = true;
        self.state.phase = MatchPhase::Scoring;
        Ok(points)
    }

    /// Finish scoring: complete the match or hand the turn over.
    ///
    /// Returns the phase entered.
    pub fn advance_to_next_turn(&mut self) -> Result<MatchPhase, MatchError> {
        if self.state.phase != MatchPhase::Scoring {
            return Err(MatchError::phase("advance to the next turn", self.state.phase));
        }
        if !self.state.turn_submitted {
            return Err(MatchError::RoundNotSubmitted);
        }

        if self.state.target_reached(self.config.target_score) {
            self.state.phase = MatchPhase::MatchComplete;
            info!(
                result = ?self.state.standing(),
                round = self.state.round_number,
                score_a = self.state.scores[TeamSlot::A],
                score_b = self.state.scores[TeamSlot::B],
                "match complete"
            );
        } else {
            self.state.hand_off();
            self.state.phase = MatchPhase::TurnPending;
            debug!(
                team = %self.state.active_team,
                round = self.state.round_number,
                "turn handed off"
            );
        }
        Ok(self.state.phase)
    }

    /// Back to a fresh match in `Configuring`. Settings are kept.
    pub fn reset_match(&mut self) {
        self.state.reset();
        info!("match reset");
    }
}
