//! Match configuration.
//!
//! `MatchConfig` is set before a match and may be replaced between turns,
//! never while a turn is being played or scored. Defaults match the setup
//! screen: two colour-named teams, 30 points to win, 60 second rounds and
//! every category enabled.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::MatchError;
use super::team::{TeamMap, TeamSlot};
use crate::words::{Category, CategorySet};

/// Settings for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Display names for slots A and B.
    pub team_names: TeamMap<String>,

    /// First team to reach or pass this score wins.
    pub target_score: u32,

    /// Length of a turn. The engine never times anything itself; this is
    /// for the caller's countdown.
    pub round_duration_secs: u32,

    /// Categories words are drawn from. Never empty.
    pub enabled_categories: CategorySet,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            team_names: TeamMap::from_pair("Red Team".to_string(), "Blue Team".to_string()),
            target_score: 30,
            round_duration_secs: 60,
            enabled_categories: CategorySet::all(),
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both team names.
    #[must_use]
    pub fn with_team_names(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.team_names = TeamMap::from_pair(a.into(), b.into());
        self
    }

    #[must_use]
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    #[must_use]
    pub fn with_round_duration(mut self, secs: u32) -> Self {
        self.round_duration_secs = secs;
        self
    }

    /// Replace the enabled category set.
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.enabled_categories = categories.into_iter().collect();
        self
    }

    #[must_use]
    pub fn team_name(&self, team: TeamSlot) -> &str {
        &self.team_names[team]
    }

    #[must_use]
    pub fn round_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.round_duration_secs))
    }

    /// Check every field.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.enabled_categories.is_empty() {
            return Err(MatchError::EmptyCategorySelection);
        }
        for (team, name) in self.team_names.iter() {
            if name.trim().is_empty() {
                return Err(MatchError::InvalidConfig(format!("{team} needs a name")));
            }
        }
        if self.target_score == 0 {
            return Err(MatchError::InvalidConfig("target score must be positive".into()));
        }
        if self.round_duration_secs == 0 {
            return Err(MatchError::InvalidConfig("round duration must be positive".into()));
        }
        Ok(())
    }
}
