//! Core engine types: teams, configuration, errors, RNG.
//!
//! These are the building blocks shared by the word selector and the match
//! state machine.

pub mod config;
pub mod error;
pub mod rng;
pub mod team;

pub use config::MatchConfig;
pub use error::MatchError;
pub use rng::{GameRng, RandomSource, SequenceRng};
pub use team::{TeamMap, TeamSlot};
