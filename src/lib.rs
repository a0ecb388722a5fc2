//! # charades-engine
//!
//! Word selection and scoring engine for a local, offline team charades
//! game. Two teams alternate turns; the active team gets a batch of words to
//! act out under a timer and scores a point per word guessed. First team to
//! the target score wins.
//!
//! ## Design Principles
//!
//! 1. **Caller-Driven**: No clocks, threads or I/O. The presentation layer
//!    owns the timer and calls `end_turn` when it runs out.
//!
//! 2. **Atomic Operations**: Every operation either applies fully or returns
//!    a `MatchError` and leaves the state untouched.
//!
//! 3. **Injectable Randomness**: Selection draws through `RandomSource`, so a
//!    seeded `GameRng` or a scripted `SequenceRng` makes batches reproducible.
//!
//! ## Modules
//!
//! - `core`: Teams, configuration, errors, RNG
//! - `words`: Word catalog, categories, batch selection
//! - `game`: Match state machine

pub mod core;
pub mod game;
pub mod words;

// Re-export commonly used types
pub use crate::core::{GameRng, MatchConfig, MatchError, RandomSource, SequenceRng, TeamMap, TeamSlot};

pub use crate::words::{
    Batch, BatchOutcome, CatalogError, Category, CategorySet, WordCatalog, WordEntry, WordId,
    WordPoolSelector, BATCH_SIZE,
};

pub use crate::game::{MatchEngine, MatchPhase, MatchResult, MatchState};
