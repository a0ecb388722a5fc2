//! Match state machine.
//!
//! - `MatchEngine`: the operations callers invoke
//! - `MatchState`: the state they render
//! - `MatchPhase`: lifecycle position
//! - `MatchResult`: outcome of a completed match

pub mod engine;
pub mod phase;
pub mod result;
pub mod state;

pub use engine::MatchEngine;
pub use phase::MatchPhase;
pub use result::MatchResult;
pub use state::MatchState;
