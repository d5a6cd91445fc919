//! Game progression
//!
//! A [`GameSession`] runs one round; [`Statistics`] accumulates results over
//! the rounds played in one process.

pub mod outcome;
mod session;
mod stats;

pub use session::{Attempt, Cursor, GameError, GameSession, GameState, SubmitOutcome};
pub use stats::Statistics;
