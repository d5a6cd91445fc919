//! Command implementations

pub mod evaluate;
pub mod simple;

pub use evaluate::{CommandError, EvaluationResult, check_word, evaluate_words};
pub use simple::{LineCommand, run_simple};
