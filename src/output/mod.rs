//! Terminal output formatting
//!
//! Colored rendering for the line-oriented mode and the `evaluate` command.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_evaluation, print_statistics};
