//! Hebrew Wordle
//!
//! A three-letter Wordle for the Hebrew alphabet: six attempts, per-letter
//! feedback, and automatic final-letter (sofit) forms in the last position.
//!
//! # Quick Start
//!
//! ```rust
//! use hebrew_wordle::core::{Status, Word, evaluate};
//!
//! let target = Word::new("אבא").unwrap();
//! let guess = Word::new("אאא").unwrap();
//!
//! let evaluation = evaluate(&guess, &target);
//! assert_eq!(
//!     evaluation.statuses(),
//!     &[Status::Correct, Status::Absent, Status::Correct]
//! );
//! ```

// Core domain types
pub mod core;

// Word list
pub mod dictionary;

// Round state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
