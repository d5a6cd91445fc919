//! Core domain types for Hebrew Wordle
//!
//! This module contains the fundamental domain types and pure functions:
//! the alphabet and its final-letter rules, words, guess evaluation and the
//! aggregated keyboard status. Nothing here performs I/O.

mod alphabet;
mod evaluation;
mod keyboard;
mod word;

pub use alphabet::{
    BASE_LETTERS, FINAL_FORMS, KEYBOARD_ROWS, apply_final_form, is_accepted_input,
    is_base_letter, is_final_form, is_hebrew_char, to_base,
};
pub use evaluation::{Evaluation, Status, evaluate};
pub use keyboard::KeyboardStatus;
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 3;

/// Number of guesses a player gets per round
pub const MAX_ATTEMPTS: usize = 6;
