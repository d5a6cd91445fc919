//! One-off evaluation and dictionary lookup commands

use crate::core::{Evaluation, Word, evaluate};
use crate::dictionary::Dictionary;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid word '{text}': {source}")]
    InvalidWord {
        text: String,
        source: crate::core::WordError,
    },
}

/// Result of evaluating one guess
pub struct EvaluationResult {
    pub guess: Word,
    pub target: Word,
    pub evaluation: Evaluation,
    pub guess_in_dictionary: bool,
}

fn typed_word(text: &str) -> Result<Word, CommandError> {
    Word::from_typed(text).map_err(|source| CommandError::InvalidWord {
        text: text.to_string(),
        source,
    })
}

/// Evaluate `guess` against `target` as typed by a player
///
/// Final forms are applied to both inputs. Neither word has to be in the
/// dictionary; whether the guess is recorded so the caller can warn.
///
/// # Errors
///
/// Returns an error if either input is not a three-letter Hebrew word.
pub fn evaluate_words(
    guess: &str,
    target: &str,
    dictionary: &Dictionary,
) -> Result<EvaluationResult, CommandError> {
    let guess = typed_word(guess)?;
    let target = typed_word(target)?;
    let evaluation = evaluate(&guess, &target);

    Ok(EvaluationResult {
        guess_in_dictionary: dictionary.is_valid_word(guess.text()),
        guess,
        target,
        evaluation,
    })
}

/// Check whether a typed word is accepted as a guess
///
/// # Errors
///
/// Returns an error if the input is not a three-letter Hebrew word.
pub fn check_word(text: &str, dictionary: &Dictionary) -> Result<(Word, bool), CommandError> {
    let word = typed_word(text)?;
    let valid = dictionary.is_valid_word(word.text());
    Ok((word, valid))
}
