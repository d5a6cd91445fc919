//! Aggregated keyboard status
//!
//! Tracks the best status each base letter has shown across a round. Final
//! glyphs are folded into their base letter since the keyboard only has base
//! keys.

use super::{Evaluation, Status, Word, to_base};
use rustc_hash::FxHashMap;

/// Immutable snapshot of the best status seen per base letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatus {
    best: FxHashMap<char, Status>,
}

impl KeyboardStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the status from a full attempt history
    #[must_use]
    pub fn from_attempts<'a, I>(attempts: I) -> Self
    where
        I: IntoIterator<Item = (&'a Word, &'a Evaluation)>,
    {
        attempts
            .into_iter()
            .fold(Self::new(), |status, (guess, evaluation)| {
                status.merged(guess, evaluation)
            })
    }

    /// Return a new snapshot with one more evaluated guess folded in
    ///
    /// A letter's status only ever moves up: `Absent → Partial → Correct`.
    #[must_use]
    pub fn merged(&self, guess: &Word, evaluation: &Evaluation) -> Self {
        let mut best = self.best.clone();

        for (&letter, &status) in guess.letters().iter().zip(evaluation.statuses()) {
            best.entry(to_base(letter))
                .and_modify(|current| {
                    if status.priority() > current.priority() {
                        *current = status;
                    }
                })
                .or_insert(status);
        }

        Self { best }
    }

    /// Best status seen for a letter (final glyphs are looked up by base letter)
    #[must_use]
    pub fn status_of(&self, letter: char) -> Option<Status> {
        self.best.get(&to_base(letter)).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }
}
