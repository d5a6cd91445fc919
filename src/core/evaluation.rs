//! Guess evaluation
//!
//! Each guessed letter is graded against the target:
//! - `Correct` = right letter in the right position
//! - `Partial` = letter occurs elsewhere in the target
//! - `Absent`  = letter does not occur (or every occurrence is already used)

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for one letter of a guess
///
/// Ordered so that a better status compares greater: `Correct > Partial > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Absent,
    Partial,
    Correct,
}

impl Status {
    /// Rank used when aggregating the keyboard (3 = best)
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Absent => 1,
            Self::Partial => 2,
            Self::Correct => 3,
        }
    }

    /// Square emoji for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Partial => '🟧',
            Self::Absent => '⬜',
        }
    }
}

/// Evaluation of a full guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([Status; WORD_LENGTH]);

impl Evaluation {
    /// All positions correct
    pub const PERFECT: Self = Self([Status::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(statuses: [Status; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[Status; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> Status {
        self.0[position]
    }

    /// Check if every letter is in the right place
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Parse an evaluation from a string like "GP-" or "🟩🟧⬜"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'P'/'p'/'Y'/'y'/🟧/🟨 for partial
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use hebrew_wordle::core::Evaluation;
    ///
    /// let a = Evaluation::parse("GP-").unwrap();
    /// let b = Evaluation::parse("🟩🟧⬜").unwrap();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut statuses = [Status::Absent; WORD_LENGTH];
        for (slot, ch) in statuses.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Status::Correct,
                'P' | 'p' | 'Y' | 'y' | '🟧' | '🟨' => Status::Partial,
                '-' | '_' | '⬜' => Status::Absent,
                _ => return None,
            };
        }

        Some(Self(statuses))
    }

    /// Convert to an emoji row, first letter first
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Evaluate `guess` against `target`
///
/// Both words must already be in final-glyph form.
///
/// # Algorithm
/// 1. First pass: mark exact matches and consume those target slots
/// 2. Second pass: each remaining guess letter claims the first unconsumed
///    equal letter of the target, left to right
///
/// Running the exact pass first means a duplicated guess letter is never
/// credited more often than it occurs in the target, and an exact match is
/// never stolen by a partial match elsewhere.
///
/// # Examples
/// ```
/// use hebrew_wordle::core::{Status, Word, evaluate};
///
/// let target = Word::new("אבא").unwrap();
/// let guess = Word::new("אאא").unwrap();
/// let evaluation = evaluate(&guess, &target);
///
/// assert_eq!(
///     evaluation.statuses(),
///     &[Status::Correct, Status::Absent, Status::Correct]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Evaluation {
    let mut result = [Status::Absent; WORD_LENGTH];
    let mut remaining: [Option<char>; WORD_LENGTH] = target.letters().map(Some);
    let mut pending: [Option<char>; WORD_LENGTH] = guess.letters().map(Some);

    // First pass: exact position matches
    // Allow: index needed to access guess, target and all three scratch arrays
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.letter_at(i) == target.letter_at(i) {
            result[i] = Status::Correct;
            remaining[i] = None;
            pending[i] = None;
        }
    }

    // Second pass: present elsewhere
    for (slot, letter) in result.iter_mut().zip(pending) {
        let Some(letter) = letter else { continue };
        if let Some(found) = remaining.iter_mut().find(|t| **t == Some(letter)) {
            *slot = Status::Partial;
            *found = None;
        }
    }

    Evaluation(result)
}
