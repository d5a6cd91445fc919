//! Hebrew word representation
//!
//! A Word is exactly three letters, each a base letter or a final glyph.

use super::WORD_LENGTH;
use super::alphabet::{apply_final_form, is_accepted_input};
use std::fmt;
use thiserror::Error;

/// A three-letter Hebrew word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 3 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word contains a non-Hebrew character: {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string, exactly as written
    ///
    /// No final-form substitution happens here; dictionary entries are
    /// already stored with their final glyphs.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 3 characters
    /// - Any character is not a Hebrew base letter or final glyph
    ///
    /// # Examples
    /// ```
    /// use hebrew_wordle::core::Word;
    ///
    /// let word = Word::new("שלם").unwrap();
    /// assert_eq!(word.text(), "שלם");
    ///
    /// assert!(Word::new("שלום").is_err());
    /// assert!(Word::new("abc").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();
        let chars: Vec<char> = text.chars().collect();

        let letters: [char; WORD_LENGTH] = chars
            .as_slice()
            .try_into()
            .map_err(|_| WordError::InvalidLength(chars.len()))?;

        if let Some(&bad) = letters.iter().find(|&&c| !is_accepted_input(c)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self {
            text: text.to_string(),
            letters,
        })
    }

    /// Create a Word from text as a player would type it
    ///
    /// Applies the final-form rule to the last letter, so `"שלמ"` becomes
    /// `"שלם"`.
    ///
    /// # Errors
    /// Same as [`Word::new`].
    pub fn from_typed(text: impl AsRef<str>) -> Result<Self, WordError> {
        let normalized: String = text
            .as_ref()
            .trim()
            .chars()
            .enumerate()
            .map(|(i, c)| apply_final_form(c, i, WORD_LENGTH))
            .collect();
        Self::new(normalized)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters in order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-2)
    ///
    /// # Panics
    /// Panics if position >= 3
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if the word contains a specific glyph
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
