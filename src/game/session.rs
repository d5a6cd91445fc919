//! A single round of the game
//!
//! The session owns the target, the guess being typed, the submitted attempts
//! and the aggregated keyboard status. It only changes through
//! [`GameSession::start_new`], [`GameSession::input_letter`],
//! [`GameSession::delete_letter`] and [`GameSession::submit_guess`].

use crate::core::{
    Evaluation, KeyboardStatus, MAX_ATTEMPTS, WORD_LENGTH, Word, apply_final_form, evaluate,
    is_accepted_input,
};
use crate::dictionary::Dictionary;
use rand::Rng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info};

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Reasons a guess is rejected. None of them change the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("יש להזין מילה בת 3 אותיות")]
    IncompleteGuess { letters: usize },

    #[error("המילה לא קיימת ברשימה")]
    UnknownWord(String),

    #[error("המשחק הסתיים")]
    GameOver,
}

/// One submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub evaluation: Evaluation,
}

/// Board position: `row` = completed attempts, `col` = letters typed in the current row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// What a successful submission produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub evaluation: Evaluation,
    pub transition: GameState,
}

/// Game state for one round
///
/// The random source is injected so tests can fix the target sequence.
pub struct GameSession<'a, R: Rng = StdRng> {
    dictionary: &'a Dictionary,
    rng: R,
    target: Word,
    attempts: Vec<Attempt>,
    buffer: Vec<char>,
    row: usize,
    state: GameState,
    keyboard: KeyboardStatus,
}

impl<'a, R: Rng> GameSession<'a, R> {
    /// Create a session and start the first round with a random target
    pub fn new(dictionary: &'a Dictionary, mut rng: R) -> Self {
        let target = dictionary.pick_random_target(&mut rng);
        debug!(target = %target, "target chosen");
        Self::with_target(dictionary, rng, target)
    }

    /// Create a session with a known target
    ///
    /// The target need not be a dictionary word; later rounds started with
    /// [`start_new`](Self::start_new) draw from the dictionary again.
    pub fn with_target(dictionary: &'a Dictionary, rng: R, target: Word) -> Self {
        Self {
            dictionary,
            rng,
            target,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            buffer: Vec::with_capacity(WORD_LENGTH),
            row: 0,
            state: GameState::Playing,
            keyboard: KeyboardStatus::new(),
        }
    }

    /// Rebuild a session by typing and submitting each guess in order
    ///
    /// # Errors
    /// Returns the first error `submit_guess` reports.
    pub fn replay<S: AsRef<str>>(
        dictionary: &'a Dictionary,
        rng: R,
        target: Word,
        guesses: &[S],
    ) -> Result<Self, GameError> {
        let mut session = Self::with_target(dictionary, rng, target);
        for guess in guesses {
            for letter in guess.as_ref().chars() {
                session.input_letter(letter);
            }
            session.submit_guess()?;
        }
        Ok(session)
    }

    /// Reset everything and draw a new target
    pub fn start_new(&mut self) {
        self.target = self.dictionary.pick_random_target(&mut self.rng);
        self.attempts.clear();
        self.buffer.clear();
        self.row = 0;
        self.state = GameState::Playing;
        self.keyboard = KeyboardStatus::new();
        debug!(target = %self.target, "new round started");
    }

    /// Type one letter into the current row
    ///
    /// Ignored when the round is over, the row is full, or the letter is not
    /// a Hebrew base letter or final glyph. A letter landing in the last
    /// column is stored in its final form.
    pub fn input_letter(&mut self, letter: char) {
        if self.state.is_terminal() || self.buffer.len() >= WORD_LENGTH {
            return;
        }
        if !is_accepted_input(letter) {
            return;
        }

        let glyph = apply_final_form(letter, self.buffer.len(), WORD_LENGTH);
        self.buffer.push(glyph);
    }

    /// Remove the last typed letter, if any
    pub fn delete_letter(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        self.buffer.pop();
    }

    /// Submit the current row as a guess
    ///
    /// # Errors
    /// - `IncompleteGuess` if fewer than three letters are typed
    /// - `UnknownWord` if the letters do not form a dictionary word
    /// - `GameOver` if the round has already ended
    ///
    /// On error nothing changes and the player may fix the row and resubmit.
    pub fn submit_guess(&mut self) -> Result<SubmitOutcome, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver);
        }
        if self.buffer.len() != WORD_LENGTH {
            return Err(GameError::IncompleteGuess {
                letters: self.buffer.len(),
            });
        }

        let text: String = self.buffer.iter().collect();
        if !self.dictionary.is_valid_word(&text) {
            return Err(GameError::UnknownWord(text));
        }
        let guess = Word::new(&text).map_err(|_| GameError::UnknownWord(text))?;

        let evaluation = evaluate(&guess, &self.target);
        debug!(guess = %guess, evaluation = %evaluation, "guess evaluated");

        self.keyboard = self.keyboard.merged(&guess, &evaluation);
        let solved = guess == self.target;
        self.attempts.push(Attempt { guess, evaluation });

        if solved {
            self.state = GameState::Won;
            info!(attempts = self.attempts.len(), "round won");
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            self.state = GameState::Lost;
            info!(target = %self.target, "round lost");
        } else {
            self.row += 1;
            self.buffer.clear();
        }

        Ok(SubmitOutcome {
            evaluation,
            transition: self.state,
        })
    }

    /// The hidden word (for the end-of-round reveal)
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        Cursor {
            row: self.row,
            col: self.buffer.len(),
        }
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_ended(&self) -> bool {
        self.state.is_terminal()
    }

    /// Letters typed so far in the current row
    #[must_use]
    pub fn current_guess(&self) -> &[char] {
        &self.buffer
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }
}
