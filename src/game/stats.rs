//! In-memory statistics across rounds
//!
//! Kept for the lifetime of the process only.

use super::GameState;
use crate::core::MAX_ATTEMPTS;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index = number of guesses used for a win (index 0 unused)
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    /// Record a finished round; non-terminal states are ignored
    pub fn record(&mut self, state: GameState, attempts: usize) {
        match state {
            GameState::Playing => {}
            GameState::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if attempts <= MAX_ATTEMPTS {
                    self.guess_distribution[attempts] += 1;
                }
            }
            GameState::Lost => self.total_games += 1,
        }
    }

    /// Percentage of rounds won (0 when nothing has been played)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
