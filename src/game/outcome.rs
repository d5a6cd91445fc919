//! End-of-round messages shown to the player

use super::GameState;
use crate::core::Word;

/// Congratulation for a win in `attempts` guesses
#[must_use]
pub const fn win_message(attempts: usize) -> &'static str {
    match attempts {
        1 => "מדהים! נחשת במנה ראשונה!",
        2 => "מעולה! נחשת בשני נסיונות!",
        3 => "יפה! נחשת בשלושה נסיונות!",
        4 => "טוב! נחשת בארבעה נסיונות!",
        5 => "נחמד! נחשת בחמישה נסיונות!",
        _ => "כל הכבוד! נחשת בנסיון האחרון!",
    }
}

/// Consolation that reveals the target
#[must_use]
pub fn loss_message(target: &Word) -> String {
    format!("לא נורא! המילה הייתה: {target}")
}

/// Message for a finished round, `None` while still playing
#[must_use]
pub fn outcome_message(state: GameState, attempts: usize, target: &Word) -> Option<String> {
    match state {
        GameState::Playing => None,
        GameState::Won => Some(win_message(attempts).to_string()),
        GameState::Lost => Some(loss_message(target)),
    }
}
