//! TUI application state and logic

use super::keymap::key_to_letter;
use crate::game::outcome::outcome_message;
use crate::game::{GameSession, GameState, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a, R: Rng = StdRng> {
    pub session: GameSession<'a, R>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub show_help: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(session: GameSession<'a, R>) -> Self {
        Self {
            session,
            messages: vec![Message {
                text: "נחשו את המילה בשישה נסיונות".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            show_help: false,
            should_quit: false,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let chord = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        // The help overlay swallows every key but Ctrl+C
        if self.show_help {
            if ctrl && key.code == KeyCode::Char('c') {
                self.should_quit = true;
            } else {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::F(1) | KeyCode::Char('?') => self.show_help = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                if self.session.is_ended() {
                    self.new_game();
                } else {
                    self.submit();
                }
            }
            KeyCode::Backspace => self.session.delete_letter(),
            KeyCode::Char(c) if !chord => {
                if let Some(letter) = key_to_letter(c) {
                    self.session.input_letter(letter);
                }
            }
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        match self.session.submit_guess() {
            Ok(outcome) => {
                let attempts = self.session.attempts().len();
                if outcome.transition != GameState::Playing {
                    self.stats.record(outcome.transition, attempts);
                }
                if let Some(text) =
                    outcome_message(outcome.transition, attempts, self.session.target())
                {
                    let style = if outcome.transition == GameState::Won {
                        MessageStyle::Success
                    } else {
                        MessageStyle::Info
                    };
                    self.add_message(&text, style);
                    self.add_message("Enter למשחק חדש", MessageStyle::Info);
                }
            }
            Err(e) => {
                debug!(error = %e, "guess rejected");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session.start_new();
        self.messages.clear();
        self.add_message("משחק חדש!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Status, Word};
    use crate::dictionary::Dictionary;
    use rand::SeedableRng;

    fn app<'a>(dict: &'a Dictionary, target: &str) -> App<'a> {
        let session =
            GameSession::with_target(dict, StdRng::seed_from_u64(9), Word::new(target).unwrap());
        App::new(session)
    }

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_keys(app: &mut App<'_>, keys: &str) {
        for c in keys.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn hebrew_keys_fill_row() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict, "שמש");
        type_keys(&mut app, "אבא");
        assert_eq!(app.session.current_guess(), &['א', 'ב', 'א']);
    }

    #[test]
    fn latin_keys_use_israeli_layout() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict, "שמש");
        // a n a -> ש מ ש
        type_keys(&mut app, "ana");
        assert_eq!(app.session.current_guess(), &['ש', 'מ', 'ש']);
    }

    #[test]
    fn backspace_deletes() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict, "שמש");
        type_keys(&mut app, "אב");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.current_guess(), &['א']);
    }

    #[test]
    fn incomplete_guess_shows_error() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict, "שמש");
        type_keys(&mut app, "אב");
        press(&mut app, KeyCode::Enter);

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(app.session.attempts().is_empty());
    }

    #[test]
    fn winning_records_stats_and_enter_starts_new_game() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict, "שמש");
        type_keys(&mut app, "שמש");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.state(), GameState::Won);
        assert_eq!(app.stats.games_won, 1);
        assert!(app.messages.iter().any(|m| m.style == MessageStyle::Success));
        assert_eq!(app.session.keyboard().status_of('ש'), Some(Status::Correct));

        // Letters are ignored once the round is over
        type_keys(&mut app, "א");
        assert_eq!(app.session.attempts().len(), 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.state(), GameState::Playing);
        assert!(app.session.attempts().is_empty());
    }

    #[test]
    fn ctrl_n_starts_new_game_mid_round() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict, "שמש");
        type_keys(&mut app, "אבא");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.attempts().len(), 1);

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert!(app.session.attempts().is_empty());
        assert_eq!(app.stats.total_games, 0);
    }

    #[test]
    fn quit_keys() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict, "שמש");
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app2 = super::App::new(GameSession::with_target(
            &dict,
            StdRng::seed_from_u64(1),
            Word::new("שמש").unwrap(),
        ));
        app2.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app2.should_quit);
    }

    #[test]
    fn modifier_chords_do_not_type() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict, "שמש");
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::ALT));
        assert!(app.session.current_guess().is_empty());

        // Shift is still a plain letter
        app.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(app.session.current_guess(), &['ש']);
    }

    #[test]
    fn help_overlay_toggles() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict, "שמש");
        press(&mut app, KeyCode::F(1));
        assert!(app.show_help);

        // Closing keys do not reach the game
        press(&mut app, KeyCode::Char('a'));
        assert!(!app.show_help);
        assert!(app.session.current_guess().is_empty());

        app.handle_key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert!(app.show_help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn messages_capped_at_five() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict, "שמש");
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "5");
    }
}
