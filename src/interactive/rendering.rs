//! TUI rendering with ratatui
//!
//! The board is drawn right-to-left: the first letter of a word sits in the
//! rightmost tile.

use super::app::{App, MessageStyle};
use crate::core::{FINAL_FORMS, KEYBOARD_ROWS, MAX_ATTEMPTS, Status, WORD_LENGTH};
use crate::game::GameState;
use crate::output::formatters::status_rgb;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                           // Header
            Constraint::Length(MAX_ATTEMPTS as u16 * 2 + 1), // Board
            Constraint::Length(5),                           // Keyboard
            Constraint::Min(4),                              // Messages
            Constraint::Length(1),                           // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if app.show_help {
        render_help(f, f.area());
    }
}

/// A rectangle of the given size centred in `area`, clamped to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn help_lines() -> Vec<Line<'static>> {
    let example = |letter: char, status: Status, text: &'static str| {
        Line::from(vec![
            Span::styled(format!(" {letter} "), status_style(Some(status))),
            Span::raw("  "),
            Span::raw(text),
        ])
    };
    let finals: String = FINAL_FORMS
        .iter()
        .map(|&(base, fin)| format!("{base}→{fin}  "))
        .collect();

    vec![
        Line::from("נחשו את המילה בשישה נסיונות"),
        Line::from("כל ניחוש חייב להיות מילה בת 3 אותיות מהרשימה"),
        Line::from(""),
        example('ש', Status::Correct, "האות במילה ובמקום הנכון"),
        example('ק', Status::Partial, "האות במילה אבל לא במקום הנכון"),
        example('ר', Status::Absent, "האות לא נמצאת במילה"),
        Line::from(""),
        Line::from("אות אחרונה נכתבת אוטומטית בצורה סופית:"),
        Line::from(finals.trim_end().to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn render_help(f: &mut Frame, area: Rect) {
    let lines = help_lines();
    let popup = centered(area, 56, lines.len() as u16 + 2);

    let help = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" How to play · איך משחקים ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}

fn status_style(status: Option<Status>) -> Style {
    match status {
        Some(status) => {
            let (r, g, b) = status_rgb(status);
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(r, g, b))
                .add_modifier(Modifier::BOLD)
        }
        None => Style::default().add_modifier(Modifier::BOLD),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HEBREW WORDLE  ·  וורדל עברי")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Tiles for one board row, in display order (right-to-left)
fn board_row<'s, R: Rng>(app: &App<'_, R>, row: usize) -> Line<'s> {
    let session = &app.session;
    let attempts = session.attempts();

    let tiles: Vec<(Option<char>, Option<Status>)> = if let Some(attempt) = attempts.get(row) {
        attempt
            .guess
            .letters()
            .iter()
            .zip(attempt.evaluation.statuses())
            .map(|(&c, &s)| (Some(c), Some(s)))
            .collect()
    } else if row == session.cursor().row && !session.is_ended() {
        let typed = session.current_guess();
        (0..WORD_LENGTH).map(|i| (typed.get(i).copied(), None)).collect()
    } else {
        vec![(None, None); WORD_LENGTH]
    };

    let spans: Vec<Span> = tiles
        .into_iter()
        .rev()
        .flat_map(|(letter, status)| {
            let text = format!(" {} ", letter.unwrap_or('·'));
            let style = if letter.is_some() {
                status_style(status)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [Span::styled(text, style), Span::raw(" ")]
        })
        .collect();

    Line::from(spans)
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);
    for row in 0..MAX_ATTEMPTS {
        lines.push(board_row(app, row));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(board, area);
}

fn render_keyboard<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let keyboard = app.session.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&key| {
                    [
                        Span::styled(format!(" {key} "), status_style(keyboard.status_of(key))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match app.session.state() {
        GameState::Playing => format!(
            "Attempt {}/{MAX_ATTEMPTS}",
            app.session.attempts().len() + 1
        ),
        GameState::Won => "Won".to_string(),
        GameState::Lost => "Lost".to_string(),
    };
    f.render_widget(Paragraph::new(mode_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let help = Paragraph::new("Enter: Submit | Ctrl+N: New | ?: Help | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::dictionary::Dictionary;
    use crate::game::GameSession;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text<R: Rng>(app: &App<'_, R>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_header_and_keyboard() {
        let dict = Dictionary::embedded();
        let session =
            GameSession::with_target(&dict, StdRng::seed_from_u64(1), Word::new("שמש").unwrap());
        let text = screen_text(&App::new(session));

        assert!(text.contains("HEBREW WORDLE"));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("Attempt 1/6"));
    }

    #[test]
    fn help_overlay_drawn_on_request() {
        let dict = Dictionary::embedded();
        let session =
            GameSession::with_target(&dict, StdRng::seed_from_u64(1), Word::new("שמש").unwrap());
        let mut app = App::new(session);
        assert!(!screen_text(&app).contains("How to play"));

        app.show_help = true;
        let text = screen_text(&app);
        assert!(text.contains("How to play"));
        assert!(text.contains("Press any key to close"));
    }

    #[test]
    fn help_lists_every_final_form() {
        let text: String = help_lines()
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect();
        for (_, fin) in FINAL_FORMS {
            assert!(text.contains(fin), "missing {fin}");
        }
    }

    #[test]
    fn board_row_is_right_to_left() {
        let dict = Dictionary::embedded();
        let session = GameSession::replay(
            &dict,
            StdRng::seed_from_u64(1),
            Word::new("שמש").unwrap(),
            &["אור"],
        )
        .unwrap();
        let app = App::new(session);

        let letters: String = board_row(&app, 0)
            .spans
            .iter()
            .map(|s| s.content.trim().to_string())
            .collect();
        assert_eq!(letters, "רוא");
    }

    #[test]
    fn current_row_shows_typed_letters() {
        let dict = Dictionary::embedded();
        let mut session =
            GameSession::with_target(&dict, StdRng::seed_from_u64(1), Word::new("שמש").unwrap());
        session.input_letter('א');
        let app = App::new(session);

        let letters: String = board_row(&app, 0)
            .spans
            .iter()
            .map(|s| s.content.trim().to_string())
            .collect();
        assert_eq!(letters, "··א");
    }

    #[test]
    fn empty_rows_show_placeholders() {
        let dict = Dictionary::embedded();
        let session =
            GameSession::with_target(&dict, StdRng::seed_from_u64(1), Word::new("שמש").unwrap());
        let app = App::new(session);
        let line = board_row(&app, 3);
        assert!(line.spans.iter().any(|s| s.content.contains('·')));
    }
}
