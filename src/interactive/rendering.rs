//! TUI rendering with ratatui
//!
//! Board, keyboard and timer views for the three game modes.

use super::app::{App, InputMode, MessageStyle, PAUSE_OPTIONS};
use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{AlphabetTracker, AnagramGame, ClassicGame, Guess, RushGame, Session};
use crate::output::formatters::{round_marks, word_list};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    match &app.session {
        Session::Classic(game) => render_classic_board(f, game, main_chunks[0]),
        Session::Rush(game) => render_rush_board(f, game, main_chunks[0]),
        Session::Anagram(game) => render_anagram_board(f, game, main_chunks[0]),
    }
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if let InputMode::PauseMenu { selected } = app.input_mode {
        render_pause_menu(f, selected);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🖐 GIMME FIVE - {}",
        app.session.mode().name().to_uppercase()
    );
    let header = Paragraph::new(title)
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

fn tile_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Unevaluated => Style::default().fg(Color::White),
    }
}

fn guess_spans(guess: &Guess) -> Vec<Span<'static>> {
    guess
        .word
        .letters()
        .iter()
        .zip(guess.evaluation.iter())
        .flat_map(|(&letter, status)| {
            [
                Span::styled(format!(" {} ", char::from(letter)), tile_style(status)),
                Span::raw(" "),
            ]
        })
        .collect()
}

fn empty_row() -> Line<'static> {
    Line::from(" _ ".repeat(WORD_LENGTH).trim_end().to_string())
        .style(Style::default().fg(Color::DarkGray))
}

fn board_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_classic_board(f: &mut Frame, game: &ClassicGame, area: Rect) {
    let mut lines = vec![Line::from("")];
    for row in 0..game.max_guesses() {
        let line = game
            .guesses()
            .get(row)
            .map_or_else(empty_row, |guess| Line::from(guess_spans(guess)));
        lines.push(line);
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(board_block(format!(
            " Board ({} left) ",
            game.guesses_remaining()
        )));
    f.render_widget(board, area);
}

fn render_rush_board(f: &mut Frame, game: &RushGame, area: Rect) {
    let offset = game.scroll_offset();
    let items: Vec<ListItem> = game
        .visible_guesses()
        .iter()
        .enumerate()
        .map(|(i, guess)| {
            let mut spans = vec![Span::styled(
                format!("{:>3}. ", offset + i + 1),
                Style::default().fg(Color::DarkGray),
            )];
            spans.extend(guess_spans(guess));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let more_above = offset > 0;
    let more_below = offset + game.visible_guesses().len() < game.guesses().len();
    let arrows = match (more_above, more_below) {
        (true, true) => " ↑↓",
        (true, false) => " ↑",
        (false, true) => " ↓",
        (false, false) => "",
    };

    let list = List::new(items).block(board_block(format!(
        " Guesses {}/{}{arrows} ",
        game.guesses().len(),
        game.max_guesses()
    )));
    f.render_widget(list, area);
}

fn render_anagram_board(f: &mut Frame, game: &AnagramGame, area: Rect) {
    let target = game.target().map(|w| w.to_string()).unwrap_or_default();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            target
                .chars()
                .map(|c| format!(" {c} "))
                .collect::<Vec<_>>()
                .join(" "),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(round_marks(game.rounds(), game.total_rounds())),
        Line::from(""),
    ];

    for round in game.rounds() {
        let (mark, color) = if round.correct {
            ("✔", Color::Green)
        } else {
            ("✘", Color::Red)
        };
        let guess = round.guess.map(|w| w.to_string()).unwrap_or_else(|| "-----".to_string());
        lines.push(Line::from(vec![
            Span::styled(format!("{mark} "), Style::default().fg(color)),
            Span::raw(format!("{} ", round.target)),
            Span::styled(guess, Style::default().fg(color)),
            Span::styled(
                format!("  ({})", word_list(&round.solutions)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(board_block(format!(
            " Round {}/{} ",
            (game.rounds().len() + 1).min(game.total_rounds()),
            game.total_rounds()
        )));
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    match &app.session {
        Session::Classic(game) => render_keyboard(f, game.alphabet(), chunks[0]),
        Session::Rush(game) => render_rush_timer(f, game, chunks[0]),
        Session::Anagram(game) => render_anagram_score(f, game, chunks[0]),
    }
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, alphabet: &AlphabetTracker, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    let status = alphabet.status(letter);
                    let style = match status {
                        LetterStatus::Absent => Style::default().fg(Color::DarkGray),
                        other => tile_style(other),
                    };
                    Span::styled(format!(" {} ", char::from(letter)), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_rush_timer(f: &mut Frame, game: &RushGame, area: Rect) {
    let timer = game.timer();
    let percent = if timer.reload_seconds() == 0 {
        0
    } else {
        u16::try_from(timer.seconds_left() * 100 / timer.reload_seconds()).unwrap_or(100)
    };

    let (label, color) = if game.is_frozen() {
        (format!("❄ frozen at {}s", timer.seconds_left()), Color::Cyan)
    } else if timer.seconds_left() <= 5 {
        (format!("{}s", timer.seconds_left()), Color::Red)
    } else {
        (format!("{}s", timer.seconds_left()), Color::Green)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" Word changes in | swaps: {} ", game.swaps()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_anagram_score(f: &mut Frame, game: &AnagramGame, area: Rect) {
    let lines = vec![
        Line::from(format!(
            "Found: {} of {}",
            game.correct_count(),
            game.rounds().len()
        )),
        Line::from(""),
        Line::from("Type a different word that uses").style(Style::default().fg(Color::DarkGray)),
        Line::from("exactly the same letters.").style(Style::default().fg(Color::DarkGray)),
    ];

    let score = Paragraph::new(lines).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(score, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            app.word_code
                .as_ref()
                .map(|code| format!("Word code: {code}"))
                .unwrap_or_default(),
            Color::Green,
        ),
        InputMode::Playing | InputMode::PauseMenu { .. } => {
            let typed: String = app
                .input
                .as_str()
                .chars()
                .map(|c| format!("{c} "))
                .chain(std::iter::repeat_n(
                    "_ ".to_string(),
                    WORD_LENGTH - app.input.len(),
                ))
                .collect();
            (" Your guess | Enter to submit ", typed, Color::Yellow)
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = format!("Mode: {}", app.session.mode());
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match (app.input_mode, &app.session) {
        (InputMode::GameOver, _) => "q: Quit | n: New Game",
        (InputMode::PauseMenu { .. }, _) => "↑↓: Choose | Enter: Select | Esc: Resume",
        (InputMode::Playing, Session::Rush(_)) => {
            "Enter: Submit | ↑↓: Scroll | Esc: Menu | Ctrl+C: Quit"
        }
        (InputMode::Playing, _) => "Enter: Submit | Esc: Menu | Ctrl+C: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_pause_menu(f: &mut Frame, selected: usize) {
    let area = centered_rect(30, 7, f.area());

    let items: Vec<ListItem> = PAUSE_OPTIONS
        .iter()
        .enumerate()
        .map(|(i, (_, label))| {
            if i == selected {
                ListItem::new(format!("▶ {label}")).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {label}"))
            }
        })
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .title(" Paused ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, area);
    f.render_widget(menu, area);
}

/// Fixed-size rect centered in `area`, shrunk to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::{context, w};
    use crate::game::Mode;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn classic_board_shows_guesses() {
        let mut session = Session::new(Mode::Classic, context(3));
        session.start_with_target(w("CRANE")).unwrap();
        session.submit("BRAVE").unwrap();
        let app = App::new(session);

        let screen = draw(&app);
        assert!(screen.contains("GIMME FIVE - CLASSIC"));
        assert!(screen.contains(" B "));
        assert!(screen.contains("Board (4 left)"));
    }

    #[test]
    fn pause_menu_is_drawn() {
        let mut session = Session::new(Mode::Classic, context(3));
        session.start_with_target(w("CRANE")).unwrap();
        let mut app = App::new(session);
        app.open_pause_menu();

        let screen = draw(&app);
        assert!(screen.contains("Paused"));
        assert!(screen.contains("Reveal answer"));
    }

    #[test]
    fn rush_shows_timer() {
        let mut session = Session::new(Mode::Rush, context(3));
        session.start().unwrap();
        let app = App::new(session);

        let screen = draw(&app);
        assert!(screen.contains("30s"));
        assert!(screen.contains("Guesses 0/100"));
    }

    #[test]
    fn centered_rect_fits_small_area() {
        let area = Rect::new(0, 0, 20, 4);
        let rect = centered_rect(30, 7, area);
        assert_eq!(rect, area);

        let rect = centered_rect(10, 2, area);
        assert_eq!(rect, Rect::new(5, 1, 10, 2));
    }
}
