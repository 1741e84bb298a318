//! TUI application state and logic

use crate::game::{
    Feedback, GuessInput, Mode, Outcome, PauseDecision, Phase, RoundResult, Session, SwapOutcome,
};
use crate::output::formatters::word_list;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Redraw and timer resolution
const TICK_RATE: Duration = Duration::from_millis(100);

/// Pause menu entries in display order
pub const PAUSE_OPTIONS: [(PauseDecision, &str); 3] = [
    (PauseDecision::Resume, "Resume"),
    (PauseDecision::Reveal, "Reveal answer"),
    (PauseDecision::Quit, "Quit game"),
];

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub input: GuessInput,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Share code for the last finished classic game
    pub word_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    PauseMenu { selected: usize },
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Classic and rush wins indexed by guess count, last bucket collects the rest
    pub guess_distribution: [usize; 7],
    pub anagrams_found: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>) -> Self {
        let mut app = Self {
            session,
            input: GuessInput::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Playing,
            word_code: None,
        };
        let welcome = welcome_text(&app.session);
        app.add_message(&welcome, MessageStyle::Info);
        app
    }

    /// Start a fresh game, abandoning any game in progress
    pub fn new_game(&mut self) {
        if self.session.phase().is_active()
            && let Err(e) = self.session.pause()
        {
            log::warn!("Could not pause before a new game: {e}");
        }
        if self.session.phase() == Phase::Paused
            && let Err(e) = self.session.resolve_pause(PauseDecision::Quit)
        {
            log::warn!("Could not quit the running game: {e}");
        }

        self.input.clear();
        self.word_code = None;

        match self.session.start() {
            Ok(()) => {
                self.input_mode = InputMode::Playing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => {
                self.input_mode = InputMode::GameOver;
                self.add_message(&format!("Cannot start: {e}"), MessageStyle::Error);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Playing => match key.code {
                KeyCode::Char(c) => {
                    self.input.push(c);
                }
                KeyCode::Backspace => {
                    self.input.backspace();
                }
                KeyCode::Enter => self.submit_guess(),
                KeyCode::Esc => self.open_pause_menu(),
                KeyCode::Up => self.scroll(true),
                KeyCode::Down => self.scroll(false),
                _ => {}
            },
            InputMode::PauseMenu { selected } => match key.code {
                KeyCode::Up => {
                    self.input_mode = InputMode::PauseMenu {
                        selected: selected.saturating_sub(1),
                    };
                }
                KeyCode::Down => {
                    self.input_mode = InputMode::PauseMenu {
                        selected: (selected + 1).min(PAUSE_OPTIONS.len() - 1),
                    };
                }
                KeyCode::Enter => self.resolve_pause(PAUSE_OPTIONS[selected].0),
                KeyCode::Esc => self.resolve_pause(PauseDecision::Resume),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
        }
    }

    pub fn submit_guess(&mut self) {
        let text = self.input.take();

        match self.session.submit(&text) {
            Ok(Feedback::Evaluated(evaluation)) => {
                if !evaluation.is_fully_correct() && self.session.mode() == Mode::Rush {
                    let greens = evaluation.correct_count();
                    if greens > 0 {
                        self.add_message(
                            &format!("{text}: {greens} in the right spot"),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Ok(Feedback::Round(result)) => self.report_round(&result),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }

        self.check_complete();
    }

    fn report_round(&mut self, result: &RoundResult) {
        let solutions = word_list(&result.solutions);
        if result.correct {
            self.add_message(
                &format!("✔ {} → also {solutions}", result.target),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("✘ {} → {solutions}", result.target),
                MessageStyle::Error,
            );
        }
    }

    pub fn open_pause_menu(&mut self) {
        if self.session.pause().is_ok() {
            self.input_mode = InputMode::PauseMenu { selected: 0 };
        }
    }

    pub fn resolve_pause(&mut self, decision: PauseDecision) {
        let rounds_before = self.anagram_rounds();

        if let Err(e) = self.session.resolve_pause(decision) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }

        match decision {
            PauseDecision::Resume => self.input_mode = InputMode::Playing,
            PauseDecision::Reveal => {
                self.input_mode = InputMode::Playing;
                if self.anagram_rounds() > rounds_before
                    && let Session::Anagram(game) = &self.session
                    && let Some(result) = game.last_round().cloned()
                {
                    self.report_round(&result);
                }
            }
            PauseDecision::Quit => {
                self.input.clear();
                self.input_mode = InputMode::GameOver;
                self.add_message("Game abandoned.", MessageStyle::Info);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
        }

        self.check_complete();
    }

    fn anagram_rounds(&self) -> usize {
        match &self.session {
            Session::Anagram(game) => game.rounds().len(),
            _ => 0,
        }
    }

    /// Advance the rush clock
    pub fn tick(&mut self, elapsed: Duration) {
        if self.input_mode != InputMode::Playing {
            return;
        }

        match self.session.update(elapsed) {
            Some(SwapOutcome::Replaced) => {
                self.add_message("⏰ Time's up! The word has changed.", MessageStyle::Info);
            }
            Some(SwapOutcome::Skipped | SwapOutcome::Kept) => {
                self.add_message("⏰ Time's up!", MessageStyle::Info);
            }
            None => {}
        }
    }

    fn scroll(&mut self, up: bool) {
        if let Session::Rush(game) = &mut self.session {
            if up {
                game.scroll_up();
            } else {
                game.scroll_down();
            }
        }
    }

    fn check_complete(&mut self) {
        if self.input_mode == InputMode::GameOver {
            return;
        }
        if let Phase::Complete(outcome) = self.session.phase() {
            self.finish(outcome);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.input_mode = InputMode::GameOver;
        self.stats.total_games += 1;

        match outcome {
            Outcome::Won { guesses } => {
                self.stats.games_won += 1;
                let bucket = guesses.min(self.stats.guess_distribution.len() - 1);
                self.stats.guess_distribution[bucket] += 1;

                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "😅 PHEW! Got it in five! 😅",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            Outcome::Finished { correct } => {
                self.stats.anagrams_found += correct;
                if correct > 0 {
                    self.stats.games_won += 1;
                }
                self.add_message(
                    &format!("🏁 {correct} of {} anagrams found", self.anagram_rounds()),
                    MessageStyle::Success,
                );
            }
            Outcome::Lost | Outcome::Revealed => {
                let target = self
                    .session
                    .target()
                    .map(|w| w.to_string())
                    .unwrap_or_default();
                self.add_message(&format!("The word was {target}"), MessageStyle::Error);
            }
        }

        self.word_code = self.session.word_code();
        if let Some(code) = &self.word_code {
            let text = format!("Word code: {code}");
            self.add_message(&text, MessageStyle::Info);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
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

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.stats.total_games == 0 {
            return 0.0;
        }
        self.stats.games_won as f64 / self.stats.total_games as f64 * 100.0
    }
}

fn welcome_text(session: &Session) -> String {
    match session {
        Session::Classic(game) => format!(
            "Welcome! Guess the five-letter word in {} tries.",
            game.max_guesses()
        ),
        Session::Rush(game) => format!(
            "Welcome! The word changes every {} seconds, keeping your greens.",
            game.timer().reload_seconds()
        ),
        Session::Anagram(_) => "Welcome! Rearrange each word into a different word.".to_string(),
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    if app.session.phase().can_start() {
        app.new_game();
    }
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(TICK_RATE.saturating_sub(last_tick.elapsed()))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        let now = Instant::now();
        app.tick(now - last_tick);
        last_tick = now;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
