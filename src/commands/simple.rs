//! Simple interactive CLI mode
//!
//! Text-based game without TUI. Rush time is measured between prompts.

use crate::game::{Feedback, PauseDecision, Phase, Session, SwapOutcome};
use crate::output::formatters::{colored_guess, create_progress_bar, round_marks};
use crate::output::{print_outcome, print_round_result};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// What the player asked for at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Guess(String),
    Reveal,
    NewGame,
    Help,
    Quit,
}

fn parse_command(input: &str) -> Command {
    match input.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "reveal" | "give up" | "?" => Command::Reveal,
        "new" | "n" => Command::NewGame,
        "help" | "h" => Command::Help,
        _ => Command::Guess(input.trim().to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// `session` must already be started.
///
/// # Errors
///
/// Returns an error if reading input or starting a new game fails.
pub fn run_simple(session: &mut Session) -> Result<()> {
    print_banner(session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut last_tick = Instant::now();

    loop {
        if let Phase::Complete(outcome) = session.phase() {
            print_outcome(session, outcome);
            if !ask_play_again(&mut lines)? {
                break;
            }
            session.start()?;
            last_tick = Instant::now();
            println!("\n🔄 New game started!\n");
        }

        print_status(session);
        prompt("Guess")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        // Time spent at the prompt counts against the rush clock
        let now = Instant::now();
        if let Some(swap) = session.update(now - last_tick) {
            report_swap(swap);
        }
        last_tick = now;

        match parse_command(&line) {
            Command::Quit => {
                session.pause()?;
                session.resolve_pause(PauseDecision::Quit)?;
                break;
            }
            Command::Reveal => {
                session.pause()?;
                session.resolve_pause(PauseDecision::Reveal)?;
                print_last_round(session);
            }
            Command::NewGame => {
                if session.phase().is_active() {
                    session.pause()?;
                    session.resolve_pause(PauseDecision::Quit)?;
                }
                session.start()?;
                last_tick = Instant::now();
                println!("\n🔄 New game started!\n");
            }
            Command::Help => print_help(session),
            Command::Guess(text) => match session.submit(&text) {
                Ok(Feedback::Evaluated(_)) => {
                    if let Some(guess) = session.guesses().last() {
                        println!("       {}\n", colored_guess(guess));
                    }
                }
                Ok(Feedback::Round(_)) => print_last_round(session),
                Err(e) => println!("❌ {e}\n"),
            },
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn print_last_round(session: &Session) {
    if let Session::Anagram(game) = session
        && let Some(result) = game.last_round()
    {
        print_round_result(result, game.rounds(), game.total_rounds());
        println!();
    }
}

fn print_banner(session: &Session) {
    let mode = session.mode();
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Gimme Five - {:<8}                      ║", mode.name());
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help(session);
}

fn print_help(session: &Session) {
    match session {
        Session::Classic(game) => {
            println!("Guess the five-letter word in {} tries.", game.max_guesses());
        }
        Session::Rush(game) => {
            println!("Guess the word before you run out of guesses.");
            println!(
                "Every {} seconds the word changes, keeping your green letters.",
                game.timer().reload_seconds()
            );
            println!("The clock holds while your last guess has four greens.");
        }
        Session::Anagram(_) => {
            println!("Rearrange each word into a different word with the same letters.");
            println!("Typing the word itself does not count!");
        }
    }
    println!("Commands: 'reveal' to give up, 'new' for a new game, 'quit' to exit\n");
}

fn print_status(session: &Session) {
    let line = match session {
        Session::Classic(game) => {
            let remaining: String = game.alphabet().remaining().map(char::from).collect();
            format!(
                "{} guesses left | letters: {}",
                game.guesses_remaining(),
                remaining.bright_white()
            )
        }
        Session::Rush(game) => {
            let timer = game.timer();
            let clock = if game.is_frozen() {
                "frozen".bright_cyan().to_string()
            } else {
                format!("{}s", timer.seconds_left())
            };
            format!(
                "[{}] {clock} | {} guesses left",
                create_progress_bar(timer.seconds_left(), timer.reload_seconds(), 15),
                game.guesses_remaining()
            )
        }
        Session::Anagram(game) => {
            let target = game.target().map(|w| w.to_string()).unwrap_or_default();
            format!(
                "Round {}/{} {} | unscramble {}",
                game.rounds().len() + 1,
                game.total_rounds(),
                round_marks(game.rounds(), game.total_rounds()),
                target.bright_yellow().bold()
            )
        }
    };

    println!("{}", "────────────────────────────────────────────────────────────".bright_black());
    println!("{line}");
}

fn report_swap(swap: SwapOutcome) {
    match swap {
        SwapOutcome::Replaced => println!("⏰ Time's up! The word has changed.\n"),
        SwapOutcome::Skipped | SwapOutcome::Kept => println!("⏰ Time's up!\n"),
    }
}

fn ask_play_again<B: BufRead>(lines: &mut io::Lines<B>) -> Result<bool> {
    prompt("Play again? (yes/no)")?;
    let answer = lines.next().transpose()?.unwrap_or_default();
    Ok(matches!(answer.trim().to_lowercase().as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn prompt(text: &str) -> Result<()> {
    print!("{text}: ");
    io::stdout().flush()?;
    Ok(())
}
