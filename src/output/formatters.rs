//! Formatting utilities for terminal output

use crate::core::LetterStatus;
use crate::game::{Guess, Outcome, RoundResult};
use colored::{ColoredString, Colorize};

/// Color one letter tile by its status
#[must_use]
pub fn colored_letter(letter: u8, status: LetterStatus) -> ColoredString {
    let tile = format!(" {} ", char::from(letter));
    match status {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
        LetterStatus::Unevaluated => tile.normal(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn colored_guess(guess: &Guess) -> String {
    guess
        .word
        .letters()
        .iter()
        .zip(guess.evaluation.iter())
        .map(|(&letter, status)| colored_letter(letter, status).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }

    let filled = (value.min(max) as usize * width) / max as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One mark per anagram round: ✔ correct, ✘ missed, · still to play
#[must_use]
pub fn round_marks(rounds: &[RoundResult], total: usize) -> String {
    let played = rounds.iter().map(|round| if round.correct { '✔' } else { '✘' });
    let pending = std::iter::repeat_n('·', total.saturating_sub(rounds.len()));
    played.chain(pending).collect()
}

/// Short headline for a finished game
#[must_use]
pub fn outcome_headline(outcome: Outcome) -> String {
    match outcome {
        Outcome::Won { guesses: 1 } => "🎯 Solved in one guess!".to_string(),
        Outcome::Won { guesses } => format!("🎉 Solved in {guesses} guesses!"),
        Outcome::Lost => "❌ Out of guesses".to_string(),
        Outcome::Revealed => "🏳 Answer revealed".to_string(),
        Outcome::Finished { correct } => format!("🏁 {correct} anagrams found"),
    }
}

/// Comma-separated word list, or a dash when empty
#[must_use]
pub fn word_list<W: std::fmt::Display>(words: &[W]) -> String {
    if words.is_empty() {
        return "-".to_string();
    }
    words
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
