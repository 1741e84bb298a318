//! Display functions for command results

use super::formatters::{colored_guess, outcome_headline, round_marks, word_list};
use crate::commands::{DictionaryInfo, WordCheck};
use crate::core::Word;
use crate::game::{Outcome, RoundResult, Session};
use colored::Colorize;

/// Print the guess history of a classic or rush game
pub fn print_guesses(session: &Session) {
    for (i, guess) in session.guesses().iter().enumerate() {
        println!(
            "  {} {}  {}",
            format!("{:>3}.", i + 1).bright_black(),
            colored_guess(guess),
            guess.evaluation.to_emoji()
        );
    }
}

/// Print the result of one anagram round
pub fn print_round_result(result: &RoundResult, rounds: &[RoundResult], total: usize) {
    let verdict = if result.correct {
        "✔ Correct!".green().bold()
    } else {
        "✘ Missed".red().bold()
    };

    println!("\n  {verdict}  {}", round_marks(rounds, total));
    println!(
        "  {} → {}",
        result.target.as_str().bright_white().bold(),
        word_list(&result.solutions).cyan()
    );
}

/// Print the end-of-game banner
pub fn print_outcome(session: &mut Session, outcome: Outcome) {
    println!("\n{}", "═".repeat(60).bright_cyan());

    let headline = outcome_headline(outcome);
    let headline = match outcome {
        Outcome::Won { .. } => headline.bright_green().bold(),
        Outcome::Finished { correct } if correct > 0 => headline.bright_green().bold(),
        _ => headline.bright_yellow().bold(),
    };
    println!("  {headline}");

    if let Some(target) = session.target()
        && !matches!(outcome, Outcome::Finished { .. })
    {
        println!("  The word was {}", target.as_str().bright_white().bold());
    }

    if !session.guesses().is_empty() {
        println!();
        print_guesses(session);
    }

    if let Some(code) = session.word_code() {
        println!("\n  Word code: {}", code.bright_cyan().bold());
    }

    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print a freshly generated word code
pub fn print_word_code(word: &Word, code: &str) {
    println!(
        "{} {}",
        word.as_str().bright_white().bold(),
        code.bright_cyan().bold()
    );
}

/// Print dictionary membership for each checked word
pub fn print_word_checks(checks: &[WordCheck]) {
    for check in checks {
        let status = match check {
            WordCheck::Found(_) => "in dictionary".green(),
            WordCheck::Missing(_) => "not in dictionary".yellow(),
            WordCheck::Invalid { .. } => "invalid".red(),
        };
        let detail = match check {
            WordCheck::Invalid { reason, .. } => format!(" ({reason})"),
            WordCheck::Found(_) | WordCheck::Missing(_) => String::new(),
        };
        println!("  {:<8} {status}{detail}", check.text());
    }
}

/// Print a dictionary summary
pub fn print_dictionary_info(info: &DictionaryInfo) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {}", "DICTIONARY".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    if !info.available {
        println!("  {}", "Unavailable".red().bold());
        return;
    }

    println!("  Words:          {}", info.words);
    println!("  First / last:   {} / {}", info.first, info.last);
    println!("  Anagram list:   {}", info.anagram_targets);
    println!("  Blob size:      {} bytes", info.blob_bytes);
}
