//! Gimme Five - CLI
//!
//! Five-letter word game with classic, rush and anagram modes, plus word code
//! and dictionary tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gimme_five::{
    commands::{check_words, decode_code, describe, encode_word, pack_text_file, run_simple},
    config::GameConfig,
    core::Word,
    dictionary::Dictionary,
    game::{GameContext, Mode, Session},
    output::{formatters::word_list, print_dictionary_info, print_word_checks, print_word_code},
    wordlists::AnagramList,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gimme_five",
    about = "Five-letter word game with classic, rush and anagram modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game mode: classic (default), rush, anagram
    #[arg(short, long, global = true, default_value = "classic")]
    mode: Mode,

    /// Dictionary file: .txt with one word per line, anything else as a packed blob
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Seed the random number generator for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Rush countdown in seconds (at least 1)
    #[arg(
        short,
        long,
        global = true,
        default_value = "30",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    timer: u32,

    /// Rounds per anagram game (at least 1)
    #[arg(
        short,
        long,
        global = true,
        default_value = "5",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    rounds: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Start a classic game on the word behind this code
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Simple CLI mode (line-based game without TUI)
    Simple {
        /// Start a classic game on the word behind this code
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Encode and decode word codes
    Code {
        #[command(subcommand)]
        action: CodeAction,
    },

    /// Inspect and build dictionaries
    Dict {
        #[command(subcommand)]
        action: DictAction,
    },
}

#[derive(Subcommand)]
enum CodeAction {
    /// Turn a dictionary word into a shareable code
    Encode {
        word: String,

        /// Key index 0-15 (random if omitted)
        #[arg(short, long)]
        key: Option<u8>,
    },

    /// Reveal the word behind a code
    Decode { code: String },
}

#[derive(Subcommand)]
enum DictAction {
    /// Check whether words are in the dictionary
    Check {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List dictionary anagrams of a word
    Anagrams { word: String },

    /// Pack a text word list into the binary dictionary format
    Pack { input: PathBuf, output: PathBuf },

    /// Show dictionary statistics
    Info,
}

fn load_dictionary(path: Option<&PathBuf>) -> Dictionary {
    match path {
        Some(path) => Dictionary::load_or_unavailable(Dictionary::from_path(path)),
        None => Dictionary::embedded(),
    }
}

fn game_config(cli: &Cli) -> GameConfig {
    GameConfig {
        rush_timer_seconds: cli.timer,
        anagram_rounds: cli.rounds,
        seed: cli.seed,
        ..GameConfig::default()
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(cli.dictionary.as_ref());
    let anagrams = AnagramList::embedded();
    let config = game_config(&cli);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { code: None });

    match command {
        Commands::Play { code } => {
            let ctx = GameContext::new(&dictionary, &anagrams, config);
            run_play_command(cli.mode, ctx, code.as_deref())
        }
        Commands::Simple { code } => {
            let ctx = GameContext::new(&dictionary, &anagrams, config);
            run_simple_command(cli.mode, ctx, code.as_deref())
        }
        Commands::Code { action } => run_code_command(action, &dictionary, cli.seed),
        Commands::Dict { action } => run_dict_command(action, &dictionary, &anagrams),
    }
}

/// Build a started session, optionally on the word behind a code
fn start_session<'a>(mode: Mode, ctx: GameContext<'a>, code: Option<&str>) -> Result<Session<'a>> {
    let mut session = Session::new(mode, ctx);

    match code {
        Some(code) => {
            let target = decode_code(code, ctx.dictionary)
                .with_context(|| format!("cannot play code '{code}'"))?;
            session.start_with_target(target)?;
        }
        None => session.start()?,
    }

    Ok(session)
}

fn run_play_command(mode: Mode, ctx: GameContext, code: Option<&str>) -> Result<()> {
    use gimme_five::interactive::{App, run_tui};

    let session = start_session(mode, ctx, code)?;
    run_tui(App::new(session))
}

fn run_simple_command(mode: Mode, ctx: GameContext, code: Option<&str>) -> Result<()> {
    let mut session = start_session(mode, ctx, code)?;
    run_simple(&mut session)
}

fn run_code_command(action: CodeAction, dictionary: &Dictionary, seed: Option<u64>) -> Result<()> {
    match action {
        CodeAction::Encode { word, key } => {
            let mut rng = make_rng(seed);
            let (word, code) = encode_word(&word, key, dictionary, &mut rng)?;
            print_word_code(&word, &code);
        }
        CodeAction::Decode { code } => {
            let word = decode_code(&code, dictionary)?;
            println!("{word}");
        }
    }
    Ok(())
}

fn run_dict_command(
    action: DictAction,
    dictionary: &Dictionary,
    anagrams: &AnagramList,
) -> Result<()> {
    match action {
        DictAction::Check { words } => print_word_checks(&check_words(dictionary, &words)),
        DictAction::Anagrams { word } => {
            let word = Word::new(&word)?;
            let found = dictionary.anagrams_of(&word);
            if found.is_empty() {
                println!("No anagrams of {word} in the dictionary");
            } else {
                println!("{word}: {}", word_list(&found));
            }
        }
        DictAction::Pack { input, output } => {
            let count = pack_text_file(&input, &output)?;
            println!("Packed {count} words into {}", output.display());
        }
        DictAction::Info => print_dictionary_info(&describe(dictionary, anagrams)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let cli = Cli::try_parse_from(["gimme_five"]).unwrap();
        let config = game_config(&cli);
        assert_eq!(config.rush_timer_seconds, 30);
        assert_eq!(config.anagram_rounds, 5);
        assert_eq!(cli.mode, Mode::Classic);
    }

    #[test]
    fn timer_and_rounds_overrides() {
        let cli =
            Cli::try_parse_from(["gimme_five", "simple", "--timer", "10", "--rounds", "3"]).unwrap();
        let config = game_config(&cli);
        assert_eq!(config.rush_timer_seconds, 10);
        assert_eq!(config.anagram_rounds, 3);
    }

    #[test]
    fn zero_timer_rejected() {
        assert!(Cli::try_parse_from(["gimme_five", "--timer", "0"]).is_err());
    }

    #[test]
    fn zero_rounds_rejected() {
        assert!(Cli::try_parse_from(["gimme_five", "--rounds", "0"]).is_err());
    }

    #[test]
    fn unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["gimme_five", "--mode", "blitz"]).is_err());
    }
}
