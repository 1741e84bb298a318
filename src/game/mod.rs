//! Game mode state machines
//!
//! Every mode follows the same shape: `Idle` until started, `Active` while
//! guesses are accepted, `Paused` behind the pause menu and `Complete` once the
//! game has an outcome. Modes are a closed set wrapped by [`Session`].

pub mod alphabet;
pub mod anagram;
pub mod classic;
mod error;
pub mod input;
pub mod rush;
pub mod session;
pub mod timer;

pub use alphabet::AlphabetTracker;
pub use anagram::{AnagramGame, RoundResult};
pub use classic::ClassicGame;
pub use error::GameError;
pub use input::GuessInput;
pub use rush::{RushGame, SwapOutcome};
pub use session::{Feedback, Session};
pub use timer::RushTimer;

use crate::config::GameConfig;
use crate::core::{Evaluation, Word};
use crate::dictionary::{Dictionary, DictionaryError};
use crate::wordlists::AnagramList;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::str::FromStr;

/// The three game modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Classic,
    Rush,
    Anagram,
}

impl Mode {
    /// Numeric id, as written into word codes
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Classic => 0,
            Self::Rush => 1,
            Self::Anagram => 2,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Rush => "rush",
            Self::Anagram => "anagram",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" | "original" => Ok(Self::Classic),
            "rush" => Ok(Self::Rush),
            "anagram" | "anagrams" => Ok(Self::Anagram),
            other => Err(format!("unknown mode '{other}' (classic, rush, anagram)")),
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Target guessed after this many guesses
    Won { guesses: usize },
    /// Guess budget exhausted
    Lost,
    /// Player gave up and asked for the answer
    Revealed,
    /// All anagram rounds played
    Finished { correct: usize },
}

/// Lifecycle position of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active,
    Paused,
    Complete(Outcome),
}

impl Phase {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// True when `start` may be called
    #[must_use]
    pub const fn can_start(self) -> bool {
        matches!(self, Self::Idle | Self::Complete(_))
    }
}

/// Choices offered by the pause menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseDecision {
    Resume,
    Reveal,
    Quit,
}

/// A submitted guess and its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    pub word: Word,
    pub evaluation: Evaluation,
}

/// Shared read-only resources handed to every game
#[derive(Debug, Clone, Copy)]
pub struct GameContext<'a> {
    pub dictionary: &'a Dictionary,
    pub anagrams: &'a AnagramList,
    pub config: GameConfig,
}

impl<'a> GameContext<'a> {
    #[must_use]
    pub const fn new(
        dictionary: &'a Dictionary,
        anagrams: &'a AnagramList,
        config: GameConfig,
    ) -> Self {
        Self {
            dictionary,
            anagrams,
            config,
        }
    }

    /// RNG for one game, seeded from the config when a seed is set
    fn rng(&self) -> StdRng {
        self.config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Fail unless the dictionary loaded
    fn require_dictionary(&self) -> Result<(), GameError> {
        if self.dictionary.is_available() {
            Ok(())
        } else {
            Err(GameError::Dictionary(DictionaryError::Unavailable))
        }
    }

    /// Turn typed text into a dictionary word
    ///
    /// Neither failure consumes a guess.
    fn validate_guess(&self, text: &str) -> Result<Word, GameError> {
        let word = Word::new(text.trim())?;
        if !self.dictionary.contains(&word) {
            return Err(GameError::NotInDictionary(word));
        }
        Ok(word)
    }
}

fn require_phase(actual: Phase, expected: Phase, action: &'static str) -> Result<(), GameError> {
    if actual == expected {
        Ok(())
    } else {
        Err(GameError::WrongPhase {
            action,
            phase: actual,
        })
    }
}
