use super::{Mode, Phase};
use crate::core::{Word, WordError};
use crate::dictionary::DictionaryError;
use std::fmt;

/// Error type for game operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Typed text is not a well-formed word
    InvalidWord(WordError),
    /// Well-formed word missing from the dictionary
    NotInDictionary(Word),
    /// Operation not allowed in the current phase
    WrongPhase { action: &'static str, phase: Phase },
    /// Dictionary failure while choosing a target
    Dictionary(DictionaryError),
    /// Operation only some modes support
    UnsupportedMode { action: &'static str, mode: Mode },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "{e}"),
            Self::NotInDictionary(word) => write!(f, "{word} is not in the dictionary"),
            Self::WrongPhase { action, phase } => {
                write!(f, "Cannot {action} while the game is {phase:?}")
            }
            Self::Dictionary(e) => write!(f, "{e}"),
            Self::UnsupportedMode { action, mode } => {
                write!(f, "Cannot {action} in {mode} mode")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            Self::Dictionary(e) => Some(e),
            Self::NotInDictionary(_) | Self::WrongPhase { .. } | Self::UnsupportedMode { .. } => {
                None
            }
        }
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

impl From<DictionaryError> for GameError {
    fn from(e: DictionaryError) -> Self {
        Self::Dictionary(e)
    }
}
