//! Core domain types for the word engine
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! Words, guess evaluation and positional patterns are pure and deterministic.

mod evaluation;
mod pattern;
mod word;

pub use evaluation::{Evaluation, LetterStatus, ParseEvaluationError, evaluate};
pub use pattern::{ParsePatternError, WordPattern};
pub use word::{WORD_LENGTH, Word, WordError};
