//! Positional word patterns
//!
//! A pattern pins some positions to a letter and leaves the rest free. Patterns
//! are built from feedback (only `Correct` letters stay pinned) and used to
//! filter dictionary candidates.

use super::evaluation::{Evaluation, LetterStatus};
use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Positional constraint: a letter or a wildcard per slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WordPattern([Option<u8>; WORD_LENGTH]);

impl WordPattern {
    /// Character used for a free slot in text form
    pub const WILDCARD: char = '*';

    /// Matches every word
    pub const ANY: Self = Self([None; WORD_LENGTH]);

    /// Build a pattern from explicit slots
    ///
    /// Pinned letters are expected to be uppercase ASCII.
    #[must_use]
    pub const fn new(slots: [Option<u8>; WORD_LENGTH]) -> Self {
        Self(slots)
    }

    /// Build a pattern that keeps `word`'s letters where `evaluation` is `Correct`
    ///
    /// # Examples
    /// ```
    /// use gimme_five::core::{evaluate, Word, WordPattern};
    ///
    /// let guess = Word::new("CRANE").unwrap();
    /// let target = Word::new("SLATE").unwrap();
    /// let pattern = WordPattern::from_feedback(&guess, &evaluate(&guess, &target));
    ///
    /// assert_eq!(pattern.to_string(), "**A*E");
    /// assert!(pattern.matches(&target));
    /// ```
    #[must_use]
    pub fn from_feedback(word: &Word, evaluation: &Evaluation) -> Self {
        let mut pattern = Self::ANY;

        for (index, slot) in pattern.0.iter_mut().enumerate() {
            if evaluation.status_at(index) == LetterStatus::Correct {
                *slot = Some(word.letter_at(index));
            }
        }

        pattern
    }

    /// True iff every pinned position equals the word's letter there
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.0
            .iter()
            .zip(word.letters())
            .all(|(slot, &letter)| slot.is_none_or(|pinned| pinned == letter))
    }

    /// True iff no position is pinned
    #[must_use]
    pub fn is_all_wildcards(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Number of pinned positions
    #[must_use]
    pub fn concrete_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }
}

/// Error for unparsable pattern strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePatternError(pub String);

impl fmt::Display for ParsePatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid word pattern: {}", self.0)
    }
}

impl std::error::Error for ParsePatternError {}

impl FromStr for WordPattern {
    type Err = ParsePatternError;

    /// Parse "**A*E" style patterns; letters are case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != WORD_LENGTH {
            return Err(ParsePatternError(s.to_string()));
        }

        let mut slots = [None; WORD_LENGTH];
        for (slot, &byte) in slots.iter_mut().zip(bytes) {
            *slot = match byte {
                b'*' => None,
                letter if letter.is_ascii_alphabetic() => Some(letter.to_ascii_uppercase()),
                _ => return Err(ParsePatternError(s.to_string())),
            };
        }

        Ok(Self(slots))
    }
}

impl fmt::Display for WordPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in self.0 {
            let ch = slot.map_or(Self::WILDCARD, char::from);
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn p(text: &str) -> WordPattern {
        text.parse().unwrap()
    }

    #[test]
    fn default_pattern_is_all_wildcards() {
        assert!(WordPattern::default().is_all_wildcards());
        assert_eq!(WordPattern::ANY.to_string(), "*****");
        assert!(WordPattern::ANY.matches(&w("ZEBRA")));
    }

    #[test]
    fn from_feedback_keeps_only_correct_letters() {
        // R and E are present/correct mixes; only exact hits survive
        let guess = w("CRANE");
        let pattern = WordPattern::from_feedback(&guess, &evaluate(&guess, &w("TRACE")));
        assert_eq!(pattern.to_string(), "*RA*E");
        assert_eq!(pattern.concrete_count(), 3);
    }

    #[test]
    fn from_feedback_with_no_correct_letters_is_all_wildcards() {
        let guess = w("SPEED");
        let pattern = WordPattern::from_feedback(&guess, &evaluate(&guess, &w("ERASE")));
        assert!(pattern.is_all_wildcards());
    }

    #[test]
    fn word_matches_pattern_from_its_own_solved_feedback() {
        for text in ["CRANE", "ABBOT", "LOOPS", "QUEUE"] {
            let word = w(text);
            let pattern = WordPattern::from_feedback(&word, &evaluate(&word, &word));
            assert_eq!(pattern.to_string(), text);
            assert!(pattern.matches(&word));
        }
    }

    #[test]
    fn guess_matches_pattern_from_its_own_feedback() {
        // Unmatched positions become wildcards, so the guess always fits
        let pairs = [("CRANE", "TRACE"), ("ROBOT", "FLOOR"), ("SPEED", "ERASE")];
        for (guess, target) in pairs {
            let guess = w(guess);
            let pattern = WordPattern::from_feedback(&guess, &evaluate(&guess, &w(target)));
            assert!(pattern.matches(&guess));
            assert!(pattern.matches(&w(target)));
        }
    }

    #[test]
    fn matches_checks_every_pinned_slot() {
        let pattern = p("S***E");
        assert!(pattern.matches(&w("STONE")));
        assert!(pattern.matches(&w("SLATE")));
        assert!(!pattern.matches(&w("STONY")));
        assert!(!pattern.matches(&w("ABIDE")));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!("S**E".parse::<WordPattern>().is_err());
        assert!("S**1E".parse::<WordPattern>().is_err());
        assert!("S***?".parse::<WordPattern>().is_err());
        assert_eq!(p("s***e"), p("S***E"));
    }
}
