//! Per-letter knowledge shown beside the classic board
//!
//! A letter is ruled out only when some guess marked it `Absent` and no guess
//! has shown it `Present` or `Correct`. A duplicate letter marked `Absent`
//! beside a placed copy therefore stays available.

use crate::core::{Evaluation, LetterStatus, Word};

const ALPHABET_LEN: usize = 26;

/// Best known status of every letter across a game's guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphabetTracker {
    best: [LetterStatus; ALPHABET_LEN],
    seen_absent: [bool; ALPHABET_LEN],
}

impl Default for AlphabetTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphabetTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            best: [LetterStatus::Unevaluated; ALPHABET_LEN],
            seen_absent: [false; ALPHABET_LEN],
        }
    }

    /// Fold one guess's feedback into the tracker
    pub fn record(&mut self, guess: &Word, evaluation: &Evaluation) {
        for (&letter, status) in guess.letters().iter().zip(evaluation.iter()) {
            let index = usize::from(letter - b'A');
            match status {
                LetterStatus::Absent => self.seen_absent[index] = true,
                LetterStatus::Present | LetterStatus::Correct => {
                    if status > self.best[index] {
                        self.best[index] = status;
                    }
                }
                LetterStatus::Unevaluated => {}
            }
        }
    }

    /// Status to display for an uppercase letter
    ///
    /// Non-letters report `Unevaluated`.
    #[must_use]
    pub fn status(&self, letter: u8) -> LetterStatus {
        let Some(index) = letter_index(letter) else {
            return LetterStatus::Unevaluated;
        };

        match self.best[index] {
            LetterStatus::Unevaluated if self.seen_absent[index] => LetterStatus::Absent,
            best => best,
        }
    }

    #[must_use]
    pub fn is_ruled_out(&self, letter: u8) -> bool {
        self.status(letter) == LetterStatus::Absent
    }

    /// Letters still worth trying, in alphabetical order
    pub fn remaining(&self) -> impl Iterator<Item = u8> + '_ {
        (b'A'..=b'Z').filter(|&letter| !self.is_ruled_out(letter))
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

fn letter_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| usize::from(letter - b'A'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn track(pairs: &[(&str, &str)]) -> AlphabetTracker {
        let mut tracker = AlphabetTracker::new();
        for (guess, target) in pairs {
            let guess = Word::new(guess).unwrap();
            let target = Word::new(target).unwrap();
            tracker.record(&guess, &evaluate(&guess, &target));
        }
        tracker
    }

    #[test]
    fn absent_letters_ruled_out() {
        let tracker = track(&[("CRANE", "STONE")]);

        assert!(tracker.is_ruled_out(b'C'));
        assert!(tracker.is_ruled_out(b'R'));
        assert!(tracker.is_ruled_out(b'A'));
        assert!(!tracker.is_ruled_out(b'N'));
        assert!(!tracker.is_ruled_out(b'E'));
        assert!(!tracker.is_ruled_out(b'Z'));
    }

    #[test]
    fn duplicate_absent_does_not_rule_out_placed_letter() {
        // EERIE has three Es against THEME's two, so one is Absent
        let tracker = track(&[("EERIE", "THEME")]);

        assert_eq!(tracker.status(b'E'), LetterStatus::Correct);
        assert!(!tracker.is_ruled_out(b'E'));
    }

    #[test]
    fn absent_after_confirmed_keeps_letter() {
        let tracker = track(&[("ALLOT", "BRAVE")]);
        assert!(tracker.is_ruled_out(b'L'));

        // LULLS spends both Ls of HELLO, so its first L comes back Absent
        let tracker = track(&[("BELLS", "HELLO"), ("LULLS", "HELLO")]);
        assert!(!tracker.is_ruled_out(b'L'));
        assert_eq!(tracker.status(b'L'), LetterStatus::Correct);
    }

    #[test]
    fn status_prefers_correct_over_present() {
        let tracker = track(&[("STONE", "NOTES"), ("NOTES", "NOTES")]);
        assert_eq!(tracker.status(b'N'), LetterStatus::Correct);
    }

    #[test]
    fn remaining_lists_untried_and_found_letters() {
        let tracker = track(&[("CRANE", "STONE")]);
        let remaining: String = tracker.remaining().map(char::from).collect();

        assert!(!remaining.contains('C'));
        assert!(remaining.contains('N'));
        assert_eq!(remaining.len(), 23);
    }

    #[test]
    fn reset_clears_everything() {
        let mut tracker = track(&[("CRANE", "STONE")]);
        tracker.reset();
        assert_eq!(tracker, AlphabetTracker::new());
    }

    #[test]
    fn non_letters_are_unevaluated() {
        let tracker = track(&[("CRANE", "STONE")]);
        assert_eq!(tracker.status(b'1'), LetterStatus::Unevaluated);
    }
}
