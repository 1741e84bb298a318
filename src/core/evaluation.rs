//! Guess evaluation against a target word
//!
//! Each guessed letter is classified as correct, present elsewhere, or absent.
//! Duplicate letters are accounted for: a target letter can back at most one
//! non-absent status, and exact matches claim their letter first.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterStatus {
    #[default]
    Unevaluated,
    /// Not in the target, or every copy is already accounted for
    Absent,
    /// In the target at a different position
    Present,
    /// Right letter in the right position
    Correct,
}

impl LetterStatus {
    /// Square emoji used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Unevaluated => '⬛',
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Per-position feedback for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Evaluation([LetterStatus; WORD_LENGTH]);

impl Evaluation {
    /// All positions correct
    pub const SOLVED: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Status at a position
    ///
    /// # Panics
    /// Panics if `index >= 5`.
    #[inline]
    #[must_use]
    pub const fn status_at(&self, index: usize) -> LetterStatus {
        self.0[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.0.iter().copied()
    }

    /// True iff every position is `Correct`
    #[must_use]
    pub fn is_fully_correct(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Number of positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.count(LetterStatus::Correct)
    }

    /// Render as a row of emoji squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|status| status.emoji()).collect()
    }
}

/// Evaluate `guess` against `target`
///
/// Two passes over a per-letter counter copy of the target: exact matches
/// first, then left-to-right present/absent classification from whatever
/// letters remain.
///
/// # Examples
/// ```
/// use gimme_five::core::{evaluate, LetterStatus, Word};
///
/// let guess = Word::new("SPEED").unwrap();
/// let target = Word::new("ERASE").unwrap();
/// let evaluation = evaluate(&guess, &target);
///
/// assert_eq!(evaluation.status_at(1), LetterStatus::Absent);
/// assert_eq!(evaluation.count(LetterStatus::Present), 3);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Evaluation {
    let mut statuses = [LetterStatus::Unevaluated; WORD_LENGTH];
    let mut remaining = target.letter_counts();

    let guess_letters = guess.letters();
    let target_letters = target.letters();

    // First pass: exact matches claim their letter
    #[allow(clippy::needless_range_loop)]
    for index in 0..WORD_LENGTH {
        if guess_letters[index] == target_letters[index] {
            statuses[index] = LetterStatus::Correct;
            remaining[letter_slot(guess_letters[index])] -= 1;
        }
    }

    // Second pass: present-elsewhere from the remaining pool
    #[allow(clippy::needless_range_loop)]
    for index in 0..WORD_LENGTH {
        if statuses[index] == LetterStatus::Correct {
            continue;
        }

        let available = &mut remaining[letter_slot(guess_letters[index])];
        if *available > 0 {
            *available -= 1;
            statuses[index] = LetterStatus::Present;
        } else {
            statuses[index] = LetterStatus::Absent;
        }
    }

    Evaluation(statuses)
}

#[inline]
fn letter_slot(letter: u8) -> usize {
    usize::from(letter - b'A')
}

/// Error for unparsable evaluation strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEvaluationError(pub String);

impl fmt::Display for ParseEvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid evaluation string: {}", self.0)
    }
}

impl std::error::Error for ParseEvaluationError {}

impl FromStr for Evaluation {
    type Err = ParseEvaluationError;

    /// Parse "GY-GY" style feedback
    ///
    /// Accepts 'G'/🟩 for correct, 'Y'/🟨 for present, '-'/'_'/⬜ for absent
    /// and '?'/⬛ for unevaluated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(ParseEvaluationError(s.to_string()));
        }

        let mut statuses = [LetterStatus::Unevaluated; WORD_LENGTH];
        for (status, ch) in statuses.iter_mut().zip(chars) {
            *status = match ch {
                'G' | 'g' | '🟩' => LetterStatus::Correct,
                'Y' | 'y' | '🟨' => LetterStatus::Present,
                '-' | '_' | '⬜' => LetterStatus::Absent,
                '?' | '⬛' => LetterStatus::Unevaluated,
                _ => return Err(ParseEvaluationError(s.to_string())),
            };
        }

        Ok(Self(statuses))
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in self.0 {
            let ch = match status {
                LetterStatus::Unevaluated => '?',
                LetterStatus::Absent => '-',
                LetterStatus::Present => 'Y',
                LetterStatus::Correct => 'G',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn eval(guess: &str, target: &str) -> Evaluation {
        evaluate(&w(guess), &w(target))
    }

    fn feedback(s: &str) -> Evaluation {
        s.parse().unwrap()
    }

    /// Correct + Present for a letter never exceeds its count in the target
    fn assert_letter_budget(guess: &str, target: &str) {
        let guess_word = w(guess);
        let target_word = w(target);
        let evaluation = evaluate(&guess_word, &target_word);
        let target_counts = target_word.letter_counts();

        let mut used = [0u8; 26];
        for (index, status) in evaluation.iter().enumerate() {
            if matches!(status, LetterStatus::Correct | LetterStatus::Present) {
                used[letter_slot(guess_word.letter_at(index))] += 1;
            }
        }

        for slot in 0..26 {
            assert!(
                used[slot] <= target_counts[slot],
                "{guess} vs {target}: letter {} over-reported",
                char::from(b'A' + slot as u8)
            );
        }
    }

    #[test]
    fn all_absent() {
        assert_eq!(eval("ABCDE", "FGHIJ"), feedback("-----"));
    }

    #[test]
    fn identical_words_are_fully_correct() {
        for word in ["CRANE", "SLATE", "AUDIO", "ZZZZZ", "AAAAA", "SPEED"] {
            let evaluation = eval(word, word);
            assert!(evaluation.is_fully_correct(), "{word}");
            assert_eq!(evaluation, Evaluation::SOLVED);
        }
    }

    #[test]
    fn duplicate_letters_limited_by_target_count() {
        // ERASE has two Es, so both guessed Es may be present
        let evaluation = eval("SPEED", "ERASE");
        assert_eq!(evaluation, feedback("Y-YY-"));
        assert_letter_budget("SPEED", "ERASE");
    }

    #[test]
    fn extra_duplicates_marked_absent() {
        // ABIDE has one E and it is taken by the exact match
        assert_eq!(eval("EERIE", "ABIDE"), feedback("---YG"));
        assert_eq!(eval("GEESE", "THEME"), feedback("--G-G"));
        assert_eq!(eval("LLAMA", "HELLO"), feedback("YY---"));
    }

    #[test]
    fn correct_takes_priority_over_present() {
        // Second O is exact, so the first O may only claim the leftover copy
        assert_eq!(eval("ROBOT", "FLOOR"), feedback("YY-G-"));
        // One S of CLASS goes to the exact match, the first guessed S takes the other
        assert_eq!(eval("SASSY", "CLASS"), feedback("YY-G-"));
        assert_eq!(eval("SPOOL", "PROXY"), feedback("-YG--"));
    }

    #[test]
    fn present_claims_leftmost_unmatched_instance() {
        // Target holds two As; both guessed As are present
        assert_eq!(eval("BANAL", "AROMA"), feedback("-Y-Y-"));
    }

    #[test]
    fn letter_budget_holds_for_tricky_pairs() {
        let pairs = [
            ("SPEED", "ERASE"),
            ("EERIE", "ABIDE"),
            ("LLAMA", "HELLO"),
            ("SASSY", "CLASS"),
            ("GEESE", "EERIE"),
            ("ALLEY", "LLAMA"),
            ("MAMMA", "MADAM"),
        ];

        for (guess, target) in pairs {
            assert_letter_budget(guess, target);
        }
    }

    #[test]
    fn count_helpers() {
        let evaluation = feedback("GGY-G");
        assert_eq!(evaluation.correct_count(), 3);
        assert_eq!(evaluation.count(LetterStatus::Present), 1);
        assert_eq!(evaluation.count(LetterStatus::Absent), 1);
        assert!(!evaluation.is_fully_correct());
    }

    #[test]
    fn unevaluated_is_not_correct() {
        let empty = Evaluation::default();
        assert!(!empty.is_fully_correct());
        assert_eq!(empty.count(LetterStatus::Unevaluated), WORD_LENGTH);
    }

    #[test]
    fn parse_and_display() {
        let evaluation = feedback("GY-G?");
        assert_eq!(evaluation.to_string(), "GY-G?");
        assert_eq!(feedback("🟩🟨⬜🟩⬛"), evaluation);
        assert_eq!(evaluation.to_emoji(), "🟩🟨⬜🟩⬛");
        assert!("GYG".parse::<Evaluation>().is_err());
        assert!("GYXGY".parse::<Evaluation>().is_err());
    }
}
