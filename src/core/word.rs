//! Five-letter word representation
//!
//! A `Word` stores exactly five uppercase ASCII letters. Ordering is the raw
//! lexicographic byte order, which is also the order the dictionary is sorted in.

use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A five-letter word of uppercase `A`-`Z` letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only letters A-Z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Lowercase letters are accepted and stored uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if the length is not exactly 5 or the text contains
    /// anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use gimme_five::core::Word;
    ///
    /// let word = Word::new("stone").unwrap();
    /// assert_eq!(word.as_str(), "STONE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(WordError::InvalidLength(length));
        }

        // Five chars but more bytes means something outside ASCII
        let Ok(letters) = <[u8; WORD_LENGTH]>::try_from(text.as_bytes()) else {
            return Err(WordError::InvalidCharacters);
        };
        Self::from_bytes(letters)
    }

    /// Create a Word from raw bytes, normalizing lowercase letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any byte is not an ASCII letter.
    pub fn from_bytes(mut letters: [u8; WORD_LENGTH]) -> Result<Self, WordError> {
        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        letters.make_ascii_uppercase();
        Ok(Self { letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII letters
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if `index >= 5`. An out-of-range index is a programming error.
    #[inline]
    #[must_use]
    pub fn letter_at(&self, index: usize) -> u8 {
        assert!(
            index < WORD_LENGTH,
            "letter index {index} out of range for a {WORD_LENGTH}-letter word"
        );
        self.letters[index]
    }

    /// Letters sorted ascending; the canonical signature used for anagrams
    ///
    /// ```
    /// use gimme_five::core::Word;
    ///
    /// let word = Word::new("STONE").unwrap();
    /// assert_eq!(&word.letter_signature(), b"ENOST");
    /// ```
    #[must_use]
    pub fn letter_signature(&self) -> [u8; WORD_LENGTH] {
        let mut signature = self.letters;
        signature.sort_unstable();
        signature
    }

    /// True if both words share the same canonical signature
    ///
    /// A word is an anagram of itself. Callers that need a *different* word
    /// must also check inequality.
    #[must_use]
    pub fn is_anagram_of(&self, other: &Self) -> bool {
        self.letter_signature() == other.letter_signature()
    }

    /// Loose "feels the same" check used to avoid near-repeat targets
    ///
    /// True when at least three positions match, or when two adjacent
    /// positions both match.
    #[must_use]
    pub fn is_similar_to(&self, other: &Self) -> bool {
        let mut shared = 0;

        for index in 0..WORD_LENGTH {
            if self.letters[index] != other.letters[index] {
                continue;
            }

            shared += 1;
            if shared == 3 {
                return true;
            }

            if index >= 1 && self.letters[index - 1] == other.letters[index - 1] {
                return true;
            }
        }

        false
    }

    /// Per-letter counts indexed `A` = 0 .. `Z` = 25
    #[must_use]
    pub fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &letter in &self.letters {
            counts[usize::from(letter - b'A')] += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
