//! Sorted dictionary with lookup and constrained random draws
//!
//! The dictionary is loaded once and never mutated. A failed load leaves an
//! *unavailable* dictionary behind: lookups fail closed and every draw reports
//! [`DictionaryError::Unavailable`].

mod random;

use crate::core::Word;
use crate::wordlists::{DICTIONARY, loader};
use std::fmt;
use std::path::Path;

/// Error type for dictionary loading and queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The dictionary failed to load
    Unavailable,
    /// No word satisfies the draw's constraints
    NoCandidateFound,
    /// Source data is not a sorted list of valid words
    Malformed(String),
    /// Source data could not be read
    Io(String),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "Dictionary is unavailable"),
            Self::NoCandidateFound => write!(f, "No dictionary word satisfies the constraint"),
            Self::Malformed(reason) => write!(f, "Malformed dictionary: {reason}"),
            Self::Io(reason) => write!(f, "Cannot read dictionary: {reason}"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Immutable sorted word list
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    available: bool,
}

impl Dictionary {
    /// Build a dictionary from words already in ascending order
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Malformed` if the words are not strictly
    /// ascending (unsorted or duplicated).
    ///
    /// # Examples
    /// ```
    /// use gimme_five::core::Word;
    /// use gimme_five::dictionary::Dictionary;
    ///
    /// let words = ["ABACK", "ABBOT", "BRAVE"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words.to_vec()).unwrap();
    ///
    /// assert!(dictionary.contains(&Word::new("abbot").unwrap()));
    /// assert!(!dictionary.contains(&Word::new("CRANE").unwrap()));
    /// ```
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        if let Some(pair) = words.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(DictionaryError::Malformed(format!(
                "'{}' is followed by '{}'",
                pair[0], pair[1]
            )));
        }

        Ok(Self {
            words,
            available: true,
        })
    }

    /// The load-failure state
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            words: Vec::new(),
            available: false,
        }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: loader::words_from_slice(DICTIONARY),
            available: true,
        }
    }

    /// Decode a packed binary dictionary
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Malformed` for a bad blob or unsorted records.
    pub fn from_blob(bytes: &[u8]) -> Result<Self, DictionaryError> {
        Self::new(loader::parse_blob(bytes)?)
    }

    /// Load a dictionary file, choosing the format from its extension
    ///
    /// `.txt` files are read as one word per line; anything else is treated
    /// as a packed blob.
    ///
    /// # Errors
    ///
    /// Returns the loader's error, or `Malformed` if the words are unsorted.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = if path.extension().is_some_and(|ext| ext == "txt") {
            loader::load_text_file(path)?
        } else {
            loader::load_blob_file(path)?
        };

        Self::new(words)
    }

    /// Keep a loaded dictionary, or log the failure and go unavailable
    #[must_use]
    pub fn load_or_unavailable(result: Result<Self, DictionaryError>) -> Self {
        match result {
            Ok(dictionary) => {
                log::info!("Dictionary loaded with {} words", dictionary.len());
                dictionary
            }
            Err(e) => {
                log::error!("Dictionary load failed: {e}");
                Self::unavailable()
            }
        }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Binary search for an exact word; always false when unavailable
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.available && self.words.binary_search(word).is_ok()
    }

    /// Every other dictionary word built from the same letters
    #[must_use]
    pub fn anagrams_of(&self, word: &Word) -> Vec<Word> {
        let signature = word.letter_signature();
        self.words
            .iter()
            .filter(|candidate| *candidate != word && candidate.letter_signature() == signature)
            .copied()
            .collect()
    }

    /// Guard shared by every draw
    fn draw_pool(&self) -> Result<&[Word], DictionaryError> {
        if !self.available {
            return Err(DictionaryError::Unavailable);
        }
        if self.words.is_empty() {
            return Err(DictionaryError::NoCandidateFound);
        }
        Ok(&self.words)
    }
}
