//! Anagram-eligible target list
//!
//! A small fixed list, separate from the main dictionary, of words that each
//! have at least one other anagram. Words are grouped by canonical signature so
//! the solutions for a target can be revealed.

use crate::core::{WORD_LENGTH, Word};
use crate::dictionary::DictionaryError;
use rand::Rng;
use rustc_hash::FxHashMap;

use super::embedded::ANAGRAMS;
use super::loader::words_from_slice;

/// Target list for anagram mode
#[derive(Debug, Clone)]
pub struct AnagramList {
    words: Vec<Word>,
    by_signature: FxHashMap<[u8; WORD_LENGTH], Vec<Word>>,
}

impl AnagramList {
    /// Build a list from words
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Malformed` if the list is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        if words.is_empty() {
            return Err(DictionaryError::Malformed("anagram list is empty".to_string()));
        }

        Ok(Self::indexed(words))
    }

    /// The list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::indexed(words_from_slice(ANAGRAMS))
    }

    fn indexed(words: Vec<Word>) -> Self {
        let mut by_signature: FxHashMap<[u8; WORD_LENGTH], Vec<Word>> = FxHashMap::default();
        for word in &words {
            let group = by_signature.entry(word.letter_signature()).or_default();
            if !group.contains(word) {
                group.push(*word);
            }
        }

        Self {
            words,
            by_signature,
        }
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

    /// Uniform pick that never returns `previous`
    ///
    /// When the list holds nothing but `previous`, it is returned again.
    pub fn random_target<R: Rng + ?Sized>(&self, previous: Option<&Word>, rng: &mut R) -> Word {
        let candidates: Vec<&Word> = self
            .words
            .iter()
            .filter(|word| Some(*word) != previous)
            .collect();

        if candidates.is_empty() {
            return self.words[0];
        }

        *candidates[rng.random_range(0..candidates.len())]
    }

    /// Other listed words with the same letters as `target`
    #[must_use]
    pub fn solutions_for(&self, target: &Word) -> Vec<Word> {
        self.by_signature
            .get(&target.letter_signature())
            .map(|group| group.iter().filter(|w| *w != target).copied().collect())
            .unwrap_or_default()
    }
}
