//! Dictionary inspection and packing

use crate::core::Word;
use crate::dictionary::{Dictionary, DictionaryError};
use crate::wordlists::{AnagramList, loader};
use std::fs;
use std::path::Path;

/// Dictionary verdict for one typed word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordCheck {
    Found(Word),
    Missing(Word),
    Invalid { text: String, reason: String },
}

impl WordCheck {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Found(word) | Self::Missing(word) => word.as_str(),
            Self::Invalid { text, .. } => text,
        }
    }
}

/// Summary of a loaded dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryInfo {
    pub available: bool,
    pub words: usize,
    pub first: String,
    pub last: String,
    pub anagram_targets: usize,
    pub blob_bytes: usize,
}

/// Look each word up in the dictionary
#[must_use]
pub fn check_words(dictionary: &Dictionary, words: &[String]) -> Vec<WordCheck> {
    words
        .iter()
        .map(|text| match Word::new(text) {
            Ok(word) if dictionary.contains(&word) => WordCheck::Found(word),
            Ok(word) => WordCheck::Missing(word),
            Err(e) => WordCheck::Invalid {
                text: text.clone(),
                reason: e.to_string(),
            },
        })
        .collect()
}

/// Summarize a dictionary and the anagram list
#[must_use]
pub fn describe(dictionary: &Dictionary, anagrams: &AnagramList) -> DictionaryInfo {
    let words = dictionary.words();
    let edge = |word: Option<&Word>| word.map_or_else(|| "-".to_string(), ToString::to_string);

    DictionaryInfo {
        available: dictionary.is_available(),
        words: words.len(),
        first: edge(words.first()),
        last: edge(words.last()),
        anagram_targets: anagrams.len(),
        blob_bytes: loader::BLOB_HEADER_LEN + words.len() * crate::core::WORD_LENGTH,
    }
}

/// Convert a text word list into the packed blob format
///
/// Words are sorted and deduplicated before packing. Returns the number of
/// words written.
///
/// # Errors
///
/// Returns `DictionaryError` if the input cannot be read or parsed, or the
/// output cannot be written.
pub fn pack_text_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<usize, DictionaryError> {
    let mut words = loader::load_text_file(input)?;
    words.sort_unstable();
    words.dedup();

    let blob = loader::pack_blob(&words)?;
    fs::write(output.as_ref(), blob).map_err(|e| DictionaryError::Io(e.to_string()))?;

    log::info!(
        "Packed {} words into {}",
        words.len(),
        output.as_ref().display()
    );
    Ok(words.len())
}
