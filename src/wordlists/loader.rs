//! Word list loading utilities
//!
//! Provides functions to load word lists from text files, from the packed
//! binary dictionary format, or from the embedded constants.
//!
//! # Binary format
//!
//! A 3-byte little-endian word count followed by `count` records of five
//! uppercase ASCII bytes, sorted in raw byte order.

use crate::core::{WORD_LENGTH, Word};
use crate::dictionary::DictionaryError;
use std::fs;
use std::path::Path;

/// Size of the leading count field
pub const BLOB_HEADER_LEN: usize = 3;

/// Largest count the header can express
pub const BLOB_MAX_WORDS: usize = 0x00FF_FFFF;

/// Load words from a text file, one word per line
///
/// Blank lines are ignored. Any other line that is not a five-letter word makes
/// the whole file malformed.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read and
/// `DictionaryError::Malformed` for invalid lines.
///
/// # Examples
/// ```no_run
/// use gimme_five::wordlists::loader::load_text_file;
///
/// let words = load_text_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_text_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DictionaryError> {
    let content =
        fs::read_to_string(path.as_ref()).map_err(|e| DictionaryError::Io(e.to_string()))?;
    parse_text(&content)
}

/// Parse newline-separated words
///
/// # Errors
///
/// Returns `DictionaryError::Malformed` naming the first bad line.
pub fn parse_text(content: &str) -> Result<Vec<Word>, DictionaryError> {
    content
        .lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| {
            Word::new(line)
                .map_err(|e| DictionaryError::Malformed(format!("line {number}: '{line}': {e}")))
        })
        .collect()
}

/// Load a packed binary dictionary from disk
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read, otherwise the
/// errors of [`parse_blob`].
pub fn load_blob_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DictionaryError> {
    let bytes = fs::read(path.as_ref()).map_err(|e| DictionaryError::Io(e.to_string()))?;
    parse_blob(&bytes)
}

/// Decode the packed binary dictionary format
///
/// # Errors
///
/// Returns `DictionaryError::Malformed` if the header is truncated, the
/// payload length disagrees with the count, or a record is not a word.
pub fn parse_blob(bytes: &[u8]) -> Result<Vec<Word>, DictionaryError> {
    let Some((header, payload)) = bytes.split_first_chunk::<BLOB_HEADER_LEN>() else {
        return Err(DictionaryError::Malformed(format!(
            "blob is {} bytes, shorter than its header",
            bytes.len()
        )));
    };

    let count =
        usize::from(header[0]) | (usize::from(header[1]) << 8) | (usize::from(header[2]) << 16);

    if payload.len() != count * WORD_LENGTH {
        return Err(DictionaryError::Malformed(format!(
            "header declares {count} words but payload holds {} bytes",
            payload.len()
        )));
    }

    payload
        .chunks_exact(WORD_LENGTH)
        .enumerate()
        .map(|(index, record)| {
            let mut letters = [0u8; WORD_LENGTH];
            letters.copy_from_slice(record);

            // Records are stored uppercase; lowercase bytes mean a corrupt blob
            if !letters.iter().all(u8::is_ascii_uppercase) {
                return Err(DictionaryError::Malformed(format!(
                    "record {index} is not five uppercase letters"
                )));
            }

            Word::from_bytes(letters)
                .map_err(|e| DictionaryError::Malformed(format!("record {index}: {e}")))
        })
        .collect()
}

/// Encode words in the packed binary dictionary format
///
/// # Errors
///
/// Returns `DictionaryError::Malformed` if there are more words than the
/// 3-byte header can count.
pub fn pack_blob(words: &[Word]) -> Result<Vec<u8>, DictionaryError> {
    if words.len() > BLOB_MAX_WORDS {
        return Err(DictionaryError::Malformed(format!(
            "{} words exceed the {BLOB_MAX_WORDS}-word header limit",
            words.len()
        )));
    }

    let count = words.len();
    let mut bytes = Vec::with_capacity(BLOB_HEADER_LEN + count * WORD_LENGTH);
    bytes.extend_from_slice(&[
        (count & 0xFF) as u8,
        ((count >> 8) & 0xFF) as u8,
        ((count >> 16) & 0xFF) as u8,
    ]);

    for word in words {
        bytes.extend_from_slice(word.letters());
    }

    Ok(bytes)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use gimme_five::wordlists::loader::words_from_slice;
/// use gimme_five::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
