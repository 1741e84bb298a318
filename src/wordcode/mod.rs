//! Shareable word codes for classic games
//!
//! A code is 12 hex characters: the mode id nibble, the key index nibble, then
//! one hex pair per letter holding `letter ^ key[index][position]`. Codes are
//! written uppercase; decoding accepts either case.
//!
//! # Examples
//! ```
//! use gimme_five::core::Word;
//! use gimme_five::wordcode;
//!
//! let word = Word::new("BRAVE").unwrap();
//! let code = wordcode::encode(&word, 3);
//!
//! assert_eq!(code.len(), wordcode::CODE_LENGTH);
//! assert_eq!(wordcode::decode(&code).unwrap(), word);
//! ```

use crate::core::{WORD_LENGTH, Word, WordError};
use crate::dictionary::{Dictionary, DictionaryError};
use crate::game::Mode;
use rand::Rng;
use std::fmt;

/// Characters in every word code
pub const CODE_LENGTH: usize = 2 + 2 * WORD_LENGTH;

/// Fixed XOR keys, selected by the code's second nibble
pub const KEYS: [[u8; WORD_LENGTH]; 16] = [
    *b"0cb43", *b"28777", *b"c5e3c", *b"4fdf2",
    *b"85c5b", *b"955c1", *b"3b0eb", *b"4221d",
    *b"96c81", *b"a7d6e", *b"48d93", *b"27e2e",
    *b"b1b36", *b"022f4", *b"7f704", *b"14308",
];

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Error type for word code decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    InvalidHex(char),
    UnsupportedMode(u8),
    InvalidWord(WordError),
    NotInDictionary(Word),
    Dictionary(DictionaryError),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word code must be {CODE_LENGTH} characters, got {len}")
            }
            Self::InvalidHex(ch) => write!(f, "'{ch}' is not a hex digit"),
            Self::UnsupportedMode(id) => write!(f, "Word codes for mode {id} are not supported"),
            Self::InvalidWord(e) => write!(f, "Word code does not hold a word: {e}"),
            Self::NotInDictionary(word) => write!(f, "Word code decodes to unknown word {word}"),
            Self::Dictionary(e) => write!(f, "Cannot check word code: {e}"),
        }
    }
}

impl std::error::Error for CodeError {}

impl From<WordError> for CodeError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

/// Encode a word with the given key
///
/// Only the low nibble of `key_index` is used.
#[must_use]
pub fn encode(word: &Word, key_index: u8) -> String {
    let key_index = key_index & 0x0F;
    let key = &KEYS[usize::from(key_index)];

    let mut code = String::with_capacity(CODE_LENGTH);
    code.push(hex_char(Mode::Classic.id()));
    code.push(hex_char(key_index));

    for (&letter, &mask) in word.letters().iter().zip(key) {
        let byte = letter ^ mask;
        code.push(hex_char(byte >> 4));
        code.push(hex_char(byte));
    }

    code
}

/// Encode a word with a randomly chosen key
pub fn encode_random<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> String {
    let key_index = rng.random_range(0..16u8);
    encode(word, key_index)
}

/// Decode a word code back to its word
///
/// # Errors
///
/// Returns `CodeError` if the code has the wrong length, contains non-hex
/// characters, names a mode other than classic, or does not decode to letters.
pub fn decode(code: &str) -> Result<Word, CodeError> {
    let nibbles = code
        .chars()
        .map(|ch| {
            ch.to_digit(16)
                .and_then(|digit| u8::try_from(digit).ok())
                .ok_or(CodeError::InvalidHex(ch))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    if nibbles.len() != CODE_LENGTH {
        return Err(CodeError::InvalidLength(nibbles.len()));
    }

    if nibbles[0] != Mode::Classic.id() {
        return Err(CodeError::UnsupportedMode(nibbles[0]));
    }

    let key = &KEYS[usize::from(nibbles[1])];
    let mut letters = [0u8; WORD_LENGTH];
    for (position, letter) in letters.iter_mut().enumerate() {
        let high = nibbles[2 + 2 * position];
        let low = nibbles[3 + 2 * position];
        *letter = ((high << 4) | low) ^ key[position];
    }

    Ok(Word::from_bytes(letters)?)
}

/// Decode a code and require the word to be in the dictionary
///
/// # Errors
///
/// Returns the errors of [`decode`], `Dictionary(Unavailable)` when the
/// dictionary failed to load, or `NotInDictionary` for an unknown word.
pub fn validate(code: &str, dictionary: &Dictionary) -> Result<Word, CodeError> {
    let word = decode(code)?;
    if !dictionary.is_available() {
        return Err(CodeError::Dictionary(DictionaryError::Unavailable));
    }
    if !dictionary.contains(&word) {
        return Err(CodeError::NotInDictionary(word));
    }
    Ok(word)
}

fn hex_char(nibble: u8) -> char {
    char::from(HEX_DIGITS[usize::from(nibble & 0x0F)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn known_encoding() {
        // 'C' ^ '0' = 0x73, 'R' ^ 'c' = 0x31 and so on
        assert_eq!(encode(&w("CRANE"), 0), "007331237A76");
    }

    #[test]
    fn round_trip_every_key() {
        for word in ["ABACK", "BRAVE", "STONE", "ZEBRA", "QUEUE"] {
            for key_index in 0..16u8 {
                let code = encode(&w(word), key_index);
                assert_eq!(code.len(), CODE_LENGTH);
                assert_eq!(decode(&code).unwrap(), w(word), "key {key_index}");
            }
        }
    }

    #[test]
    fn key_index_is_second_character() {
        let code = encode(&w("BRAVE"), 11);
        assert!(code.starts_with("0B"));
    }

    #[test]
    fn decode_accepts_lowercase() {
        let code = encode(&w("BRAVE"), 10).to_ascii_lowercase();
        assert_eq!(decode(&code).unwrap(), w("BRAVE"));
    }

    #[test]
    fn random_encoding_decodes() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let code = encode_random(&w("LOOPS"), &mut rng);
            assert_eq!(decode(&code).unwrap(), w("LOOPS"));
        }
    }

    #[test]
    fn wrong_length_rejected() {
        assert_eq!(decode("0073"), Err(CodeError::InvalidLength(4)));
        assert_eq!(decode(""), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn non_hex_rejected() {
        assert_eq!(decode("00733123ZZ76"), Err(CodeError::InvalidHex('Z')));
    }

    #[test]
    fn other_modes_unsupported() {
        let mut code = encode(&w("CRANE"), 0);
        code.replace_range(0..1, "1");
        assert_eq!(decode(&code), Err(CodeError::UnsupportedMode(1)));
    }

    #[test]
    fn non_letter_payload_rejected() {
        // '0' ^ '0' = 0x00 is not a letter
        assert_eq!(
            decode("000000000000"),
            Err(CodeError::InvalidWord(WordError::InvalidCharacters))
        );
    }

    #[test]
    fn validate_checks_dictionary() {
        let dictionary = Dictionary::embedded();
        let known = encode(&w("ABBOT"), 5);
        assert_eq!(validate(&known, &dictionary).unwrap(), w("ABBOT"));

        let unknown = encode(&w("QXZJV"), 5);
        assert_eq!(
            validate(&unknown, &dictionary),
            Err(CodeError::NotInDictionary(w("QXZJV")))
        );
    }

    #[test]
    fn validate_reports_unavailable_dictionary() {
        let code = encode(&w("ABBOT"), 2);
        assert_eq!(
            validate(&code, &Dictionary::unavailable()),
            Err(CodeError::Dictionary(DictionaryError::Unavailable))
        );
    }
}
