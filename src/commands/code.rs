//! Word code commands

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::wordcode::{self, CodeError};
use rand::Rng;

/// Encode a dictionary word, with a fixed key or a random one
///
/// # Errors
///
/// Returns an error if `text` is not a word or is not in the dictionary.
pub fn encode_word<R: Rng + ?Sized>(
    text: &str,
    key: Option<u8>,
    dictionary: &Dictionary,
    rng: &mut R,
) -> anyhow::Result<(Word, String)> {
    let word = Word::new(text)?;
    if !dictionary.contains(&word) {
        anyhow::bail!("{word} is not in the dictionary");
    }

    let code = match key {
        Some(key) if key > 15 => anyhow::bail!("key index must be 0-15, got {key}"),
        Some(key) => wordcode::encode(&word, key),
        None => wordcode::encode_random(&word, rng),
    };

    Ok((word, code))
}

/// Decode a code and confirm its word is playable
///
/// # Errors
///
/// Returns `CodeError` if the code is malformed or its word is unknown.
pub fn decode_code(code: &str, dictionary: &Dictionary) -> Result<Word, CodeError> {
    wordcode::validate(code.trim(), dictionary)
}
