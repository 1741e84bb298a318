//! Letter-by-letter guess entry

use crate::core::WORD_LENGTH;

/// Typed letters awaiting submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessInput {
    text: String,
}

impl GuessInput {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Append a letter, uppercased
    ///
    /// Returns false when the buffer is full or `ch` is not an ASCII letter.
    pub fn push(&mut self, ch: char) -> bool {
        if self.is_full() || !ch.is_ascii_alphabetic() {
            return false;
        }
        self.text.push(ch.to_ascii_uppercase());
        true
    }

    /// Remove the last letter, if any
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Hand over the typed text and empty the buffer
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.text.len() >= WORD_LENGTH
    }
}
