//! Word lists for the game
//!
//! Provides the dictionary and anagram lists compiled into the binary, plus
//! loaders for external dictionary files.

mod anagrams;
mod embedded;
pub mod loader;

pub use anagrams::AnagramList;
pub use embedded::{ANAGRAMS, ANAGRAMS_COUNT, DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn anagrams_count_matches_const() {
        assert_eq!(ANAGRAMS.len(), ANAGRAMS_COUNT);
    }

    #[test]
    fn dictionary_words_are_valid() {
        for &word in DICTIONARY {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn dictionary_is_strictly_sorted() {
        assert!(DICTIONARY.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn anagrams_subset_of_dictionary() {
        for &word in ANAGRAMS {
            assert!(
                DICTIONARY.binary_search(&word).is_ok(),
                "Anagram '{word}' not in dictionary"
            );
        }
    }

    #[test]
    fn expected_counts() {
        assert_eq!(DICTIONARY_COUNT, 2378);
        assert_eq!(ANAGRAMS_COUNT, 163);
    }
}
