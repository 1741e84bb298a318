//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_dictionary_info, print_guesses, print_outcome, print_round_result, print_word_checks,
    print_word_code,
};
