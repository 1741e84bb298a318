//! Command implementations

pub mod code;
pub mod dict;
pub mod simple;

pub use code::{decode_code, encode_word};
pub use dict::{DictionaryInfo, WordCheck, check_words, describe, pack_text_file};
pub use simple::run_simple;
