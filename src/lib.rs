//! Gimme Five
//!
//! A five-letter word guessing game with classic, rush and anagram modes.
//!
//! # Quick Start
//!
//! ```rust
//! use gimme_five::core::{Word, evaluate};
//!
//! let guess = Word::new("speed").unwrap();
//! let target = Word::new("erase").unwrap();
//!
//! // Only two of the three Es can be credited against ERASE
//! let evaluation = evaluate(&guess, &target);
//! assert_eq!(evaluation.to_string(), "Y-YY-");
//! ```
//!
//! Playing a game goes through a [`game::Session`]:
//!
//! ```rust
//! use gimme_five::config::GameConfig;
//! use gimme_five::dictionary::Dictionary;
//! use gimme_five::game::{GameContext, Mode, Session};
//! use gimme_five::wordlists::AnagramList;
//!
//! let dictionary = Dictionary::embedded();
//! let anagrams = AnagramList::embedded();
//! let config = GameConfig { seed: Some(7), ..GameConfig::default() };
//!
//! let mut session = Session::new(Mode::Classic, GameContext::new(&dictionary, &anagrams, config));
//! session.start().unwrap();
//! assert!(session.submit("ABBOT").is_ok());
//! assert!(session.submit("XYZZY").is_err());
//! ```

// Core domain types
pub mod core;

// Tunables
pub mod config;

// Dictionary queries
pub mod dictionary;

// Game mode state machines
pub mod game;

// Word lists
pub mod wordlists;

// Share codes
pub mod wordcode;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
