//! Word Scramble
//!
//! A word game: a random root word is dealt and the player builds as many
//! real words as possible from its letters. Each submission must be at least
//! three letters, not already found this round, spelled from the root's
//! letters (each used no more often than it appears) and known to the
//! dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Candidate, RejectionReason, RootWord, validate};
//! use word_scramble::spell::DictionarySpellChecker;
//!
//! let dictionary = DictionarySpellChecker::english(["rag", "danger", "garden"]);
//! let root = RootWord::new("garden").unwrap();
//!
//! let accepted = validate(&Candidate::new("Rag"), &root, &[], &dictionary).unwrap();
//! assert_eq!(accepted.word(), "rag");
//!
//! let used = vec!["rag".to_string()];
//! let rejected = validate(&Candidate::new("rag"), &root, &used, &dictionary);
//! assert_eq!(rejected, Err(RejectionReason::NotUnique));
//! ```

// Core domain types and validation
pub mod core;

// Dictionary lookups
pub mod spell;

// Word lists
pub mod wordlists;

// Round orchestration
pub mod round;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod logging;
