//! Core domain types for the word game
//!
//! Root words, candidates, the validation pipeline and the round state.
//! Nothing here knows about terminals or files; the dictionary comes in
//! through the `SpellChecker` trait.

mod error;
mod rejection;
mod state;
mod validator;
mod word;

pub use error::StartupError;
pub use rejection::RejectionReason;
pub use state::GameState;
pub use validator::{
    Accepted, MIN_WORD_LENGTH, is_composable, is_unique, remaining_letters, validate,
};
pub use word::{Candidate, RootWord, WordError, normalize};
