//! Dictionary lookups
//!
//! The validator only needs to ask "is this a word?". Anything that can
//! answer deterministically for the length of a round can stand behind the
//! `SpellChecker` trait: the embedded dictionary, a system word list, or a
//! fake in tests.

mod dictionary;

pub use dictionary::DictionarySpellChecker;

/// Language tag the game checks words in
pub const ENGLISH: &str = "en";

/// A source of truth for which words exist in a language
pub trait SpellChecker {
    /// True if `word` is spelled correctly in `language`
    ///
    /// `word` arrives already lowercased and trimmed.
    fn is_known_word(&self, word: &str, language: &str) -> bool;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        (**self).is_known_word(word, language)
    }
}

impl<T: SpellChecker + ?Sized> SpellChecker for Box<T> {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        (**self).is_known_word(word, language)
    }
}
