//! Word lists for the game
//!
//! Root-word candidates and the English dictionary are compiled into the
//! binary; either can be swapped for a file at runtime.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use loader::WordSource;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RootWord;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_valid_roots() {
        assert!(!START_WORDS.is_empty());
        for &word in START_WORDS {
            let root = RootWord::new(word).unwrap_or_else(|e| panic!("'{word}': {e}"));
            assert_eq!(root.text(), word, "Word '{word}' is not normalized");
            assert_eq!(word.len(), 8, "Word '{word}' is not 8 letters");
        }
    }

    #[test]
    fn dictionary_is_lowercase_letters() {
        for &word in DICTIONARY {
            assert!(
                !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_in_dictionary() {
        // Every root must itself be a word the spell checker knows
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for word in START_WORDS {
            assert!(
                dictionary.contains(word),
                "Root '{word}' not in dictionary"
            );
        }
    }
}
