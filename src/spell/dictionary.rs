//! Word-list backed spell checker

use super::{ENGLISH, SpellChecker};
use crate::core::normalize;
use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;

/// Spell checker answering from an in-memory set of words in one language
#[derive(Debug, Clone)]
pub struct DictionarySpellChecker {
    language: String,
    words: FxHashSet<String>,
}

impl DictionarySpellChecker {
    /// Build a checker for `language` from any list of words
    ///
    /// Words are normalized; blank entries are dropped.
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// English checker over the given words
    pub fn english<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(ENGLISH, words)
    }

    /// English checker over the dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::english(DICTIONARY)
    }

    /// Primary language tag this checker answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every known word, in no particular order
    #[must_use]
    pub const fn words(&self) -> &FxHashSet<String> {
        &self.words
    }

    /// Compares primary subtags only, so "en" also serves "en-US" and "en_GB"
    fn speaks(&self, language: &str) -> bool {
        primary_subtag(language).eq_ignore_ascii_case(primary_subtag(&self.language))
    }
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

impl SpellChecker for DictionarySpellChecker {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        self.speaks(language) && self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knows_listed_words() {
        let checker = DictionarySpellChecker::english(["rag", "garden", "den"]);
        assert!(checker.is_known_word("rag", ENGLISH));
        assert!(checker.is_known_word("garden", ENGLISH));
        assert!(!checker.is_known_word("gar", ENGLISH));
        assert_eq!(checker.len(), 3);
    }

    #[test]
    fn entries_are_normalized() {
        let checker = DictionarySpellChecker::english([" Rag ", "GARDEN\r", "", "  "]);
        assert!(checker.is_known_word("rag", ENGLISH));
        assert!(checker.is_known_word("garden", ENGLISH));
        assert_eq!(checker.len(), 2);
    }

    #[test]
    fn other_languages_are_unknown() {
        let checker = DictionarySpellChecker::english(["rag"]);
        assert!(!checker.is_known_word("rag", "fr"));
        assert!(!checker.is_known_word("rag", "de-DE"));
    }

    #[test]
    fn regional_tags_share_primary_language() {
        let checker = DictionarySpellChecker::english(["rag"]);
        assert!(checker.is_known_word("rag", "en-US"));
        assert!(checker.is_known_word("rag", "en_GB"));
        assert!(checker.is_known_word("rag", "EN"));
    }

    #[test]
    fn embedded_dictionary_is_english() {
        let checker = DictionarySpellChecker::embedded();
        assert_eq!(checker.language(), ENGLISH);
        assert!(!checker.is_empty());
        assert!(checker.is_known_word("garden", ENGLISH));
        assert!(checker.is_known_word("rag", ENGLISH));
        assert!(!checker.is_known_word("xqzv", ENGLISH));
    }

    #[test]
    fn embedded_knows_everyday_words_from_roots() {
        use crate::core::{Candidate, RootWord, validate};

        let checker = DictionarySpellChecker::embedded();
        let cases = [
            ("absolute", "stable"),
            ("absolute", "lust"),
            ("absolute", "lobe"),
            ("mountain", "tuna"),
            ("mountain", "omit"),
            ("mountain", "ton"),
            ("mountain", "unit"),
        ];

        for (root, word) in cases {
            assert!(checker.is_known_word(word, ENGLISH), "'{word}' is unknown");

            let root = RootWord::new(root).unwrap();
            assert!(
                validate(&Candidate::new(word), &root, &[], &checker).is_ok(),
                "'{word}' rejected for '{}'",
                root.text()
            );
        }
    }

    #[test]
    fn lookups_are_deterministic() {
        let checker = DictionarySpellChecker::embedded();
        for word in ["noon", "rag", "nerd", "zzz"] {
            assert_eq!(
                checker.is_known_word(word, ENGLISH),
                checker.is_known_word(word, ENGLISH)
            );
        }
    }
}
