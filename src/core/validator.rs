//! Candidate validation
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. Length (at least `MIN_WORD_LENGTH` characters)
//! 2. Uniqueness against the words already accepted this round
//! 3. Composability from the root word's letters
//! 4. Dictionary lookup through a `SpellChecker`
//!
//! A word can fail several checks at once, so the order decides which single
//! reason the player sees.

use super::{Candidate, RejectionReason, RootWord, normalize};
use crate::spell::{ENGLISH, SpellChecker};

/// Shortest candidate worth accepting
pub const MIN_WORD_LENGTH: usize = 3;

/// A candidate that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    word: String,
}

impl Accepted {
    /// The normalized word to record
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn into_word(self) -> String {
        self.word
    }
}

/// Validate a candidate against the root word and the words already used
///
/// Pure: same arguments, same answer. `used` may hold words in any case or
/// with stray whitespace; they are compared normalized.
///
/// # Errors
///
/// Returns the first `RejectionReason` whose check fails.
///
/// # Examples
/// ```
/// use word_scramble::core::{validate, Candidate, RejectionReason, RootWord};
/// use word_scramble::spell::DictionarySpellChecker;
///
/// let root = RootWord::new("garden").unwrap();
/// let dictionary = DictionarySpellChecker::english(["rag", "den", "red"]);
///
/// let accepted = validate(&Candidate::new("Rag"), &root, &[], &dictionary).unwrap();
/// assert_eq!(accepted.word(), "rag");
///
/// let used = vec!["rag".to_string()];
/// assert_eq!(
///     validate(&Candidate::new("rag"), &root, &used, &dictionary),
///     Err(RejectionReason::NotUnique)
/// );
/// ```
pub fn validate<C: SpellChecker + ?Sized>(
    candidate: &Candidate,
    root: &RootWord,
    used: &[String],
    checker: &C,
) -> Result<Accepted, RejectionReason> {
    if candidate.len() < MIN_WORD_LENGTH {
        return Err(RejectionReason::TooShort);
    }

    if !is_unique(candidate, used) {
        return Err(RejectionReason::NotUnique);
    }

    if !is_composable(candidate, root) {
        return Err(RejectionReason::NotComposable);
    }

    if !checker.is_known_word(candidate.text(), ENGLISH) {
        return Err(RejectionReason::NotARealWord);
    }

    Ok(Accepted {
        word: candidate.text().to_string(),
    })
}

/// True if the candidate is not among the used words
#[must_use]
pub fn is_unique(candidate: &Candidate, used: &[String]) -> bool {
    !used.iter().any(|word| normalize(word) == candidate.text())
}

/// True if the candidate's letters are a sub-multiset of the root's letters
///
/// # Examples
/// ```
/// use word_scramble::core::{is_composable, Candidate, RootWord};
///
/// let nono = RootWord::new("nono").unwrap();
/// let non = RootWord::new("non").unwrap();
///
/// assert!(is_composable(&Candidate::new("noon"), &nono));
/// assert!(!is_composable(&Candidate::new("noon"), &non));
/// ```
#[must_use]
pub fn is_composable(candidate: &Candidate, root: &RootWord) -> bool {
    remaining_letters(candidate, root).is_some()
}

/// Root letters left over once the candidate is spelled out of them
///
/// Walks the candidate left to right, removing one matching letter from a
/// working copy of the root each time. Returns `None` as soon as a letter has
/// nothing left to remove. The leftovers keep the root's order.
#[must_use]
pub fn remaining_letters(candidate: &Candidate, root: &RootWord) -> Option<Vec<char>> {
    let mut available = root.letters();

    for letter in candidate.text().chars() {
        let index = available.iter().position(|&c| c == letter)?;
        available.remove(index);
    }

    Some(available)
}
