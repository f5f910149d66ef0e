//! Word check command
//!
//! Validates a single candidate against a root word outside of a round.

use crate::core::{
    Accepted, Candidate, RejectionReason, RootWord, WordError, remaining_letters, validate,
};
use crate::spell::SpellChecker;

/// Result of checking a word
pub struct CheckResult {
    pub root: String,
    pub candidate: String,
    /// The accepted word, or the first check it failed
    pub verdict: Result<String, RejectionReason>,
    /// Root letters not used by the candidate, if it is composable
    pub unused_letters: Option<Vec<char>>,
}

impl CheckResult {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.verdict.is_ok()
    }
}

/// Check `word` against `root` as if `used` had already been accepted
///
/// # Errors
///
/// Returns `WordError` if `root` is not a plain word. A rejected candidate
/// is not an error; it is reported in `CheckResult::verdict`.
pub fn check_word<C: SpellChecker + ?Sized>(
    root: &str,
    used: &[String],
    word: &str,
    checker: &C,
) -> Result<CheckResult, WordError> {
    let root = RootWord::new(root)?;
    let candidate = Candidate::new(word);

    let verdict = validate(&candidate, &root, used, checker).map(Accepted::into_word);
    let unused_letters = remaining_letters(&candidate, &root);

    Ok(CheckResult {
        root: root.text().to_string(),
        candidate: candidate.into_text(),
        verdict,
        unused_letters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spell::DictionarySpellChecker;

    fn dictionary() -> DictionarySpellChecker {
        DictionarySpellChecker::english(["rag", "garden", "danger"])
    }

    #[test]
    fn check_accepted_word() {
        let result = check_word("garden", &[], "RAG", &dictionary()).unwrap();

        assert_eq!(result.root, "garden");
        assert_eq!(result.candidate, "rag");
        assert_eq!(result.verdict, Ok("rag".to_string()));
        assert_eq!(result.unused_letters, Some(vec!['d', 'e', 'n']));
        assert!(result.is_accepted());
    }

    #[test]
    fn check_root_equal_candidate() {
        let result = check_word("garden", &[], "garden", &dictionary()).unwrap();
        assert!(result.is_accepted());
        assert_eq!(result.unused_letters, Some(vec![]));
    }

    #[test]
    fn check_reports_first_failure() {
        let used = vec!["rag".to_string()];
        let result = check_word("garden", &used, "rag", &dictionary()).unwrap();
        assert_eq!(result.verdict, Err(RejectionReason::NotUnique));

        let result = check_word("garden", &[], "cat", &dictionary()).unwrap();
        assert_eq!(result.verdict, Err(RejectionReason::NotComposable));
        assert_eq!(result.unused_letters, None);
    }

    #[test]
    fn check_invalid_root() {
        assert!(matches!(
            check_word("", &[], "rag", &dictionary()),
            Err(WordError::Empty)
        ));
        assert!(matches!(
            check_word("gar den", &[], "rag", &dictionary()),
            Err(WordError::InvalidCharacters)
        ));
    }
}
