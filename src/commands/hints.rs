//! Word hints command
//!
//! Lists every dictionary word that would be accepted against a root word at
//! the start of a round.

use crate::core::{Candidate, RootWord, WordError, validate};
use crate::spell::DictionarySpellChecker;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Result of a hints search
pub struct HintsResult {
    pub root: String,
    /// Words shown, longest first
    pub words: Vec<String>,
    /// Words found before any limit was applied
    pub total_found: usize,
    pub dictionary_size: usize,
}

/// Every word `dictionary` would accept against `root` with nothing used yet
///
/// Sorted longest first, then alphabetically.
///
/// # Examples
/// ```
/// use word_scramble::commands::hints::find_words;
/// use word_scramble::core::RootWord;
/// use word_scramble::spell::DictionarySpellChecker;
///
/// let root = RootWord::new("garden").unwrap();
/// let dictionary = DictionarySpellChecker::english(["rag", "danger", "cat", "ad"]);
///
/// assert_eq!(find_words(&root, &dictionary), ["danger", "rag"]);
/// ```
#[must_use]
pub fn find_words(root: &RootWord, dictionary: &DictionarySpellChecker) -> Vec<String> {
    find_words_with_progress(root, dictionary, &ProgressBar::hidden())
}

/// Same as `find_words`, ticking `progress` once per dictionary entry
#[must_use]
pub fn find_words_with_progress(
    root: &RootWord,
    dictionary: &DictionarySpellChecker,
    progress: &ProgressBar,
) -> Vec<String> {
    let mut words: Vec<String> = dictionary
        .words()
        .par_iter()
        .filter(|word| {
            progress.inc(1);
            validate(&Candidate::new(word), root, &[], dictionary).is_ok()
        })
        .cloned()
        .collect();

    words.sort_unstable_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    words
}

/// Run the hints search for a root word, with a progress bar on stderr
///
/// # Errors
///
/// Returns `WordError` if `root` is not a plain word.
pub fn run_hints(
    root: &str,
    dictionary: &DictionarySpellChecker,
    limit: Option<usize>,
) -> Result<HintsResult, WordError> {
    let root = RootWord::new(root)?;

    let pb = ProgressBar::new(dictionary.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("Scanning for {}", root.text().to_uppercase()));

    let mut words = find_words_with_progress(&root, dictionary, &pb);
    pb.finish_and_clear();

    let total_found = words.len();
    tracing::info!(root = root.text(), found = total_found, "hints computed");

    if let Some(limit) = limit {
        words.truncate(limit);
    }

    Ok(HintsResult {
        root: root.text().to_string(),
        words,
        total_found,
        dictionary_size: dictionary.len(),
    })
}
