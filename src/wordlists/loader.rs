//! Word list loading utilities
//!
//! Loads newline-separated word lists from files or the embedded constants.

use crate::core::StartupError;
use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where a word list comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// A newline-separated UTF-8 file
    File(PathBuf),
    /// A fixed list given up front, e.g. a single root word from the command line
    Words(Vec<String>),
}

impl WordSource {
    /// Load the list, using `embedded` for `WordSource::Embedded`
    ///
    /// # Errors
    ///
    /// Returns a `StartupError` if the file is missing or unreadable.
    pub fn load(&self, embedded: &[&str]) -> Result<Vec<String>, StartupError> {
        match self {
            Self::Embedded => Ok(words_from_slice(embedded)),
            Self::File(path) => load_from_file(path),
            Self::Words(words) => Ok(words.clone()),
        }
    }
}

impl FromStr for WordSource {
    type Err = Infallible;

    /// "embedded" (any case) selects the built-in list; anything else is a path
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("embedded") {
            Ok(Self::Embedded)
        } else {
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Words(words) => write!(f, "{}", words.join(",")),
        }
    }
}

/// Load words from a file
///
/// Returns one entry per non-blank line, trimmed. Entries are not otherwise
/// checked; callers decide what counts as a usable word.
///
/// # Errors
///
/// Returns `StartupError::MissingWordListResource` if the file does not exist
/// and `StartupError::UnreadableWordListResource` if it cannot be read as UTF-8.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, StartupError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| StartupError::from_io(path, e))?;

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    tracing::info!(path = %path.display(), words = words.len(), "word list loaded");
    Ok(words)
}

/// Convert embedded string slice to owned words, skipping blanks
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// A file under the system temp dir, removed on drop
#[cfg(test)]
pub(crate) struct TempFile(pub(crate) PathBuf);

#[cfg(test)]
impl TempFile {
    pub(crate) fn with_bytes(name: &str, bytes: &[u8]) -> Self {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_{}_{name}",
            std::process::id()
        ));
        fs::write(&path, bytes).unwrap();
        Self(path)
    }
}

#[cfg(test)]
impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_keeps_order() {
        let words = words_from_slice(&["garden", "silkworm", "keyboard"]);
        assert_eq!(words, ["garden", "silkworm", "keyboard"]);
    }

    #[test]
    fn words_from_slice_skips_blanks() {
        let words = words_from_slice(&["garden", "", "  ", "keyboard"]);
        assert_eq!(words, ["garden", "keyboard"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let file = TempFile::with_bytes("lines.txt", b"garden\nsilkworm\r\n\n  keyboard  \n");
        let words = load_from_file(&file.0).unwrap();
        assert_eq!(words, ["garden", "silkworm", "keyboard"]);
    }

    #[test]
    fn load_from_file_missing() {
        let result = load_from_file("/definitely/not/here/start.txt");
        assert!(matches!(
            result,
            Err(StartupError::MissingWordListResource { .. })
        ));
    }

    #[test]
    fn load_from_file_not_utf8() {
        let file = TempFile::with_bytes("binary.txt", &[0x67, 0x61, 0xff, 0xfe, 0x0a]);
        let result = load_from_file(&file.0);
        assert!(matches!(
            result,
            Err(StartupError::UnreadableWordListResource { .. })
        ));
    }

    #[test]
    fn load_from_file_directory_is_unreadable() {
        let result = load_from_file(std::env::temp_dir());
        assert!(matches!(
            result,
            Err(StartupError::UnreadableWordListResource { .. })
        ));
    }

    #[test]
    fn source_from_str() {
        assert_eq!("embedded".parse::<WordSource>(), Ok(WordSource::Embedded));
        assert_eq!("EMBEDDED".parse::<WordSource>(), Ok(WordSource::Embedded));
        assert_eq!(
            "data/start.txt".parse::<WordSource>(),
            Ok(WordSource::File(PathBuf::from("data/start.txt")))
        );
    }

    #[test]
    fn embedded_source_loads_slice() {
        let words = WordSource::Embedded.load(&["garden", ""]).unwrap();
        assert_eq!(words, ["garden"]);
    }

    #[test]
    fn file_source_ignores_embedded() {
        let file = TempFile::with_bytes("source.txt", b"keyboard\n");
        let words = WordSource::File(file.0.clone()).load(&["garden"]).unwrap();
        assert_eq!(words, ["keyboard"]);
    }

    #[test]
    fn fixed_words_source() {
        let source = WordSource::Words(vec!["garden".to_string()]);
        assert_eq!(source.load(&["keyboard"]).unwrap(), ["garden"]);
        assert_eq!(source.to_string(), "garden");
    }

    #[test]
    fn source_display() {
        assert_eq!(WordSource::Embedded.to_string(), "embedded");
        assert_eq!(
            WordSource::File(PathBuf::from("words.txt")).to_string(),
            "words.txt"
        );
    }
}
