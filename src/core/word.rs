//! Root words and player candidates
//!
//! A `RootWord` is the word a round is built around. A `Candidate` is what the
//! player typed, normalized once so every check sees the same text.

use std::fmt;

/// The word all candidates draw their letters from for one round
///
/// Always lowercase, non-empty and purely alphabetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord {
    text: String,
}

/// Error type for invalid root words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Root word must not be empty"),
            Self::InvalidCharacters => write!(f, "Root word must contain only letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl RootWord {
    /// Create a root word from raw text
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing is left after trimming
    /// - Any character is not alphabetic (digits, punctuation, inner spaces)
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new(" Garden ").unwrap();
    /// assert_eq!(root.text(), "garden");
    ///
    /// assert!(RootWord::new("").is_err());
    /// assert!(RootWord::new("ice cream").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// A fresh working copy of the root's letters, one entry per occurrence
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        self.text.chars().collect()
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A player-submitted word, normalized and awaiting validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    text: String,
}

impl Candidate {
    /// Normalize raw input into a candidate
    ///
    /// Never fails: an empty or garbage candidate is the validator's business.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Candidate;
    ///
    /// let candidate = Candidate::new("  RaG\n");
    /// assert_eq!(candidate.text(), "rag");
    /// assert_eq!(candidate.len(), 3);
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            text: normalize(raw),
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters, not bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Lowercase and strip surrounding whitespace
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}
