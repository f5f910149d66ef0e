//! Startup failures
//!
//! A round cannot begin without a root word. These errors stop the round
//! instead of falling back to a built-in word, which would hide a missing or
//! broken word-list resource. The same errors come back from loading a
//! dictionary file, so the messages only name the path and callers add
//! which list it was.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal error raised while preparing a round
#[derive(Debug)]
pub enum StartupError {
    /// The word-list file does not exist
    MissingWordListResource { path: PathBuf },
    /// The word-list file exists but could not be read as UTF-8 text
    UnreadableWordListResource { path: PathBuf, source: io::Error },
    /// The word list has no usable entries
    EmptyWordList,
}

impl StartupError {
    /// Classify an I/O failure on `path`
    #[must_use]
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::MissingWordListResource { path }
        } else {
            Self::UnreadableWordListResource { path, source }
        }
    }
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWordListResource { path } => {
                write!(f, "Could not find {}", path.display())
            }
            Self::UnreadableWordListResource { path, .. } => {
                write!(f, "Could not load contents of {}", path.display())
            }
            Self::EmptyWordList => write!(f, "No usable words in the list"),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnreadableWordListResource { source, .. } => Some(source),
            _ => None,
        }
    }
}
