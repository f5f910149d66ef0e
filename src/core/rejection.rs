//! Reasons a candidate can be turned down
//!
//! Every reason is recoverable: the round carries on unchanged and the player
//! tries again. Each one maps to a fixed title/message pair for the alert.

use std::fmt;

/// Why a candidate was rejected, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// Fewer than three letters after normalization
    TooShort,
    /// Already accepted earlier in the round
    NotUnique,
    /// Needs letters the root word does not have (or not enough of them)
    NotComposable,
    /// Not in the dictionary
    NotARealWord,
}

impl RejectionReason {
    /// All reasons in the order the validator checks them
    pub const ALL: [Self; 4] = [
        Self::TooShort,
        Self::NotUnique,
        Self::NotComposable,
        Self::NotARealWord,
    ];

    /// Alert title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Word too short!",
            Self::NotUnique => "Word already used.",
            Self::NotComposable => "Invalid word!",
            Self::NotARealWord => "Word not recognized!",
        }
    }

    /// Alert body
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TooShort => "You have entered a very short word.",
            Self::NotUnique => "Enter some unique word.",
            Self::NotComposable => "Please enter a valid word.",
            Self::NotARealWord => "Spelling of word is incorrect, Check your spelling.",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title(), self.message())
    }
}

impl std::error::Error for RejectionReason {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn titles_are_distinct() {
        let titles: HashSet<_> = RejectionReason::ALL.iter().map(|r| r.title()).collect();
        assert_eq!(titles.len(), RejectionReason::ALL.len());
    }

    #[test]
    fn messages_are_distinct() {
        let messages: HashSet<_> = RejectionReason::ALL.iter().map(|r| r.message()).collect();
        assert_eq!(messages.len(), RejectionReason::ALL.len());
    }

    #[test]
    fn display_joins_title_and_message() {
        assert_eq!(
            RejectionReason::TooShort.to_string(),
            "Word too short! You have entered a very short word."
        );
    }
}
