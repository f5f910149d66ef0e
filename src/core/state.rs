//! Game state for one round
//!
//! Holds the root word and the accepted words, newest first. The only ways to
//! change it are starting a round and recording an accepted word.

use super::{RootWord, StartupError};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Root word plus the words accepted against it
#[derive(Debug, Clone, Default)]
pub struct GameState {
    root: Option<RootWord>,
    used: Vec<String>,
    round: u32,
}

impl GameState {
    /// An empty state with no round started yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new round with a random root word from `word_list`
    ///
    /// Blank lines and entries that are not plain words are ignored. Clears
    /// the used words.
    ///
    /// # Errors
    ///
    /// Returns `StartupError::EmptyWordList` if no usable entry is left. The
    /// previous round, if any, stays as it was.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_scramble::core::GameState;
    ///
    /// let mut state = GameState::new();
    /// let mut rng = StdRng::seed_from_u64(7);
    ///
    /// let root = state.start_round(&["garden", "", "silkworm"], &mut rng).unwrap();
    /// assert!(root.text() == "garden" || root.text() == "silkworm");
    /// assert!(state.used().is_empty());
    /// ```
    pub fn start_round<S, R>(
        &mut self,
        word_list: &[S],
        rng: &mut R,
    ) -> Result<&RootWord, StartupError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let roots: Vec<RootWord> = word_list
            .iter()
            .filter_map(|entry| RootWord::new(entry).ok())
            .collect();

        let root = roots
            .choose(rng)
            .cloned()
            .ok_or(StartupError::EmptyWordList)?;

        tracing::info!(
            root = root.text(),
            choices = roots.len(),
            round = self.round + 1,
            "round started"
        );

        self.used.clear();
        self.round += 1;
        Ok(&*self.root.insert(root))
    }

    /// Record a word that already passed validation
    ///
    /// Inserted at the front so the newest word comes first. No checks here.
    pub fn record_accepted(&mut self, word: impl Into<String>) {
        self.used.insert(0, word.into());
    }

    /// Current root word, `None` before the first round
    #[must_use]
    pub const fn root(&self) -> Option<&RootWord> {
        self.root.as_ref()
    }

    /// Accepted words, newest first
    #[must_use]
    pub fn used(&self) -> &[String] {
        &self.used
    }

    /// Number of rounds started so far
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn new_state_has_no_round() {
        let state = GameState::new();
        assert!(state.root().is_none());
        assert!(state.used().is_empty());
        assert_eq!(state.round(), 0);
    }

    #[test]
    fn start_round_picks_from_list() {
        let mut state = GameState::new();
        let words = ["garden", "silkworm", "computer"];

        let root = state.start_round(&words, &mut rng()).unwrap().clone();

        assert!(words.contains(&root.text()));
        assert_eq!(state.root(), Some(&root));
        assert_eq!(state.round(), 1);
    }

    #[test]
    fn start_round_single_entry() {
        let mut state = GameState::new();
        let root = state.start_round(&["garden"], &mut rng()).unwrap();
        assert_eq!(root.text(), "garden");
    }

    #[test]
    fn start_round_skips_blank_entries() {
        let mut state = GameState::new();
        let words = vec![String::new(), "  ".to_string(), "garden".to_string(), String::new()];
        let root = state.start_round(&words, &mut rng()).unwrap();
        assert_eq!(root.text(), "garden");
    }

    #[test]
    fn start_round_normalizes_entries() {
        let mut state = GameState::new();
        let root = state.start_round(&["  Garden\r"], &mut rng()).unwrap();
        assert_eq!(root.text(), "garden");
    }

    #[test]
    fn empty_list_is_fatal() {
        let mut state = GameState::new();
        let empty: [&str; 0] = [];
        assert!(matches!(
            state.start_round(&empty, &mut rng()),
            Err(StartupError::EmptyWordList)
        ));
        assert!(matches!(
            state.start_round(&["", "   ", "two words"], &mut rng()),
            Err(StartupError::EmptyWordList)
        ));
        assert!(state.root().is_none());
        assert_eq!(state.round(), 0);
    }

    #[test]
    fn failed_restart_keeps_previous_round() {
        let mut state = GameState::new();
        state.start_round(&["garden"], &mut rng()).unwrap();
        state.record_accepted("rag");

        let empty: [&str; 0] = [];
        assert!(state.start_round(&empty, &mut rng()).is_err());

        assert_eq!(state.root().map(RootWord::text), Some("garden"));
        assert_eq!(state.used(), ["rag"]);
    }

    #[test]
    fn record_accepted_inserts_at_front() {
        let mut state = GameState::new();
        state.start_round(&["garden"], &mut rng()).unwrap();

        state.record_accepted("rag");
        state.record_accepted("den");
        state.record_accepted("danger");

        assert_eq!(state.used(), ["danger", "den", "rag"]);
    }

    #[test]
    fn restart_clears_used_words() {
        let mut state = GameState::new();
        state.start_round(&["garden"], &mut rng()).unwrap();
        state.record_accepted("cat");
        assert_eq!(state.used().len(), 1);

        state.start_round(&["garden"], &mut rng()).unwrap();
        assert!(state.used().is_empty());
        assert_eq!(state.round(), 2);
    }

    #[test]
    fn same_seed_same_root() {
        let words = ["absolute", "garden", "keyboard", "mountain", "umbrella"];

        let mut first = GameState::new();
        let mut second = GameState::new();
        let a = first.start_round(&words, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = second.start_round(&words, &mut StdRng::seed_from_u64(9)).unwrap();

        assert_eq!(a, b);
    }
}
