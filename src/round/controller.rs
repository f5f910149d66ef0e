//! Round orchestration
//!
//! Glue between raw input, the validator and whatever front-end is showing
//! the game. The controller owns the game state and the input buffer; the
//! front-end only sees results through a `Presenter`.

use crate::core::{
    Accepted, Candidate, GameState, RejectionReason, RootWord, StartupError, validate,
};
use crate::spell::SpellChecker;
use crate::wordlists::{START_WORDS, WordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// Display capability a front-end provides
///
/// Presentation only: nothing here may change the game.
pub trait Presenter {
    /// Show a rejection to the player
    fn show_error(&mut self, title: &str, message: &str);

    /// Show the root word as the screen title
    fn show_root_word(&mut self, root: &str);

    /// Show the accepted words, newest first
    fn show_used_words(&mut self, used: &[String]);
}

/// Why a submission did not record a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// No round has been started yet
    NoActiveRound,
    /// The validator turned the candidate down
    Rejected(RejectionReason),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActiveRound => write!(f, "No round in progress"),
            Self::Rejected(reason) => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<RejectionReason> for SubmitError {
    fn from(reason: RejectionReason) -> Self {
        Self::Rejected(reason)
    }
}

/// Runs rounds: picks root words, takes submissions, keeps the front-end informed
pub struct RoundController<C> {
    state: GameState,
    checker: C,
    source: WordSource,
    rng: StdRng,
    input: String,
}

impl<C: SpellChecker> RoundController<C> {
    /// Create a controller; no round is started until `start_round`
    ///
    /// With a `seed`, root word selection is reproducible.
    #[must_use]
    pub fn new(source: WordSource, checker: C, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        Self {
            state: GameState::new(),
            checker,
            source,
            rng,
            input: String::new(),
        }
    }

    /// Load the word list and begin a fresh round
    ///
    /// Used for the first round and every restart. Clears the input buffer and
    /// pushes the new root word and the empty word list to the presenter.
    ///
    /// # Errors
    ///
    /// Returns a `StartupError` if the word list is missing, unreadable or has
    /// no usable words. Nothing is shown and the previous round is kept.
    pub fn start_round<P: Presenter + ?Sized>(
        &mut self,
        presenter: &mut P,
    ) -> Result<&RootWord, StartupError> {
        let words = self.source.load(START_WORDS)?;
        let root = self.state.start_round(&words, &mut self.rng)?;

        self.input.clear();
        presenter.show_root_word(root.text());
        presenter.show_used_words(&[]);

        Ok(root)
    }

    /// Validate the input buffer and record it if accepted
    ///
    /// On acceptance the buffer is cleared and the presenter receives the new
    /// word list. On rejection the presenter receives the reason's title and
    /// message once, and the buffer is left for the player to fix.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Rejected` with the first failing check, or
    /// `SubmitError::NoActiveRound` if called before `start_round`.
    pub fn submit<P: Presenter + ?Sized>(
        &mut self,
        presenter: &mut P,
    ) -> Result<Accepted, SubmitError> {
        let root = self.state.root().ok_or(SubmitError::NoActiveRound)?;
        let candidate = Candidate::new(&self.input);

        match validate(&candidate, root, self.state.used(), &self.checker) {
            Ok(accepted) => {
                tracing::debug!(word = accepted.word(), root = root.text(), "word accepted");
                self.state.record_accepted(accepted.word());
                self.input.clear();
                presenter.show_used_words(self.state.used());
                Ok(accepted)
            }
            Err(reason) => {
                tracing::debug!(
                    candidate = candidate.text(),
                    root = root.text(),
                    ?reason,
                    "word rejected"
                );
                presenter.show_error(reason.title(), reason.message());
                Err(reason.into())
            }
        }
    }

    /// Replace the input buffer and submit it
    ///
    /// # Errors
    ///
    /// Same as `submit`.
    pub fn submit_word<P: Presenter + ?Sized>(
        &mut self,
        raw: &str,
        presenter: &mut P,
    ) -> Result<Accepted, SubmitError> {
        self.set_input(raw);
        self.submit(presenter)
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn set_input(&mut self, raw: &str) {
        raw.clone_into(&mut self.input);
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Raw, unnormalized input buffer
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn root(&self) -> Option<&RootWord> {
        self.state.root()
    }

    /// Accepted words, newest first
    #[must_use]
    pub fn used(&self) -> &[String] {
        self.state.used()
    }

    #[must_use]
    pub const fn round(&self) -> u32 {
        self.state.round()
    }

    #[must_use]
    pub const fn checker(&self) -> &C {
        &self.checker
    }
}
