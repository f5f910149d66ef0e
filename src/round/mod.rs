//! Round orchestration between input, validation and display

mod controller;

pub use controller::{Presenter, RoundController, SubmitError};
