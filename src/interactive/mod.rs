//! Full-screen terminal front-end

pub mod app;
mod rendering;

pub use app::{Alert, App, Screen, run_tui};
