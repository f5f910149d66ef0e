//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! Game events (round started, word accepted or rejected, word list loaded)
//! are emitted as `tracing` events by the library. The binary decides where
//! they go:
//!
//! - line modes (`simple`, `check`, `hints`) log to stderr
//! - the full-screen TUI owns the terminal, so it only logs with `--log-file`
//!
//! `RUST_LOG` overrides the level chosen by `-v`.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt::writer::BoxMakeWriter};

/// Where and how much to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
    /// Append to this file instead of stderr
    pub log_file: Option<PathBuf>,
    /// Log to stderr when no file is given
    pub to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            log_file: None,
            to_stderr: true,
        }
    }
}

impl LogConfig {
    /// Map a `-v` count to a level
    ///
    /// - 0: warn
    /// - 1 (`-v`): info
    /// - 2 (`-vv`): debug
    /// - 3+ (`-vvv`): trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    #[must_use]
    pub const fn with_stderr(mut self, enable: bool) -> Self {
        self.to_stderr = enable;
        self
    }

    /// Whether `init_logging` will install a subscriber at all
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.log_file.is_some() || self.to_stderr
    }
}

/// Install the global subscriber described by `config`
///
/// Does nothing when there is neither a log file nor stderr to write to.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let (writer, ansi) = match (&config.log_file, config.to_stderr) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("could not open log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        (None, true) => (BoxMakeWriter::new(std::io::stderr), true),
        (None, false) => return Ok(()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config.level))
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("could not install logger: {e}"))
}

/// `RUST_LOG` wins; otherwise everything at `level`
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy()
}
