//! Word Scramble - CLI
//!
//! Full-screen TUI by default, plus a line-based mode and two one-shot
//! commands for checking a word and listing every word a root can make.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_scramble::{
    commands::{check_word, run_hints, run_simple},
    interactive::{App, run_tui},
    logging::{LogConfig, init_logging},
    output::{print_check_result, print_hints_result},
    round::RoundController,
    spell::DictionarySpellChecker,
    wordlists::{DICTIONARY, WordSource},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Build as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: WordSource,

    /// Dictionary: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: WordSource,

    /// Seed for root word selection (reproducible rounds)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Append logs to this file (the TUI only logs when this is set)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Play this root word instead of a random one
        #[arg(short, long)]
        root: Option<String>,
    },

    /// Simple CLI mode (line-based game without TUI)
    Simple {
        /// Play this root word instead of a random one
        #[arg(short, long)]
        root: Option<String>,
    },

    /// Check whether a word would be accepted for a root word
    Check {
        /// The root word
        #[arg(short, long)]
        root: String,

        /// Words already found this round, comma-separated
        #[arg(short, long, value_delimiter = ',')]
        used: Vec<String>,

        /// The word to check
        word: String,
    },

    /// List the dictionary words a root word can make
    Hints {
        /// The root word
        root: String,

        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { root: None });

    let log_config = LogConfig::from_verbosity(cli.verbose)
        .with_log_file(cli.log_file)
        .with_stderr(!matches!(command, Commands::Play { .. }));
    init_logging(&log_config)?;

    let dictionary = load_dictionary(&cli.dictionary)?;

    match command {
        Commands::Play { root } => {
            let source = root_source(root, cli.words);
            run_play_command(source, dictionary, cli.seed)
        }
        Commands::Simple { root } => {
            let source = root_source(root, cli.words);
            let mut controller = RoundController::new(source, dictionary, cli.seed);
            run_simple(&mut controller)
        }
        Commands::Check { root, used, word } => run_check_command(&root, &used, &word, &dictionary),
        Commands::Hints { root, limit } => run_hints_command(&root, &dictionary, limit),
    }
}

/// Load the dictionary selected by `-d`
fn load_dictionary(source: &WordSource) -> Result<DictionarySpellChecker> {
    let words = source
        .load(DICTIONARY)
        .with_context(|| format!("could not load dictionary '{source}'"))?;
    let dictionary = DictionarySpellChecker::english(words);

    tracing::info!(source = %source, words = dictionary.len(), "dictionary ready");
    Ok(dictionary)
}

/// A `--root` on the command line replaces the root word list
fn root_source(root: Option<String>, words: WordSource) -> WordSource {
    root.map_or(words, |root| WordSource::Words(vec![root]))
}

fn run_play_command(
    source: WordSource,
    dictionary: DictionarySpellChecker,
    seed: Option<u64>,
) -> Result<()> {
    let mut app = App::new(RoundController::new(source, dictionary, seed));

    // Fail before the terminal switches to raw mode
    app.start_round()
        .context("could not start the first round")?;
    run_tui(app)
}

fn run_check_command(
    root: &str,
    used: &[String],
    word: &str,
    dictionary: &DictionarySpellChecker,
) -> Result<()> {
    let result = check_word(root, used, word, dictionary)
        .with_context(|| format!("invalid root word '{root}'"))?;
    print_check_result(&result);
    Ok(())
}

fn run_hints_command(
    root: &str,
    dictionary: &DictionarySpellChecker,
    limit: Option<usize>,
) -> Result<()> {
    let result = run_hints(root, dictionary, limit)
        .with_context(|| format!("invalid root word '{root}'"))?;
    print_hints_result(&result);
    Ok(())
}
