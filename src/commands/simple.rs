//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Anything typed is a word; commands start
//! with a colon so they can never collide with one.

use crate::output::formatters::{format_used_words, letter_tiles, word_count};
use crate::round::{Presenter, RoundController, SubmitError};
use crate::spell::SpellChecker;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    NewRound,
    ShowWords,
    Help,
    Unknown(String),
    Submit(String),
}

/// Interpret a line typed at the prompt
///
/// # Examples
/// ```
/// use word_scramble::commands::simple::{LineCommand, parse_line};
///
/// assert_eq!(parse_line(":q"), LineCommand::Quit);
/// assert_eq!(parse_line("new"), LineCommand::Submit("new".to_string()));
/// ```
#[must_use]
pub fn parse_line(line: &str) -> LineCommand {
    let trimmed = line.trim();

    match trimmed.strip_prefix(':') {
        Some(command) => match command.trim().to_lowercase().as_str() {
            "q" | "quit" | "exit" => LineCommand::Quit,
            "n" | "new" | "restart" => LineCommand::NewRound,
            "w" | "words" => LineCommand::ShowWords,
            "h" | "help" | "?" => LineCommand::Help,
            other => LineCommand::Unknown(other.to_string()),
        },
        None => LineCommand::Submit(line.to_string()),
    }
}

/// Presenter printing straight to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn show_error(&mut self, title: &str, message: &str) {
        println!("{} {}", "❌".red(), title.red().bold());
        println!("   {message}\n");
    }

    fn show_root_word(&mut self, root: &str) {
        println!("{}", "─".repeat(60).cyan());
        println!(
            "Root word: {}",
            letter_tiles(root).bright_yellow().bold()
        );
        println!("{}", "─".repeat(60).cyan());
    }

    fn show_used_words(&mut self, used: &[String]) {
        if let Some(newest) = used.first() {
            println!(
                "{} {}  ({} so far)",
                "✓".green(),
                newest.bright_white().bold(),
                word_count(used.len())
            );
        }
        println!("   {}\n", format_used_words(used).bright_black());
    }
}

/// Run the simple interactive CLI mode
///
/// Starts the first round itself. Ends on `:q` or end of input.
///
/// # Errors
///
/// Returns an error if a round cannot be started (missing or empty word list)
/// or if reading stdin fails.
pub fn run_simple<C: SpellChecker>(controller: &mut RoundController<C>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Scramble - Simple Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    print_help();

    let mut presenter = ConsolePresenter;
    controller
        .start_round(&mut presenter)
        .context("could not start the first round")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let Some(line) = get_user_input("Enter your word", &mut input)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match parse_line(&line) {
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineCommand::NewRound => {
                println!("\n🔄 New round!\n");
                controller
                    .start_round(&mut presenter)
                    .context("could not start a new round")?;
            }
            LineCommand::ShowWords => {
                if let Some(root) = controller.root() {
                    println!("Root word: {}", letter_tiles(root.text()).bright_yellow());
                }
                println!(
                    "{}: {}\n",
                    word_count(controller.used().len()),
                    format_used_words(controller.used())
                );
            }
            LineCommand::Help => print_help(),
            LineCommand::Unknown(command) => {
                println!("Unknown command ':{command}'. Type ':help' for commands.\n");
            }
            LineCommand::Submit(word) => {
                // Rejections already went to the presenter
                if let Err(SubmitError::NoActiveRound) =
                    controller.submit_word(&word, &mut presenter)
                {
                    anyhow::bail!("no round in progress");
                }
            }
        }
    }
}

fn print_help() {
    println!("Make words from the letters of the root word.");
    println!("  - At least 3 letters, each used no more often than in the root");
    println!("  - Real English words only, each word once per round\n");
    println!("Commands: ':new' for a new root word, ':words' to list your words, ':quit' to exit\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str, input: &mut impl BufRead) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("could not flush stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("could not read input")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_submitted_verbatim() {
        assert_eq!(parse_line("rag"), LineCommand::Submit("rag".to_string()));
        assert_eq!(parse_line("  Rag "), LineCommand::Submit("  Rag ".to_string()));
        assert_eq!(parse_line(""), LineCommand::Submit(String::new()));
    }

    #[test]
    fn command_words_without_colon_are_words() {
        assert_eq!(parse_line("quit"), LineCommand::Submit("quit".to_string()));
        assert_eq!(parse_line("new"), LineCommand::Submit("new".to_string()));
    }

    #[test]
    fn colon_commands() {
        assert_eq!(parse_line(":q"), LineCommand::Quit);
        assert_eq!(parse_line(":QUIT"), LineCommand::Quit);
        assert_eq!(parse_line(" :new "), LineCommand::NewRound);
        assert_eq!(parse_line(":restart"), LineCommand::NewRound);
        assert_eq!(parse_line(":words"), LineCommand::ShowWords);
        assert_eq!(parse_line(":?"), LineCommand::Help);
        assert_eq!(
            parse_line(":undo"),
            LineCommand::Unknown("undo".to_string())
        );
    }

    #[test]
    fn get_user_input_strips_newline() {
        let mut input = io::Cursor::new("rag\r\nden\n");
        assert_eq!(
            get_user_input("Word", &mut input).unwrap(),
            Some("rag".to_string())
        );
        assert_eq!(
            get_user_input("Word", &mut input).unwrap(),
            Some("den".to_string())
        );
        assert_eq!(get_user_input("Word", &mut input).unwrap(), None);
    }
}
