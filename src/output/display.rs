//! Display functions for command results

use super::formatters::{letter_tiles, word_count};
use crate::commands::{CheckResult, HintsResult};
use colored::Colorize;

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root:      {}",
        letter_tiles(&result.root).bright_yellow().bold()
    );
    println!("Candidate: {}", result.candidate.bright_white().bold());
    println!("{}", "─".repeat(60).cyan());

    match &result.verdict {
        Ok(word) => {
            println!("\n{}", format!("✅ '{word}' would be accepted").green().bold());
        }
        Err(reason) => {
            println!("\n{}", format!("❌ {}", reason.title()).red().bold());
            println!("   {}", reason.message());
        }
    }

    if let Some(unused) = &result.unused_letters {
        let unused: String = unused.iter().collect();
        if unused.is_empty() {
            println!("   Uses every letter of the root word");
        } else {
            println!("   Letters left over: {}", letter_tiles(&unused).bright_black());
        }
    }
}

/// Print the result of a hints search
pub fn print_hints_result(result: &HintsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORDS FROM".bright_cyan().bold(),
        letter_tiles(&result.root).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📖 {} found in a dictionary of {}",
        word_count(result.total_found),
        result.dictionary_size
    );

    let mut current_len = 0;
    for word in &result.words {
        let len = word.chars().count();
        if len != current_len {
            current_len = len;
            println!("\n  {}", format!("{len} letters").bright_cyan());
        }
        println!("    • {word}");
    }

    let hidden = result.total_found - result.words.len();
    if hidden > 0 {
        println!("\n  … and {} more", word_count(hidden));
    }
    println!();
}
