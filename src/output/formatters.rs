//! Formatting utilities for terminal output

/// Spread a word into uppercase letter tiles: "garden" -> "G A R D E N"
#[must_use]
pub fn letter_tiles(word: &str) -> String {
    word.chars()
        .flat_map(char::to_uppercase)
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Which root letters the typed input would use up
///
/// Each input letter claims the first unclaimed matching root letter. Letters
/// the root cannot supply are ignored, so a partly wrong word still lights up
/// what it can.
#[must_use]
pub fn consumed_letters(root: &str, input: &str) -> Vec<bool> {
    let root: Vec<char> = root.chars().collect();
    let mut consumed = vec![false; root.len()];

    for letter in crate::core::normalize(input).chars() {
        if let Some(index) = root
            .iter()
            .zip(&consumed)
            .position(|(&c, &taken)| c == letter && !taken)
        {
            consumed[index] = true;
        }
    }

    consumed
}

/// Comma-separated list of used words, newest first
#[must_use]
pub fn format_used_words(used: &[String]) -> String {
    if used.is_empty() {
        "(none yet)".to_string()
    } else {
        used.join(", ")
    }
}

/// "1 word", "3 words"
#[must_use]
pub fn word_count(count: usize) -> String {
    if count == 1 {
        "1 word".to_string()
    } else {
        format!("{count} words")
    }
}
