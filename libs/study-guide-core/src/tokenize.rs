//! Word tokenization for definitions and typed answers.
//!
//! Text is first stripped of sentence punctuation (`.`, `!`, `?`, `,` each
//! become a single space), then split into words according to the
//! [`MatchingMode`].

use crate::types::MatchingMode;

const PUNCTUATION: [char; 4] = ['.', '!', '?', ','];

/// Replace every `.`, `!`, `?` and `,` with a space. Other characters are kept.
pub fn normalize_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect()
}

/// Normalize punctuation and split `text` into tokens.
///
/// In [`MatchingMode::Naive`] the text is split on single spaces: empty input
/// gives one empty token, trailing empty pieces are dropped, and leading or
/// repeated spaces produce empty tokens. In [`MatchingMode::Strict`] the text
/// is split on any whitespace and empty tokens never appear.
pub fn tokenize(text: &str, mode: MatchingMode) -> Vec<String> {
    let normalized = normalize_punctuation(text);
    match mode {
        MatchingMode::Naive => split_on_spaces(&normalized),
        MatchingMode::Strict => normalized
            .split_whitespace()
            .map(str::to_string)
            .collect(),
    }
}

fn split_on_spaces(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let mut pieces: Vec<&str> = text.split(' ').collect();
    while pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }

    pieces.into_iter().map(str::to_string).collect()
}

/// Compare two tokens ignoring case, character by character.
pub fn tokens_eq_ignore_case(a: &str, b: &str) -> bool {
    if a.chars().count() != b.chars().count() {
        return false;
    }

    a.chars().zip(b.chars()).all(|(x, y)| {
        x == y || x.to_uppercase().eq(y.to_uppercase()) || x.to_lowercase().eq(y.to_lowercase())
    })
}
