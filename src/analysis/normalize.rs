//! Token normalization and whitespace tokenization.

use std::io::BufRead;

use crate::error::Result;

/// Normalize a raw word: keep alphabetic characters only, lowercased.
///
/// Returns an empty string when nothing survives; callers discard empties.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphabetic())
        .collect::<String>()
        .to_lowercase()
}

/// Split text on whitespace and normalize each word, dropping empties.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(normalize)
        .filter(|token| !token.is_empty())
}

/// Read every normalized token from a buffered text source, in order.
pub fn read_tokens<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut tokens = Vec::new();

    for line in reader.lines() {
        let line = line?;
        tokens.extend(tokenize(&line));
    }

    Ok(tokens)
}
