// src/graph/text.rs
//! Turns raw text into lowercase alphabetic tokens.

/// Splits text into lowercase ASCII-alphabetic tokens.
///
/// Any character outside `a-z`/`A-Z` separates tokens, so `"don't stop!"`
/// becomes `["don", "t", "stop"]`. Empty or letter-free input yields no tokens.
#[must_use]
pub fn normalize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| !token.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}
