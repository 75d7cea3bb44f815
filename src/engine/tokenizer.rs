//! Whitespace tokenizer feeding the n-gram generator.

use std::collections::HashSet;

/// Standard single-character punctuation marks. A token equal to exactly one
/// of these is dropped before n-gram windowing.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Deterministic whitespace tokenizer.
///
/// Splits on whitespace and drops tokens that consist of a single punctuation
/// character. A token merely *containing* punctuation (`don't`, `co-op`) is
/// kept as-is. Dropped tokens do not leave a gap: the remaining tokens close
/// up against each other before windowing.
///
/// Case normalization is owned by the classifier, not the tokenizer.
pub struct Tokenizer {
    punctuation: HashSet<char>,
}

impl Tokenizer {
    /// Create a tokenizer with the standard punctuation set.
    pub fn new() -> Self {
        Self {
            punctuation: PUNCTUATION.chars().collect(),
        }
    }

    /// Create a tokenizer with a caller-supplied punctuation set.
    pub fn with_punctuation(punctuation: impl IntoIterator<Item = char>) -> Self {
        Self {
            punctuation: punctuation.into_iter().collect(),
        }
    }

    /// Tokenize text into whitespace-delimited terms, excluding
    /// pure-punctuation tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter(|token| !self.is_punctuation(token))
            .map(|s| s.to_string())
            .collect()
    }

    fn is_punctuation(&self, token: &str) -> bool {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.punctuation.contains(&c),
            _ => false,
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
