//! Word n-gram generation over cleaned token sequences.

/// Produce all contiguous windows of `length` tokens, each rendered as a
/// single space-joined string, in document order.
///
/// For a slice of k tokens this yields exactly max(0, k − length + 1) items;
/// fewer tokens than `length` yields an empty vec, never an error.
pub fn ngrams(tokens: &[String], length: usize) -> Vec<String> {
    if length == 0 || tokens.len() < length {
        return Vec::new();
    }
    tokens
        .windows(length)
        .map(|window| window.join(" "))
        .collect()
}
