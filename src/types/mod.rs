//! Core result and error types shared across the crate.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors surfaced by the screening pipeline and its file-backed store.
///
/// Classification itself is infallible: malformed documents (empty or
/// whitespace-only) produce zero n-grams and are treated as clean, never as
/// errors. Only the storage boundary can fail.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A named wordlist could not be found. Distinct from a list that loads
    /// empty: running the screen with a silently-empty primary blacklist would
    /// vacuously pass every document as clean.
    #[error("wordlist not found: {name}")]
    ListNotFound { name: String },

    /// Underlying filesystem failure while reading or writing a named
    /// resource.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Hit-count mapping could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
