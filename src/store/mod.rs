//! Storage boundary: named wordlist loading and result persistence.

mod file_store;

pub use file_store::FileStore;

use crate::engine::screen::HitCounter;
use crate::types::FilterResult;

/// Loads named wordlists as ordered sequences of strings.
///
/// Deduplication into a set is the caller's responsibility, not the loader's.
/// A missing resource is a load failure, reported distinctly from a loaded
/// empty list.
pub trait WordlistStore {
    /// Load the named list.
    fn load_list(&self, name: &str) -> FilterResult<Vec<String>>;
}

/// Persists named results durably. Re-running a write with the same name
/// overwrites the previous artifact.
pub trait ResultWriter {
    /// Persist an ordered sequence of strings under the given name.
    fn write_list(&self, name: &str, values: &[String]) -> FilterResult<()>;

    /// Persist a keyword → count mapping under the given name.
    fn write_counts(&self, name: &str, counts: &HitCounter) -> FilterResult<()>;
}
