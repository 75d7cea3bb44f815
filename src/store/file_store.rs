//! Flat-file store: line-delimited `.csv` wordlists and JSON count mappings.

use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::engine::screen::HitCounter;
use crate::store::{ResultWriter, WordlistStore};
use crate::types::{FilterError, FilterResult};

/// File-backed store.
///
/// Wordlists are read from `<wordlist_dir>/<name>.csv`, one entry per line.
/// Result lists are written the same way under `<output_dir>/<name>.csv`;
/// count mappings go to `<output_dir>/<name>.json`. Both directories are
/// supplied at construction.
///
/// Lines are returned verbatim: empty and whitespace-only documents are
/// valid list members and must survive a write-then-load round trip.
/// Trimming and deduplication belong to [`KeywordSet`] construction, not the
/// loader.
///
/// [`KeywordSet`]: crate::engine::classifier::KeywordSet
pub struct FileStore {
    wordlist_dir: PathBuf,
    output_dir: PathBuf,
}

impl FileStore {
    /// Create a store over the given wordlist and output directories.
    pub fn new(wordlist_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            wordlist_dir: wordlist_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    fn list_path(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{name}.csv"))
    }

    fn ensure_output_dir(&self) -> FilterResult<()> {
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }
}

impl WordlistStore for FileStore {
    fn load_list(&self, name: &str) -> FilterResult<Vec<String>> {
        let path = Self::list_path(&self.wordlist_dir, name);
        let contents = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                FilterError::ListNotFound {
                    name: name.to_string(),
                }
            } else {
                FilterError::Io(e)
            }
        })?;

        let values: Vec<String> = contents.lines().map(|line| line.to_string()).collect();

        debug!("loaded {} entries from {}", values.len(), path.display());
        Ok(values)
    }
}

impl ResultWriter for FileStore {
    fn write_list(&self, name: &str, values: &[String]) -> FilterResult<()> {
        self.ensure_output_dir()?;
        let path = Self::list_path(&self.output_dir, name);
        let mut out = BufWriter::new(fs::File::create(&path)?);
        for value in values {
            writeln!(out, "{value}")?;
        }
        out.flush()?;

        debug!("wrote {} entries to {}", values.len(), path.display());
        Ok(())
    }

    fn write_counts(&self, name: &str, counts: &HitCounter) -> FilterResult<()> {
        self.ensure_output_dir()?;
        let path = self.output_dir.join(format!("{name}.json"));
        let file = BufWriter::new(fs::File::create(&path)?);
        serde_json::to_writer(file, counts)?;

        debug!("wrote {} counts to {}", counts.len(), path.display());
        Ok(())
    }
}
