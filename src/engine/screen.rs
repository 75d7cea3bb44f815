//! Select/filter drivers that partition a document collection by primary
//! blacklist intersection and persist the results.

use std::collections::BTreeMap;

use log::{debug, info};
use serde::Serialize;

use crate::engine::classifier::{Classifier, KeywordSet};
use crate::store::ResultWriter;
use crate::types::FilterResult;

/// Output name for documents that matched the primary blacklist.
pub const MATCHED_OUTPUT: &str = "porn_related_tweets";
/// Output name for documents with no primary blacklist intersection.
pub const CLEAN_OUTPUT: &str = "porn_filtered_tweets";
/// Output name for the per-keyword hit-count mapping.
pub const HITS_OUTPUT: &str = "porn_ngram_hits";

/// Per-keyword hit counts over a filtering run.
///
/// Initialized with a zero count for every keyword in the primary blacklist,
/// so keywords that never match still appear in the persisted output. A
/// document matching several keywords increments all of them.
///
/// Keys are ordered, so serializing the counter yields the same bytes on
/// every rerun over the same input.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct HitCounter {
    counts: BTreeMap<String, u64>,
}

impl HitCounter {
    /// Create a counter with every keyword of the set at zero.
    pub fn zeroed(keywords: &KeywordSet) -> Self {
        Self {
            counts: keywords.iter().map(|k| (k.to_string(), 0)).collect(),
        }
    }

    /// Record one hit for a keyword. Keywords outside the initial set default
    /// to zero on first read rather than being rejected.
    pub fn record(&mut self, keyword: &str) {
        *self.counts.entry(keyword.to_string()).or_insert(0) += 1;
    }

    /// Count for a keyword; absent keywords read as zero.
    pub fn get(&self, keyword: &str) -> u64 {
        self.counts.get(keyword).copied().unwrap_or(0)
    }

    /// Sum of all counts, i.e. the number of (document, matched-keyword)
    /// pairs counted with multiplicity.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over (keyword, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Number of tracked keywords.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no keywords are tracked.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Result of a filtering run: the clean documents and the hit tally.
#[derive(Debug)]
pub struct FilterReport {
    /// Documents with no primary blacklist intersection, in original order.
    pub clean: Vec<String>,
    /// Per-keyword hit counts over the matching documents.
    pub hits: HitCounter,
}

/// Keep only documents that match the primary blacklist.
///
/// Returns the subsequence of `docs` whose 2–4-gram intersection with the
/// primary blacklist is non-empty, preserving original relative order, and
/// persists it under [`MATCHED_OUTPUT`]. An empty result is valid and still
/// persisted.
pub fn select_matching<W: ResultWriter>(
    docs: &[String],
    classifier: &Classifier,
    writer: &W,
) -> FilterResult<Vec<String>> {
    let mut staging = Vec::new();

    for document in docs {
        let matches = classifier.classify(document);
        if !matches.phrase_hits.is_empty() {
            debug!("matched {:?}: {}", matches.phrase_hits, document);
            staging.push(document.clone());
        }
    }

    info!(
        "select: {} of {} documents matched",
        staging.len(),
        docs.len()
    );
    writer.write_list(MATCHED_OUTPUT, &staging)?;
    Ok(staging)
}

/// Remove documents that match the primary blacklist.
///
/// Returns the clean subsequence of `docs` (empty intersection), preserving
/// order. Every matched keyword of every matching document increments the
/// hit counter. Persists the clean documents under [`CLEAN_OUTPUT`] and the
/// final counter under [`HITS_OUTPUT`].
pub fn filter_matching<W: ResultWriter>(
    docs: &[String],
    classifier: &Classifier,
    writer: &W,
) -> FilterResult<FilterReport> {
    let mut staging = Vec::new();
    let mut hits = HitCounter::zeroed(&classifier.sets().primary);

    for document in docs {
        let matches = classifier.classify(document);
        if matches.phrase_hits.is_empty() {
            staging.push(document.clone());
        } else {
            for keyword in &matches.phrase_hits {
                hits.record(keyword);
            }
        }
    }

    info!(
        "filter: {} of {} documents clean, {} keyword hits",
        staging.len(),
        docs.len(),
        hits.total()
    );
    writer.write_list(CLEAN_OUTPUT, &staging)?;
    writer.write_counts(HITS_OUTPUT, &hits)?;
    Ok(FilterReport {
        clean: staging,
        hits,
    })
}
