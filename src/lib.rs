//! N-gram blacklist screening for short text documents.
//!
//! Documents are lowercased, tokenized on whitespace (pure-punctuation tokens
//! dropped), expanded into word n-grams of lengths 1–4, and intersected
//! against curated keyword sets. Two drivers consume the intersections:
//! [`select_matching`] keeps documents that hit the primary blacklist,
//! [`filter_matching`] keeps the clean remainder and tallies per-keyword hit
//! counts.
//!
//! Single words are too generic for the primary blacklist, so only the
//! combined 2–4-gram intersection decides a match; the optional auxiliary and
//! custom sets operate at unigram granularity by design.

pub mod engine;
pub mod store;
pub mod types;

pub use engine::classifier::{Classifier, KeywordSet, KeywordSets, NgramMatches};
pub use engine::ngram::ngrams;
pub use engine::screen::{
    filter_matching, select_matching, FilterReport, HitCounter, CLEAN_OUTPUT, HITS_OUTPUT,
    MATCHED_OUTPUT,
};
pub use engine::tokenizer::Tokenizer;
pub use store::{FileStore, ResultWriter, WordlistStore};
pub use types::{FilterError, FilterResult};
