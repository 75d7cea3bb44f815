//! N-gram set intersection against curated keyword sets.

use std::collections::HashSet;

use crate::engine::ngram::ngrams;
use crate::engine::tokenizer::Tokenizer;

/// A case-normalized, deduplicated set of keywords (unigrams or multi-word
/// phrases). Membership is exact string equality after lowercasing and
/// space-joining: no stemming, no fuzzy matching, no partial-token matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    entries: HashSet<String>,
}

impl KeywordSet {
    /// Build a keyword set from an ordered list of entries, lowercasing and
    /// deduplicating. Blank entries are discarded.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|e| e.as_ref().trim().to_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    /// Exact membership test.
    pub fn contains(&self, keyword: &str) -> bool {
        self.entries.contains(keyword)
    }

    /// Iterate over the keywords in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the set holds no keywords.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keywords present in the given n-gram set.
    fn intersect(&self, grams: &HashSet<String>) -> HashSet<String> {
        self.entries.intersection(grams).cloned().collect()
    }
}

/// The keyword sets a classifier matches against. The primary blacklist is
/// required; the auxiliary and custom sets are valid to omit, in which case
/// the corresponding intersection output is absent.
#[derive(Debug, Clone)]
pub struct KeywordSets {
    /// Primary blacklist, matched against 2–4-grams only.
    pub primary: KeywordSet,
    /// Auxiliary keyword corpus, matched against unigrams.
    pub auxiliary: Option<KeywordSet>,
    /// Caller-supplied custom blacklist, matched against unigrams.
    pub custom: Option<KeywordSet>,
}

impl KeywordSets {
    /// Sets with only a primary blacklist.
    pub fn primary_only(primary: KeywordSet) -> Self {
        Self {
            primary,
            auxiliary: None,
            custom: None,
        }
    }
}

/// Intersection results for a single document.
///
/// Output depends only on the document text and the keyword sets; no
/// randomness, no external state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NgramMatches {
    /// Intersection of the document's combined 2–4-grams with the primary
    /// blacklist. Non-empty means the document is a match.
    pub phrase_hits: HashSet<String>,
    /// Intersection of the document's unigrams with the auxiliary set, when
    /// one was supplied.
    pub auxiliary_hits: Option<HashSet<String>>,
    /// Intersection of the document's unigrams with the custom set, when one
    /// was supplied.
    pub custom_hits: Option<HashSet<String>>,
}

/// Classifies documents by intersecting their word n-grams with keyword sets.
///
/// Single words are too generic for the primary blacklist (high
/// false-positive rate), so only multi-word phrases count as primary
/// evidence: bigrams, trigrams, and quadgrams are pooled and intersected
/// together. The auxiliary and custom sets operate at unigram granularity;
/// callers supplying those lists accept single-word sensitivity.
pub struct Classifier {
    tokenizer: Tokenizer,
    sets: KeywordSets,
}

impl Classifier {
    /// Create a classifier with the default tokenizer.
    pub fn new(sets: KeywordSets) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            sets,
        }
    }

    /// Create a classifier with a caller-configured tokenizer.
    pub fn with_tokenizer(tokenizer: Tokenizer, sets: KeywordSets) -> Self {
        Self { tokenizer, sets }
    }

    /// The keyword sets this classifier matches against.
    pub fn sets(&self) -> &KeywordSets {
        &self.sets
    }

    /// Compute the keyword intersections for one document.
    ///
    /// The document is lowercased before tokenization, so matching is
    /// case-insensitive. An empty or whitespace-only document produces zero
    /// n-grams and therefore empty intersections; that is a clean result,
    /// not an error.
    pub fn classify(&self, text: &str) -> NgramMatches {
        let tokens = self.tokenizer.tokenize(&text.to_lowercase());

        let unigrams: HashSet<String> = ngrams(&tokens, 1).into_iter().collect();
        let mut xgrams: HashSet<String> = HashSet::new();
        for length in 2..=4 {
            xgrams.extend(ngrams(&tokens, length));
        }

        NgramMatches {
            phrase_hits: self.sets.primary.intersect(&xgrams),
            auxiliary_hits: self
                .sets
                .auxiliary
                .as_ref()
                .map(|set| set.intersect(&unigrams)),
            custom_hits: self
                .sets
                .custom
                .as_ref()
                .map(|set| set.intersect(&unigrams)),
        }
    }

    /// True when the document's 2–4-grams intersect the primary blacklist.
    pub fn is_match(&self, text: &str) -> bool {
        !self.classify(text).phrase_hits.is_empty()
    }
}
