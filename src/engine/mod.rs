//! Screening engine: tokenizer, n-gram generator, classifier, and the
//! select/filter drivers.

pub mod classifier;
pub mod ngram;
pub mod screen;
pub mod tokenizer;
