//! File store tests: wordlist loading, result persistence, round-trip
//! fidelity, and load-failure reporting.

use std::collections::HashMap;
use std::fs;

use tempfile::TempDir;

use porn_filter::{
    FileStore, FilterError, HitCounter, KeywordSet, ResultWriter, WordlistStore,
};

// ==================== Helpers ====================

fn store() -> (TempDir, TempDir, FileStore) {
    let wordlists = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let store = FileStore::new(wordlists.path(), output.path());
    (wordlists, output, store)
}

fn write_wordlist(dir: &TempDir, name: &str, lines: &[&str]) {
    fs::write(
        dir.path().join(format!("{name}.csv")),
        lines.join("\n"),
    )
    .unwrap();
}

// ==================== Loading ====================

#[test]
fn test_load_list_one_entry_per_line() {
    let (wordlists, _output, store) = store();
    write_wordlist(&wordlists, "blacklist", &["sexy naked", "asian lesbians"]);

    let entries = store.load_list("blacklist").unwrap();
    assert_eq!(entries, vec!["sexy naked", "asian lesbians"]);
}

#[test]
fn test_load_list_preserves_lines_verbatim() {
    // Blank and padded lines are valid list members; trimming and
    // deduplication happen in KeywordSet construction, not the loader.
    let (wordlists, _output, store) = store();
    write_wordlist(&wordlists, "blacklist", &["  sexy naked  ", "", "   "]);

    let entries = store.load_list("blacklist").unwrap();
    assert_eq!(entries, vec!["  sexy naked  ", "", "   "]);
}

#[test]
fn test_load_missing_list_is_not_found() {
    let (_wordlists, _output, store) = store();
    match store.load_list("no_such_list") {
        Err(FilterError::ListNotFound { name }) => assert_eq!(name, "no_such_list"),
        other => panic!("expected ListNotFound, got {other:?}"),
    }
}

#[test]
fn test_load_empty_list_is_not_an_error() {
    // An existing but empty file loads as an empty list, distinct from a
    // missing resource.
    let (wordlists, _output, store) = store();
    write_wordlist(&wordlists, "empty", &[]);

    let entries = store.load_list("empty").unwrap();
    assert!(entries.is_empty());
}

// ==================== Writing & round trip ====================

#[test]
fn test_write_list_round_trip() {
    let (_wordlists, output, _unused) = store();
    // Point the wordlist dir at the output dir so we can read back what was
    // written.
    let store = FileStore::new(output.path(), output.path());

    let values = vec!["this is a test".to_string(), "another tweet".to_string()];
    store.write_list("clean", &values).unwrap();
    assert_eq!(store.load_list("clean").unwrap(), values);
}

#[test]
fn test_write_list_round_trips_empty_and_whitespace_documents() {
    // Empty and whitespace-only tweets are valid clean-list members and must
    // survive persistence unchanged.
    let output = TempDir::new().unwrap();
    let store = FileStore::new(output.path(), output.path());

    let values = vec![
        "this is a test".to_string(),
        String::new(),
        "   ".to_string(),
        "another tweet".to_string(),
    ];
    store.write_list("clean", &values).unwrap();
    assert_eq!(store.load_list("clean").unwrap(), values);
}

#[test]
fn test_write_list_overwrites() {
    let (_wordlists, output, _unused) = store();
    let store = FileStore::new(output.path(), output.path());

    store.write_list("out", &["old".to_string()]).unwrap();
    store.write_list("out", &["new".to_string()]).unwrap();
    assert_eq!(store.load_list("out").unwrap(), vec!["new"]);
}

#[test]
fn test_write_counts_as_json_mapping() {
    let (_wordlists, output, store) = store();

    let keywords = KeywordSet::from_entries(["sexy naked", "asian lesbians"]);
    let mut counts = HitCounter::zeroed(&keywords);
    counts.record("sexy naked");
    counts.record("sexy naked");

    store.write_counts("hits", &counts).unwrap();

    let raw = fs::read_to_string(output.path().join("hits.json")).unwrap();
    let parsed: HashMap<String, u64> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.get("sexy naked"), Some(&2));
    assert_eq!(parsed.get("asian lesbians"), Some(&0));
}

#[test]
fn test_write_counts_byte_identical_across_reruns() {
    // Counter keys are ordered, so the persisted mapping is byte-identical
    // no matter the order hits were recorded in.
    let (_wordlists, output, store) = store();
    let keywords = KeywordSet::from_entries(["sexy naked", "asian lesbians", "free sex chat"]);

    let mut first = HitCounter::zeroed(&keywords);
    first.record("sexy naked");
    first.record("asian lesbians");
    store.write_counts("hits", &first).unwrap();
    let first_bytes = fs::read(output.path().join("hits.json")).unwrap();

    let mut second = HitCounter::zeroed(&keywords);
    second.record("asian lesbians");
    second.record("sexy naked");
    store.write_counts("hits", &second).unwrap();
    let second_bytes = fs::read(output.path().join("hits.json")).unwrap();

    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_write_creates_output_dir() {
    let wordlists = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let nested = output.path().join("nested").join("out");
    let store = FileStore::new(wordlists.path(), &nested);

    store.write_list("out", &["x".to_string()]).unwrap();
    assert!(nested.join("out.csv").exists());
}
