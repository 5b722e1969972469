//! Tests for the file-backed cache bridge.

use std::fs;

use roster_cache::{CACHE_KEY, FileCache};
use roster_core::CacheBridge;
use roster_model::{RecordId, UserRecord};

fn record(id: u64, name: &str) -> UserRecord {
    UserRecord {
        id: RecordId::new(id),
        name: name.to_string(),
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        phone: "555-0100".to_string(),
        website: "example.org".to_string(),
    }
}

#[test]
fn test_missing_file_hydrates_as_absent() {
    let dir = tempfile::tempdir().expect("temp dir");
    let cache = FileCache::new(dir.path().join("roster-cache.json"));
    assert_eq!(cache.hydrate(), None);
}

#[test]
fn test_persist_then_hydrate_round_trips() {
    let dir = tempfile::tempdir().expect("temp dir");
    let cache = FileCache::new(dir.path().join("roster-cache.json"));
    let records = vec![record(1, "Ann"), record(2, "Bob")];

    cache.persist(&records);

    assert_eq!(cache.hydrate(), Some(records));
}

#[test]
fn test_persist_overwrites_previous_contents() {
    let dir = tempfile::tempdir().expect("temp dir");
    let cache = FileCache::new(dir.path().join("roster-cache.json"));

    cache.persist(&[record(1, "Ann"), record(2, "Bob")]);
    cache.persist(&[record(2, "Bob")]);

    let cached = cache.hydrate().expect("cache present");
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].id, RecordId::new(2));
}

#[test]
fn test_malformed_file_hydrates_as_absent() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("roster-cache.json");
    fs::write(&path, b"not json at all").expect("write garbage");

    let cache = FileCache::new(&path);
    assert_eq!(cache.hydrate(), None);
}

#[test]
fn test_missing_key_hydrates_as_absent() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("roster-cache.json");
    fs::write(&path, br#"{"other": []}"#).expect("write envelope");

    let cache = FileCache::new(&path);
    assert_eq!(cache.hydrate(), None);
}

#[test]
fn test_file_shape_is_an_object_keyed_by_data() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("roster-cache.json");
    let cache = FileCache::new(&path);

    cache.persist(&[record(1, "Ann")]);

    let value: serde_json::Value =
        serde_json::from_slice(&fs::read(&path).expect("read cache")).expect("parse cache");
    assert!(value.get(CACHE_KEY).is_some());
    assert!(value[CACHE_KEY].is_array());
}

#[test]
fn test_write_failure_is_swallowed() {
    // Target directory does not exist, so the temp-file write fails.
    let cache = FileCache::new("/nonexistent-roster-dir/roster-cache.json");
    cache.persist(&[record(1, "Ann")]);
    assert_eq!(cache.hydrate(), None);
}
