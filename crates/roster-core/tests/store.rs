//! Tests for the record store's snapshot mutators and persist hook.

use std::sync::{Arc, Mutex};

use roster_core::{CacheBridge, RecordStore};
use roster_model::{RecordId, RecordPatch, UserRecord};

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

#[derive(Clone, Default)]
struct RecordingBridge {
    cached: Arc<Mutex<Option<Vec<UserRecord>>>>,
    persisted: Arc<Mutex<Vec<Vec<UserRecord>>>>,
}

impl RecordingBridge {
    fn persist_calls(&self) -> Vec<Vec<UserRecord>> {
        self.persisted.lock().unwrap().clone()
    }

    fn set_cached(&self, records: Vec<UserRecord>) {
        *self.cached.lock().unwrap() = Some(records);
    }
}

impl CacheBridge for RecordingBridge {
    fn hydrate(&self) -> Option<Vec<UserRecord>> {
        self.cached.lock().unwrap().clone()
    }

    fn persist(&self, records: &[UserRecord]) {
        self.persisted.lock().unwrap().push(records.to_vec());
    }
}

#[test]
fn test_replace_patches_one_record() {
    let mut store = RecordStore::new(None);
    store.load(vec![record(1, "Ann"), record(2, "Bob")]);

    let patch = RecordPatch {
        name: "Bobby".to_string(),
        email: "bobby@example.com".to_string(),
    };
    let updated = store.replace(RecordId::new(2), &patch);

    assert_eq!(updated.len(), 2);
    assert_eq!(updated[0].name, "Ann");
    assert_eq!(updated[1].name, "Bobby");
    assert_eq!(updated[1].email, "bobby@example.com");
    assert_eq!(updated[1].id, RecordId::new(2));
    assert_eq!(store.records(), updated.as_slice());
}

#[test]
fn test_replace_unknown_id_leaves_list_unchanged() {
    let mut store = RecordStore::new(None);
    store.load(vec![record(1, "Ann")]);
    let before = store.records().to_vec();

    let patch = RecordPatch {
        name: "Zed".to_string(),
        email: "zed@example.com".to_string(),
    };
    let updated = store.replace(RecordId::new(99), &patch);

    assert_eq!(updated, before);
}

#[test]
fn test_remove_drops_only_the_matching_record() {
    let mut store = RecordStore::new(None);
    store.load(vec![record(1, "Ann"), record(2, "Bob"), record(3, "Cid")]);

    let updated = store.remove(RecordId::new(2));

    let ids: Vec<u64> = updated.iter().map(|r| r.id.as_u64()).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_mutators_do_not_touch_earlier_snapshots() {
    let mut store = RecordStore::new(None);
    store.load(vec![record(1, "Ann"), record(2, "Bob")]);
    let snapshot = store.records().to_vec();

    store.remove(RecordId::new(1));

    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].name, "Ann");
}

#[test]
fn test_mutations_trigger_persist_with_full_list() {
    let bridge = RecordingBridge::default();
    let mut store = RecordStore::new(Some(Box::new(bridge.clone())));
    store.load(vec![record(1, "Ann"), record(2, "Bob")]);

    store.remove(RecordId::new(1));
    let patch = RecordPatch {
        name: "Bobby".to_string(),
        email: "bobby@example.com".to_string(),
    };
    store.replace(RecordId::new(2), &patch);

    let calls = bridge.persist_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].len(), 1); // after remove
    assert_eq!(calls[1][0].name, "Bobby"); // after replace
}

#[test]
fn test_load_does_not_persist_but_persist_now_does() {
    let bridge = RecordingBridge::default();
    let mut store = RecordStore::new(Some(Box::new(bridge.clone())));

    store.load(vec![record(1, "Ann")]);
    assert!(bridge.persist_calls().is_empty());

    store.persist_now();
    assert_eq!(bridge.persist_calls().len(), 1);
}

#[test]
fn test_hydrate_from_cache_seeds_records() {
    let bridge = RecordingBridge::default();
    bridge.set_cached(vec![record(7, "Gia")]);
    let mut store = RecordStore::new(Some(Box::new(bridge.clone())));

    assert!(store.hydrate_from_cache());
    assert_eq!(store.records().len(), 1);
    assert_eq!(store.records()[0].id, RecordId::new(7));
    // Hydrating must not write the cache back.
    assert!(bridge.persist_calls().is_empty());
}

#[test]
fn test_hydrate_without_bridge_reports_absent() {
    let mut store = RecordStore::new(None);
    assert!(!store.hydrate_from_cache());
    assert!(store.is_empty());
}
