//! In-memory record store with a cache persist hook.

use tracing::debug;

use roster_model::{RecordId, RecordPatch, UserRecord};

use crate::bridge::CacheBridge;

/// Authoritative in-memory record list for the session.
///
/// Mutators build a new list rather than editing in place, so slices
/// handed out earlier are never invalidated mid-computation and the
/// query pipeline always sees a consistent snapshot. Every mutation is
/// mirrored into the cache bridge when one is configured.
pub struct RecordStore {
    records: Vec<UserRecord>,
    bridge: Option<Box<dyn CacheBridge>>,
}

impl RecordStore {
    pub fn new(bridge: Option<Box<dyn CacheBridge>>) -> Self {
        Self {
            records: Vec::new(),
            bridge,
        }
    }

    /// Replace the whole list without touching the cache.
    ///
    /// The hydrate sequence decides when a freshly fetched set is
    /// mirrored; loading from the cache itself must not write it back.
    pub fn load(&mut self, initial: Vec<UserRecord>) {
        debug!(count = initial.len(), "loading record store");
        self.records = initial;
    }

    /// Try to seed the list from the cache bridge.
    ///
    /// Returns false when no bridge is configured or nothing usable was
    /// cached, in which case the caller falls back to the remote fetch.
    pub fn hydrate_from_cache(&mut self) -> bool {
        let Some(bridge) = &self.bridge else {
            return false;
        };
        match bridge.hydrate() {
            Some(records) => {
                debug!(count = records.len(), "hydrated record store from cache");
                self.records = records;
                true
            }
            None => false,
        }
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&UserRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Apply `patch` to the record with `id` and return the new list.
    ///
    /// An unknown id leaves the list unchanged; identity is never patched.
    pub fn replace(&mut self, id: RecordId, patch: &RecordPatch) -> Vec<UserRecord> {
        let updated: Vec<UserRecord> = self
            .records
            .iter()
            .map(|record| {
                if record.id == id {
                    record.with_patch(patch)
                } else {
                    record.clone()
                }
            })
            .collect();
        self.records = updated;
        self.persist();
        self.records.clone()
    }

    /// Remove the record with `id` and return the new list.
    pub fn remove(&mut self, id: RecordId) -> Vec<UserRecord> {
        let updated: Vec<UserRecord> = self
            .records
            .iter()
            .filter(|record| record.id != id)
            .cloned()
            .collect();
        self.records = updated;
        self.persist();
        self.records.clone()
    }

    /// Mirror the current list into the cache immediately.
    ///
    /// Used once after the initial remote fetch; mutators call it
    /// implicitly.
    pub fn persist_now(&self) {
        self.persist();
    }

    fn persist(&self) {
        if let Some(bridge) = &self.bridge {
            bridge.persist(&self.records);
        }
    }
}
