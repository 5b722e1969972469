#![deny(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a user record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One user row as produced by the upstream endpoint.
///
/// Identity is `id`; every other field is mutable through the mutation
/// operations. The serde shape matches the endpoint's JSON objects, so a
/// fetched payload deserializes directly into `Vec<UserRecord>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: RecordId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

/// The editable subset of a record applied on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPatch {
    pub name: String,
    pub email: String,
}

impl UserRecord {
    /// Returns a copy of this record with the patch applied.
    pub fn with_patch(&self, patch: &RecordPatch) -> Self {
        Self {
            name: patch.name.clone(),
            email: patch.email.clone(),
            ..self.clone()
        }
    }
}
