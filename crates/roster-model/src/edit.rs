use crate::{RecordId, RecordPatch, UserRecord};

/// In-flight edit of a single row.
///
/// Held as `Option<EditBuffer>` by the session, which makes the
/// single-occupancy invariant structural: seeding a new buffer replaces
/// any prior one, and save/cancel drop it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub target: RecordId,
    pub name: String,
    pub email: String,
}

impl EditBuffer {
    /// Seed a buffer from the record about to be edited.
    pub fn seed(record: &UserRecord) -> Self {
        Self {
            target: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
        }
    }

    /// The patch applied to the target record on save.
    pub fn patch(&self) -> RecordPatch {
        RecordPatch {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}
