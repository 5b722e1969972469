//! File-backed cache bridge.
//!
//! The cache is a single JSON object keyed by [`CACHE_KEY`], holding the
//! full serialized record list. It is read once at startup and rewritten
//! after every mutation. Both directions degrade gracefully: an
//! unreadable or malformed file hydrates as "no cache", and a failed
//! write is logged and forgotten. The cache never blocks or rolls back
//! an in-memory mutation.

mod error;

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use roster_core::CacheBridge;
use roster_model::UserRecord;

pub use error::{CacheError, Result};

/// Logical key under which the record list is stored.
pub const CACHE_KEY: &str = "data";

/// Cache bridge backed by one JSON file on disk.
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached record list.
    ///
    /// `Ok(None)` covers the absent-file and absent-key cases; decode
    /// failures are errors so the caller can log what went wrong before
    /// treating them as absent too.
    fn read_records(&self) -> Result<Option<Vec<UserRecord>>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(CacheError::Io {
                    operation: "read",
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let mut envelope: BTreeMap<String, Vec<UserRecord>> = serde_json::from_slice(&bytes)
            .map_err(|source| CacheError::Decode {
                path: self.path.clone(),
                source,
            })?;
        Ok(envelope.remove(CACHE_KEY))
    }

    /// Serialize the record list under [`CACHE_KEY`] and swap it into
    /// place via a sibling temp file, so a crashed write can't leave a
    /// half-written cache behind.
    fn write_records(&self, records: &[UserRecord]) -> Result<()> {
        let envelope = BTreeMap::from([(CACHE_KEY, records)]);
        let bytes = serde_json::to_vec(&envelope).map_err(|source| CacheError::Decode {
            path: self.path.clone(),
            source,
        })?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &bytes).map_err(|source| CacheError::Io {
            operation: "write",
            path: temp_path.clone(),
            source,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|source| CacheError::Io {
            operation: "rename",
            path: self.path.clone(),
            source,
        })
    }
}

impl CacheBridge for FileCache {
    fn hydrate(&self) -> Option<Vec<UserRecord>> {
        match self.read_records() {
            Ok(Some(records)) => {
                debug!(path = %self.path.display(), count = records.len(), "cache hit");
                Some(records)
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "no cached records");
                None
            }
            Err(error) => {
                warn!(%error, "cache read failed; treating as absent");
                None
            }
        }
    }

    fn persist(&self, records: &[UserRecord]) {
        match self.write_records(records) {
            Ok(()) => debug!(path = %self.path.display(), count = records.len(), "cache written"),
            Err(error) => warn!(%error, "cache write failed; continuing without mirror"),
        }
    }
}
