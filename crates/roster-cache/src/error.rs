//! Cache error types.

use std::path::PathBuf;

use thiserror::Error;

/// Cache operation error.
///
/// Every variant is recoverable: reads degrade to "no cache" and writes
/// are best-effort.
#[derive(Debug, Error)]
pub enum CacheError {
    /// File I/O error.
    #[error("failed to {operation} cache file {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The cache file did not hold a record-list object.
    #[error("malformed cache file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
