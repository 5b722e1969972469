//! Collaborator seams: the local cache and the remote record source.
//!
//! Both are trait objects injected into the session so the cache can be
//! absent entirely (a configuration choice, not a second code path) and
//! tests can substitute recorders.

use thiserror::Error;

use roster_model::UserRecord;

/// Durable key-value mirror of the record list.
///
/// Both operations are best-effort. A hydrate that fails for any reason
/// reports `None` exactly as if nothing had been cached; a persist that
/// fails logs inside the implementation and is otherwise silent. Neither
/// failure ever reaches the session as an error.
pub trait CacheBridge {
    /// Read the cached record list, or `None` when absent or unreadable.
    fn hydrate(&self) -> Option<Vec<UserRecord>>;

    /// Mirror the full record list, fire-and-forget.
    fn persist(&self, records: &[UserRecord]);
}

/// One-shot remote source of the initial record list.
pub trait RemoteSource {
    /// Fetch the full record list from the upstream endpoint.
    fn fetch(&self) -> Result<Vec<UserRecord>, SourceError>;
}

/// Failure of the remote fetch.
///
/// The session recovers from every variant by logging and leaving the
/// store at its prior state; none of these is fatal.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("unexpected response status: {0}")]
    Status(u16),

    /// The payload was not a list of user records.
    #[error("malformed payload: {0}")]
    Decode(String),

    /// No endpoint was configured.
    #[error("no endpoint configured")]
    MissingEndpoint,
}
