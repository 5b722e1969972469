//! HTTP record source.
//!
//! One read-only GET against a configured endpoint returning the full
//! record list as a JSON array. Single best-effort call: no retries, no
//! auth, no pagination. The session owns failure handling; this crate
//! only maps transport and decode problems into [`SourceError`].

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

use roster_core::{RemoteSource, SourceError};
use roster_model::UserRecord;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with the fetch.
const AGENT: &str = concat!("roster/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP implementation of [`RemoteSource`].
pub struct HttpSource {
    client: Client,
    endpoint: Option<String>,
}

impl HttpSource {
    /// Create a source for `endpoint`.
    ///
    /// The endpoint is optional at construction so a cache-only run can
    /// still build a session; fetching without one yields
    /// [`SourceError::MissingEndpoint`].
    pub fn new(endpoint: Option<String>) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| SourceError::Network(error.to_string()))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

impl RemoteSource for HttpSource {
    fn fetch(&self) -> Result<Vec<UserRecord>, SourceError> {
        let endpoint = self.endpoint.as_deref().ok_or(SourceError::MissingEndpoint)?;
        debug!(%endpoint, "fetching records");

        let response = self
            .client
            .get(endpoint)
            .header(USER_AGENT, AGENT)
            .send()
            .map_err(|error| SourceError::Network(error.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .map_err(|error| SourceError::Network(error.to_string()))?;
        decode_records(&body)
    }
}

/// Decode a fetched payload into the record list.
///
/// Split from the transport so the decoding rules are testable without
/// a live endpoint.
pub fn decode_records(body: &str) -> Result<Vec<UserRecord>, SourceError> {
    serde_json::from_str(body).map_err(|error| SourceError::Decode(error.to_string()))
}
