//! HTTP transport adapter.
//!
//! Performs the actual POST against the remote endpoint using a blocking
//! reqwest client. I/O faults are mapped into `TransportError`; the
//! orchestrator converts them to the failure-sentinel outcome.

use crate::application::ports::{Transport, TransportError, TransportResponse};
use reqwest::blocking::Client;
use std::time::Duration;

/// Header carrying the caller's detached credential.
pub const SIGNATURE_HEADER: &str = "Signature";

/// Request timeout applied when none is configured.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP transport.
///
/// The underlying client holds a connection pool; clone it freely, clones
/// share the pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the default request timeout.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a transport with a custom request timeout.
    ///
    /// The timeout spans the whole call: connect, write, and body read.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::new(format!("failed to construct http client: {e}")))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post(
        &self,
        url: &str,
        body: &str,
        signature: &str,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header(SIGNATURE_HEADER, signature)
            .body(body.to_owned())
            .send()
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_owned();
        let body = response
            .text()
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(TransportResponse::new(status.as_u16(), status_text, body))
    }
}
