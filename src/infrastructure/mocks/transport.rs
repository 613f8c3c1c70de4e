//! Mock transport for testing.

use crate::application::ports::{Transport, TransportError, TransportResponse};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One request observed by the mock transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Target address the orchestrator posted to
    pub url: String,
    /// Encoded request body
    pub body: String,
    /// Credential header value
    pub signature: String,
}

/// Mock transport recording every call and replaying scripted results.
///
/// With nothing scripted, every call succeeds with `200 OK` and an empty
/// JSON object body. Script per-call results with [`enqueue_response`] and
/// [`enqueue_error`]; scripted results are consumed in FIFO order.
///
/// Clones share the same script and the same recorded-call log, so a test
/// can hand one clone to the submitter and keep another for assertions.
///
/// [`enqueue_response`]: MockTransport::enqueue_response
/// [`enqueue_error`]: MockTransport::enqueue_error
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    script: Arc<Mutex<VecDeque<Result<TransportResponse, TransportError>>>>,
}

impl MockTransport {
    /// Create a mock transport that answers `200 OK` until scripted otherwise.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response for a future call.
    pub fn enqueue_response(&self, response: TransportResponse) {
        self.script
            .lock()
            .expect("MockTransport mutex poisoned - a test thread panicked while holding the lock")
            .push_back(Ok(response));
    }

    /// Queue an I/O fault for a future call.
    pub fn enqueue_error(&self, error: TransportError) {
        self.script
            .lock()
            .expect("MockTransport mutex poisoned - a test thread panicked while holding the lock")
            .push_back(Err(error));
    }

    /// Number of calls observed so far.
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .expect("MockTransport mutex poisoned - a test thread panicked while holding the lock")
            .len()
    }

    /// Snapshot of every call observed so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("MockTransport mutex poisoned - a test thread panicked while holding the lock")
            .clone()
    }
}

impl Transport for MockTransport {
    fn post(
        &self,
        url: &str,
        body: &str,
        signature: &str,
    ) -> Result<TransportResponse, TransportError> {
        self.requests
            .lock()
            .expect("MockTransport mutex poisoned - a test thread panicked while holding the lock")
            .push(RecordedRequest {
                url: url.to_owned(),
                body: body.to_owned(),
                signature: signature.to_owned(),
            });

        self.script
            .lock()
            .expect("MockTransport mutex poisoned - a test thread panicked while holding the lock")
            .pop_front()
            .unwrap_or_else(|| Ok(TransportResponse::new(200, "OK", "{}")))
    }
}
