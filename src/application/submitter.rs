//! Submission orchestration.
//!
//! [`DocumentSubmitter`] is the public entry point: it asks the admission
//! gate for a slot and, when admitted, encodes the payload and performs the
//! transport call, mapping every collaborator fault into a reported outcome
//! rather than a propagated failure.

use crate::application::gate::AdmissionGate;
use crate::application::metrics::Metrics;
use crate::application::ports::{
    Clock, CodecError, DocumentCodec, Transport, TransportResponse,
};
use crate::domain::document::Document;
use crate::domain::gate::Admission;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::codec::JsonCodec;
use crate::infrastructure::http::HttpTransport;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default per-window admission limit used when the builder is not given one.
pub const DEFAULT_REQUEST_LIMIT: u32 = 100;

/// Default window span used when the builder is not given one.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(1);

/// Caller-visible result of one submission attempt.
///
/// A transport result exists exactly when the gate admitted the call, which
/// this enum encodes structurally: `Completed` always carries one,
/// `Rejected` never does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The gate rejected the call; no encoding and no transport call happened
    Rejected,
    /// The gate admitted the call and the transport step ran to a result
    Completed(TransportResponse),
}

impl SubmissionOutcome {
    /// Whether the gate admitted the call.
    pub fn accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Completed(_))
    }

    /// The transport result, present only for accepted calls.
    pub fn response(&self) -> Option<&TransportResponse> {
        match self {
            SubmissionOutcome::Rejected => None,
            SubmissionOutcome::Completed(response) => Some(response),
        }
    }
}

/// Error returned by [`DocumentSubmitter::submit`].
///
/// Rate-limit rejections and transport faults are outcomes, not errors;
/// only a payload that cannot be encoded surfaces here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The payload could not be encoded into a request body
    Codec(CodecError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Codec(e) => write!(f, "failed to encode payload: {}", e),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<CodecError> for SubmitError {
    fn from(e: CodecError) -> Self {
        SubmitError::Codec(e)
    }
}

/// Error returned when building a [`DocumentSubmitter`] fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The admission limit must be greater than zero
    ZeroLimit,
    /// The window span must be greater than zero
    ZeroWindow,
    /// The target address must be non-empty
    EmptyTargetUrl,
    /// The default HTTP transport could not be constructed
    Transport(crate::application::ports::TransportError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::ZeroLimit => write!(f, "request limit must be greater than 0"),
            BuildError::ZeroWindow => write!(f, "window duration must be greater than 0"),
            BuildError::EmptyTargetUrl => write!(f, "target url must be non-empty"),
            BuildError::Transport(e) => write!(f, "failed to construct transport: {}", e),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<crate::application::ports::TransportError> for BuildError {
    fn from(e: crate::application::ports::TransportError) -> Self {
        BuildError::Transport(e)
    }
}

/// Rate-limited client for a single document submission endpoint.
///
/// One gate guards one submitter; both live for the submitter's lifetime.
/// `submit` may be called concurrently from any number of threads.
///
/// # Example
/// ```no_run
/// use rategate::{Document, DocumentSubmitter};
/// use std::time::Duration;
///
/// let submitter = DocumentSubmitter::builder("https://api.example.com/documents/create")
///     .with_rate_limit(5, Duration::from_secs(1))
///     .build()
///     .unwrap();
///
/// let document = Document::new("123456789", "doc-42", "DRAFT");
/// let outcome = submitter.submit(&document, "base64-signature").unwrap();
///
/// if let Some(response) = outcome.response() {
///     println!("{} {}", response.status, response.status_text);
/// } else {
///     println!("dropped: request limit reached");
/// }
/// ```
pub struct DocumentSubmitter {
    gate: AdmissionGate,
    transport: Arc<dyn Transport>,
    codec: Arc<dyn DocumentCodec>,
    target_url: String,
    metrics: Metrics,
}

impl DocumentSubmitter {
    /// Start building a submitter for the given target address.
    pub fn builder(target_url: impl Into<String>) -> DocumentSubmitterBuilder {
        DocumentSubmitterBuilder::new(target_url)
    }

    /// Submit one document with its detached credential.
    ///
    /// The gate decides first: a rejected call returns
    /// [`SubmissionOutcome::Rejected`] immediately, with no encoding and no
    /// transport call - the request is dropped, not queued, and the caller
    /// decides whether to retry. An admitted call is encoded and sent;
    /// a transport fault degrades to
    /// [`TransportResponse::failure_sentinel`] inside a `Completed` outcome.
    ///
    /// # Errors
    /// Returns [`SubmitError::Codec`] if the payload cannot be encoded.
    /// Transport faults never surface as errors.
    pub fn submit(
        &self,
        document: &Document,
        signature: &str,
    ) -> Result<SubmissionOutcome, SubmitError> {
        match self.gate.try_admit() {
            Admission::Rejected => {
                self.metrics.record_rejected();
                debug!(
                    url = %self.target_url,
                    "request limit reached for current window, dropping submission"
                );
                return Ok(SubmissionOutcome::Rejected);
            }
            Admission::Admitted => {
                self.metrics.record_admitted();
            }
        }

        let body = self.codec.encode(document)?;

        let response = match self.transport.post(&self.target_url, &body, signature) {
            Ok(response) => response,
            Err(e) => {
                self.metrics.record_transport_failure();
                warn!(
                    url = %self.target_url,
                    error = %e,
                    "transport fault, reporting failure outcome"
                );
                TransportResponse::failure_sentinel()
            }
        };

        Ok(SubmissionOutcome::Completed(response))
    }

    /// The fixed target address submissions are posted to.
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    /// Counters for this submitter's outcomes.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The admission gate guarding this submitter.
    pub fn gate(&self) -> &AdmissionGate {
        &self.gate
    }
}

/// Builder for constructing a [`DocumentSubmitter`].
///
/// The rate-limit parameters are fixed at construction and not
/// reconfigurable afterward. Ports left unset fall back to the production
/// adapters: [`SystemClock`], [`HttpTransport`], [`JsonCodec`].
pub struct DocumentSubmitterBuilder {
    target_url: String,
    limit: u32,
    window: Duration,
    clock: Option<Arc<dyn Clock>>,
    transport: Option<Arc<dyn Transport>>,
    codec: Option<Arc<dyn DocumentCodec>>,
}

impl DocumentSubmitterBuilder {
    fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            limit: DEFAULT_REQUEST_LIMIT,
            window: DEFAULT_WINDOW,
            clock: None,
            transport: None,
            codec: None,
        }
    }

    /// Set the admission limit per window and the window span.
    pub fn with_rate_limit(mut self, limit: u32, window: Duration) -> Self {
        self.limit = limit;
        self.window = window;
        self
    }

    /// Use a custom clock (e.g. a mock clock in tests).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Use a custom transport instead of the default HTTP client.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a custom payload codec instead of the default JSON codec.
    pub fn with_codec(mut self, codec: Arc<dyn DocumentCodec>) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Build the submitter.
    ///
    /// # Errors
    /// Returns `BuildError` if the configuration is invalid or the default
    /// transport cannot be constructed.
    pub fn build(self) -> Result<DocumentSubmitter, BuildError> {
        if self.target_url.trim().is_empty() {
            return Err(BuildError::EmptyTargetUrl);
        }
        if self.limit == 0 {
            return Err(BuildError::ZeroLimit);
        }
        if self.window.is_zero() {
            return Err(BuildError::ZeroWindow);
        }

        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock::new()) as Arc<dyn Clock>);
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new()?) as Arc<dyn Transport>,
        };
        let codec = self
            .codec
            .unwrap_or_else(|| Arc::new(JsonCodec::new()) as Arc<dyn DocumentCodec>);

        Ok(DocumentSubmitter {
            gate: AdmissionGate::new(self.limit, self.window, clock),
            transport,
            codec,
            target_url: self.target_url,
            metrics: Metrics::new(),
        })
    }
}
