//! Ports (interfaces) for the application layer.
//!
//! In hexagonal architecture, ports define the interfaces that the
//! application layer needs. Infrastructure adapters implement these ports.

use crate::domain::document::Document;
use std::fmt;
use std::fmt::Debug;
use std::time::Instant;

/// Port for obtaining current time.
///
/// This abstraction allows the application layer to work with time
/// without depending on system clock implementation details.
/// Infrastructure provides concrete implementations (SystemClock, MockClock).
pub trait Clock: Send + Sync + Debug {
    /// Get the current instant.
    fn now(&self) -> Instant;
}

/// Result of one completed transport call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Status line text (e.g. "OK", "Internal Server Error")
    pub status_text: String,
    /// Raw response body
    pub body: String,
}

impl TransportResponse {
    /// Create a response from its parts.
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// The sentinel response reported when the transport could not complete
    /// the network operation at all: `500 / "Internal Server Error"` with an
    /// empty body.
    pub fn failure_sentinel() -> Self {
        Self::new(500, "Internal Server Error", "")
    }

    /// Whether the status code is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Error raised by a transport adapter that could not complete a call.
///
/// The orchestrator never propagates this to its caller; it converts the
/// fault into [`TransportResponse::failure_sentinel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Create a transport error with a descriptive message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport error: {}", self.message)
    }
}

impl std::error::Error for TransportError {}

/// Port for the wire transport.
///
/// Exactly one call is made per admitted submission, synchronously from the
/// orchestrator's viewpoint. The credential is carried as transport
/// metadata (a header), never merged into the body.
pub trait Transport: Send + Sync {
    /// POST `body` to `url`, attaching `signature` as the credential header.
    fn post(&self, url: &str, body: &str, signature: &str)
        -> Result<TransportResponse, TransportError>;
}

/// Error raised when a payload cannot be encoded or decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecError {
    message: String,
}

impl CodecError {
    /// Create a codec error with a descriptive message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "codec error: {}", self.message)
    }
}

impl std::error::Error for CodecError {}

/// Port for the payload codec.
///
/// Converts between the structured [`Document`] record and its flat
/// key/value text representation. `decode` is the inverse of `encode`:
/// simple flat records must round-trip.
pub trait DocumentCodec: Send + Sync {
    /// Encode a document into its text body.
    fn encode(&self, document: &Document) -> Result<String, CodecError>;

    /// Decode a text body back into a document.
    fn decode(&self, text: &str) -> Result<Document, CodecError>;
}
