//! # rategate
//!
//! Client-side admission control for a rate-limited document submission API.
//!
//! This crate guards a single caller-to-endpoint relationship with a
//! thread-safe admission gate: at most `limit` submissions are let through
//! per time window, and calls arriving into a saturated window are dropped
//! and reported, never queued or retried. Admitted calls are encoded as a
//! flat JSON body and POSTed to the fixed target address with the caller's
//! detached credential in a `Signature` header.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rategate::{Document, DocumentSubmitter};
//! use std::time::Duration;
//!
//! let submitter = DocumentSubmitter::builder("https://api.example.com/documents/create")
//!     .with_rate_limit(5, Duration::from_secs(1))
//!     .build()
//!     .unwrap();
//!
//! let document = Document::new("123456789", "doc-42", "DRAFT");
//!
//! match submitter.submit(&document, "base64-signature").unwrap().response() {
//!     Some(response) if response.is_success() => println!("created"),
//!     Some(response) => println!("failed: {} {}", response.status, response.status_text),
//!     None => println!("dropped: request limit reached"),
//! }
//! ```
//!
//! ## Admission semantics
//!
//! The gate is a counted, fixed-origin window with lazy rollover: state
//! resets on the first attempt after the window expires, not on a timer.
//! The saturation check and the admission increment run under one lock
//! acquisition, so concurrent callers can never overshoot the limit.
//! `try_admit` never blocks or sleeps, and the transport call of an
//! admitted submission happens outside the gate's lock - a slow network
//! call stalls nobody else's admission check.
//!
//! ## Fault handling
//!
//! - A rejected call returns a `Rejected` outcome immediately: no encoding,
//!   no transport call, no memory of the attempt.
//! - A transport fault (connect failure, timeout) is degraded to a
//!   `500 / "Internal Server Error"` sentinel response inside a `Completed`
//!   outcome; it never propagates as an error or panic.
//! - A payload that cannot be encoded is the only `Err` out of `submit`.
//!
//! ## Testing
//!
//! The `test-helpers` feature exposes [`infrastructure::mocks`] with a
//! controllable clock and a scripted, call-recording transport.

// Domain layer - pure business logic
pub mod domain;

// Application layer - orchestration
pub mod application;

// Infrastructure layer - external adapters
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::{
    document::Document,
    gate::{Admission, RateGate},
};

pub use application::{
    gate::AdmissionGate,
    metrics::{Metrics, MetricsSnapshot},
    ports::{Clock, CodecError, DocumentCodec, Transport, TransportError, TransportResponse},
    submitter::{
        BuildError, DocumentSubmitter, DocumentSubmitterBuilder, SubmissionOutcome, SubmitError,
        DEFAULT_REQUEST_LIMIT, DEFAULT_WINDOW,
    },
};

pub use infrastructure::{clock::SystemClock, codec::JsonCodec, http::HttpTransport};
