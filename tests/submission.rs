//! Orchestration behavior: short-circuit on rejection, fault containment,
//! and the shape of what goes over the wire.

use rategate::infrastructure::mocks::{MockClock, MockTransport};
use rategate::{
    Document, DocumentSubmitter, SubmissionOutcome, TransportError, TransportResponse,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

const TARGET: &str = "https://api.example.com/documents/create";

fn submitter(limit: u32, clock: &MockClock, transport: &MockTransport) -> DocumentSubmitter {
    DocumentSubmitter::builder(TARGET)
        .with_rate_limit(limit, Duration::from_secs(1))
        .with_clock(Arc::new(clock.clone()))
        .with_transport(Arc::new(transport.clone()))
        .build()
        .unwrap()
}

#[test]
fn rejected_submission_triggers_zero_transport_calls() {
    let clock = MockClock::new(Instant::now());
    let transport = MockTransport::new();
    let submitter = submitter(2, &clock, &transport);
    let document = Document::new("123456789", "doc-1", "DRAFT");

    assert!(submitter.submit(&document, "sig").unwrap().accepted());
    assert!(submitter.submit(&document, "sig").unwrap().accepted());
    assert_eq!(
        submitter.submit(&document, "sig").unwrap(),
        SubmissionOutcome::Rejected
    );
    assert_eq!(
        submitter.submit(&document, "sig").unwrap(),
        SubmissionOutcome::Rejected
    );

    assert_eq!(transport.request_count(), 2);
}

#[test]
fn rejection_clears_after_rollover() {
    let clock = MockClock::new(Instant::now());
    let transport = MockTransport::new();
    let submitter = submitter(1, &clock, &transport);
    let document = Document::new("123456789", "doc-1", "DRAFT");

    assert!(submitter.submit(&document, "sig").unwrap().accepted());
    assert!(!submitter.submit(&document, "sig").unwrap().accepted());

    clock.advance(Duration::from_millis(1100));
    assert!(submitter.submit(&document, "sig").unwrap().accepted());
    assert_eq!(transport.request_count(), 2);
}

#[test]
fn transport_fault_is_contained_as_a_failure_outcome() {
    let clock = MockClock::new(Instant::now());
    let transport = MockTransport::new();
    transport.enqueue_error(TransportError::new("connection refused"));
    let submitter = submitter(5, &clock, &transport);

    let outcome = submitter
        .submit(&Document::new("123456789", "doc-1", "DRAFT"), "sig")
        .unwrap();

    // The call was admitted and completed with the sentinel, not an error.
    assert!(outcome.accepted());
    let response = outcome.response().unwrap();
    assert_eq!(response.status, 500);
    assert_eq!(response.status_text, "Internal Server Error");
    assert_eq!(response.body, "");

    assert_eq!(submitter.metrics().transport_failures(), 1);
}

#[test]
fn successful_submission_carries_the_transport_result() {
    let clock = MockClock::new(Instant::now());
    let transport = MockTransport::new();
    transport.enqueue_response(TransportResponse::new(
        200,
        "OK",
        "{\"document_id\":\"doc-1\"}",
    ));
    let submitter = submitter(5, &clock, &transport);

    let outcome = submitter
        .submit(&Document::new("123456789", "doc-1", "DRAFT"), "sig")
        .unwrap();

    let response = outcome.response().unwrap();
    assert!(response.is_success());
    assert_eq!(response.body, "{\"document_id\":\"doc-1\"}");
}

#[test]
fn wire_request_has_encoded_body_and_detached_credential() {
    let clock = MockClock::new(Instant::now());
    let transport = MockTransport::new();
    let submitter = submitter(5, &clock, &transport);

    submitter
        .submit(
            &Document::new("123456789", "doc-1", "DRAFT"),
            "base64-signature",
        )
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, TARGET);
    assert_eq!(requests[0].signature, "base64-signature");

    // The body is the flat encoding of the record, without the credential.
    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(body["participant_id"], "123456789");
    assert_eq!(body["document_id"], "doc-1");
    assert_eq!(body["status"], "DRAFT");
    assert!(!requests[0].body.contains("base64-signature"));
}

#[test]
fn non_success_status_is_reported_not_raised() {
    let clock = MockClock::new(Instant::now());
    let transport = MockTransport::new();
    transport.enqueue_response(TransportResponse::new(
        400,
        "Bad Request",
        "{\"error\":\"invalid document\"}",
    ));
    let submitter = submitter(5, &clock, &transport);

    let outcome = submitter
        .submit(&Document::new("123456789", "doc-1", "DRAFT"), "sig")
        .unwrap();

    let response = outcome.response().unwrap();
    assert!(!response.is_success());
    assert_eq!(response.status, 400);
    assert_eq!(response.status_text, "Bad Request");
    // A delivered non-2xx response is not a transport failure.
    assert_eq!(submitter.metrics().transport_failures(), 0);
}

#[test]
fn metrics_reflect_every_outcome() {
    let clock = MockClock::new(Instant::now());
    let transport = MockTransport::new();
    transport.enqueue_error(TransportError::new("timeout"));
    let submitter = submitter(2, &clock, &transport);
    let document = Document::new("123456789", "doc-1", "DRAFT");

    submitter.submit(&document, "sig").unwrap(); // admitted, faulted
    submitter.submit(&document, "sig").unwrap(); // admitted, ok
    submitter.submit(&document, "sig").unwrap(); // rejected

    let snapshot = submitter.metrics().snapshot();
    assert_eq!(snapshot.submissions_admitted, 2);
    assert_eq!(snapshot.submissions_rejected, 1);
    assert_eq!(snapshot.transport_failures, 1);
    assert!((snapshot.rejection_rate() - 1.0 / 3.0).abs() < 1e-9);
}
