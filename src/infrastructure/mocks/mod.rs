//! Mock implementations for testing.
//!
//! This module provides test doubles for infrastructure adapters,
//! enabling controlled testing of admission and orchestration logic.

pub mod clock;
pub mod transport;

pub use clock::MockClock;
pub use transport::{MockTransport, RecordedRequest};
