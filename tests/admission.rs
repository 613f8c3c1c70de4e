//! Window admission and rollover behavior through the public API.

use rategate::infrastructure::mocks::MockClock;
use rategate::AdmissionGate;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn gate_with(limit: u32, window: Duration, clock: &MockClock) -> AdmissionGate {
    AdmissionGate::new(limit, window, Arc::new(clock.clone()))
}

#[test]
fn admits_limit_calls_within_window_and_rejects_the_next() {
    let clock = MockClock::new(Instant::now());
    let gate = gate_with(3, Duration::from_secs(1), &clock);

    for _ in 0..3 {
        assert!(gate.try_admit().is_admitted());
    }
    assert!(gate.try_admit().is_rejected());
    assert!(gate.try_admit().is_rejected());
}

#[test]
fn rollover_admits_after_saturation() {
    let clock = MockClock::new(Instant::now());
    let gate = gate_with(2, Duration::from_secs(1), &clock);

    assert!(gate.try_admit().is_admitted());
    assert!(gate.try_admit().is_admitted());
    assert!(gate.try_admit().is_rejected());

    clock.advance(Duration::from_millis(1001));

    // New window: saturation is forgotten.
    assert!(gate.try_admit().is_admitted());
}

#[test]
fn rollover_anchors_the_new_window_at_the_admitting_call() {
    let clock = MockClock::new(Instant::now());
    let gate = gate_with(1, Duration::from_secs(1), &clock);

    assert!(gate.try_admit().is_admitted());

    clock.advance(Duration::from_millis(1500));
    assert!(gate.try_admit().is_admitted());

    // 900ms into the fresh window: still saturated.
    clock.advance(Duration::from_millis(900));
    assert!(gate.try_admit().is_rejected());

    // 1001ms after the anchor: rolled over again.
    clock.advance(Duration::from_millis(101));
    assert!(gate.try_admit().is_admitted());
}

#[test]
fn idle_gap_then_burst_resets_exactly_once() {
    let clock = MockClock::new(Instant::now());
    let gate = gate_with(3, Duration::from_secs(1), &clock);

    for _ in 0..3 {
        assert!(gate.try_admit().is_admitted());
    }

    // Long idle gap; the following burst gets one fresh window, no more.
    clock.advance(Duration::from_secs(3600));

    assert!(gate.try_admit().is_admitted());
    assert!(gate.try_admit().is_admitted());
    assert!(gate.try_admit().is_admitted());
    assert!(gate.try_admit().is_rejected());
}

#[test]
fn worked_example_limit_3_window_1s() {
    // t=0,0,0,0 -> admit,admit,admit,reject; t=1.1s -> admit (fresh window).
    let clock = MockClock::new(Instant::now());
    let gate = gate_with(3, Duration::from_secs(1), &clock);

    assert!(gate.try_admit().is_admitted());
    assert!(gate.try_admit().is_admitted());
    assert!(gate.try_admit().is_admitted());
    assert!(gate.try_admit().is_rejected());

    clock.advance(Duration::from_millis(1100));
    assert!(gate.try_admit().is_admitted());

    // Count restarted at 1: two more fit, the fourth does not.
    assert!(gate.try_admit().is_admitted());
    assert!(gate.try_admit().is_admitted());
    assert!(gate.try_admit().is_rejected());
}

#[test]
fn elapsed_exactly_equal_to_window_stays_in_the_old_window() {
    let clock = MockClock::new(Instant::now());
    let gate = gate_with(1, Duration::from_secs(1), &clock);

    assert!(gate.try_admit().is_admitted());

    clock.advance(Duration::from_secs(1));
    assert!(gate.try_admit().is_rejected());

    clock.advance(Duration::from_nanos(1));
    assert!(gate.try_admit().is_admitted());
}

#[test]
fn limit_of_one_admits_one_per_window() {
    let clock = MockClock::new(Instant::now());
    let gate = gate_with(1, Duration::from_secs(1), &clock);

    for _ in 0..5 {
        assert!(gate.try_admit().is_admitted());
        assert!(gate.try_admit().is_rejected());
        assert!(gate.try_admit().is_rejected());
        clock.advance(Duration::from_millis(1050));
    }
}
