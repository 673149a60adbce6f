// Host-side tests for frame gating and coalescing.

#![allow(dead_code)]
mod schedule {
    include!("../src/core/schedule.rs");
}

use schedule::*;

#[test]
fn gate_admits_first_call_then_rate_limits() {
    let mut gate = FrameGate::new(16.0);
    assert!(gate.ready(1000.0));
    assert!(!gate.ready(1005.0));
    assert!(!gate.ready(1015.9));
    assert!(gate.ready(1016.0));
    assert!(!gate.ready(1020.0));
    assert!(gate.ready(1040.0));
}

#[test]
fn gate_rejections_do_not_push_the_window() {
    let mut gate = FrameGate::new(33.0);
    assert!(gate.ready(0.0));
    for t in 1..33 {
        assert!(!gate.ready(t as f64));
    }
    assert!(gate.ready(33.0));
}

#[test]
fn gate_rearms_on_backwards_clock_and_reset() {
    let mut gate = FrameGate::new(16.0);
    assert!(gate.ready(500.0));
    assert!(gate.ready(100.0));
    gate.reset();
    assert!(gate.ready(101.0));
}

#[test]
fn zero_interval_gate_always_admits() {
    let mut gate = FrameGate::new(0.0);
    assert!(gate.ready(1.0));
    assert!(gate.ready(1.0));
}

#[test]
fn coalescer_collapses_requests_until_taken() {
    let mut c = Coalescer::default();
    assert!(c.request());
    assert!(!c.request());
    assert!(!c.request());
    assert!(c.is_pending());
    assert!(c.take());
    assert!(!c.take());
    assert!(c.request());
}
