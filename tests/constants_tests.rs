// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod fx_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use fx_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_thresholds_run_down_the_viewport() {
    // Start sits below end: the element travels upward through the band
    assert!(DESKTOP_START_FRACTION > DESKTOP_END_FRACTION);
    assert!(MOBILE_START_FRACTION > MOBILE_END_FRACTION);
    assert!(EDGE_START_FRACTION > EDGE_END_FRACTION);

    assert!(DESKTOP_OVERSHOOT_MULTIPLIER > 0.0);
    assert!(MOBILE_OVERSHOOT_MULTIPLIER > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn edge_gate_fits_inside_unit_range() {
    assert!(EDGE_GATE_START >= 0.0 && EDGE_GATE_SPAN > 0.0);
    assert!((EDGE_GATE_START + EDGE_GATE_SPAN - 1.0).abs() < 1e-12);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scheduling_stays_near_display_rate() {
    assert!(PROGRESS_EPSILON > 0.0 && PROGRESS_EPSILON < 0.1);
    assert!(SCROLL_THROTTLE_MS >= 16.0 && SCROLL_THROTTLE_MS <= 33.0);
    assert!(MAX_STEP_MS > FRAME_MS);
    assert!(MIN_DENOMINATOR > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hero_windows_are_ordered() {
    assert!(HERO_CURTAIN_WINDOW.0 < HERO_CURTAIN_WINDOW.1);
    assert!(HERO_FADE_WINDOW.0 < HERO_FADE_WINDOW.1);
    assert!(HERO_PARALLAX_FACTOR > 0.0 && HERO_PARALLAX_FACTOR < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_tuning_is_sane() {
    assert!(ENVELOPE_FADE_IN + ENVELOPE_FADE_OUT <= 1.0);
    assert!(CONFETTI_DRAG > 0.0 && CONFETTI_DRAG <= 1.0);
    assert!(CONFETTI_SECOND_BURST_MS < CONFETTI_DURATION_MS);
    assert!(CONFETTI_COUNT > 0 && MAX_PARTICLES >= 2 * CONFETTI_COUNT);
    assert!(VISIBILITY_THRESHOLD > 0.0 && VISIBILITY_THRESHOLD < 1.0);
    assert!(LOGO_REVEAL_THRESHOLD > 0.0 && LOGO_REVEAL_THRESHOLD <= 1.0);
    assert!(LINES_INTENSITY >= 0.0 && LINES_INTENSITY <= 1.0);
    assert!(FLAME_DENSITY > 0.0);
}

#[test]
fn element_ids_are_distinct() {
    let mut ids = vec![
        COUNTDOWN_EPIC_ID,
        COUNTDOWN_LEFT_IMAGE_ID,
        COUNTDOWN_RIGHT_IMAGE_ID,
        SHOWCASE_EPIC_ID,
        SHOWCASE_LOGO_ID,
        SHOWCASE_EDGE_LEFT_ID,
        SHOWCASE_EDGE_RIGHT_ID,
        HERO_VIDEO_ID,
        HERO_CURTAIN_ID,
        HERO_CONTENT_ID,
        PAGE_PROGRESS_ID,
        FLAME_CANVAS_ID,
        LINES_CANVAS_ID,
        CONFETTI_CANVAS_ID,
    ];
    ids.extend(COUNTDOWN_UNIT_IDS);
    let n = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), n);
}
