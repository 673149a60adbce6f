// Host-side tests for the particle animator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod progress {
        include!("../src/core/progress.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use fx::constants::*;
use fx::particles::*;
use smallvec::smallvec;

#[derive(Default)]
struct RecordingSurface {
    available: bool,
    begins: usize,
    draws: Vec<f64>,
}

impl ParticleSurface for RecordingSurface {
    fn begin(&mut self, _width: f64, _height: f64) -> bool {
        self.begins += 1;
        self.available
    }
    fn draw(&mut self, _kind: EffectKind, _particle: &Particle, opacity: f64) {
        self.draws.push(opacity);
    }
}

fn single_burst(count: usize, duration_ms: f64) -> EffectConfig {
    EffectConfig {
        emission: Emission::Burst {
            count,
            delays_ms: smallvec![0.0],
        },
        ..EffectConfig::confetti(count, duration_ms)
    }
}

fn assert_live_invariants(a: &ParticleAnimator) {
    let b = a.bounds();
    let m = a.config().cull_margin;
    for p in a.particles() {
        assert!(p.life > 0.0 && p.life <= 1.0, "life out of range: {}", p.life);
        assert!(p.position.x >= -m && p.position.x <= b.x + m);
        assert!(p.position.y >= -m && p.position.y <= b.y + m);
    }
}

#[test]
fn envelope_ramps_in_and_out() {
    let env = Envelope::default();
    assert_eq!(env.opacity(1.0), 0.0);
    assert_eq!(env.opacity(0.0), 0.0);
    assert_eq!(env.opacity(0.5), 1.0);
    // 5% into life: halfway up the 10% ramp
    assert!((env.opacity(0.95) - 0.5).abs() < 1e-9);
    // 10% of life left: halfway down the 20% ramp
    assert!((env.opacity(0.1) - 0.5).abs() < 1e-9);
    assert_eq!(Envelope::LINEAR.opacity(0.3), 0.3);
    assert_eq!(Envelope::LINEAR.opacity(1.0), 1.0);
}

#[test]
fn burst_of_ten_converges_to_zero() {
    let duration = 1200.0;
    let mut a = ParticleAnimator::new(single_burst(10, duration), 7);
    a.resize(400.0, 400.0);
    assert!(a.on_visibility(1.0, 0.0));
    assert!(a.trigger_burst(0.0));
    assert_eq!(a.step(0.0), 10);

    let mut t = 0.0;
    while t < duration + 100.0 {
        t += 16.0;
        a.step(t);
        assert_live_invariants(&a);
    }
    assert_eq!(a.particles().len(), 0);
    assert!(a.is_settled());
}

#[test]
fn confetti_fires_a_second_burst() {
    let mut a = ParticleAnimator::new(EffectConfig::confetti(10, CONFETTI_DURATION_MS), 3);
    a.resize(400.0, 400.0);
    a.on_visibility(1.0, 0.0);
    a.trigger_burst(0.0);
    assert_eq!(a.step(0.0), 10);
    assert!(!a.is_settled());
    let mut t = 0.0;
    while t < CONFETTI_SECOND_BURST_MS + 20.0 {
        t += 16.0;
        a.step(t);
    }
    assert_eq!(a.particles().len(), 20);
}

#[test]
fn confetti_falls_under_gravity() {
    let mut a = ParticleAnimator::new(single_burst(10, 5000.0), 11);
    a.resize(600.0, 600.0);
    a.on_visibility(1.0, 0.0);
    a.trigger_burst(0.0);
    a.step(0.0);
    let vy0: f64 = a.particles().iter().map(|p| p.velocity.y).sum();
    for i in 1..=30 {
        a.step(i as f64 * 16.0);
    }
    let vy1: f64 = a.particles().iter().map(|p| p.velocity.y).sum();
    assert!(vy1 > vy0, "gravity should pull velocities downwards");
}

#[test]
fn idle_animator_does_nothing() {
    let mut a = ParticleAnimator::new(EffectConfig::lines(0.6, 1.0), 1);
    a.resize(800.0, 600.0);
    assert_eq!(a.state(), AnimatorState::Idle);
    assert_eq!(a.step(100.0), 0);
    let mut s = RecordingSurface {
        available: true,
        ..Default::default()
    };
    assert_eq!(a.frame(100.0, Some(&mut s)), FrameOutcome::Idle);
    assert_eq!(s.begins, 0);
}

#[test]
fn visibility_threshold_gates_activation() {
    let mut a = ParticleAnimator::new(EffectConfig::flames(1.0), 1);
    a.resize(300.0, 300.0);
    assert!(!a.on_visibility(0.05, 0.0));
    assert_eq!(a.state(), AnimatorState::Idle);
    assert!(a.on_visibility(VISIBILITY_THRESHOLD, 10.0));
    assert_eq!(a.state(), AnimatorState::Active);
    assert!(!a.on_visibility(0.8, 20.0));
    assert!(a.on_visibility(0.0, 30.0));
    assert_eq!(a.state(), AnimatorState::Idle);
}

#[test]
fn ambient_lines_hold_their_population() {
    let mut a = ParticleAnimator::new(EffectConfig::lines(0.6, 1.0), 42);
    a.resize(1000.0, 500.0);
    // 50 units of 10_000 px² at density 1.2
    assert_eq!(a.target_count(), 60);
    a.on_visibility(1.0, 0.0);
    assert_eq!(a.particles().len(), 60);
    for i in 1..=600 {
        let n = a.step(i as f64 * FRAME_MS);
        assert_eq!(n, 60);
        assert_live_invariants(&a);
    }
}

#[test]
fn lines_enter_from_the_edges_heading_inward() {
    let mut a = ParticleAnimator::new(EffectConfig::lines(1.0, 1.0), 5);
    a.resize(800.0, 400.0);
    a.on_visibility(1.0, 0.0);
    for p in a.particles() {
        if p.position.x < 0.0 {
            assert!(p.velocity.x > 0.0);
        } else {
            assert!(p.position.x > 800.0);
            assert!(p.velocity.x < 0.0);
        }
    }
}

#[test]
fn flames_rise_and_respawn() {
    let mut a = ParticleAnimator::new(EffectConfig::flames(2.5), 9);
    a.resize(400.0, 400.0);
    let target = a.target_count();
    assert_eq!(target, 40);
    a.on_visibility(1.0, 0.0);
    for i in 1..=300 {
        assert_eq!(a.step(i as f64 * 16.0), target);
        assert_live_invariants(&a);
    }
    let mean_y: f64 = a.particles().iter().map(|p| p.position.y).sum::<f64>() / target as f64;
    assert!(mean_y < 400.0, "embers should be above the bottom edge");
}

#[test]
fn resize_trims_ambient_population() {
    let mut a = ParticleAnimator::new(EffectConfig::flames(2.5), 2);
    a.resize(400.0, 400.0);
    a.on_visibility(1.0, 0.0);
    assert_eq!(a.particles().len(), 40);
    a.resize(200.0, 200.0);
    assert_eq!(a.particles().len(), 10);
}

#[test]
fn target_count_is_capped() {
    let mut a = ParticleAnimator::new(EffectConfig::flames(10.0), 2);
    a.resize(5000.0, 5000.0);
    assert_eq!(a.target_count(), MAX_PARTICLES);
}

#[test]
fn missing_surface_skips_without_advancing() {
    let mut a = ParticleAnimator::new(single_burst(10, 5000.0), 4);
    a.resize(400.0, 400.0);
    a.on_visibility(1.0, 0.0);
    a.trigger_burst(0.0);
    a.step(0.0);
    let before = a.particles().to_vec();

    assert_eq!(a.frame(16.0, None), FrameOutcome::Skipped);
    assert_eq!(a.particles(), &before[..]);

    let mut down = RecordingSurface::default();
    assert_eq!(a.frame(32.0, Some(&mut down)), FrameOutcome::Skipped);
    assert_eq!(down.begins, 1);
    assert!(down.draws.is_empty());
    assert_eq!(a.particles(), &before[..]);

    let mut up = RecordingSurface {
        available: true,
        ..Default::default()
    };
    assert_eq!(a.frame(48.0, Some(&mut up)), FrameOutcome::Rendered(10));
    assert_eq!(up.draws.len(), 10);
    assert!(up.draws.iter().all(|o| *o > 0.0 && *o <= 1.0));
}

#[test]
fn ambient_effects_never_settle_and_ignore_bursts() {
    let mut a = ParticleAnimator::new(EffectConfig::lines(0.5, 1.0), 1);
    assert!(!a.trigger_burst(0.0));
    assert!(!a.is_settled());
}

#[test]
fn same_seed_same_simulation() {
    let run = |seed| {
        let mut a = ParticleAnimator::new(EffectConfig::flames(1.0), seed);
        a.resize(300.0, 300.0);
        a.on_visibility(1.0, 0.0);
        for i in 1..=60 {
            a.step(i as f64 * 16.0);
        }
        a.particles().to_vec()
    };
    assert_eq!(run(77), run(77));
}

#[test]
fn hidden_population_resumes_mid_life() {
    let mut a = ParticleAnimator::new(EffectConfig::flames(2.5), 13);
    a.resize(400.0, 400.0);
    a.on_visibility(1.0, 0.0);
    for i in 1..=60 {
        a.step(i as f64 * 16.0);
    }
    let lives_before: Vec<f64> = a.particles().iter().map(|p| p.life).collect();

    assert!(a.on_visibility(0.0, 1000.0));
    // back on screen long after every particle's lifespan
    assert!(a.on_visibility(1.0, 60_000.0));
    assert_eq!(a.step(60_016.0), 40);

    let fresh = a.particles().iter().filter(|p| p.birth_ms >= 60_000.0).count();
    assert!(fresh < 10, "{fresh} of 40 respawned together");
    let lives: Vec<f64> = a.particles().iter().map(|p| p.life).collect();
    let spread = |v: &[f64]| {
        let max = v.iter().cloned().fold(f64::MIN, f64::max);
        let min = v.iter().cloned().fold(f64::MAX, f64::min);
        max - min
    };
    assert!(spread(&lives) > 0.3, "lives collapsed: {lives:?}");
    assert!(spread(&lives_before) > 0.3);
}

#[test]
fn burst_triggered_while_hidden_keeps_its_spacing() {
    let mut a = ParticleAnimator::new(EffectConfig::confetti(10, CONFETTI_DURATION_MS), 21);
    a.resize(400.0, 400.0);
    assert!(a.trigger_burst(0.0));
    assert!(a.on_visibility(1.0, 2000.0));
    assert_eq!(a.step(2000.0), 10);
    assert_eq!(a.step(2000.0 + CONFETTI_SECOND_BURST_MS - 20.0), 10);
    assert_eq!(a.step(2000.0 + CONFETTI_SECOND_BURST_MS), 20);
}

#[test]
fn burst_paused_mid_flight_picks_up_where_it_stopped() {
    let mut a = ParticleAnimator::new(single_burst(10, 1000.0), 8);
    a.resize(600.0, 600.0);
    a.on_visibility(1.0, 0.0);
    a.trigger_burst(0.0);
    a.step(0.0);
    a.step(400.0);
    a.on_visibility(0.0, 450.0);
    a.on_visibility(1.0, 10_000.0);
    assert_eq!(a.step(10_016.0), 10);
    for p in a.particles() {
        assert!((p.life - (1.0 - 416.0 / 1000.0)).abs() < 1e-9);
    }
}

#[test]
fn backing_store_scales_by_pixel_ratio() {
    assert_eq!(backing_store_size(300.0, 150.0, 2.0), (600, 300));
    assert_eq!(backing_store_size(301.5, 100.0, 1.5), (452, 150));
    assert_eq!(backing_store_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_store_size(10.5, 4.0, 0.0), (10, 4));
}
