use super::constants::*;
use super::progress::clamp01;
use glam::DVec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f64::consts::TAU;

/// Which decorative effect a particle belongs to; selects spawn and draw style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    Flames,
    Lines,
    Confetti,
}

/// Fade-in/fade-out opacity curve over a particle's life fraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub fade_in: f64,
    pub fade_out: f64,
    pub peak: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            fade_in: ENVELOPE_FADE_IN,
            fade_out: ENVELOPE_FADE_OUT,
            peak: 1.0,
        }
    }
}

impl Envelope {
    /// Plain `opacity = life`, used by one-shot bursts.
    pub const LINEAR: Envelope = Envelope {
        fade_in: 0.0,
        fade_out: 1.0,
        peak: 1.0,
    };

    /// Opacity for a remaining-life value (1 at birth, 0 at death).
    pub fn opacity(&self, life: f64) -> f64 {
        let life = clamp01(life);
        let age = 1.0 - life;
        let ramp_in = if self.fade_in > 0.0 { age / self.fade_in } else { 1.0 };
        let ramp_out = if self.fade_out > 0.0 { life / self.fade_out } else { 1.0 };
        clamp01(ramp_in.min(ramp_out)) * self.peak
    }
}

/// How particles enter the simulation.
#[derive(Clone, Debug, PartialEq)]
pub enum Emission {
    /// Keep the population at the area-derived target, replacing culled particles.
    Ambient,
    /// `count` particles per burst, one burst per delay after a trigger; nothing respawns.
    Burst {
        count: usize,
        delays_ms: SmallVec<[f64; 4]>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectConfig {
    pub kind: EffectKind,
    pub emission: Emission,
    /// Particles per `DENSITY_AREA_PX` square pixels (ambient only).
    pub density: f64,
    pub speed: f64,
    /// Per-frame velocity retention.
    pub drag: f64,
    /// Per-frame vertical acceleration; negative rises.
    pub gravity: f64,
    pub lifespan_ms: (f64, f64),
    pub cull_margin: f64,
    pub envelope: Envelope,
    pub visibility_threshold: f64,
}

impl EffectConfig {
    /// Streaks of light travelling horizontally across the container.
    pub fn lines(intensity: f64, speed: f64) -> Self {
        let intensity = intensity.clamp(0.0, 1.0);
        Self {
            kind: EffectKind::Lines,
            emission: Emission::Ambient,
            density: 2.0 * intensity,
            speed,
            drag: 1.0,
            gravity: 0.0,
            lifespan_ms: (100.0 * FRAME_MS, 300.0 * FRAME_MS),
            cull_margin: 200.0,
            envelope: Envelope {
                peak: 0.4 * intensity,
                ..Envelope::default()
            },
            visibility_threshold: VISIBILITY_THRESHOLD,
        }
    }

    /// Flickering embers rising from the bottom edge.
    pub fn flames(density: f64) -> Self {
        Self {
            kind: EffectKind::Flames,
            emission: Emission::Ambient,
            density: density.max(0.0),
            speed: 1.0,
            drag: 0.99,
            gravity: -0.02,
            lifespan_ms: (600.0, 1400.0),
            cull_margin: 60.0,
            envelope: Envelope::default(),
            visibility_threshold: VISIBILITY_THRESHOLD,
        }
    }

    /// Two bursts thrown out of the container centre, falling under gravity.
    pub fn confetti(count: usize, duration_ms: f64) -> Self {
        Self {
            kind: EffectKind::Confetti,
            emission: Emission::Burst {
                count,
                delays_ms: SmallVec::from_slice(&[0.0, CONFETTI_SECOND_BURST_MS]),
            },
            density: 0.0,
            speed: 1.0,
            drag: CONFETTI_DRAG,
            gravity: CONFETTI_GRAVITY,
            lifespan_ms: (duration_ms, duration_ms),
            cull_margin: 400.0,
            envelope: Envelope::LINEAR,
            visibility_threshold: VISIBILITY_THRESHOLD,
        }
    }
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self::confetti(CONFETTI_COUNT, CONFETTI_DURATION_MS)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Degrees.
    pub rotation: f64,
    pub spin: f64,
    pub scale: f64,
    pub size: DVec2,
    /// Remaining life, 1 at birth and 0 at expiry.
    pub life: f64,
    pub birth_ms: f64,
    pub lifespan_ms: f64,
    pub hue: f64,
    pub lightness: f64,
}

impl Particle {
    fn refresh_life(&mut self, now_ms: f64) {
        let age = now_ms - self.birth_ms;
        self.life = clamp01(1.0 - age / self.lifespan_ms.max(1.0));
    }

    fn out_of_bounds(&self, bounds: DVec2, margin: f64) -> bool {
        let p = self.position;
        p.x < -margin || p.y < -margin || p.x > bounds.x + margin || p.y > bounds.y + margin
    }
}

/// Drawing target for one animator. `begin` clears and returns false when the
/// surface cannot be used this frame.
pub trait ParticleSurface {
    fn begin(&mut self, width: f64, height: f64) -> bool;
    fn draw(&mut self, kind: EffectKind, particle: &Particle, opacity: f64);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorState {
    Idle,
    Active,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Idle,
    Skipped,
    Rendered(usize),
}

/// Device-pixel size of a surface backing store for a CSS box, never below 1×1.
#[inline]
pub fn backing_store_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio > 0.0 { device_pixel_ratio } else { 1.0 };
    let px = |v: f64| ((v.max(0.0) * dpr) as u32).max(1);
    (px(css_width), px(css_height))
}

#[inline]
fn sample(rng: &mut StdRng, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Visibility-gated particle simulation for one container.
///
/// Typical usage:
/// - Construct with `ParticleAnimator::new(config, seed)` and `resize` to the container
/// - Forward intersection ratios to `on_visibility`
/// - Call `frame(now_ms, surface)` from the animation-frame loop while Active
/// - For bursts, call `trigger_burst` and stop the loop once `is_settled`
pub struct ParticleAnimator {
    config: EffectConfig,
    state: AnimatorState,
    particles: Vec<Particle>,
    bounds: DVec2,
    rng: StdRng,
    last_ms: Option<f64>,
    /// Simulation time frozen while idle; lives and bursts resume from here.
    paused_at: Option<f64>,
    pending_bursts: SmallVec<[f64; 4]>,
}

impl ParticleAnimator {
    pub fn new(config: EffectConfig, seed: u64) -> Self {
        Self {
            config,
            state: AnimatorState::Idle,
            particles: Vec::new(),
            bounds: DVec2::ZERO,
            rng: StdRng::seed_from_u64(seed),
            last_ms: None,
            paused_at: None,
            pending_bursts: SmallVec::new(),
        }
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> DVec2 {
        self.bounds
    }

    /// Population an ambient effect maintains for the current bounds.
    pub fn target_count(&self) -> usize {
        match self.config.emission {
            Emission::Ambient => {
                let area = self.bounds.x * self.bounds.y;
                let n = (area / DENSITY_AREA_PX * self.config.density).floor();
                (n.max(0.0) as usize).min(MAX_PARTICLES)
            }
            Emission::Burst { .. } => 0,
        }
    }

    /// Track the container size. Ambient populations above the new target are
    /// trimmed; the next step refills.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.bounds = DVec2::new(width.max(0.0), height.max(0.0));
        if matches!(self.config.emission, Emission::Ambient) {
            let target = self.target_count();
            self.particles.truncate(target);
        }
    }

    /// Feed an intersection ratio. Returns true when the state changed.
    pub fn on_visibility(&mut self, visible_ratio: f64, now_ms: f64) -> bool {
        let visible = visible_ratio >= self.config.visibility_threshold;
        match (self.state, visible) {
            (AnimatorState::Idle, true) => {
                self.activate(now_ms);
                true
            }
            (AnimatorState::Active, false) => {
                self.stop();
                true
            }
            _ => false,
        }
    }

    fn activate(&mut self, now_ms: f64) {
        self.state = AnimatorState::Active;
        self.last_ms = Some(now_ms);
        if let Some(paused) = self.paused_at.take() {
            let gap = (now_ms - paused).max(0.0);
            for p in &mut self.particles {
                p.birth_ms += gap;
            }
            for due in &mut self.pending_bursts {
                *due += gap;
            }
        }
        if matches!(self.config.emission, Emission::Ambient) {
            // stagger ages so the initial population doesn't pulse in unison
            let target = self.target_count();
            while self.particles.len() < target {
                let mut p = self.spawn(now_ms, self.particles.len(), target);
                p.birth_ms -= self.rng.gen::<f64>() * p.lifespan_ms * 0.5;
                p.refresh_life(now_ms);
                self.particles.push(p);
            }
        }
        log::debug!(
            "[particles] {:?} active with {} particles",
            self.config.kind,
            self.particles.len()
        );
    }

    /// Go idle. Particles are kept and their clocks freeze at the last
    /// simulated frame, so the population resumes mid-life when shown again.
    pub fn stop(&mut self) {
        if self.state == AnimatorState::Active {
            log::debug!("[particles] {:?} idle", self.config.kind);
            self.paused_at = self.last_ms;
        }
        self.state = AnimatorState::Idle;
        self.last_ms = None;
    }

    /// Schedule the configured bursts starting at `now_ms`. No-op for ambient
    /// effects. While idle the schedule starts counting on the next activation.
    pub fn trigger_burst(&mut self, now_ms: f64) -> bool {
        let Emission::Burst { delays_ms, .. } = &self.config.emission else {
            return false;
        };
        let start = match self.state {
            AnimatorState::Active => now_ms,
            AnimatorState::Idle => *self.paused_at.get_or_insert(now_ms),
        };
        let due: SmallVec<[f64; 4]> = delays_ms.iter().map(|d| start + d.max(0.0)).collect();
        self.pending_bursts.extend(due);
        true
    }

    /// True once a burst effect has nothing left to show or spawn.
    pub fn is_settled(&self) -> bool {
        match self.config.emission {
            Emission::Ambient => false,
            Emission::Burst { .. } => self.particles.is_empty() && self.pending_bursts.is_empty(),
        }
    }

    /// Advance the simulation to `now_ms`. Returns the live particle count.
    pub fn step(&mut self, now_ms: f64) -> usize {
        if self.state == AnimatorState::Idle {
            return self.particles.len();
        }
        let dt_ms = match self.last_ms {
            Some(last) => (now_ms - last).clamp(0.0, MAX_STEP_MS),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        let f = dt_ms / FRAME_MS;

        self.fire_due_bursts(now_ms);

        let drag = self.config.drag.powf(f);
        let gravity = self.config.gravity * f;
        let flicker = self.config.kind == EffectKind::Flames;
        for p in &mut self.particles {
            p.position += p.velocity * f;
            p.velocity *= drag;
            p.velocity.y += gravity;
            if flicker {
                p.velocity.x += self.rng.gen_range(-0.15..0.15) * f;
            }
            p.rotation = (p.rotation + p.spin * f) % 360.0;
            p.refresh_life(now_ms);
        }

        let bounds = self.bounds;
        let margin = self.config.cull_margin;
        self.particles
            .retain(|p| p.life > 0.0 && !p.out_of_bounds(bounds, margin));

        if matches!(self.config.emission, Emission::Ambient) {
            let target = self.target_count();
            while self.particles.len() < target {
                let p = self.spawn(now_ms, self.particles.len(), target);
                self.particles.push(p);
            }
        }
        self.particles.len()
    }

    /// One animation frame: simulate, then draw through `surface`. A missing or
    /// unusable surface skips the frame without advancing the simulation.
    pub fn frame(&mut self, now_ms: f64, surface: Option<&mut dyn ParticleSurface>) -> FrameOutcome {
        if self.state == AnimatorState::Idle {
            return FrameOutcome::Idle;
        }
        let Some(surface) = surface else {
            return FrameOutcome::Skipped;
        };
        if !surface.begin(self.bounds.x, self.bounds.y) {
            return FrameOutcome::Skipped;
        }
        let n = self.step(now_ms);
        for p in &self.particles {
            let opacity = self.config.envelope.opacity(p.life);
            if opacity > 0.0 {
                surface.draw(self.config.kind, p, opacity);
            }
        }
        FrameOutcome::Rendered(n)
    }

    fn fire_due_bursts(&mut self, now_ms: f64) {
        let Emission::Burst { count, .. } = self.config.emission else {
            return;
        };
        let mut fired = 0;
        self.pending_bursts.retain(|t| {
            if *t <= now_ms {
                fired += 1;
                false
            } else {
                true
            }
        });
        for _ in 0..fired {
            for i in 0..count {
                if self.particles.len() >= MAX_PARTICLES {
                    return;
                }
                let p = self.spawn(now_ms, i, count);
                self.particles.push(p);
            }
        }
    }

    fn spawn(&mut self, now_ms: f64, index: usize, count: usize) -> Particle {
        let rng = &mut self.rng;
        let cfg = &self.config;
        let (w, h) = (self.bounds.x, self.bounds.y);
        let lifespan_ms = sample(rng, cfg.lifespan_ms);
        match cfg.kind {
            EffectKind::Lines => {
                let from_left = rng.gen_bool(0.5);
                let (x, dir) = if from_left { (-50.0, 1.0) } else { (w + 50.0, -1.0) };
                let speed = rng.gen_range(1.0..3.0) * cfg.speed;
                Particle {
                    position: DVec2::new(x, sample(rng, (0.0, h))),
                    velocity: DVec2::new(speed * dir, 0.0),
                    rotation: 0.0,
                    spin: 0.0,
                    scale: 1.0,
                    size: DVec2::new(rng.gen_range(100.0..300.0) * dir, rng.gen_range(1.0..4.0)),
                    life: 1.0,
                    birth_ms: now_ms,
                    lifespan_ms,
                    hue: rng.gen_range(10.0..40.0),
                    lightness: rng.gen_range(60.0..80.0),
                }
            }
            EffectKind::Flames => {
                let r = rng.gen_range(6.0..18.0);
                Particle {
                    position: DVec2::new(sample(rng, (0.0, w)), h + rng.gen_range(0.0..10.0)),
                    velocity: DVec2::new(
                        rng.gen_range(-0.3..0.3),
                        -rng.gen_range(1.5..3.5) * cfg.speed,
                    ),
                    rotation: 0.0,
                    spin: 0.0,
                    scale: 1.0,
                    size: DVec2::splat(r),
                    life: 1.0,
                    birth_ms: now_ms,
                    lifespan_ms,
                    hue: rng.gen_range(5.0..45.0),
                    lightness: rng.gen_range(50.0..65.0),
                }
            }
            EffectKind::Confetti => {
                let n = count.max(1) as f64;
                let jitter = CONFETTI_ANGLE_JITTER;
                let angle = index as f64 / n * TAU + rng.gen_range(-jitter..jitter);
                let speed = rng.gen_range(3.0..5.5) * cfg.speed;
                let kick = rng.gen_range(1.5..2.5);
                Particle {
                    position: DVec2::new(w, h) * 0.5,
                    velocity: DVec2::new(angle.cos() * speed, angle.sin() * speed - kick),
                    rotation: rng.gen_range(0.0..360.0),
                    spin: rng.gen_range(-2.0..2.0),
                    scale: rng.gen_range(0.9..1.4),
                    size: DVec2::splat(32.0),
                    life: 1.0,
                    birth_ms: now_ms,
                    lifespan_ms,
                    hue: 0.0,
                    lightness: 0.0,
                }
            }
        }
    }
}
