// Shared tuning constants for scroll progress and particle effects.

// Device classification
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // widths below this are treated as mobile

// Progress commit and scheduling
pub const PROGRESS_EPSILON: f64 = 0.01; // minimum change before a progress channel is committed
pub const SCROLL_THROTTLE_MS: f64 = 16.0; // ~60fps
pub const MIN_DENOMINATOR: f64 = 1.0; // floor applied to every range before dividing

// Scroll-tracked reveal (desktop / mobile)
pub const DESKTOP_START_FRACTION: f64 = 1.0;
pub const DESKTOP_END_FRACTION: f64 = 0.35;
pub const DESKTOP_OVERSHOOT_MULTIPLIER: f64 = 0.15;
pub const MOBILE_START_FRACTION: f64 = 0.8;
pub const MOBILE_END_FRACTION: f64 = -0.2;
pub const MOBILE_OVERSHOOT_MULTIPLIER: f64 = 0.2;

// Edge channel (second element, gated near the end of its own reveal)
pub const EDGE_START_FRACTION: f64 = 1.0;
pub const EDGE_END_FRACTION: f64 = 0.45;
pub const EDGE_GATE_START: f64 = 0.8;
pub const EDGE_GATE_SPAN: f64 = 0.2;

// Hero scroll effects
pub const HERO_PARALLAX_FACTOR: f64 = 0.5; // video moves at half the scroll speed
pub const HERO_CURTAIN_WINDOW: (f64, f64) = (0.3, 0.8);
pub const HERO_FADE_WINDOW: (f64, f64) = (0.2, 0.7);

// Particle integration
pub const FRAME_MS: f64 = 1000.0 / 60.0; // velocities are expressed per 60fps frame
pub const MAX_STEP_MS: f64 = 100.0; // clamp for long gaps (tab switches, skipped frames)
pub const MAX_PARTICLES: usize = 400;
pub const DENSITY_AREA_PX: f64 = 10_000.0; // density is particles per this many square pixels
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

// Default envelope: ramp in over the first 10% of life, out over the last 20%
pub const ENVELOPE_FADE_IN: f64 = 0.1;
pub const ENVELOPE_FADE_OUT: f64 = 0.2;

// Confetti burst
pub const CONFETTI_COUNT: usize = 10;
pub const CONFETTI_DURATION_MS: f64 = 5000.0;
pub const CONFETTI_SECOND_BURST_MS: f64 = 500.0;
pub const CONFETTI_DRAG: f64 = 0.98;
pub const CONFETTI_GRAVITY: f64 = 0.18;
pub const CONFETTI_ANGLE_JITTER: f64 = 0.15; // radians either side of the even spread

// Countdown refresh
pub const COUNTDOWN_INTERVAL_MS: f64 = 1000.0;
