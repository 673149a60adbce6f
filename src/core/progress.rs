use super::constants::*;

/// Coarse device class used to pick thresholds and final transform values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    #[inline]
    pub fn from_width(viewport_width: f64) -> Self {
        if viewport_width < MOBILE_BREAKPOINT_PX {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Geometry sampled for one computation. Never cached across frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedElementGeometry {
    pub top: f64,
    pub viewport_height: f64,
    pub viewport_width: f64,
}

/// Read access to the hosting environment's viewport and layout.
///
/// The web shell implements this on top of `window`/`document`; tests use a
/// fixed in-memory viewport.
pub trait ViewportReader {
    /// Inner `(width, height)` of the viewport in CSS pixels.
    fn viewport_size(&self) -> (f64, f64);
    /// Vertical scroll offset of the page.
    fn scroll_offset(&self) -> f64;
    /// Full scrollable height of the document.
    fn document_height(&self) -> f64;
    /// Top of the element's bounding box relative to the viewport, if mounted.
    fn element_top(&self, element_id: &str) -> Option<f64>;

    fn geometry(&self, element_id: &str) -> Option<TrackedElementGeometry> {
        let top = self.element_top(element_id)?;
        let (w, h) = self.viewport_size();
        Some(TrackedElementGeometry {
            top,
            // `innerHeight || 1`
            viewport_height: if h > 0.0 { h } else { 1.0 },
            viewport_width: w,
        })
    }
}

/// Thresholds for one scroll-tracked reveal, as fractions of viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    pub start_fraction: f64,
    pub end_fraction: f64,
    pub overshoot_multiplier: f64,
}

impl AnimationConfig {
    pub const DESKTOP: AnimationConfig = AnimationConfig {
        start_fraction: DESKTOP_START_FRACTION,
        end_fraction: DESKTOP_END_FRACTION,
        overshoot_multiplier: DESKTOP_OVERSHOOT_MULTIPLIER,
    };
    pub const MOBILE: AnimationConfig = AnimationConfig {
        start_fraction: MOBILE_START_FRACTION,
        end_fraction: MOBILE_END_FRACTION,
        overshoot_multiplier: MOBILE_OVERSHOOT_MULTIPLIER,
    };
}

/// Per-device pair of thresholds; selected from the live viewport width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceAnimationConfig {
    pub mobile: AnimationConfig,
    pub desktop: AnimationConfig,
}

impl DeviceAnimationConfig {
    /// Same band on every device; only the overshoot stretches on mobile.
    pub const SHOWCASE: DeviceAnimationConfig = DeviceAnimationConfig {
        mobile: AnimationConfig {
            overshoot_multiplier: MOBILE_OVERSHOOT_MULTIPLIER,
            ..AnimationConfig::DESKTOP
        },
        desktop: AnimationConfig::DESKTOP,
    };

    #[inline]
    pub fn for_device(&self, device: DeviceClass) -> AnimationConfig {
        match device {
            DeviceClass::Mobile => self.mobile,
            DeviceClass::Desktop => self.desktop,
        }
    }
}

impl Default for DeviceAnimationConfig {
    fn default() -> Self {
        Self {
            mobile: AnimationConfig::MOBILE,
            desktop: AnimationConfig::DESKTOP,
        }
    }
}

/// Secondary channel driven by another element, only opening near the end of
/// that element's own reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeConfig {
    pub start_fraction: f64,
    pub end_fraction: f64,
    pub gate_start: f64,
    pub gate_span: f64,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            start_fraction: EDGE_START_FRACTION,
            end_fraction: EDGE_END_FRACTION,
            gate_start: EDGE_GATE_START,
            gate_span: EDGE_GATE_SPAN,
        }
    }
}

/// Normalized outputs of a tracker. Every channel stays in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProgressState {
    pub progress: f64,
    pub post_arrival_progress: f64,
    pub edge_progress: f64,
}

impl ProgressState {
    /// Adopt `next` channel by channel, skipping changes below `epsilon`.
    /// Landing exactly on 0 or 1 is always taken. Returns true if anything changed.
    pub fn commit(&mut self, next: &ProgressState, epsilon: f64) -> bool {
        let a = commit_channel(&mut self.progress, next.progress, epsilon);
        let b = commit_channel(&mut self.post_arrival_progress, next.post_arrival_progress, epsilon);
        let c = commit_channel(&mut self.edge_progress, next.edge_progress, epsilon);
        a || b || c
    }
}

#[inline]
fn commit_channel(current: &mut f64, next: f64, epsilon: f64) -> bool {
    let at_bound = next == 0.0 || next == 1.0;
    if (next - *current).abs() > epsilon || (at_bound && next != *current) {
        *current = next;
        true
    } else {
        false
    }
}

#[inline]
pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Primary reveal progress: 0 while the element top is at `start`, 1 once it
/// reaches `end` (both in pixels from the viewport top).
#[inline]
pub fn primary_progress(element_top: f64, start: f64, end: f64) -> f64 {
    let range = (start - end).max(MIN_DENOMINATOR);
    clamp01(1.0 - (element_top - end) / range)
}

/// Second phase that starts only once the element top has passed `end`.
#[inline]
pub fn overshoot_progress(
    element_top: f64,
    end: f64,
    viewport_height: f64,
    overshoot_multiplier: f64,
) -> f64 {
    let span = (viewport_height * overshoot_multiplier).max(MIN_DENOMINATOR);
    clamp01((end - element_top) / span)
}

/// Rescale `raw` so the output only starts rising at `gate_start`.
#[inline]
pub fn gated_progress(raw: f64, gate_start: f64, gate_span: f64) -> f64 {
    let span = gate_span.max(f64::EPSILON);
    clamp01(1.0 - (gate_start + span - raw) / span)
}

/// Compute all channels for one geometry sample without committing.
pub fn compute_state(
    geometry: &TrackedElementGeometry,
    config: &AnimationConfig,
    edge: Option<(&EdgeConfig, f64)>,
) -> ProgressState {
    let vh = geometry.viewport_height;
    let start = vh * config.start_fraction;
    let end = vh * config.end_fraction;
    let progress = primary_progress(geometry.top, start, end);
    let post_arrival_progress =
        overshoot_progress(geometry.top, end, vh, config.overshoot_multiplier);
    let edge_progress = match edge {
        Some((cfg, edge_top)) => {
            let raw = primary_progress(edge_top, vh * cfg.start_fraction, vh * cfg.end_fraction);
            gated_progress(raw, cfg.gate_start, cfg.gate_span)
        }
        None => 0.0,
    };
    ProgressState {
        progress,
        post_arrival_progress,
        edge_progress,
    }
}

/// Maps page scroll relative to one tracked element into `ProgressState`.
///
/// Usage:
/// - Construct with `ScrollProgressTracker::new(element_id, config)`
/// - Optionally attach an edge channel with `with_edge`
/// - Call `update(&reader)` from a coalesced scroll/resize pass
pub struct ScrollProgressTracker {
    target: String,
    config: DeviceAnimationConfig,
    edge: Option<(String, EdgeConfig)>,
    epsilon: f64,
    state: ProgressState,
}

impl ScrollProgressTracker {
    pub fn new(target: impl Into<String>, config: DeviceAnimationConfig) -> Self {
        Self {
            target: target.into(),
            config,
            edge: None,
            epsilon: PROGRESS_EPSILON,
            state: ProgressState::default(),
        }
    }

    pub fn with_edge(mut self, target: impl Into<String>, edge: EdgeConfig) -> Self {
        self.edge = Some((target.into(), edge));
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.max(0.0);
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn state(&self) -> ProgressState {
        self.state
    }

    /// Recompute from fresh geometry. Returns true only when the committed
    /// state changed; a missing element is a silent no-op.
    pub fn update<R: ViewportReader + ?Sized>(&mut self, reader: &R) -> bool {
        let Some(geometry) = reader.geometry(&self.target) else {
            return false;
        };
        let device = DeviceClass::from_width(geometry.viewport_width);
        let config = self.config.for_device(device);
        let edge_top = self
            .edge
            .as_ref()
            .and_then(|(id, cfg)| reader.element_top(id).map(|top| (cfg, top)));
        let next = compute_state(&geometry, &config, edge_top);
        self.state.commit(&next, self.epsilon)
    }
}

/// Whole-page progress: 0 at the top, 1 at the bottom of the document.
#[inline]
pub fn page_scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable > 0.0 {
        clamp01(scroll_y / scrollable)
    } else {
        0.0
    }
}

/// Progress of the raw scroll offset through a band of the first viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollWindow {
    pub start_fraction: f64,
    pub end_fraction: f64,
}

impl ScrollWindow {
    pub const fn new(start_fraction: f64, end_fraction: f64) -> Self {
        Self {
            start_fraction,
            end_fraction,
        }
    }

    #[inline]
    pub fn progress(&self, scroll_y: f64, viewport_height: f64) -> f64 {
        let start = viewport_height * self.start_fraction;
        let end = viewport_height * self.end_fraction;
        clamp01((scroll_y - start) / (end - start).max(MIN_DENOMINATOR))
    }
}

/// Scroll-derived values for the hero section.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeroScroll {
    pub parallax_offset: f64,
    pub curtain: f64,
    pub fade: f64,
}

impl HeroScroll {
    pub fn from_scroll(scroll_y: f64, viewport_height: f64) -> Self {
        let vh = if viewport_height > 0.0 { viewport_height } else { 1.0 };
        let y = scroll_y.max(0.0);
        let curtain = ScrollWindow::new(HERO_CURTAIN_WINDOW.0, HERO_CURTAIN_WINDOW.1);
        let fade = ScrollWindow::new(HERO_FADE_WINDOW.0, HERO_FADE_WINDOW.1);
        Self {
            parallax_offset: y * HERO_PARALLAX_FACTOR,
            curtain: curtain.progress(y, vh),
            fade: fade.progress(y, vh),
        }
    }

    pub fn read<R: ViewportReader + ?Sized>(reader: &R) -> Self {
        let (_, h) = reader.viewport_size();
        Self::from_scroll(reader.scroll_offset(), h)
    }
}
