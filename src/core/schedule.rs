/// Timestamp-delta gate used to rate-limit scroll/resize passes.
/// Timestamps are milliseconds from any monotonic source.
#[derive(Clone, Debug)]
pub struct FrameGate {
    min_interval_ms: f64,
    last_ms: Option<f64>,
}

impl FrameGate {
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            min_interval_ms: min_interval_ms.max(0.0),
            last_ms: None,
        }
    }

    /// Admit the call if at least the interval has elapsed since the last
    /// admitted one. The first call is always admitted.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            // a clock going backwards re-arms the gate
            Some(last) if now_ms >= last && now_ms - last < self.min_interval_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// Collapses any number of requests into one pending animation-frame pass.
///
/// The shell calls `request` from event handlers and only schedules a frame
/// callback when it returns true; the callback calls `take` before working.
#[derive(Clone, Debug, Default)]
pub struct Coalescer {
    pending: bool,
}

impl Coalescer {
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
