const MS_PER_SECOND: f64 = 1000.0;
const MS_PER_MINUTE: f64 = MS_PER_SECOND * 60.0;
const MS_PER_HOUR: f64 = MS_PER_MINUTE * 60.0;
const MS_PER_DAY: f64 = MS_PER_HOUR * 24.0;

/// Remaining time until launch, split into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeLeft {
    pub const ZERO: TimeLeft = TimeLeft {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// `(value, label)` pairs in display order.
    pub fn units(&self) -> [(u32, &'static str); 4] {
        [
            (self.days, "days"),
            (self.hours, "hours"),
            (self.minutes, "minutes"),
            (self.seconds, "seconds"),
        ]
    }
}

/// Break the distance from `now_ms` to `launch_ms` (both epoch milliseconds)
/// into days/hours/minutes/seconds. Zero once launch has passed.
pub fn time_left(now_ms: f64, launch_ms: f64) -> TimeLeft {
    let distance = launch_ms - now_ms;
    if !(distance > 0.0) {
        return TimeLeft::ZERO;
    }
    TimeLeft {
        days: (distance / MS_PER_DAY).floor() as u32,
        hours: ((distance % MS_PER_DAY) / MS_PER_HOUR).floor() as u32,
        minutes: ((distance % MS_PER_HOUR) / MS_PER_MINUTE).floor() as u32,
        seconds: ((distance % MS_PER_MINUTE) / MS_PER_SECOND).floor() as u32,
    }
}

/// Two-digit zero-padded rendering used by the countdown cards.
#[inline]
pub fn pad2(value: u32) -> String {
    format!("{:02}", value)
}
