// Page wiring: element ids and per-section tuning used by the web shell.

// Countdown block: the heading the two product shots fly towards
pub const COUNTDOWN_EPIC_ID: &str = "countdown-epic";
pub const COUNTDOWN_LEFT_IMAGE_ID: &str = "countdown-image-left";
pub const COUNTDOWN_RIGHT_IMAGE_ID: &str = "countdown-image-right";
pub const COUNTDOWN_UNIT_IDS: [&str; 4] = [
    "countdown-days",
    "countdown-hours",
    "countdown-minutes",
    "countdown-seconds",
];
pub const LAUNCH_DATE_ISO: &str = "2025-11-06T00:00:00";

// Product showcase: logo with edge images and a confetti burst
pub const SHOWCASE_EPIC_ID: &str = "showcase-epic";
pub const SHOWCASE_LOGO_ID: &str = "showcase-logo";
pub const SHOWCASE_EDGE_LEFT_ID: &str = "showcase-edge-left";
pub const SHOWCASE_EDGE_RIGHT_ID: &str = "showcase-edge-right";
pub const LOGO_REVEAL_THRESHOLD: f64 = 0.3; // fraction of the logo visible before confetti fires
pub const LOGO_REVEALED_CLASS: &str = "logo-revealed";

// Hero
pub const HERO_VIDEO_ID: &str = "hero-video";
pub const HERO_CURTAIN_ID: &str = "hero-curtain";
pub const HERO_CONTENT_ID: &str = "hero-content";

// Whole-page progress indicator (width driven by scroll progress)
pub const PAGE_PROGRESS_ID: &str = "page-progress";

// Particle canvases
pub const FLAME_CANVAS_ID: &str = "flame-canvas";
pub const LINES_CANVAS_ID: &str = "lines-canvas";
pub const CONFETTI_CANVAS_ID: &str = "confetti-canvas";
pub const CONFETTI_IMAGE_SRC: &str = "/Tubito.png";
pub const FLAME_DENSITY: f64 = 2.5;
pub const FLAME_SHADOW_BLUR: f64 = 25.0;
pub const LINES_INTENSITY: f64 = 0.6;
pub const LINES_SPEED: f64 = 1.0;
pub const LINES_SHADOW_BLUR: f64 = 8.0;
