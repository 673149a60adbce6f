use super::progress::{clamp01, DeviceClass, HeroScroll};

/// Unit of the horizontal translation in a [`Transform2D`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XUnit {
    /// Percent of the viewport width (`vw`).
    ViewportWidth,
    /// Percent of the element's own width.
    Percent,
}

impl XUnit {
    fn css(self) -> &'static str {
        match self {
            XUnit::ViewportWidth => "vw",
            XUnit::Percent => "%",
        }
    }
}

/// Transform descriptor handed to the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub translate_x: f64,
    pub x_unit: XUnit,
    pub translate_y_percent: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Transform2D {
    /// CSS `transform` value (opacity is applied separately).
    pub fn to_css_transform(&self) -> String {
        format!(
            "translate3d({:.3}{}, {:.3}%, 0) scale({:.4})",
            self.translate_x,
            self.x_unit.css(),
            self.translate_y_percent,
            self.scale
        )
    }

    pub fn to_css_opacity(&self) -> String {
        format!("{:.4}", self.opacity)
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Linear path from an off-screen position to a device-specific resting spot,
/// measured in viewport widths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlidePath {
    pub start_x_vw: f64,
    pub end_x_vw_desktop: f64,
    pub end_x_vw_mobile: f64,
    pub y_percent_desktop: f64,
    pub y_percent_mobile: f64,
    pub scale_start: f64,
    pub scale_end: f64,
}

impl SlidePath {
    /// Enters from the left edge.
    pub const LEFT: SlidePath = SlidePath {
        start_x_vw: -56.0,
        end_x_vw_desktop: -18.0,
        end_x_vw_mobile: -1.0,
        y_percent_desktop: -50.0,
        y_percent_mobile: 110.0,
        scale_start: 0.9,
        scale_end: 1.15,
    };
    /// Enters from the right edge.
    pub const RIGHT: SlidePath = SlidePath {
        start_x_vw: 52.0,
        end_x_vw_desktop: 18.0,
        end_x_vw_mobile: -3.0,
        y_percent_desktop: -50.0,
        y_percent_mobile: 110.0,
        scale_start: 0.9,
        scale_end: 1.15,
    };

    pub fn map(&self, progress: f64, device: DeviceClass) -> Transform2D {
        let t = clamp01(progress);
        let (end_x, y) = match device {
            DeviceClass::Mobile => (self.end_x_vw_mobile, self.y_percent_mobile),
            DeviceClass::Desktop => (self.end_x_vw_desktop, self.y_percent_desktop),
        };
        Transform2D {
            translate_x: lerp(self.start_x_vw, end_x, t),
            x_unit: XUnit::ViewportWidth,
            translate_y_percent: y,
            scale: lerp(self.scale_start, self.scale_end, t),
            opacity: t,
        }
    }
}

/// Element-relative slide used for the images pinned to the screen edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgePath {
    pub from_percent: f64,
    pub to_percent: f64,
    pub min_opacity: f64,
}

impl EdgePath {
    pub const LEFT: EdgePath = EdgePath {
        from_percent: -120.0,
        to_percent: -30.0,
        min_opacity: 0.1,
    };
    pub const RIGHT: EdgePath = EdgePath {
        from_percent: 120.0,
        to_percent: 30.0,
        min_opacity: 0.1,
    };

    pub fn map(&self, edge_progress: f64) -> Transform2D {
        let t = clamp01(edge_progress);
        Transform2D {
            translate_x: lerp(self.from_percent, self.to_percent, t),
            x_unit: XUnit::Percent,
            translate_y_percent: -50.0,
            scale: 1.0,
            opacity: lerp(self.min_opacity, 1.0, t),
        }
    }
}

/// Inline style values for the hero video and its curtain overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroStyle {
    pub video_transform: String,
    pub video_filter: String,
    pub curtain_height: String,
    pub curtain_transform: String,
    pub content_transform: String,
}

pub fn hero_style(hero: &HeroScroll) -> HeroStyle {
    let fade = clamp01(hero.fade);
    let curtain = clamp01(hero.curtain);
    HeroStyle {
        video_transform: format!("translateY({:.2}px) scale(1.1)", hero.parallax_offset),
        video_filter: format!(
            "brightness({:.4}) contrast({:.4})",
            1.0 - fade * 0.3,
            1.0 + fade * 0.2
        ),
        curtain_height: format!("{:.2}%", curtain * 100.0),
        curtain_transform: format!("translateY({:.2}px)", curtain * 20.0),
        // foreground drifts up against the parallax
        content_transform: format!("translateY({:.2}px)", -hero.parallax_offset * 0.3),
    }
}
