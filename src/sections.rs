use crate::constants::*;
use crate::core::{
    hero_style, page_scroll_progress, DeviceAnimationConfig, DeviceClass, EdgeConfig, EdgePath,
    HeroScroll, ScrollProgressTracker, SlidePath, Transform2D, ViewportReader,
};
use crate::dom;
use crate::viewport::WindowViewport;
use web_sys as web;

fn apply_transform(document: &web::Document, element_id: &str, t: &Transform2D) {
    if let Some(el) = dom::html_element_by_id(document, element_id) {
        dom::set_style(&el, "transform", &t.to_css_transform());
        dom::set_style(&el, "opacity", &t.to_css_opacity());
    }
}

/// Every scroll-driven element on the page, recomputed in one pass.
pub struct ScrollScene {
    countdown: ScrollProgressTracker,
    showcase: ScrollProgressTracker,
    last_device: Option<DeviceClass>,
}

impl ScrollScene {
    pub fn new() -> Self {
        Self {
            countdown: ScrollProgressTracker::new(COUNTDOWN_EPIC_ID, DeviceAnimationConfig::default()),
            showcase: ScrollProgressTracker::new(SHOWCASE_EPIC_ID, DeviceAnimationConfig::SHOWCASE)
                .with_edge(SHOWCASE_LOGO_ID, EdgeConfig::default()),
            last_device: None,
        }
    }

    pub fn update(&mut self, viewport: &WindowViewport) {
        let document = viewport.document();
        let (w, h) = viewport.viewport_size();
        let device = DeviceClass::from_width(w);
        // final positions differ per device, so a breakpoint crossing re-applies
        let device_changed = self.last_device.replace(device) != Some(device);

        if self.countdown.update(viewport) || device_changed {
            let p = self.countdown.state().progress;
            apply_transform(document, COUNTDOWN_LEFT_IMAGE_ID, &SlidePath::LEFT.map(p, device));
            apply_transform(document, COUNTDOWN_RIGHT_IMAGE_ID, &SlidePath::RIGHT.map(p, device));
            publish(document, COUNTDOWN_EPIC_ID, &self.countdown);
        }

        if self.showcase.update(viewport) || device_changed {
            let edge = self.showcase.state().edge_progress;
            apply_transform(document, SHOWCASE_EDGE_LEFT_ID, &EdgePath::LEFT.map(edge));
            apply_transform(document, SHOWCASE_EDGE_RIGHT_ID, &EdgePath::RIGHT.map(edge));
            publish(document, SHOWCASE_EPIC_ID, &self.showcase);
        }

        let hero = hero_style(&HeroScroll::read(viewport));
        dom::set_style_by_id(document, HERO_VIDEO_ID, "transform", &hero.video_transform);
        dom::set_style_by_id(document, HERO_VIDEO_ID, "filter", &hero.video_filter);
        dom::set_style_by_id(document, HERO_CURTAIN_ID, "height", &hero.curtain_height);
        dom::set_style_by_id(document, HERO_CURTAIN_ID, "transform", &hero.curtain_transform);
        dom::set_style_by_id(document, HERO_CONTENT_ID, "transform", &hero.content_transform);

        let page = page_scroll_progress(viewport.scroll_offset(), viewport.document_height(), h);
        dom::set_style_by_id(document, PAGE_PROGRESS_ID, "width", &format!("{:.2}%", page * 100.0));
    }
}

impl Default for ScrollScene {
    fn default() -> Self {
        Self::new()
    }
}

/// Expose the tracker channels as CSS custom properties for stylesheet-driven layers.
fn publish(document: &web::Document, element_id: &str, tracker: &ScrollProgressTracker) {
    let Some(el) = dom::html_element_by_id(document, element_id) else {
        return;
    };
    let s = tracker.state();
    dom::set_style(&el, "--reveal-progress", &format!("{:.4}", s.progress));
    dom::set_style(&el, "--post-arrival", &format!("{:.4}", s.post_arrival_progress));
    dom::set_style(&el, "--edge-progress", &format!("{:.4}", s.edge_progress));
}
