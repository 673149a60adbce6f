use crate::core::{EffectKind, Particle, ParticleSurface};
use crate::dom;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

const TRANSPARENT: &str = "rgba(0,0,0,0)";

/// `ParticleSurface` over a 2D canvas. The context is looked up lazily and
/// re-acquired on a later frame if it was unavailable.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
    sprite: Option<web::HtmlImageElement>,
    shadow_blur: f64,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, shadow_blur: f64) -> Self {
        Self {
            canvas,
            ctx: None,
            sprite: None,
            shadow_blur,
        }
    }

    /// Draw confetti with an image instead of plain squares.
    pub fn with_sprite(mut self, src: &str) -> Self {
        match web::HtmlImageElement::new() {
            Ok(img) => {
                img.set_src(src);
                self.sprite = Some(img);
            }
            Err(e) => log::warn!("sprite {} unavailable: {:?}", src, e),
        }
        self
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    fn context(&mut self) -> Option<web::CanvasRenderingContext2d> {
        if self.ctx.is_none() {
            self.ctx = self
                .canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok());
        }
        self.ctx.clone()
    }
}

impl ParticleSurface for CanvasSurface {
    fn begin(&mut self, width: f64, height: f64) -> bool {
        if !self.canvas.is_connected() {
            return false;
        }
        match self.context() {
            Some(ctx) => {
                // draw in CSS pixels on a device-pixel backing store
                let dpr = dom::device_pixel_ratio();
                _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
                ctx.clear_rect(0.0, 0.0, width, height);
                true
            }
            None => false,
        }
    }

    fn draw(&mut self, kind: EffectKind, particle: &Particle, opacity: f64) {
        let Some(ctx) = self.context() else {
            return;
        };
        ctx.save();
        ctx.set_global_alpha(opacity);
        match kind {
            EffectKind::Lines => draw_line(&ctx, particle, self.shadow_blur),
            EffectKind::Flames => draw_flame(&ctx, particle, self.shadow_blur),
            EffectKind::Confetti => draw_confetti(&ctx, particle, self.sprite.as_ref()),
        }
        ctx.restore();
    }
}

fn draw_line(ctx: &web::CanvasRenderingContext2d, p: &Particle, blur: f64) {
    let color = format!("hsl({:.0}, 100%, {:.0}%)", p.hue, p.lightness);
    let (x, y) = (p.position.x, p.position.y);
    let gradient = ctx.create_linear_gradient(x, y, x + p.size.x, y);
    _ = gradient.add_color_stop(0.0, TRANSPARENT);
    _ = gradient.add_color_stop(0.3, &color);
    _ = gradient.add_color_stop(0.7, &color);
    _ = gradient.add_color_stop(1.0, TRANSPARENT);
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(x, y - p.size.y / 2.0, p.size.x, p.size.y);
    // second pass adds the glow
    ctx.set_shadow_color(&color);
    ctx.set_shadow_blur(blur);
    ctx.fill_rect(x, y - p.size.y / 2.0, p.size.x, p.size.y);
}

fn draw_flame(ctx: &web::CanvasRenderingContext2d, p: &Particle, blur: f64) {
    // embers shrink as they burn out
    let radius = p.size.x * (0.4 + 0.6 * p.life);
    let color = format!("hsl({:.0}, 100%, {:.0}%)", p.hue, p.lightness);
    ctx.set_fill_style_str(&color);
    ctx.set_shadow_color(&color);
    ctx.set_shadow_blur(blur);
    ctx.begin_path();
    _ = ctx.arc(p.position.x, p.position.y, radius.max(0.5), 0.0, TAU);
    ctx.fill();
}

fn draw_confetti(
    ctx: &web::CanvasRenderingContext2d,
    p: &Particle,
    sprite: Option<&web::HtmlImageElement>,
) {
    let half = p.size * 0.5;
    _ = ctx.translate(p.position.x, p.position.y);
    _ = ctx.rotate(p.rotation.to_radians());
    _ = ctx.scale(p.scale, p.scale);
    match sprite {
        Some(img) if img.complete() && img.natural_width() > 0 => {
            _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img, -half.x, -half.y, p.size.x, p.size.y,
            );
        }
        _ => {
            ctx.set_fill_style_str("#ff0040");
            ctx.fill_rect(-half.x, -half.y * 0.5, p.size.x, p.size.y * 0.5);
        }
    }
}
