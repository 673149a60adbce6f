#![cfg(target_arch = "wasm32")]
use crate::canvas::CanvasSurface;
use crate::constants::*;
use crate::core::EffectConfig;
use crate::core::constants::{CONFETTI_COUNT, CONFETTI_DURATION_MS};
use crate::viewport::WindowViewport;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
pub mod core;
mod dom;
mod effects;
mod events;
mod frame;
mod sections;
mod ticker;
mod viewport;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("promo-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let viewport = WindowViewport::current().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = viewport.document().clone();

    // Scroll-driven reveals: one pass now, then only on scroll/resize
    let scene = Rc::new(RefCell::new(sections::ScrollScene::new()));
    scene.borrow_mut().update(&viewport);
    {
        let scene = scene.clone();
        events::wire_scroll_pass(move || scene.borrow_mut().update(&viewport));
    }

    if let Err(e) = ticker::wire_countdown(&document) {
        log::warn!("countdown disabled: {:?}", e);
    }

    wire_effects(&document);
    Ok(())
}

/// Particle canvases are optional decorations; a missing one is logged and skipped.
fn wire_effects(document: &web::Document) {
    let flames = effects::mount(
        document,
        FLAME_CANVAS_ID,
        EffectConfig::flames(FLAME_DENSITY),
        |c| CanvasSurface::new(c, FLAME_SHADOW_BLUR),
    );
    if let Err(e) = flames {
        log::warn!("flames: {:?}", e);
    }

    let lines = effects::mount(
        document,
        LINES_CANVAS_ID,
        EffectConfig::lines(LINES_INTENSITY, LINES_SPEED),
        |c| CanvasSurface::new(c, LINES_SHADOW_BLUR),
    );
    if let Err(e) = lines {
        log::warn!("lines: {:?}", e);
    }

    let confetti = match effects::mount(
        document,
        CONFETTI_CANVAS_ID,
        EffectConfig::confetti(CONFETTI_COUNT, CONFETTI_DURATION_MS),
        |c| CanvasSurface::new(c, 0.0).with_sprite(CONFETTI_IMAGE_SRC),
    ) {
        Ok(m) => m,
        Err(e) => {
            log::warn!("confetti: {:?}", e);
            return;
        }
    };
    if let Err(e) = wire_logo_reveal(document, confetti) {
        log::warn!("logo reveal: {:?}", e);
    }
}

/// First time the logo is mostly on screen: mark it revealed and fire confetti.
fn wire_logo_reveal(document: &web::Document, confetti: effects::EffectMount) -> anyhow::Result<()> {
    let logo = document
        .get_element_by_id(SHOWCASE_LOGO_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", SHOWCASE_LOGO_ID))?;
    let revealed = Rc::new(Cell::new(false));
    let logo_for_class = logo.clone();
    events::observe_visibility(
        &logo,
        &[LOGO_REVEAL_THRESHOLD],
        Some("0px 0px -50px 0px"),
        move |ratio, intersecting| {
            if revealed.get() || !intersecting || ratio < LOGO_REVEAL_THRESHOLD {
                return;
            }
            revealed.set(true);
            _ = logo_for_class.class_list().add_1(LOGO_REVEALED_CLASS);
            confetti.animator.borrow_mut().trigger_burst(dom::now_ms());
            confetti.wake();
            log::info!("[showcase] logo revealed");
        },
    )?;
    Ok(())
}
