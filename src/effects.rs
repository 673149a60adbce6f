use crate::canvas::CanvasSurface;
use crate::core::{AnimatorState, EffectConfig, FrameOutcome, ParticleAnimator, ParticleSurface};
use crate::dom;
use crate::events;
use crate::frame::AnimationLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A particle animator bound to one canvas, with its own frame loop.
#[derive(Clone)]
pub struct EffectMount {
    pub animator: Rc<RefCell<ParticleAnimator>>,
    pub frames: Rc<AnimationLoop>,
}

impl EffectMount {
    /// Resume the loop if the animator has something to do.
    pub fn wake(&self) {
        let a = self.animator.borrow();
        if a.state() == AnimatorState::Active && !a.is_settled() {
            self.frames.start();
        }
    }
}

fn seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64 ^ (js_sys::Date::now() as u64)
}

/// Attach `config` to the canvas `canvas_id`: size tracking, visibility gating
/// and a frame loop that only runs while the effect is Active.
pub fn mount(
    document: &web::Document,
    canvas_id: &str,
    config: EffectConfig,
    surface: impl FnOnce(web::HtmlCanvasElement) -> CanvasSurface,
) -> anyhow::Result<EffectMount> {
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let threshold = config.visibility_threshold;
    let mut animator = ParticleAnimator::new(config, seed());
    let (w, h) = dom::sync_canvas_backing_size(&canvas);
    animator.resize(w, h);
    let animator = Rc::new(RefCell::new(animator));
    let surface = Rc::new(RefCell::new(surface(canvas.clone())));

    let frames = {
        let animator = animator.clone();
        let surface = surface.clone();
        Rc::new(AnimationLoop::new(move |ts| {
            let mut a = animator.borrow_mut();
            let mut s = surface.borrow_mut();
            let target: Option<&mut dyn ParticleSurface> = if s.canvas().is_connected() {
                Some(&mut *s)
            } else {
                None
            };
            match a.frame(ts, target) {
                FrameOutcome::Idle => false,
                FrameOutcome::Skipped => true,
                FrameOutcome::Rendered(_) => !a.is_settled(),
            }
        }))
    };

    let mount = EffectMount { animator, frames };

    {
        let mount = mount.clone();
        events::observe_visibility(&canvas, &[0.0, threshold], None, move |ratio, _| {
            let changed = mount.animator.borrow_mut().on_visibility(ratio, dom::now_ms());
            if !changed {
                return;
            }
            let state = mount.animator.borrow().state();
            match state {
                AnimatorState::Active => mount.wake(),
                AnimatorState::Idle => mount.frames.cancel(),
            }
        })?;
    }

    {
        let animator = mount.animator.clone();
        dom::add_passive_window_listener("resize", move || {
            let (w, h) = dom::sync_canvas_backing_size(&canvas);
            animator.borrow_mut().resize(w, h);
        });
    }

    log::info!("[effects] mounted #{}", canvas_id);
    Ok(mount)
}
