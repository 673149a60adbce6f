use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Run `f` once on the next animation frame with the frame timestamp.
pub fn request_frame(f: impl FnOnce(f64) + 'static) {
    let cb = Closure::once_into_js(move |ts: f64| f(ts));
    if let Some(w) = web::window() {
        if let Err(e) = w.request_animation_frame(cb.unchecked_ref()) {
            log::error!("requestAnimationFrame error: {:?}", e);
        }
    }
}

/// Cancellable requestAnimationFrame loop. The callback returns whether the
/// loop should keep running.
pub struct AnimationLoop {
    tick: TickSlot,
    handle: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    pub fn new(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let handle_clone = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            handle_clone.set(None);
            if on_frame(ts) {
                handle_clone.set(schedule(&tick_clone));
            }
        }) as Box<dyn FnMut(f64)>));
        Self { tick, handle }
    }

    /// Start (or keep) the loop running; a loop already scheduled is left alone.
    pub fn start(&self) {
        if self.handle.get().is_none() {
            self.handle.set(schedule(&self.tick));
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

fn schedule(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
