use crate::core::constants::SCROLL_THROTTLE_MS;
use crate::core::{Coalescer, FrameGate};
use crate::dom;
use crate::frame;
use std::cell::RefCell;
use std::rc::Rc;

struct ScrollPass {
    gate: RefCell<FrameGate>,
    coalescer: RefCell<Coalescer>,
    run: RefCell<Box<dyn FnMut()>>,
}

/// Recompute on scroll and resize only: every burst of events collapses into
/// one animation-frame pass, and passes are at least `SCROLL_THROTTLE_MS` apart.
pub fn wire_scroll_pass(run: impl FnMut() + 'static) {
    let pass = Rc::new(ScrollPass {
        gate: RefCell::new(FrameGate::new(SCROLL_THROTTLE_MS)),
        coalescer: RefCell::new(Coalescer::default()),
        run: RefCell::new(Box::new(run)),
    });
    for event in ["scroll", "resize"] {
        let pass = pass.clone();
        dom::add_passive_window_listener(event, move || {
            if pass.coalescer.borrow_mut().request() {
                schedule_pass(pass.clone());
            }
        });
    }
}

fn schedule_pass(pass: Rc<ScrollPass>) {
    frame::request_frame(move |ts| {
        // too soon after the last pass: hold the request for the next frame
        if !pass.gate.borrow_mut().ready(ts) {
            schedule_pass(pass);
            return;
        }
        pass.coalescer.borrow_mut().take();
        let mut run = pass.run.borrow_mut();
        (*run)();
    });
}
