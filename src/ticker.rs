use crate::constants::{COUNTDOWN_UNIT_IDS, LAUNCH_DATE_ISO};
use crate::core::constants::COUNTDOWN_INTERVAL_MS;
use crate::core::{pad2, time_left, TimeLeft};
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn render(document: &web::Document, left: &TimeLeft) {
    for (id, (value, _label)) in COUNTDOWN_UNIT_IDS.iter().zip(left.units()) {
        dom::set_text_by_id(document, id, &pad2(value));
    }
}

/// Drive the countdown cards once per second; DOM is touched only when a
/// unit actually changes.
pub fn wire_countdown(document: &web::Document) -> anyhow::Result<()> {
    let launch_ms = js_sys::Date::parse(LAUNCH_DATE_ISO);
    if launch_ms.is_nan() {
        anyhow::bail!("invalid launch date {}", LAUNCH_DATE_ISO);
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let shown = Rc::new(Cell::new(None::<TimeLeft>));
    let tick = {
        let document = document.clone();
        move || {
            let left = time_left(js_sys::Date::now(), launch_ms);
            if shown.get() != Some(left) {
                render(&document, &left);
                shown.set(Some(left));
            }
        }
    };
    tick();

    let closure = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            COUNTDOWN_INTERVAL_MS as i32,
        )
        .map_err(|e| anyhow::anyhow!("setInterval: {:?}", e))?;
    closure.forget();
    log::info!("[countdown] launch at {}", LAUNCH_DATE_ISO);
    Ok(())
}
