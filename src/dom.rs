use crate::core::backing_store_size;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_element_by_id(document: &web::Document, element_id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Monotonic milliseconds (performance.now), or 0 outside a window.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("style {} failed: {:?}", property, e);
    }
}

/// Set a style property on the element with `element_id`, if it exists.
#[inline]
pub fn set_style_by_id(document: &web::Document, element_id: &str, property: &str, value: &str) {
    if let Some(el) = html_element_by_id(document, element_id) {
        set_style(&el, property, value);
    }
}

#[inline]
pub fn set_text_by_id(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if el.text_content().as_deref() != Some(text) {
            el.set_text_content(Some(text));
        }
    }
}

/// Attach a passive listener on `window` for the lifetime of the page.
pub fn add_passive_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::error!("{} listener error: {:?}", event, e);
    }
    closure.forget();
}

/// Device pixel ratio of the window, 1 outside a window.
#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Keep a canvas' backing store at its CSS size times the device pixel ratio.
/// Returns the CSS size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width().max(0.0);
    let h = rect.height().max(0.0);
    let (px_w, px_h) = backing_store_size(w, h, device_pixel_ratio());
    canvas.set_width(px_w);
    canvas.set_height(px_h);
    (w, h)
}
