use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe `element` and report `(intersection_ratio, is_intersecting)` each
/// time one of `thresholds` is crossed. The observer lives for the page.
pub fn observe_visibility(
    element: &web::Element,
    thresholds: &[f64],
    root_margin: Option<&str>,
    mut on_change: impl FnMut(f64, bool) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    on_change(entry.intersection_ratio(), entry.is_intersecting());
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    let list = js_sys::Array::new();
    for t in thresholds {
        list.push(&JsValue::from_f64(*t));
    }
    init.set_threshold(&list);
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }

    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    observer.observe(element);
    closure.forget();
    Ok(observer)
}
