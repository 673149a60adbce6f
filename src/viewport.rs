use crate::core::ViewportReader;
use web_sys as web;

/// `ViewportReader` over the live browser window. All reads are synchronous
/// layout queries; anything unavailable reads as zero or `None`.
pub struct WindowViewport {
    window: web::Window,
    document: web::Document,
}

impl WindowViewport {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }

    pub fn current() -> Option<Self> {
        let window = web::window()?;
        let document = window.document()?;
        Some(Self::new(window, document))
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }
}

impl ViewportReader for WindowViewport {
    fn viewport_size(&self) -> (f64, f64) {
        let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        (read(self.window.inner_width()), read(self.window.inner_height()))
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn document_height(&self) -> f64 {
        self.document
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0)
    }

    fn element_top(&self, element_id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(element_id)
            .map(|el| el.get_bounding_client_rect().top())
    }
}
