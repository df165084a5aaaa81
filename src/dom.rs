use anyhow::anyhow;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up an element by id and cast it; `None` if missing or of another type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

/// An attached event handler. Dropping it removes the handler from its target;
/// the closure itself is freed once JS stops referencing it.
#[must_use = "dropping a Listener detaches it"]
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: js_sys::Function,
}

impl Listener {
    /// Leave the handler attached for the rest of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, &self.callback)
        {
            log::debug!("[dom] remove {} listener failed: {:?}", self.event, e);
        }
    }
}

fn into_callback<T>(closure: Closure<T>) -> js_sys::Function
where
    T: ?Sized + WasmClosure,
{
    closure.into_js_value().unchecked_into()
}

pub fn add_listener<T>(target: &web::EventTarget, event: &'static str, closure: Closure<T>) -> Listener
where
    T: ?Sized + WasmClosure,
{
    let callback = into_callback(closure);
    if let Err(e) = target.add_event_listener_with_callback(event, &callback) {
        log::warn!("[dom] add {} listener failed: {:?}", event, e);
    }
    Listener {
        target: target.clone(),
        event,
        callback,
    }
}

/// Like [`add_listener`], but non-passive so the handler may `prevent_default`
/// (needed for touchmove, which browsers otherwise treat as passive).
pub fn add_active_listener<T>(
    target: &web::EventTarget,
    event: &'static str,
    closure: Closure<T>,
) -> Listener
where
    T: ?Sized + WasmClosure,
{
    let callback = into_callback(closure);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    if let Err(e) =
        target.add_event_listener_with_callback_and_add_event_listener_options(event, &callback, &opts)
    {
        log::warn!("[dom] add {} listener failed: {:?}", event, e);
    }
    Listener {
        target: target.clone(),
        event,
        callback,
    }
}

/// Viewport width in CSS px.
pub fn viewport_width(window: &web::Window) -> f32 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

/// Size the canvas backing store to its parent's box. Returns the new size.
pub fn sync_canvas_to_parent(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (w, h) = canvas
        .parent_element()
        .and_then(|p| p.dyn_into::<web::HtmlElement>().ok())
        .map(|p| (p.offset_width().max(0) as u32, p.offset_height().max(0) as u32))
        .unwrap_or((canvas.width(), canvas.height()));
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    if let Err(e) = el.style().set_property(prop, value) {
        log::debug!("[dom] set {} failed: {:?}", prop, e);
    }
}
