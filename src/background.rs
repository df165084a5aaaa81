//! Particle field mounted on a page canvas.

use crate::core::{FieldParams, ParticleField};
use crate::dom::{self, Listener};
use crate::events;
use crate::frame::{self, FrameContext, LoopHandle};
use crate::render::CanvasPainter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// A mounted particle field. Dropping it halts the loop and detaches its
/// resize and pointer listeners.
pub struct ParticleBackground {
    field: Rc<RefCell<ParticleField>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
    handle: LoopHandle,
    _listeners: Vec<Listener>,
}

impl ParticleBackground {
    /// Mount on the canvas with `canvas_id` and start animating.
    ///
    /// A missing canvas (or one without a 2D context) leaves the background
    /// inert; nothing is surfaced to the caller beyond `None`.
    pub fn mount(canvas_id: &str) -> Option<Self> {
        match Self::try_mount(canvas_id) {
            Ok(Some(bg)) => Some(bg),
            Ok(None) => {
                log::info!("[particles] #{} not found; background disabled", canvas_id);
                None
            }
            Err(e) => {
                log::warn!("[particles] mount on #{} failed: {:?}", canvas_id, e);
                None
            }
        }
    }

    fn try_mount(canvas_id: &str) -> anyhow::Result<Option<Self>> {
        let Some(document) = dom::window_document() else {
            return Ok(None);
        };
        let Some(canvas) = dom::element_by_id::<web::HtmlCanvasElement>(&document, canvas_id)
        else {
            return Ok(None);
        };
        let painter = CanvasPainter::for_canvas(&canvas)?;
        let (w, h) = dom::sync_canvas_to_parent(&canvas);
        let field = Rc::new(RefCell::new(ParticleField::new(
            FieldParams::default(),
            w,
            h,
            rand::random(),
        )));
        log::info!(
            "[particles] canvas {}x{}, {} particles",
            w,
            h,
            field.borrow().particles().len()
        );

        let mut listeners = events::wire_field_pointer(&canvas, &field);
        listeners.extend(wire_canvas_resize(&canvas, &field));

        let frame_ctx = Rc::new(RefCell::new(FrameContext::new(field.clone(), painter)));
        let handle = frame::start_loop(frame_ctx.clone());
        Ok(Some(Self {
            field,
            frame_ctx,
            handle,
            _listeners: listeners,
        }))
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_running()
    }

    pub fn stop(&self) {
        self.handle.stop();
        log::info!("[particles] loop stopped");
    }

    /// Restart a stopped loop on the same field.
    pub fn resume(&mut self) {
        if self.handle.is_running() {
            return;
        }
        self.handle = frame::start_loop(self.frame_ctx.clone());
        log::info!(
            "[particles] loop resumed with {} particles",
            self.field.borrow().particles().len()
        );
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.handle.stop();
    }
}

// Keep the canvas sized to its container; every resize regenerates the field.
fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    field: &Rc<RefCell<ParticleField>>,
) -> Option<Listener> {
    let window = web::window()?;
    let canvas = canvas.clone();
    let field = field.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_to_parent(&canvas);
        let mut f = field.borrow_mut();
        f.resize(w, h);
        log::debug!("[particles] resized to {}x{}, {} particles", w, h, f.particles().len());
    }) as Box<dyn FnMut()>);
    Some(dom::add_listener(&window, "resize", closure))
}
