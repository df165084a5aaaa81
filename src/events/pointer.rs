use crate::core::ParticleField;
use crate::dom::{self, Listener};
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Track the pointer over the particle canvas; leaving the canvas forgets it.
pub fn wire_field_pointer(
    canvas: &web::HtmlCanvasElement,
    field: &Rc<RefCell<ParticleField>>,
) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(2);
    {
        let canvas_move = canvas.clone();
        let field_move = field.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_canvas_px(&ev, &canvas_move);
            field_move.borrow_mut().set_pointer(pos);
        }) as Box<dyn FnMut(_)>);
        listeners.push(dom::add_listener(canvas, "pointermove", closure));
    }
    {
        let field_leave = field.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            field_leave.borrow_mut().clear_pointer();
        }) as Box<dyn FnMut(_)>);
        listeners.push(dom::add_listener(canvas, "pointerleave", closure));
    }
    listeners
}
