use crate::core::InputSource;
use crate::dom::{self, Listener};
use crate::input;
use crate::mural::MuralView;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

fn press(view: &Rc<RefCell<MuralView>>, tile: usize, source: InputSource, pointer: Vec2) {
    let mut v = view.borrow_mut();
    let Some(outcome) = v.mural.press(tile, source, pointer) else {
        return;
    };
    if let Some(dropped) = outcome.dropped {
        v.sync_tile(dropped);
        log::debug!("[mural] {:?} dropped tile {}", source, dropped);
    }
    v.sync_tile(outcome.picked);
    log::debug!("[mural] {:?} picked up tile {}", source, outcome.picked);
}

fn drag(view: &Rc<RefCell<MuralView>>, source: InputSource, pointer: Vec2) -> bool {
    let mut v = view.borrow_mut();
    let container = v.container_size();
    match v.mural.drag(source, pointer, container) {
        Some(tile) => {
            v.sync_tile(tile);
            true
        }
        None => false,
    }
}

fn release(view: &Rc<RefCell<MuralView>>, source: InputSource) {
    let mut v = view.borrow_mut();
    if let Some(tile) = v.mural.release(source) {
        v.sync_tile(tile);
        log::debug!("[mural] {:?} dropped tile {}", source, tile);
    }
}

/// Press handlers go on each tile; move/release handlers are installed once on
/// the window so a drag keeps going after the pointer leaves its tile.
pub fn wire_tile_drag(view: &Rc<RefCell<MuralView>>, window: &web::Window) -> Vec<Listener> {
    let elements = view.borrow().elements.clone();
    let mut listeners = Vec::with_capacity(elements.len() * 2 + 5);
    for (index, el) in elements.iter().enumerate() {
        let view_mouse = view.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            // primary button only; a context menu would swallow the mouseup
            if ev.button() != 0 {
                return;
            }
            // suppress the browser's native image drag
            ev.prevent_default();
            press(&view_mouse, index, InputSource::Mouse, input::mouse_client(&ev));
        }) as Box<dyn FnMut(_)>);
        listeners.push(dom::add_listener(el, "mousedown", closure));

        let view_touch = view.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            ev.prevent_default();
            for (id, pos) in input::changed_touches(&ev) {
                press(&view_touch, index, InputSource::Touch(id), pos);
            }
        }) as Box<dyn FnMut(_)>);
        listeners.push(dom::add_active_listener(el, "touchstart", closure));
    }

    let view_move = view.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if drag(&view_move, InputSource::Mouse, input::mouse_client(&ev)) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    listeners.push(dom::add_listener(window, "mousemove", closure));

    let view_up = view.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        release(&view_up, InputSource::Mouse);
    }) as Box<dyn FnMut(_)>);
    listeners.push(dom::add_listener(window, "mouseup", closure));

    let view_touch_move = view.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let mut moved = false;
        for (id, pos) in input::changed_touches(&ev) {
            moved |= drag(&view_touch_move, InputSource::Touch(id), pos);
        }
        // only block scrolling for touches that are carrying a tile
        if moved {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    listeners.push(dom::add_active_listener(window, "touchmove", closure));

    for event in ["touchend", "touchcancel"] {
        let view_end = view.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            for (id, _) in input::changed_touches(&ev) {
                release(&view_end, InputSource::Touch(id));
            }
        }) as Box<dyn FnMut(_)>);
        listeners.push(dom::add_listener(window, event, closure));
    }
    listeners
}
