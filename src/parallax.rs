use crate::constants::{HERO_MODEL_SELECTOR, HERO_SELECTOR};
use crate::core::parallax_offset;
use crate::dom;
use crate::input;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Nudge the hero's model viewer opposite to the pointer. No hero, no-op.
pub fn wire_hero_parallax(document: &web::Document) {
    let Some(hero) = dom::query_html(document, HERO_SELECTOR) else {
        log::debug!("[parallax] no {} section", HERO_SELECTOR);
        return;
    };
    let doc = document.clone();
    let hero_rect = hero.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let rect = hero_rect.get_bounding_client_rect();
        let offset = parallax_offset(
            input::mouse_client(&ev),
            Vec2::new(rect.left() as f32, rect.top() as f32),
            Vec2::new(rect.width() as f32, rect.height() as f32),
        );
        if let Some(model) = dom::query_html(&doc, HERO_MODEL_SELECTOR) {
            dom::set_style(
                &model,
                "transform",
                &format!("translateX({}px) translateY({}px)", offset.x, offset.y),
            );
        }
    }) as Box<dyn FnMut(_)>);
    // mounted once for the page
    dom::add_listener(&hero, "mousemove", closure).forget();
}
