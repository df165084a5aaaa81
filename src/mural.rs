//! Photo mural mounted into a page container.

use crate::constants::{TILE_CLASS, TILE_DRAGGING_CLASS, TILE_IMG_CLASS, TILE_PIN_CLASS};
use crate::core::{AssetManifest, Mural, Tile};
use crate::dom::{self, js_err, Listener};
use crate::events;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The mural model plus the DOM elements mirroring its tiles (same order).
pub struct MuralView {
    pub container: web::HtmlElement,
    pub elements: Vec<web::HtmlElement>,
    pub mural: Mural,
}

impl MuralView {
    pub fn container_size(&self) -> Vec2 {
        Vec2::new(
            self.container.client_width() as f32,
            self.container.client_height() as f32,
        )
    }

    /// Copy the tile's position, rotation, scale and drag state onto its element.
    pub fn sync_tile(&self, index: usize) {
        let (Some(tile), Some(el)) = (self.mural.tile(index), self.elements.get(index)) else {
            return;
        };
        apply_tile_style(el, tile);
        let classes = el.class_list();
        _ = if tile.is_dragging() {
            classes.add_1(TILE_DRAGGING_CLASS)
        } else {
            classes.remove_1(TILE_DRAGGING_CLASS)
        };
    }
}

/// A mounted mural. Dropping it removes the tile elements from the container
/// and detaches every drag listener.
pub struct MuralMount {
    view: Rc<RefCell<MuralView>>,
    _listeners: Vec<Listener>,
}

impl MuralMount {
    pub fn tile_count(&self) -> usize {
        self.view.borrow().elements.len()
    }
}

impl Drop for MuralMount {
    fn drop(&mut self) {
        let Ok(view) = self.view.try_borrow() else {
            log::warn!("[mural] view busy during teardown; tiles left in place");
            return;
        };
        for el in &view.elements {
            el.remove();
        }
    }
}

fn apply_tile_style(el: &web::HtmlElement, tile: &Tile) {
    dom::set_style(el, "left", &format!("{}px", tile.position.x));
    dom::set_style(el, "top", &format!("{}px", tile.position.y));
    dom::set_style(
        el,
        "transform",
        &format!("rotate({}deg) scale({})", tile.rotation_deg, tile.scale),
    );
}

fn create_tile_element(
    document: &web::Document,
    tile: &Tile,
    lazy: bool,
) -> anyhow::Result<web::HtmlElement> {
    let div = document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("div is not an HtmlElement"))?;
    div.class_list().add_1(TILE_CLASS).map_err(js_err)?;
    dom::set_style(&div, "width", &format!("{}px", tile.size.x));
    dom::set_style(&div, "height", &format!("{}px", tile.size.y));
    apply_tile_style(&div, tile);

    let pin = document.create_element("div").map_err(js_err)?;
    pin.class_list().add_1(TILE_PIN_CLASS).map_err(js_err)?;
    div.append_child(&pin).map_err(js_err)?;

    let img = document
        .create_element("img")
        .map_err(js_err)?
        .dyn_into::<web::HtmlImageElement>()
        .map_err(|_| anyhow::anyhow!("img is not an HtmlImageElement"))?;
    img.set_src(tile.image);
    img.set_draggable(false);
    img.class_list().add_1(TILE_IMG_CLASS).map_err(js_err)?;
    if lazy {
        img.set_attribute("loading", "lazy").map_err(js_err)?;
        img.set_attribute("decoding", "async").map_err(js_err)?;
    }
    div.append_child(&img).map_err(js_err)?;
    Ok(div)
}

/// Lay out the mural in `container_id` and make its tiles draggable.
///
/// A missing container leaves the mural inert.
pub fn mount(container_id: &str, manifest: AssetManifest) -> Option<MuralMount> {
    match try_mount(container_id, manifest) {
        Ok(Some(view)) => Some(view),
        Ok(None) => {
            log::info!("[mural] #{} not found; mural disabled", container_id);
            None
        }
        Err(e) => {
            log::warn!("[mural] mount on #{} failed: {:?}", container_id, e);
            None
        }
    }
}

fn try_mount(container_id: &str, manifest: AssetManifest) -> anyhow::Result<Option<MuralMount>> {
    let Some(window) = web::window() else {
        return Ok(None);
    };
    let Some(document) = window.document() else {
        return Ok(None);
    };
    let Some(container) = dom::element_by_id::<web::HtmlElement>(&document, container_id) else {
        return Ok(None);
    };

    let size = Vec2::new(container.client_width() as f32, container.client_height() as f32);
    let viewport = dom::viewport_width(&window);
    let mural = Mural::new(manifest.paths(), viewport, size, rand::random());

    let mut elements = Vec::with_capacity(mural.tiles().len());
    for tile in mural.tiles() {
        let el = create_tile_element(&document, tile, manifest.lazy_loading())?;
        container.append_child(&el).map_err(js_err)?;
        elements.push(el);
    }
    log::info!(
        "[mural] {} tiles in {:.0}x{:.0} container (viewport {:.0}px, {:?} assets)",
        elements.len(),
        size.x,
        size.y,
        viewport,
        manifest
    );

    let view = Rc::new(RefCell::new(MuralView {
        container,
        elements,
        mural,
    }));
    let listeners = events::wire_tile_drag(&view, &window);
    Ok(Some(MuralMount {
        view,
        _listeners: listeners,
    }))
}
