#![cfg(target_arch = "wasm32")]
//! Landing page visuals: an ambient particle canvas and a draggable photo mural.
//!
//! Both subsystems mount by element id and stay inert when their element is
//! missing. The pure simulation and layout logic lives in [`core`].
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod background;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod mural;
mod parallax;
mod render;

use background::ParticleBackground;
use constants::{MURAL_CONTAINER_ID, PARTICLE_CANVAS_ID};
use crate::core::MountRegistry;

thread_local! {
    static BACKGROUND: RefCell<Option<ParticleBackground>> = const { RefCell::new(None) };
    static MURALS: RefCell<MountRegistry<mural::MuralMount>> = const { RefCell::new(MountRegistry::new()) };
}

// Resolves once the document has finished parsing.
async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        if let Err(e) = document.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        ) {
            log::warn!("[start] DOMContentLoaded listener failed: {:?}", e);
            _ = resolve.call0(&JsValue::NULL);
        }
    });
    JsFuture::from(promise).await.map_err(dom::js_err)?;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lens-visuals starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let Some(document) = dom::window_document() else {
        log::warn!("[start] no document; nothing to mount");
        return Ok(());
    };
    dom_ready(&document).await?;

    init_mural(MURAL_CONTAINER_ID);
    init_particles(PARTICLE_CANVAS_ID);
    parallax::wire_hero_parallax(&document);
    Ok(())
}

/// Mount the particle background on `canvas_id`, replacing any previous one.
///
/// The replaced background stops its loop and detaches its listeners.
#[wasm_bindgen]
pub fn init_particles(canvas_id: &str) {
    let Some(bg) = ParticleBackground::mount(canvas_id) else {
        return;
    };
    let previous = BACKGROUND.with(|slot| slot.borrow_mut().replace(bg));
    if previous.is_some() {
        log::info!("[particles] replaced previous background");
    }
}

/// Lay out the photo mural inside `container_id`.
///
/// Mounting again on the same id replaces the earlier mural: its tiles are
/// removed and its listeners detached.
#[wasm_bindgen]
pub fn init_mural(container_id: &str) {
    let Some(mount) = mural::mount(container_id, crate::core::AssetManifest::build_default()) else {
        return;
    };
    let previous = MURALS.with(|murals| murals.borrow_mut().insert(container_id, mount));
    if let Some(previous) = previous {
        log::info!(
            "[mural] replaced {} tiles in #{}",
            previous.tile_count(),
            container_id
        );
    }
}

/// Halt the particle animation loop.
#[wasm_bindgen]
pub fn stop_particles() {
    BACKGROUND.with(|slot| {
        if let Some(bg) = slot.borrow().as_ref() {
            bg.stop();
        }
    });
}

/// Restart a halted particle animation loop.
#[wasm_bindgen]
pub fn resume_particles() {
    BACKGROUND.with(|slot| {
        if let Some(bg) = slot.borrow_mut().as_mut() {
            bg.resume();
        }
    });
}

/// Whether the particle animation loop is currently scheduled.
#[wasm_bindgen]
pub fn particles_running() -> bool {
    BACKGROUND.with(|slot| slot.borrow().as_ref().is_some_and(|bg| bg.is_running()))
}
