use crate::constants::FRAME_BUDGET_MS;
use crate::core::ParticleField;
use crate::render::CanvasPainter;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub painter: CanvasPainter,
    pub slow_frames: u64,
}

impl FrameContext {
    pub fn new(field: Rc<RefCell<ParticleField>>, painter: CanvasPainter) -> Self {
        Self {
            field,
            painter,
            slow_frames: 0,
        }
    }

    pub fn frame(&mut self) {
        let started = Instant::now();
        self.field.borrow_mut().frame(&mut self.painter);
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        if elapsed_ms > FRAME_BUDGET_MS {
            self.slow_frames += 1;
            log::debug!(
                "[frame] {:.1}ms over {:.1}ms budget ({} slow frames)",
                elapsed_ms,
                FRAME_BUDGET_MS,
                self.slow_frames
            );
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Control over a running requestAnimationFrame loop.
#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl LoopHandle {
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the pending frame and release the loop closure. Idempotent.
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // the closure holds a clone of `tick`; dropping it here breaks the cycle
        self.tick.borrow_mut().take();
    }
}

fn schedule(tick: &Tick, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::warn!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Tick = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        schedule(&tick_clone, &pending_tick);
    }) as Box<dyn FnMut()>));
    schedule(&tick, &pending);

    LoopHandle {
        running,
        pending,
        tick,
    }
}
