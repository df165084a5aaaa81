use crate::core::{Painter, CONNECTION_LINE_WIDTH, CONNECTION_RGB};
use crate::dom::js_err;
use anyhow::anyhow;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha)
}

/// [`Painter`] backed by a canvas 2D context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn for_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("context is not CanvasRenderingContext2d"))?;
        Ok(Self { ctx })
    }

    // Start a circular path; false if the arc was rejected.
    fn disc_path(&self, center: Vec2, radius: f32) -> bool {
        self.ctx.begin_path();
        match self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            Ok(()) => true,
            Err(e) => {
                log::debug!("[render] arc failed: {:?}", e);
                false
            }
        }
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn glow(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], opacity: f32) {
        if radius <= 0.0 {
            return;
        }
        let (x, y) = (center.x as f64, center.y as f64);
        let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, radius as f64) {
            Ok(g) => g,
            Err(e) => {
                log::debug!("[render] gradient failed: {:?}", e);
                return;
            }
        };
        _ = gradient.add_color_stop(0.0, &rgba(rgb, opacity));
        _ = gradient.add_color_stop(1.0, &rgba(rgb, 0.0));
        if self.disc_path(center, radius) {
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.fill();
        }
    }

    fn dot(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], opacity: f32) {
        if self.disc_path(center, radius) {
            self.ctx.set_fill_style_str(&rgba(rgb, opacity));
            self.ctx.fill();
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, opacity: f32) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&rgba(CONNECTION_RGB, opacity));
        self.ctx.set_line_width(CONNECTION_LINE_WIDTH as f64);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
