//! Browser side of the confetti layer: finds the `<canvas>` and draws on it.

use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::errors::ConfettiError;
use super::surface::ConfettiSurface;

/// Look up a canvas element by id
pub fn find_canvas(id: &str) -> Result<HtmlCanvasElement, ConfettiError> {
    let window = web_sys::window().ok_or(ConfettiError::NoWindow)?;
    let document = window.document().ok_or(ConfettiError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| ConfettiError::CanvasNotFound(id.to_string()))?;

    element
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ConfettiError::NotACanvas(id.to_string()))
}

/// `ConfettiSurface` backed by a canvas 2D context
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, ConfettiError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(ConfettiError::NoContext2d)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ConfettiError::NoContext2d)?;

        Ok(Self { context })
    }
}

impl ConfettiSurface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        let _ = self.context.translate(x, y);
    }

    fn rotate(&mut self, angle: f64) {
        let _ = self.context.rotate(angle);
    }

    fn scale(&mut self, x: f64, y: f64) {
        let _ = self.context.scale(x, y);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.context.set_fill_style_str(color);
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.context.set_global_alpha(alpha);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.fill_rect(x, y, width, height);
    }

    fn fill_ellipse(&mut self, x: f64, y: f64, radius_x: f64, radius_y: f64) {
        self.context.begin_path();
        if self.context.ellipse(x, y, radius_x, radius_y, 0.0, 0.0, 2.0 * PI).is_ok() {
            self.context.fill();
        }
    }
}
