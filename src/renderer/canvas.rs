//! `Surface` over the browser's canvas 2D context

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use crate::error::{GameError, Result};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Grab the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| GameError::Js(format!("{:?}", e)))?
            .ok_or(GameError::MissingElement("2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::Js("context is not a CanvasRenderingContext2d".into()))?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_fill_vertical_gradient(&mut self, top: f32, bottom: f32, stops: &[(f32, &str)]) {
        let gradient = self.ctx.create_linear_gradient(0.0, top as f64, 0.0, bottom as f64);
        for (offset, color) in stops {
            if let Err(e) = gradient.add_color_stop(*offset, color) {
                log::warn!("Bad gradient stop {}: {:?}", color, e);
            }
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn set_stroke(&mut self, color: &str, line_width: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn circle(&mut self, x: f32, y: f32, radius: f32) {
        // Only fails for negative radii
        let _ = self.ctx.arc(
            x as f64,
            y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn scale(&mut self, x: f32, y: f32) {
        let _ = self.ctx.scale(x as f64, y as f64);
    }

    fn translate(&mut self, x: f32, y: f32) {
        let _ = self.ctx.translate(x as f64, y as f64);
    }
}
