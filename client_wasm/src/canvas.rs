//! 2D canvas drawing surface

use game_core::{Color, DrawSurface, TextStyle};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has unexpected type"))?;
        Ok(Self { ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(cx as f64, cy as f64, r as f64, 0.0, std::f64::consts::TAU)
        {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color, style: &TextStyle) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .set_font(&format!("{} {}px {}", style.weight, style.size, style.family));
        self.ctx.set_text_align("center");
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
