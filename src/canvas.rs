use folio_core::{ColorStop, DashedStroke, Hsla, Stroke, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

/// [`Surface`] over a 2D canvas context. Coordinates are CSS pixels; the
/// device-pixel-ratio transform is set by `dom::sync_canvas_backing_size`.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn gradient_stops(gradient: &web::CanvasGradient, stops: &[ColorStop]) {
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset, &stop.color.to_string());
        }
    }
}

#[allow(deprecated)]
impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        let ctx = &self.ctx;
        ctx.set_stroke_style(&JsValue::from_str(&stroke.color.to_string()));
        ctx.set_line_width(stroke.width as f64);
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.stroke();
    }

    fn radial_glow(&mut self, center: Vec2, radius: f32, stops: &[ColorStop]) {
        let ctx = &self.ctx;
        let (x, y, r) = (center.x as f64, center.y as f64, radius.max(0.0) as f64);
        let gradient = match ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
            Ok(g) => g,
            Err(_) => return,
        };
        Self::gradient_stops(&gradient, stops);
        ctx.set_fill_style(&gradient);
        ctx.begin_path();
        _ = ctx.arc(x, y, r, 0.0, TAU);
        ctx.fill();
    }

    fn disc(&mut self, center: Vec2, radius: f32, fill: Hsla) {
        let ctx = &self.ctx;
        ctx.set_fill_style(&JsValue::from_str(&fill.to_string()));
        ctx.begin_path();
        _ = ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            TAU,
        );
        ctx.fill();
    }

    fn glyph(&mut self, glyph: &str, center: Vec2, size: f32, fill: Hsla) {
        let ctx = &self.ctx;
        ctx.set_fill_style(&JsValue::from_str(&fill.to_string()));
        ctx.set_font(&format!("{:.1}px Arial", size));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        _ = ctx.fill_text(glyph, center.x as f64, center.y as f64);
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, stops: &[ColorStop], stroke: &DashedStroke) {
        let ctx = &self.ctx;
        let gradient =
            ctx.create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
        Self::gradient_stops(&gradient, stops);
        ctx.set_stroke_style(&gradient);
        ctx.set_line_width(stroke.width as f64);

        let dash = js_sys::Array::of2(
            &JsValue::from_f64(stroke.dash[0] as f64),
            &JsValue::from_f64(stroke.dash[1] as f64),
        );
        _ = ctx.set_line_dash(&dash);
        ctx.set_line_dash_offset(stroke.offset as f64);

        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.stroke();

        _ = ctx.set_line_dash(&js_sys::Array::new());
    }
}
