//! Drawing target consumed by the field.
//!
//! The engine never talks to a canvas directly; it emits these primitive
//! operations in frame order. The web front-end implements them on a 2D
//! canvas context, tests implement them with a recorder.

use glam::Vec2;

use crate::color::{ColorStop, Hsla, Rgba};

/// Solid stroke used for the background grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

/// Gradient-filled dashed stroke used for links.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashedStroke {
    pub width: f32,
    pub dash: [f32; 2],
    pub offset: f32,
}

pub trait Surface {
    /// Erase the whole logical area.
    fn clear(&mut self, size: Vec2);

    fn line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke);

    /// Filled disc whose fill fades through `stops` from center to `radius`.
    fn radial_glow(&mut self, center: Vec2, radius: f32, stops: &[ColorStop]);

    fn disc(&mut self, center: Vec2, radius: f32, fill: Hsla);

    /// Text glyph centered on `center`, `size` in pixels.
    fn glyph(&mut self, glyph: &str, center: Vec2, size: f32, fill: Hsla);

    /// Dashed segment whose stroke follows a linear gradient from `from` to `to`.
    fn dashed_line(&mut self, from: Vec2, to: Vec2, stops: &[ColorStop], stroke: &DashedStroke);
}

/// Vertical then horizontal lines every `spacing` pixels, starting at 0.
pub fn draw_grid<S: Surface + ?Sized>(surface: &mut S, size: Vec2, spacing: f32, stroke: &Stroke) {
    if spacing <= 0.0 {
        return;
    }
    let mut x = 0.0;
    while x < size.x {
        surface.line(Vec2::new(x, 0.0), Vec2::new(x, size.y), stroke);
        x += spacing;
    }
    let mut y = 0.0;
    while y < size.y {
        surface.line(Vec2::new(0.0, y), Vec2::new(size.x, y), stroke);
        y += spacing;
    }
}
