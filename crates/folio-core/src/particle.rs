use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

use crate::color::{ColorStop, Hsla};
use crate::config::ParticleStyle;
use crate::constants::GLYPH_ALPHA_SCALE;
use crate::random::{chance, drift, phase};
use crate::surface::Surface;

/// One animated point of the field.
///
/// Everything except position, velocity, radius and opacity is fixed at
/// creation. Particles never outlive the epoch they were seeded in.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub base_radius: f32,
    pub radius: f32,
    pub pulse_speed: f32,
    pub pulse_offset: f32,
    pub opacity: f32,
    pub hue: f32,
    pub glow: f32,
    /// Index into the style's glyph palette.
    pub glyph: usize,
}

impl Particle {
    pub fn create<R: Rng + ?Sized>(
        position: Vec2,
        bounds: Vec2,
        style: &ParticleStyle,
        rng: &mut R,
    ) -> Self {
        let base_radius = style.radius.sample(rng);
        let glyph = if style.glyphs.is_empty() {
            0
        } else {
            rng.gen_range(0..style.glyphs.len())
        };
        Self {
            position: position.clamp(Vec2::ZERO, bounds.max(Vec2::ZERO)),
            velocity: drift(rng, style.speed_spread),
            base_radius,
            radius: base_radius,
            pulse_speed: style.pulse_speed.sample(rng),
            pulse_offset: phase(rng),
            opacity: style.opacity.sample(rng),
            hue: style.hue.sample(rng),
            glow: style.glow_intensity.sample(rng),
            glyph,
        }
    }

    /// `base + amplitude * sin(t * speed + offset)`, with `t` in milliseconds.
    #[inline]
    pub fn radius_at(&self, now_ms: f64, amplitude: f32) -> f32 {
        let wave = (now_ms * self.pulse_speed as f64 + self.pulse_offset as f64).sin() as f32;
        self.base_radius + amplitude * wave
    }

    /// Pulse the radius and take one velocity step, reflecting off the bounds.
    pub fn advance(&mut self, now_ms: f64, bounds: Vec2, amplitude: f32) {
        self.radius = self.radius_at(now_ms, amplitude);

        self.position += self.velocity;

        if self.position.x < 0.0 || self.position.x > bounds.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > bounds.y {
            self.velocity.y = -self.velocity.y;
        }
        self.position = self.position.clamp(Vec2::ZERO, bounds.max(Vec2::ZERO));
    }

    #[inline]
    pub fn color(&self, style: &ParticleStyle) -> Hsla {
        Hsla::new(self.hue, style.saturation, style.lightness, self.opacity)
    }

    /// Glow, solid core, and sometimes the glyph. The glyph draw is re-rolled
    /// every frame, which gives the flicker.
    pub fn render<S: Surface + ?Sized, R: Rng + ?Sized>(
        &self,
        surface: &mut S,
        style: &ParticleStyle,
        rng: &mut R,
    ) {
        let core = self.color(style);
        let glow_alpha = self.opacity * self.glow;

        let mut stops: SmallVec<[ColorStop; 3]> = SmallVec::new();
        stops.push(ColorStop::new(0.0, core.with_alpha(glow_alpha)));
        if style.glow_mid_stop {
            stops.push(ColorStop::new(0.5, core.with_alpha(glow_alpha * 0.5)));
        }
        stops.push(ColorStop::new(1.0, core.with_alpha(0.0)));
        surface.radial_glow(self.position, self.radius * style.glow_factor, &stops);

        surface.disc(self.position, self.radius, core);

        if chance(rng, style.glyph_probability) {
            if let Some(glyph) = style.glyphs.get(self.glyph) {
                let fill = Hsla::new(
                    self.hue,
                    style.glyph_saturation,
                    style.glyph_lightness,
                    (self.opacity * GLYPH_ALPHA_SCALE).min(1.0),
                );
                surface.glyph(glyph, self.position, self.radius * style.glyph_scale, fill);
            }
        }
    }
}
