use rand::Rng;

use crate::color::{ColorStop, Hsla};
use crate::config::LinkStyle;
use crate::particle::Particle;
use crate::random::phase;
use crate::surface::{DashedStroke, Surface};

/// Animated dashed link between two particles of the same epoch.
///
/// Endpoints are indices into the epoch's particle list; the list and its
/// links are always rebuilt together.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub phase: f32,
    pub speed: f32,
    /// Distance between the endpoints when the link was built. Not updated.
    pub length: f32,
}

impl Link {
    pub fn create<R: Rng + ?Sized>(
        a: usize,
        b: usize,
        particles: &[Particle],
        style: &LinkStyle,
        rng: &mut R,
    ) -> Self {
        let length = match (particles.get(a), particles.get(b)) {
            (Some(pa), Some(pb)) => pa.position.distance(pb.position),
            _ => 0.0,
        };
        Self {
            a,
            b,
            phase: phase(rng),
            speed: style.phase_speed.sample(rng),
            length,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.phase += self.speed;
    }

    #[inline]
    pub fn alpha(&self, style: &LinkStyle) -> f32 {
        (self.phase.sin() + 1.0) * style.alpha_swing + style.alpha_floor
    }

    /// Draw the link. Endpoints missing from `particles` draw nothing.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        particles: &[Particle],
        style: &LinkStyle,
        saturation: f32,
        lightness: f32,
    ) {
        let (Some(pa), Some(pb)) = (particles.get(self.a), particles.get(self.b)) else {
            return;
        };
        let alpha = self.alpha(style);
        let stops = [
            ColorStop::new(
                0.0,
                Hsla::new(pa.hue, saturation, lightness, alpha * style.edge_alpha),
            ),
            ColorStop::new(
                0.5,
                Hsla::new(
                    (pa.hue + pb.hue) / 2.0,
                    style.mid_saturation,
                    style.mid_lightness,
                    alpha * style.mid_alpha,
                ),
            ),
            ColorStop::new(
                1.0,
                Hsla::new(pb.hue, saturation, lightness, alpha * style.edge_alpha),
            ),
        ];
        let stroke = DashedStroke {
            width: style.line_width,
            dash: style.dash,
            offset: -self.phase * style.dash_speed,
        };
        surface.dashed_line(pa.position, pb.position, &stops, &stroke);
    }
}
