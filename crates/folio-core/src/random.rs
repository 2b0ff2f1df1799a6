use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Closed numeric range used for every randomized particle/link attribute.
///
/// Unlike `Rng::gen_range`, a degenerate span (`min == max`) is legal and
/// always yields `min`, which lets a preset pin an attribute to a constant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.min + rng.gen::<f32>() * (self.max - self.min)
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Velocity with each component uniform in `[-spread/2, spread/2)`.
#[inline]
pub fn drift<R: Rng + ?Sized>(rng: &mut R, spread: f32) -> Vec2 {
    Vec2::new(
        (rng.gen::<f32>() - 0.5) * spread,
        (rng.gen::<f32>() - 0.5) * spread,
    )
}

#[inline]
pub fn phase<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>() * TAU
}

/// Uniform point inside `[0, bounds.x) x [0, bounds.y)`.
#[inline]
pub fn point_in<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Vec2 {
    Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y)
}

/// True with probability `p` (clamped to [0, 1]).
#[inline]
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f32) -> bool {
    rng.gen::<f32>() > 1.0 - p.clamp(0.0, 1.0)
}
