//! Start/stop state around a [`ParticleField`].
//!
//! The host owns scheduling and event wiring; this type owns the rules:
//! frames only draw while running, resizes reseed the whole epoch, and a
//! stopped driver never touches the surface again.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

use crate::field::{ParticleField, SurfaceSize};
use crate::pointer::PointerState;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

pub struct FieldDriver<R: Rng = StdRng> {
    field: ParticleField<R>,
    pointer: PointerState,
    phase: Phase,
    frames: u64,
}

impl<R: Rng> FieldDriver<R> {
    pub fn new(field: ParticleField<R>) -> Self {
        Self {
            field,
            pointer: PointerState::default(),
            phase: Phase::Idle,
            frames: 0,
        }
    }

    /// Size the field to its container and start accepting frames.
    pub fn attach(&mut self, size: SurfaceSize) {
        self.field.reseed(size);
        self.phase = Phase::Running;
        log::debug!("[field] attached {}x{}", size.width, size.height);
    }

    /// Re-measure after a container resize. Ignored unless running.
    pub fn resize(&mut self, size: SurfaceSize) {
        if self.phase == Phase::Running {
            self.field.reseed(size);
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = PointerState {
            position: Vec2::new(x, y),
            active: true,
        };
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.active = false;
    }

    /// Draw one frame. Returns false, without touching the surface, when idle.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, now_ms: f64) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.field.frame(surface, &self.pointer, now_ms);
        self.frames += 1;
        true
    }

    /// Stop for good. Returns whether this call did the stopping; repeated
    /// calls are no-ops.
    pub fn stop(&mut self) -> bool {
        if self.phase == Phase::Idle {
            return false;
        }
        self.phase = Phase::Idle;
        self.pointer.active = false;
        log::debug!("[field] stopped after {} frames", self.frames);
        true
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }
}
