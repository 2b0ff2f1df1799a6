use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::InteractionConfig;
use crate::particle::Particle;

/// Last known pointer position in surface-local pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub active: bool,
}

impl PointerState {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            active: true,
        }
    }
}

/// Read side of the pointer record. Event handlers write, the frame reads.
///
/// Single-threaded hosts share it through `Rc<RefCell<_>>`; a host with real
/// parallelism needs a lock or a channel in front of it.
pub trait PointerSource {
    fn pointer(&self) -> PointerState;
}

impl PointerSource for PointerState {
    fn pointer(&self) -> PointerState {
        *self
    }
}

impl PointerSource for RefCell<PointerState> {
    fn pointer(&self) -> PointerState {
        *self.borrow()
    }
}

impl<T: PointerSource + ?Sized> PointerSource for Rc<T> {
    fn pointer(&self) -> PointerState {
        (**self).pointer()
    }
}

/// Push (or pull, for negative strength) a particle relative to the pointer.
///
/// Inside the radius the displacement scales with `(radius - d) / radius`
/// and the optional highlight raises opacity; outside it opacity decays
/// toward the highlight floor.
pub fn apply_pointer(particle: &mut Particle, pointer: Vec2, cfg: &InteractionConfig) {
    let delta = pointer - particle.position;
    let distance = delta.length();

    if distance < cfg.radius {
        let force = (cfg.radius - distance) / cfg.radius;
        particle.position -= delta * force * cfg.strength;
        if let Some(h) = &cfg.highlight {
            particle.opacity = (particle.opacity + h.rise).min(h.peak);
        }
    } else if let Some(h) = &cfg.highlight {
        particle.opacity = (particle.opacity - h.decay).max(h.floor);
    }
}
