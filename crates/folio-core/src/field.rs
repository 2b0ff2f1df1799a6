use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{FieldConfig, PopulationConfig};
use crate::error::ConfigError;
use crate::graph::{build_links, pairs_in_range};
use crate::link::Link;
use crate::particle::Particle;
use crate::pointer::{apply_pointer, PointerSource};
use crate::random::point_in;
use crate::surface::{draw_grid, Stroke, Surface};

/// Logical size of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// `min(max_particles, floor(width * height / density_divisor))`, zero for an empty surface.
pub fn population_for(size: SurfaceSize, cfg: &PopulationConfig) -> usize {
    let n = size
        .area()
        .checked_div(cfg.density_divisor as u64)
        .unwrap_or(0);
    n.min(cfg.max_particles as u64) as usize
}

/// Particle population plus its proximity graph for the current epoch.
pub struct ParticleField<R: Rng = StdRng> {
    config: FieldConfig,
    rng: R,
    size: SurfaceSize,
    particles: Vec<Particle>,
    links: Vec<Link>,
    epoch: u64,
}

impl ParticleField<StdRng> {
    /// Deterministic field, used by tests and replays.
    pub fn seeded(config: FieldConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: FieldConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn with_rng(config: FieldConfig, rng: R) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            log::warn!("[field] rejected options: {}", e);
            return Err(e);
        }
        Ok(Self {
            config,
            rng,
            size: SurfaceSize::default(),
            particles: Vec::new(),
            links: Vec::new(),
            epoch: 0,
        })
    }

    /// Discard the population and links and seed a new epoch for `size`.
    pub fn reseed(&mut self, size: SurfaceSize) {
        self.size = size;
        self.epoch += 1;

        let bounds = size.as_vec2();
        let count = population_for(size, &self.config.population);
        let style = &self.config.particle;
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| {
                let at = point_in(rng, bounds);
                Particle::create(at, bounds, style, rng)
            })
            .collect();
        self.links = build_links(&self.particles, &self.config.links, &mut self.rng);

        log::debug!(
            "[field] epoch={} size={}x{} particles={} links={}/{}",
            self.epoch,
            size.width,
            size.height,
            self.particles.len(),
            self.links.len(),
            pairs_in_range(&self.particles, self.config.links.max_distance)
        );
    }

    /// One frame: clear, grid, links, then particles (lines sit under the glows).
    pub fn frame<S, P>(&mut self, surface: &mut S, pointer: &P, now_ms: f64)
    where
        S: Surface + ?Sized,
        P: PointerSource + ?Sized,
    {
        let bounds = self.size.as_vec2();
        surface.clear(bounds);
        if self.size.area() == 0 {
            return;
        }

        let Self {
            config,
            rng,
            particles,
            links,
            ..
        } = self;

        let grid = Stroke {
            color: config.grid.color,
            width: config.grid.line_width,
        };
        draw_grid(surface, bounds, config.grid.spacing, &grid);

        for link in links.iter_mut() {
            link.advance();
            link.render(
                surface,
                particles,
                &config.links,
                config.particle.saturation,
                config.particle.lightness,
            );
        }

        let pointer = pointer.pointer();
        for particle in particles.iter_mut() {
            if pointer.active {
                apply_pointer(particle, pointer.position, &config.interaction);
            }
            particle.advance(now_ms, bounds, config.particle.pulse_amplitude);
            particle.render(surface, &config.particle, rng);
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Incremented on every reseed; zero before the first one.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}
