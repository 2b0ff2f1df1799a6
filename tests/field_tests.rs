// Host-side tests for the particle field, its link graph and the start/stop driver.

use folio_core::{
    apply_pointer, build_links, pairs_in_range, population_for, ColorStop, DashedStroke,
    FieldConfig, FieldDriver, Hsla, Particle, ParticleField, PointerState, PopulationConfig,
    Stroke, Surface, SurfaceSize,
};
use glam::Vec2;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Op {
    Clear,
    Line,
    Glow,
    Disc,
    Glyph,
    Dashed,
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Recorder {
    fn count(&self, op: Op) -> usize {
        self.ops.iter().filter(|o| **o == op).count()
    }

    fn first(&self, op: Op) -> Option<usize> {
        self.ops.iter().position(|o| *o == op)
    }

    fn last(&self, op: Op) -> Option<usize> {
        self.ops.iter().rposition(|o| *o == op)
    }
}

impl Surface for Recorder {
    fn clear(&mut self, _size: Vec2) {
        self.ops.push(Op::Clear);
    }
    fn line(&mut self, _from: Vec2, _to: Vec2, _stroke: &Stroke) {
        self.ops.push(Op::Line);
    }
    fn radial_glow(&mut self, _center: Vec2, _radius: f32, _stops: &[ColorStop]) {
        self.ops.push(Op::Glow);
    }
    fn disc(&mut self, _center: Vec2, _radius: f32, _fill: Hsla) {
        self.ops.push(Op::Disc);
    }
    fn glyph(&mut self, _glyph: &str, _center: Vec2, _size: f32, _fill: Hsla) {
        self.ops.push(Op::Glyph);
    }
    fn dashed_line(&mut self, _from: Vec2, _to: Vec2, _stops: &[ColorStop], _s: &DashedStroke) {
        self.ops.push(Op::Dashed);
    }
}

/// Surface that drops everything.
struct Null;

impl Surface for Null {
    fn clear(&mut self, _size: Vec2) {}
    fn line(&mut self, _from: Vec2, _to: Vec2, _stroke: &Stroke) {}
    fn radial_glow(&mut self, _center: Vec2, _radius: f32, _stops: &[ColorStop]) {}
    fn disc(&mut self, _center: Vec2, _radius: f32, _fill: Hsla) {}
    fn glyph(&mut self, _glyph: &str, _center: Vec2, _size: f32, _fill: Hsla) {}
    fn dashed_line(&mut self, _from: Vec2, _to: Vec2, _stops: &[ColorStop], _s: &DashedStroke) {}
}

fn particle_at(x: f32, y: f32, config: &FieldConfig) -> Particle {
    let mut rng = StdRng::seed_from_u64(7);
    Particle::create(
        Vec2::new(x, y),
        Vec2::new(1000.0, 1000.0),
        &config.particle,
        &mut rng,
    )
}

#[test]
fn population_capped_for_800_by_600() {
    let cfg = PopulationConfig {
        density_divisor: 8000,
        max_particles: 25,
    };
    assert_eq!(population_for(SurfaceSize::new(800, 600), &cfg), 25);
}

#[test]
fn population_below_cap_uses_density() {
    let cfg = FieldConfig::footer().population;
    // 300 * 200 / 5000 = 12
    assert_eq!(population_for(SurfaceSize::new(300, 200), &cfg), 12);
    assert_eq!(population_for(SurfaceSize::new(0, 600), &cfg), 0);
    assert_eq!(population_for(SurfaceSize::new(10, 10), &cfg), 0);
}

#[test]
fn reseed_fills_population_and_bumps_epoch() {
    let mut field = ParticleField::seeded(FieldConfig::ambient(), 1).unwrap();
    assert_eq!(field.epoch(), 0);
    field.reseed(SurfaceSize::new(800, 600));
    assert_eq!(field.epoch(), 1);
    assert_eq!(field.particles().len(), 25);
    for link in field.links() {
        assert!(link.a < link.b);
        assert!(link.b < field.particles().len());
        assert!(link.length < field.config().links.max_distance);
    }

    field.reseed(SurfaceSize::new(160, 100));
    assert_eq!(field.epoch(), 2);
    assert_eq!(field.particles().len(), 2);
}

#[test]
fn zero_area_frame_only_clears() {
    let mut field = ParticleField::seeded(FieldConfig::footer(), 3).unwrap();
    field.reseed(SurfaceSize::new(0, 400));
    assert!(field.particles().is_empty());
    assert!(field.links().is_empty());

    let mut rec = Recorder::default();
    field.frame(&mut rec, &PointerState::default(), 16.0);
    assert_eq!(rec.ops, vec![Op::Clear]);
}

#[test]
fn frame_draws_grid_then_links_then_particles() {
    let mut field = ParticleField::seeded(FieldConfig::ambient(), 11).unwrap();
    field.reseed(SurfaceSize::new(800, 600));
    assert!(!field.links().is_empty(), "seed should produce some links");

    let mut rec = Recorder::default();
    field.frame(&mut rec, &PointerState::default(), 0.0);

    assert_eq!(rec.ops[0], Op::Clear);
    assert_eq!(rec.count(Op::Clear), 1);
    // 40px grid over 800x600: 20 vertical + 15 horizontal
    assert_eq!(rec.count(Op::Line), 35);
    assert_eq!(rec.count(Op::Dashed), field.links().len());
    assert_eq!(rec.count(Op::Glow), 25);
    assert_eq!(rec.count(Op::Disc), 25);

    let last_line = rec.last(Op::Line).unwrap();
    let first_dashed = rec.first(Op::Dashed).unwrap();
    let last_dashed = rec.last(Op::Dashed).unwrap();
    let first_glow = rec.first(Op::Glow).unwrap();
    assert!(last_line < first_dashed);
    assert!(last_dashed < first_glow);
}

#[test]
fn glyph_never_drawn_when_probability_zero() {
    let mut config = FieldConfig::footer();
    config.particle.glyph_probability = 0.0;
    let mut field = ParticleField::seeded(config, 5).unwrap();
    field.reseed(SurfaceSize::new(600, 400));
    let mut rec = Recorder::default();
    for t in 0..20 {
        field.frame(&mut rec, &PointerState::default(), t as f64 * 16.0);
    }
    assert_eq!(rec.count(Op::Glyph), 0);
}

#[test]
fn link_phase_advances_each_frame() {
    let mut field = ParticleField::seeded(FieldConfig::footer(), 9).unwrap();
    field.reseed(SurfaceSize::new(800, 600));
    let before: Vec<f32> = field.links().iter().map(|l| l.phase).collect();
    field.frame(&mut Null, &PointerState::default(), 16.0);
    for (link, old) in field.links().iter().zip(before) {
        assert!((link.phase - (old + link.speed)).abs() < 1e-5);
    }
}

#[test]
fn link_alpha_stays_in_swing_range() {
    let style = FieldConfig::ambient().links;
    let mut rng = StdRng::seed_from_u64(2);
    let particles = vec![
        particle_at(10.0, 10.0, &FieldConfig::ambient()),
        particle_at(20.0, 10.0, &FieldConfig::ambient()),
    ];
    let mut link = folio_core::Link::create(0, 1, &particles, &style, &mut rng);
    for _ in 0..500 {
        link.advance();
        let a = link.alpha(&style);
        assert!(a >= style.alpha_floor - 1e-5);
        assert!(a <= style.alpha_floor + 2.0 * style.alpha_swing + 1e-5);
    }
}

#[test]
fn kept_fraction_tracks_keep_probability() {
    for config in [FieldConfig::footer(), FieldConfig::ambient()] {
        // Tight cluster: every pair is in range.
        let particles: Vec<Particle> = (0..10)
            .map(|i| particle_at(100.0 + i as f32, 100.0, &config))
            .collect();
        let in_range = pairs_in_range(&particles, config.links.max_distance);
        assert_eq!(in_range, 45);

        let mut rng = StdRng::seed_from_u64(42);
        let rounds = 1000;
        let kept: usize = (0..rounds)
            .map(|_| build_links(&particles, &config.links, &mut rng).len())
            .sum();
        let fraction = kept as f32 / (rounds * in_range) as f32;
        assert!(
            (fraction - config.links.keep_probability).abs() < 0.02,
            "fraction {} vs keep {}",
            fraction,
            config.links.keep_probability
        );
    }
}

#[test]
fn distant_pairs_never_link() {
    let config = FieldConfig::footer();
    let particles = vec![
        particle_at(0.0, 0.0, &config),
        particle_at(500.0, 500.0, &config),
    ];
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..100 {
        assert!(build_links(&particles, &config.links, &mut rng).is_empty());
    }
}

#[test]
fn pointer_repels_and_highlights_inside_radius() {
    let config = FieldConfig::footer();
    let mut p = particle_at(100.0, 100.0, &config);
    p.opacity = 0.3;
    apply_pointer(&mut p, Vec2::new(110.0, 100.0), &config.interaction);
    // d = 10, force = (120 - 10) / 120
    let force = (120.0 - 10.0) / 120.0;
    assert!((p.position.x - (100.0 - 10.0 * force * 0.02)).abs() < 1e-4);
    assert!((p.position.y - 100.0).abs() < 1e-6);
    assert!((p.opacity - 0.32).abs() < 1e-6);

    for _ in 0..100 {
        apply_pointer(&mut p, Vec2::new(110.0, 100.0), &config.interaction);
    }
    assert!((p.opacity - 0.8).abs() < 1e-6);
}

#[test]
fn pointer_outside_radius_decays_to_floor() {
    let config = FieldConfig::footer();
    let mut p = particle_at(100.0, 100.0, &config);
    p.opacity = 0.205;
    let before = p.position;
    apply_pointer(&mut p, Vec2::new(900.0, 900.0), &config.interaction);
    assert_eq!(p.position, before);
    assert!((p.opacity - 0.2).abs() < 1e-6);
}

#[test]
fn ambient_pointer_moves_without_highlight() {
    let config = FieldConfig::ambient();
    let mut p = particle_at(50.0, 50.0, &config);
    let opacity = p.opacity;
    apply_pointer(&mut p, Vec2::new(50.0, 60.0), &config.interaction);
    assert!(p.position.y < 50.0);
    assert_eq!(p.opacity, opacity);
}

#[test]
fn driver_ignores_frames_after_stop() {
    let field = ParticleField::seeded(FieldConfig::footer(), 21).unwrap();
    let mut driver = FieldDriver::new(field);

    let mut rec = Recorder::default();
    assert!(!driver.frame(&mut rec, 0.0), "idle driver must not draw");
    assert!(rec.ops.is_empty());

    driver.attach(SurfaceSize::new(400, 300));
    assert!(driver.is_running());
    assert!(driver.frame(&mut rec, 16.0));
    let drawn = rec.ops.len();
    assert!(drawn > 0);

    assert!(driver.stop());
    assert!(!driver.stop());
    assert!(!driver.is_running());
    for t in 0..10 {
        assert!(!driver.frame(&mut rec, 32.0 + t as f64));
    }
    assert_eq!(rec.ops.len(), drawn);
    assert_eq!(driver.frames(), 1);
}

#[test]
fn driver_resize_reseeds_only_while_running() {
    let field = ParticleField::seeded(FieldConfig::ambient(), 4).unwrap();
    let mut driver = FieldDriver::new(field);
    driver.resize(SurfaceSize::new(800, 600));
    assert_eq!(driver.field().epoch(), 0);

    driver.attach(SurfaceSize::new(800, 600));
    assert_eq!(driver.field().epoch(), 1);
    driver.resize(SurfaceSize::new(400, 200));
    assert_eq!(driver.field().epoch(), 2);
    assert_eq!(driver.field().size(), SurfaceSize::new(400, 200));
    assert_eq!(driver.field().particles().len(), 10);

    driver.stop();
    driver.resize(SurfaceSize::new(800, 600));
    assert_eq!(driver.field().epoch(), 2);
}

#[test]
fn pointer_leave_disables_interaction() {
    let field = ParticleField::seeded(FieldConfig::footer(), 8).unwrap();
    let mut driver = FieldDriver::new(field);
    driver.attach(SurfaceSize::new(400, 300));
    driver.pointer_move(12.0, 34.0);
    assert_eq!(driver.pointer(), PointerState::at(12.0, 34.0));
    driver.pointer_leave();
    assert!(!driver.pointer().active);
}

#[test]
fn invalid_config_rejected_at_construction() {
    let mut config = FieldConfig::footer();
    config.population.density_divisor = 0;
    assert!(ParticleField::seeded(config, 0).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn population_never_exceeds_cap(w in 0u32..5000, h in 0u32..5000, div in 1u32..20000, cap in 0usize..200) {
        let cfg = PopulationConfig { density_divisor: div, max_particles: cap };
        let n = population_for(SurfaceSize::new(w, h), &cfg);
        prop_assert!(n <= cap);
        prop_assert_eq!(n, ((w as u64 * h as u64) / div as u64).min(cap as u64) as usize);
    }

    #[test]
    fn particles_stay_inside_bounds(seed in any::<u64>(), w in 1u32..1500, h in 1u32..1000, footer in any::<bool>()) {
        let config = if footer { FieldConfig::footer() } else { FieldConfig::ambient() };
        let mut field = ParticleField::seeded(config, seed).unwrap();
        field.reseed(SurfaceSize::new(w, h));
        let pointer = PointerState::at(w as f32 / 2.0, h as f32 / 2.0);
        for frame in 0..120 {
            field.frame(&mut Null, &pointer, frame as f64 * 16.0);
            for p in field.particles() {
                prop_assert!(p.position.x >= 0.0 && p.position.x <= w as f32);
                prop_assert!(p.position.y >= 0.0 && p.position.y <= h as f32);
                prop_assert!(p.radius > 0.0);
            }
        }
    }

    #[test]
    fn radius_pulse_stays_positive(seed in any::<u64>(), t in 0.0f64..1.0e7) {
        let config = FieldConfig::footer();
        let mut rng = StdRng::seed_from_u64(seed);
        let p = Particle::create(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0), &config.particle, &mut rng);
        let r = p.radius_at(t, config.particle.pulse_amplitude);
        prop_assert!(r > 0.0);
        prop_assert!((r - p.base_radius).abs() <= config.particle.pulse_amplitude + 1e-4);
    }
}
