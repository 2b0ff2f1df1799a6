use rand::Rng;

use crate::config::LinkStyle;
use crate::link::Link;
use crate::particle::Particle;
use crate::random::chance;

/// Links for one epoch: every unordered pair closer than `max_distance`,
/// each kept with probability `keep_probability`.
///
/// Quadratic in the population, which the density cap keeps small. The
/// thinning draw is only taken for pairs that are in range, so two builds over
/// identical positions generally differ.
pub fn build_links<R: Rng + ?Sized>(
    particles: &[Particle],
    style: &LinkStyle,
    rng: &mut R,
) -> Vec<Link> {
    let mut links = Vec::new();
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let distance = particles[i].position.distance(particles[j].position);
            if distance < style.max_distance && chance(rng, style.keep_probability) {
                links.push(Link::create(i, j, particles, style, rng));
            }
        }
    }
    links
}

/// Number of unordered pairs within `max_distance`, ignoring thinning.
pub fn pairs_in_range(particles: &[Particle], max_distance: f32) -> usize {
    let mut n = 0;
    for (i, p) in particles.iter().enumerate() {
        n += particles[i + 1..]
            .iter()
            .filter(|q| p.position.distance(q.position) < max_distance)
            .count();
    }
    n
}
