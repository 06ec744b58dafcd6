/*
 * Spawner Module
 *
 * This module produces randomized particle descriptors under three
 * policies: full-area seeding at startup, edge-constrained respawn for
 * replenishment, and a fixed-origin burst for clicks. All randomness comes
 * from the injected rng, so every generator is deterministic under a fixed
 * seed.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::SimulationParams;
use crate::particle::Particle;

// Seed particles uniformly over the whole window. Used once at startup to
// fill the field immediately.
pub fn area(
    rng: &mut impl Rng,
    window: Vec2,
    count: usize,
    params: &SimulationParams,
) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let position = pt2(rng.gen_range(0.0..window.x), rng.gen_range(0.0..window.y));
            Particle::new(position, direction(rng), radius(rng, params))
        })
        .collect()
}

// Spawn particles on the window border, so replenished particles appear to
// drift in from outside. A coin flip picks the vertical or horizontal pair
// of edges, a second flip picks the edge within the pair, and the position
// is uniform along it.
pub fn edges(
    rng: &mut impl Rng,
    window: Vec2,
    count: usize,
    params: &SimulationParams,
) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let position = if rng.gen_bool(0.5) {
                let x = if rng.gen_bool(0.5) { 0.0 } else { window.x };
                pt2(x, rng.gen_range(0.0..window.y))
            } else {
                let y = if rng.gen_bool(0.5) { 0.0 } else { window.y };
                pt2(rng.gen_range(0.0..window.x), y)
            };
            Particle::new(position, direction(rng), radius(rng, params))
        })
        .collect()
}

// Spawn a burst of particles sharing one origin, each with its own random
// heading and radius. Used for click bursts.
pub fn burst(
    rng: &mut impl Rng,
    origin: Point2,
    count: usize,
    params: &SimulationParams,
) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle::new(origin, direction(rng), radius(rng, params)))
        .collect()
}

// Random direction with each component in -1..1. Left unnormalized: the
// particle normalizes at integration time, and a zero vector is legal.
fn direction(rng: &mut impl Rng) -> Vec2 {
    vec2(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
}

fn radius(rng: &mut impl Rng, params: &SimulationParams) -> f32 {
    rng.gen_range(params.radius_min..params.radius_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn window() -> Vec2 {
        vec2(800.0, 600.0)
    }

    #[test]
    fn area_positions_lie_inside_the_window() {
        let mut rng = StdRng::seed_from_u64(1);
        let window = window();
        for particle in area(&mut rng, window, 200, &SimulationParams::default()) {
            assert!(particle.position.x >= 0.0 && particle.position.x < window.x);
            assert!(particle.position.y >= 0.0 && particle.position.y < window.y);
        }
    }

    #[test]
    fn edge_positions_lie_on_the_border() {
        let mut rng = StdRng::seed_from_u64(3);
        let window = window();
        for particle in edges(&mut rng, window, 200, &SimulationParams::default()) {
            let on_vertical = particle.position.x == 0.0 || particle.position.x == window.x;
            let on_horizontal = particle.position.y == 0.0 || particle.position.y == window.y;
            assert!(
                on_vertical || on_horizontal,
                "interior spawn at {:?}",
                particle.position
            );
        }
    }

    #[test]
    fn edge_spawns_reach_all_four_edges() {
        let mut rng = StdRng::seed_from_u64(5);
        let window = window();
        let spawned = edges(&mut rng, window, 400, &SimulationParams::default());
        assert!(spawned.iter().any(|p| p.position.x == 0.0));
        assert!(spawned.iter().any(|p| p.position.x == window.x));
        assert!(spawned.iter().any(|p| p.position.y == 0.0));
        assert!(spawned.iter().any(|p| p.position.y == window.y));
    }

    #[test]
    fn burst_shares_the_origin() {
        let mut rng = StdRng::seed_from_u64(9);
        let params = SimulationParams::default();
        let origin = pt2(123.0, 456.0);
        let spawned = burst(&mut rng, origin, params.spawn_burst_size, &params);
        assert_eq!(spawned.len(), 3);
        for particle in &spawned {
            assert_eq!(particle.position, origin);
            assert!(particle.radius >= params.radius_min);
            assert!(particle.radius <= params.radius_max);
        }
    }

    #[test]
    fn directions_stay_in_the_unit_box() {
        let mut rng = StdRng::seed_from_u64(11);
        for particle in area(&mut rng, window(), 500, &SimulationParams::default()) {
            assert!(particle.direction.x >= -1.0 && particle.direction.x < 1.0);
            assert!(particle.direction.y >= -1.0 && particle.direction.y < 1.0);
        }
    }

    #[test]
    fn generation_is_deterministic_under_a_fixed_seed() {
        let params = SimulationParams::default();
        let a = area(&mut StdRng::seed_from_u64(42), window(), 10, &params);
        let b = area(&mut StdRng::seed_from_u64(42), window(), 10, &params);
        assert_eq!(a, b);
    }
}
