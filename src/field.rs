/*
 * Field Module
 *
 * This module holds the particle store operations: advancing the field by
 * one tick and replenishing the population from the window edges.
 *
 * Culling runs before integration, so a particle's last known position
 * decides whether it survives the tick.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::SimulationParams;
use crate::particle::Particle;
use crate::spawner;

// Advance the field by `delta_ms`: cull particles that have left the window
// (plus margin), then step the survivors. Pure transform over the sequence;
// negative deltas are treated as zero so a timer hiccup never drags
// particles backwards.
pub fn advance(
    window: Vec2,
    delta_ms: f32,
    particles: Vec<Particle>,
    params: &SimulationParams,
) -> Vec<Particle> {
    let delta_ms = delta_ms.max(0.0);
    particles
        .into_iter()
        .filter(|particle| !offscreen(particle, window, params.offscreen_margin))
        .map(|particle| particle.step(delta_ms, params.speed_px_per_sec))
        .collect()
}

// Top the population back up to the configured minimum with edge-spawned
// particles, so the field keeps the appearance of drifters entering from
// outside the frame.
pub fn replenish(
    rng: &mut impl Rng,
    window: Vec2,
    particles: &mut Vec<Particle>,
    params: &SimulationParams,
) {
    let shortfall = params.min_particles.saturating_sub(particles.len());
    if shortfall > 0 {
        particles.extend(spawner::edges(rng, window, shortfall, params));
    }
}

// True when the particle's bounding circle sits entirely outside the window
// expanded by `margin` on either axis.
fn offscreen(particle: &Particle, window: Vec2, margin: f32) -> bool {
    let reach = particle.radius + margin;
    particle.position.x + reach < 0.0
        || particle.position.x - reach > window.x
        || particle.position.y + reach < 0.0
        || particle.position.y - reach > window.y
}
