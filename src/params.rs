/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * knobs for the particle field. Earlier revisions of the effect disagreed
 * on several of them (flat vs distance-scaled line opacity, minimum
 * population, culling margin); the defaults here are the single surviving
 * configuration.
 */

pub struct SimulationParams {
    pub min_particles: usize,
    pub speed_px_per_sec: f32,
    pub connection_distance: f32,
    pub offscreen_margin: f32,
    pub spawn_burst_size: usize,
    pub radius_min: f32,
    pub radius_max: f32,
    pub show_debug: bool,
    pub pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            min_particles: 40,
            speed_px_per_sec: 100.0,
            connection_distance: 150.0,
            // Matches the connection distance, so lines to particles just
            // outside the frame fade out instead of popping.
            offscreen_margin: 150.0,
            spawn_burst_size: 3,
            radius_min: 1.0,
            radius_max: 3.0,
            show_debug: false,
            pause_simulation: false,
        }
    }
}
