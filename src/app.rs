/*
 * Application Module
 *
 * This module defines the main application model and the per-tick update.
 * Each tick advances the field by the elapsed frame time, culls particles
 * that drifted out of view, and tops the population back up from the
 * window edges.
 */

use log::info;
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assets::Textures;
use crate::debug::DebugInfo;
use crate::field;
use crate::input;
use crate::params::SimulationParams;
use crate::particle::Particle;
use crate::renderer;
use crate::spawner;

// Main model for the application
pub struct Model {
    pub particles: Vec<Particle>,
    pub params: SimulationParams,
    pub window: Vec2,
    pub textures: Textures,
    pub debug_info: DebugInfo,
    pub mouse_position: Point2,
    pub rng: StdRng,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window
    app.new_window()
        .title("Plexus Particle Field")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .key_pressed(input::key_pressed)
        .resized(input::resized)
        .build()
        .unwrap();

    let params = SimulationParams::default();
    let window = vec2(window_width, window_height);

    // Load the two overlay images; either may stay absent
    let textures = Textures::load(app);

    // Seed the initial population over the whole window
    let mut rng = StdRng::from_entropy();
    let particles = spawner::area(&mut rng, window, params.min_particles, &params);

    info!(
        "seeded {} particles in a {:.0}x{:.0} window",
        particles.len(),
        window.x,
        window.y
    );

    Model {
        particles,
        params,
        window,
        textures,
        debug_info: DebugInfo::default(),
        mouse_position: pt2(0.0, 0.0),
        rng,
    }
}

// Update the model once per animation tick
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    if model.params.pause_simulation {
        return;
    }

    let delta_ms = update.since_last.as_secs_f32() * 1000.0;

    // Advance and cull, then top the population back up from the edges
    let particles = std::mem::take(&mut model.particles);
    model.particles = field::advance(model.window, delta_ms, particles, &model.params);
    field::replenish(
        &mut model.rng,
        model.window,
        &mut model.particles,
        &model.params,
    );
}
