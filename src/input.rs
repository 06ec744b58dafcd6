/*
 * Input Module
 *
 * This module handles user input and window events for the particle field.
 *
 * Features:
 * - Click-to-spawn particle bursts
 * - Pause and debug-overlay toggles on the keyboard
 * - Window resize tracking
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::screen;
use crate::spawner;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    // Always update the stored mouse position
    model.mouse_position = pos;
}

// Mouse pressed event handler: a left click bursts new particles at the
// clicked point, regardless of the current population.
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        let origin = screen::from_screen(model.mouse_position, model.window);
        let spawned = spawner::burst(
            &mut model.rng,
            origin,
            model.params.spawn_burst_size,
            &model.params,
        );
        model.particles.extend(spawned);
    }
}

// Keyboard event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => model.params.pause_simulation = !model.params.pause_simulation,
        Key::D => model.params.show_debug = !model.params.show_debug,
        _ => {}
    }
}

// Window resized event handler
pub fn resized(_app: &App, model: &mut Model, dim: Vec2) {
    model.window = dim;
}
