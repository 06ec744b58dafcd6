/*
 * Renderer Module
 *
 * This module draws one frame of the particle field. It reads the model and
 * never mutates it. Layers, back to front: background fill, connection
 * lines, map image, particles, logo image, then the optional debug overlay.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::particle::Particle;
use crate::screen;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();
    let window = model.window;

    // Clear the background
    draw.background().color(rgb(0.85, 0.85, 0.85));

    // Draw a line between every pair of nearby particles, more opaque the
    // closer the pair
    for (a, b, alpha) in connections(&model.particles, model.params.connection_distance) {
        draw.line()
            .start(screen::to_screen(model.particles[a].position, window))
            .end(screen::to_screen(model.particles[b].position, window))
            .weight(1.0)
            .color(rgba(0.35, 0.35, 0.35, alpha));
    }

    // Draw the map image, width-fitted and centered
    if let Some(map) = &model.textures.map {
        let (w, h) = fit_to_width(map.size(), window.x);
        draw.texture(map).w_h(w, h);
    }

    // Draw each particle as a filled circle
    for particle in &model.particles {
        draw.ellipse()
            .xy(screen::to_screen(particle.position, window))
            .radius(particle.radius)
            .color(rgb(0.35, 0.35, 0.35));
    }

    // Draw the logo on top, centered in the window
    if let Some(logo) = &model.textures.logo {
        let (w, h) = fit_to_width(logo.size(), window.x);
        draw.texture(logo).w_h(w, h);
    }

    // Draw debug info if enabled
    if model.params.show_debug {
        draw.text(&format!("FPS: {:.1}", model.debug_info.fps))
            .x_y(-window.x / 2.0 + 100.0, window.y / 2.0 - 20.0)
            .color(BLACK)
            .font_size(14);

        draw.text(&format!(
            "Frame time: {:.2} ms",
            model.debug_info.frame_time.as_secs_f64() * 1000.0
        ))
        .x_y(-window.x / 2.0 + 100.0, window.y / 2.0 - 40.0)
        .color(BLACK)
        .font_size(14);

        draw.text(&format!("Particles: {}", model.particles.len()))
            .x_y(-window.x / 2.0 + 100.0, window.y / 2.0 - 60.0)
            .color(BLACK)
            .font_size(14);
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();
}

// Every unordered pair of distinct particles closer than `max_distance`,
// with the line alpha scaled by 1 - distance/max_distance. O(n²) pairwise;
// fine at the default population, measured in benches/ for anything larger.
pub fn connections(particles: &[Particle], max_distance: f32) -> Vec<(usize, usize, f32)> {
    let mut pairs = Vec::new();
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let distance = particles[i].position.distance(particles[j].position);
            if distance < max_distance {
                pairs.push((i, j, 1.0 - distance / max_distance));
            }
        }
    }
    pairs
}

// Scale a texture to fit the window width without ever upscaling past its
// natural size. Returns the drawn width and height, aspect preserved.
pub fn fit_to_width(texture_size: [u32; 2], window_width: f32) -> (f32, f32) {
    let natural_w = texture_size[0] as f32;
    let natural_h = texture_size[1] as f32;
    let scale = (window_width / natural_w).min(1.0);
    (natural_w * scale, natural_h * scale)
}
