/*
 * Plexus Particle Field
 *
 * This application renders a field of drifting particles on a 2D canvas.
 * Nearby particles are joined by lines that fade with distance, a map image
 * sits behind the field and a logo on top, and the population is kept up by
 * spawning fresh particles at the window edges (or at a clicked point).
 */

use plexus::app;

fn main() {
    env_logger::init();
    nannou::app(app::model).update(app::update).run();
}
