/*
 * Particle Module
 *
 * This module defines the Particle struct, the value type for one drifting
 * point in the field. A particle is never mutated in place: each tick
 * produces a stepped successor carrying the same direction and radius.
 */

use nannou::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Point2,
    pub direction: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn new(position: Point2, direction: Vec2, radius: f32) -> Self {
        Self {
            position,
            direction,
            radius,
        }
    }

    // Advance the particle along its heading for `delta_ms` milliseconds.
    // The direction vector is normalized here, at integration time, so its
    // stored magnitude is irrelevant.
    pub fn step(self, delta_ms: f32, speed_px_per_sec: f32) -> Self {
        let displacement = heading(self.direction) * (speed_px_per_sec / 1000.0) * delta_ms;
        Self {
            position: self.position + displacement,
            ..self
        }
    }
}

// Unit vector along `direction`. A (near-)zero direction yields a zero
// heading, so such particles sit still instead of producing NaN positions.
fn heading(direction: Vec2) -> Vec2 {
    let len = direction.length();
    if len > f32::EPSILON {
        direction / len
    } else {
        Vec2::ZERO
    }
}
