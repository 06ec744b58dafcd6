/*
 * Screen Module
 *
 * The field lives in canvas coordinates: origin at the top-left corner of
 * the window, y growing downward. nannou draws in a centered, y-up space.
 * This module converts between the two for the renderer and the input
 * layer.
 */

use nannou::prelude::*;

// Convert a point from field space to nannou's centered screen space.
pub fn to_screen(point: Point2, window: Vec2) -> Point2 {
    pt2(point.x - window.x / 2.0, window.y / 2.0 - point.y)
}

// Convert a point from nannou's centered screen space to field space.
pub fn from_screen(point: Point2, window: Vec2) -> Point2 {
    pt2(point.x + window.x / 2.0, window.y / 2.0 - point.y)
}
