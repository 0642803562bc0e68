use glam::Vec3;

use crate::world::bodies::CelestialBody;

/// Sphere-sphere collision test against all bodies.
///
/// Returns the first body (slice order, so central body first, then orbiting
/// bodies in definition order) whose distance to `ship_pos` is strictly less
/// than the combined radii. A distance exactly equal to the combined radii is
/// NOT a collision. Pure function of the current positions.
pub fn find_collision<'a>(
    ship_pos: Vec3,
    ship_radius: f32,
    bodies: &'a [CelestialBody],
) -> Option<&'a CelestialBody> {
    bodies
        .iter()
        .find(|body| ship_pos.distance(body.position) < ship_radius + body.radius)
}
