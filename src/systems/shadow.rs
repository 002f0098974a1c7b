//! Shadow projector: sun center + body center -> shadow offset.

use crate::core::vec2::Vec2;

/// Horizontal shadow reach in pixels.
pub const SHADOW_LENGTH: f32 = 20.0;
/// Fixed vertical drop; shadows are not foreshortened by sun elevation.
pub const SHADOW_DROP: f32 = 10.0;

/// Offset for one body's shadow visual, away from the sun.
///
/// Pure function of the two centers; recomputed every frame since both move.
pub fn project(sun_center: Vec2, body_center: Vec2) -> Vec2 {
    let angle = (body_center.y - sun_center.y).atan2(body_center.x - sun_center.x);
    Vec2::new(angle.cos() * SHADOW_LENGTH, SHADOW_DROP)
}
