//! Celestial model: wall-clock time -> sun angle and viewport position.
//!
//! A stylized arc, not solar ephemeris: the sun rises at 06:00 from the
//! bottom-left, reaches the top-center at noon, and slides along the top
//! edge to the right until 18:00.

use crate::core::vec2::Vec2;
use crate::core::viewport::Viewport;

pub const SUNRISE_HOUR: f32 = 6.0;
pub const SUNSET_HOUR: f32 = 18.0;

/// Sun elevation in degrees for a time of day. 0 outside daylight hours
/// (below horizon), 90 at noon, 180 at sunset exactly.
pub fn sun_angle(hours: u32, minutes: u32) -> f32 {
    let time_decimal = hours as f32 + minutes as f32 / 60.0;
    if time_decimal < SUNRISE_HOUR || time_decimal > SUNSET_HOUR {
        return 0.0;
    }
    ((time_decimal - SUNRISE_HOUR) / (SUNSET_HOUR - SUNRISE_HOUR)) * 180.0
}

/// Place the sun visual for a given angle.
///
/// First half of the day climbs from bottom-left toward top-center; second
/// half crosses the top edge from center to right.
pub fn sun_position(angle_degrees: f32, viewport: Viewport) -> Vec2 {
    if angle_degrees <= 90.0 {
        let t = angle_degrees / 90.0;
        Vec2::new(t * (viewport.width / 2.0), viewport.height - t * viewport.height)
    } else {
        let t = (angle_degrees - 90.0) / 90.0;
        Vec2::new(t * (viewport.width / 2.0) + viewport.width / 2.0, 0.0)
    }
}
