//! Motion integrator: one Euler step per frame with wall reflection.

use crate::core::viewport::Viewport;
use crate::domain::body::Body;

/// Advance one body by its velocity, reflecting off viewport walls.
///
/// The bounds test runs against the pre-update position, so a body sitting
/// exactly on a wall reverses direction this tick instead of tunneling
/// through. Bodies under drag are not integrated at all; the pointer owns
/// their position.
pub fn advance(body: &mut Body, viewport: Viewport) {
    if body.is_dragging() {
        return;
    }

    let size = body.diameter();

    if body.pos.x + size >= viewport.width || body.pos.x <= 0.0 {
        body.velocity.x = -body.velocity.x;
    }
    if body.pos.y + size >= viewport.height || body.pos.y <= 0.0 {
        body.velocity.y = -body.velocity.y;
    }

    body.pos += body.velocity;
}
