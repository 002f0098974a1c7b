//! Transfer-buffer extraction. The host reads these flat arrays straight
//! out of WASM memory each frame and moves the DOM nodes; no per-body JS
//! calls.

use crate::systems::shadow;

use super::SceneCore;

/// Refresh both buffers: positions always, shadows when a sun exists.
pub(super) fn extract(scene: &mut SceneCore) {
    extract_positions(scene);
    extract_shadows(scene);
}

pub(super) fn extract_positions(scene: &mut SceneCore) {
    let positions = &mut scene.render.positions;
    positions.clear();
    positions.reserve(scene.bodies.len() * 2);
    for body in &scene.bodies {
        positions.push(body.pos.x);
        positions.push(body.pos.y);
    }
}

/// Recompute every body's shadow offset. No sun yet means no shadows to
/// cast; the buffer is left untouched rather than failing.
pub(super) fn extract_shadows(scene: &mut SceneCore) {
    let Some(sun) = scene.sun else {
        return;
    };

    let sun_center = sun.center();
    let offsets = &mut scene.render.shadow_offsets;
    offsets.clear();
    offsets.reserve(scene.bodies.len() * 2);
    for body in &scene.bodies {
        let offset = shadow::project(sun_center, body.center());
        offsets.push(offset.x);
        offsets.push(offset.y);
    }
}
