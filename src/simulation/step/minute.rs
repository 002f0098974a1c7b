use crate::domain::sky::SkyPhase;
use crate::domain::sun::Sun;
use crate::systems::celestial;

use super::{render_extract, SceneCore};

/// Minute-cadence update: sun angle from the wall clock, sun placement on
/// its arc, sky phase, and a shadow refresh (bodies are where they were,
/// but the light source moved).
///
/// The sky phase is updated even while no sun exists yet; the background is
/// independent of the sun visual.
pub(super) fn minute_tick(scene: &mut SceneCore, hours: u32, minutes: u32) {
    let angle = celestial::sun_angle(hours % 24, minutes % 60);
    let pos = celestial::sun_position(angle, scene.viewport);

    scene.sun = Some(Sun {
        angle_degrees: angle,
        pos,
        diameter: scene.sun_diameter,
    });
    scene.sky_phase = SkyPhase::for_hour(hours % 24);

    render_extract::extract_shadows(scene);
}
