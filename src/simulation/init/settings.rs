use crate::core::viewport::Viewport;
use crate::systems::celestial;

use super::perf_stats::PerfStats;
use super::SceneCore;

pub(super) fn enable_perf_metrics(scene: &mut SceneCore, enabled: bool) {
    scene.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(scene: &SceneCore) -> PerfStats {
    scene.perf_stats.clone()
}

pub(super) fn resize(scene: &mut SceneCore, width: f32, height: f32) -> Result<(), String> {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(format!("invalid viewport size {width}x{height}"));
    }
    scene.viewport = Viewport::new(width, height);

    // Keep the sun on its arc for the new dimensions. Bodies outside the
    // shrunk viewport are left alone; wall reflection pulls them back in.
    if let Some(sun) = scene.sun.as_mut() {
        sun.pos = celestial::sun_position(sun.angle_degrees, scene.viewport);
    }
    Ok(())
}

pub(super) fn set_sun_diameter(scene: &mut SceneCore, diameter: f32) {
    if diameter.is_finite() && diameter > 0.0 {
        scene.sun_diameter = diameter;
        if let Some(sun) = scene.sun.as_mut() {
            sun.diameter = diameter;
        }
    }
}
