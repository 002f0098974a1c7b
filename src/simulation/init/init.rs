use crate::core::viewport::Viewport;
use crate::domain::sky::{SkyPalette, SkyPhase};
use crate::systems::drag::DragController;

use super::perf_stats::PerfStats;
use super::{RenderBuffers, SceneCore};

/// Default rendered size of the sun visual; the host can override it with
/// the measured DOM size.
pub(super) const DEFAULT_SUN_DIAMETER: f32 = 60.0;

pub(super) fn create_scene_core(width: f32, height: f32) -> SceneCore {
    SceneCore {
        viewport: Viewport::new(width.max(1.0), height.max(1.0)),
        bodies: Vec::new(),
        drag: DragController::new(),

        // No sun until the first minute tick; shadow extraction no-ops
        // until then.
        sun: None,
        sun_diameter: DEFAULT_SUN_DIAMETER,
        palette: SkyPalette::default(),
        sky_phase: SkyPhase::Night,

        next_id: 1,
        frame: 0,
        rng_state: 12345,

        render: RenderBuffers {
            positions: Vec::new(),
            shadow_offsets: Vec::new(),
        },

        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
