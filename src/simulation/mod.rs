//! Scene - orchestration of the bouncing-body simulation
//!
//! The scene only orchestrates; the math lives in systems/:
//! - Per-frame (`step`): motion integration + collision resolution + shadow
//!   extraction, in registry order.
//! - Per-minute (`minute_tick`): celestial model + sky phase + shadow
//!   refresh.
//! - Between frames: pointer commands toggling drag state.
//!
//! Both drivers are external (the JS host's requestAnimationFrame and
//! setInterval); callbacks are serialized on the host's single execution
//! context, so the scene needs no locking.

use crate::core::viewport::Viewport;
use crate::domain::body::Body;
use crate::domain::sky::{SkyPalette, SkyPhase};
use crate::domain::sun::Sun;
use crate::systems::drag::DragController;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "step/minute.rs"]
mod minute;
#[path = "commands/commands.rs"]
mod commands;
#[path = "pointer/pointer.rs"]
mod pointer;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

pub use facade::Scene;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Flat f32 buffers the host renders from, read zero-copy out of WASM
/// memory. Interleaved x,y per body, in registry order.
pub(crate) struct RenderBuffers {
    pub(crate) positions: Vec<f32>,
    pub(crate) shadow_offsets: Vec<f32>,
}

/// The simulation scene
pub struct SceneCore {
    viewport: Viewport,
    bodies: Vec<Body>,
    drag: DragController,

    // Lighting
    sun: Option<Sun>,
    sun_diameter: f32,
    palette: SkyPalette,
    sky_phase: SkyPhase,

    // State
    next_id: u32,
    frame: u64,
    rng_state: u32,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SceneCore {
    /// Create a new scene with given viewport dimensions
    pub fn new(width: f32, height: f32) -> Self {
        init::create_scene_core(width, height)
    }

    pub fn width(&self) -> f32 {
        self.viewport.width
    }

    pub fn height(&self) -> f32 {
        self.viewport.height
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn sun(&self) -> Option<Sun> {
        self.sun
    }

    pub fn sky_phase(&self) -> SkyPhase {
        self.sky_phase
    }

    pub fn palette(&self) -> &SkyPalette {
        &self.palette
    }

    /// Viewport resize (host window changed).
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), String> {
        settings::resize(self, width, height)
    }

    /// Rendered size of the host's sun visual; shadows are cast from its
    /// center.
    pub fn set_sun_diameter(&mut self, diameter: f32) {
        settings::set_sun_diameter(self, diameter);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Replace the sky palette from host-supplied JSON
    pub fn load_sky_manifest_json(&mut self, json: &str) -> Result<(), String> {
        let palette = SkyPalette::from_manifest_json(json)?;
        self.palette = palette;
        Ok(())
    }

    pub fn sky_manifest_json(&self) -> String {
        self.palette.to_manifest_json()
    }

    /// Spawn a body at position. Returns the body ID, 0 on rejection.
    pub fn spawn_body(&mut self, x: f32, y: f32, diameter: f32, color: u32) -> u32 {
        commands::spawn_body(self, x, y, diameter, color)
    }

    /// Spawn `count` bodies at random positions with random velocities and
    /// colors. Returns how many were placed.
    pub fn spawn_random_bodies(&mut self, count: u32) -> u32 {
        commands::spawn_random_bodies(self, count)
    }

    /// Remove all bodies (session reset)
    pub fn clear_bodies(&mut self) {
        commands::clear_bodies(self)
    }

    // === POINTER API ===

    /// Pointer pressed at viewport coordinates. Returns the grabbed body's
    /// ID, 0 if the press hit no body.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> u32 {
        pointer::pointer_down(self, x, y)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        pointer::pointer_move(self, x, y)
    }

    pub fn pointer_up(&mut self) {
        pointer::pointer_up(self)
    }

    /// Step the simulation forward one frame
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Minute tick: recompute sun placement and sky phase for a wall-clock
    /// time, then refresh shadows.
    pub fn minute_tick(&mut self, hours: u32, minutes: u32) {
        minute::minute_tick(self, hours, minutes);
    }

    // === RENDER BUFFER API ===

    pub fn positions_ptr(&self) -> *const f32 {
        self.render.positions.as_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.render.positions.len()
    }

    pub fn shadow_offsets_ptr(&self) -> *const f32 {
        self.render.shadow_offsets.as_ptr()
    }

    pub fn shadow_offsets_len(&self) -> usize {
        self.render.shadow_offsets.len()
    }
}
