use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::SceneCore;

#[wasm_bindgen]
pub struct Scene {
    core: SceneCore,
}

#[wasm_bindgen]
impl Scene {
    /// Create a new scene with given viewport dimensions (CSS pixels)
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: SceneCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 {
        self.core.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 {
        self.core.height()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    /// Viewport resize (call from the host's window resize handler)
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.core
            .resize(width, height)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === BODY API ===

    /// Spawn a body with its top-left corner at (x, y).
    /// Returns the body ID, 0 if the placement was rejected
    pub fn spawn_body(&mut self, x: f32, y: f32, diameter: f32, color: u32) -> u32 {
        self.core.spawn_body(x, y, diameter, color)
    }

    /// Spawn `count` randomly placed and colored bodies (initial population)
    #[wasm_bindgen(js_name = spawnRandomBodies)]
    pub fn spawn_random_bodies(&mut self, count: u32) -> u32 {
        self.core.spawn_random_bodies(count)
    }

    /// Remove all bodies
    pub fn clear_bodies(&mut self) {
        self.core.clear_bodies();
    }

    /// Body color by registry index (for creating the visuals host-side)
    pub fn body_color(&self, index: usize) -> u32 {
        self.core.bodies().get(index).map(|b| b.color).unwrap_or(0)
    }

    /// Body diameter by registry index
    pub fn body_diameter(&self, index: usize) -> f32 {
        self.core
            .bodies()
            .get(index)
            .map(|b| b.diameter())
            .unwrap_or(0.0)
    }

    // === POINTER API ===

    /// Pointer pressed at viewport coordinates.
    /// Returns the grabbed body's ID, 0 if nothing was hit
    pub fn pointer_down(&mut self, x: f32, y: f32) -> u32 {
        self.core.pointer_down(x, y)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.core.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.core.pointer_up();
    }

    // === FRAME / MINUTE DRIVERS ===

    /// Step the simulation one frame (call from requestAnimationFrame)
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Minute tick from the current wall-clock time (call from setInterval).
    /// Local time in the browser, UTC on native targets.
    pub fn minute_tick(&mut self) {
        let (hours, minutes) = now_hours_minutes();
        self.core.minute_tick(hours, minutes);

        #[cfg(target_arch = "wasm32")]
        if let Some(sun) = self.core.sun() {
            web_sys::console::log_1(
                &format!(
                    "Sun angle: {:.1}°, x: {:.0}, y: {:.0}, sky: {}",
                    sun.angle_degrees,
                    sun.pos.x,
                    sun.pos.y,
                    self.core.sky_phase().key()
                )
                .into(),
            );
        }
    }

    /// Minute tick for an explicit time of day (testing / host-side clocks)
    #[wasm_bindgen(js_name = updateCelestial)]
    pub fn update_celestial(&mut self, hours: u32, minutes: u32) {
        self.core.minute_tick(hours, minutes);
    }

    // === SUN / SKY API ===

    /// Rendered size of the host's sun visual (shadows cast from its center)
    pub fn set_sun_diameter(&mut self, diameter: f32) {
        self.core.set_sun_diameter(diameter);
    }

    /// True once a minute tick has placed the sun and it is above the horizon
    pub fn sun_visible(&self) -> bool {
        self.core.sun().map(|s| s.is_risen()).unwrap_or(false)
    }

    /// Sun elevation in degrees, 0 when not risen or not yet computed
    pub fn sun_angle_deg(&self) -> f32 {
        self.core.sun().map(|s| s.angle_degrees).unwrap_or(0.0)
    }

    /// Sun visual top-left x (valid once a minute tick has run)
    pub fn sun_x(&self) -> f32 {
        self.core.sun().map(|s| s.pos.x).unwrap_or(0.0)
    }

    /// Sun visual top-left y
    pub fn sun_y(&self) -> f32 {
        self.core.sun().map(|s| s.pos.y).unwrap_or(0.0)
    }

    /// Current background phase key: "dawn", "day", "dusk" or "night"
    pub fn sky_phase(&self) -> String {
        self.core.sky_phase().key().to_string()
    }

    /// CSS gradient for the current phase, assignable to body.style.background
    pub fn sky_css_gradient(&self) -> String {
        self.core
            .palette()
            .gradient(self.core.sky_phase())
            .to_css()
    }

    /// Replace the four gradient presets from a JSON manifest
    pub fn load_sky_manifest(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_sky_manifest_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_sky_manifest_json(&self) -> String {
        self.core.sky_manifest_json()
    }

    // === RENDER BUFFER API (read zero-copy from WASM memory) ===

    /// Pointer to interleaved body x,y top-left positions
    pub fn positions_ptr(&self) -> *const f32 {
        self.core.positions_ptr()
    }

    pub fn positions_len_elements(&self) -> usize {
        self.core.positions_len()
    }

    pub fn positions_len_bytes(&self) -> usize {
        self.core.positions_len() * std::mem::size_of::<f32>()
    }

    /// Pointer to interleaved per-body shadow x,y offsets
    pub fn shadow_offsets_ptr(&self) -> *const f32 {
        self.core.shadow_offsets_ptr()
    }

    pub fn shadow_offsets_len_elements(&self) -> usize {
        self.core.shadow_offsets_len()
    }

    pub fn shadow_offsets_len_bytes(&self) -> usize {
        self.core.shadow_offsets_len() * std::mem::size_of::<f32>()
    }
}

/// Current wall-clock (hours, minutes).
fn now_hours_minutes() -> (u32, u32) {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        (date.get_hours(), date.get_minutes())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // UTC; good enough for the native test harness, the browser path is
        // the real consumer.
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        (((secs / 3600) % 24) as u32, ((secs / 60) % 60) as u32)
    }
}
