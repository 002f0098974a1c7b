use wasm_bindgen::prelude::*;

/// Per-step timing and counter snapshot. All zeros while perf metrics are
/// disabled.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) motion_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) shadow_ms: f64,
    pub(super) pair_tests: u32,
    pub(super) collisions: u32,
    pub(super) body_count: u32,
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    #[wasm_bindgen(getter)]
    pub fn motion_ms(&self) -> f64 {
        self.motion_ms
    }

    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 {
        self.collision_ms
    }

    #[wasm_bindgen(getter)]
    pub fn shadow_ms(&self) -> f64 {
        self.shadow_ms
    }

    #[wasm_bindgen(getter)]
    pub fn pair_tests(&self) -> u32 {
        self.pair_tests
    }

    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 {
        self.collisions
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 {
        self.body_count
    }
}

impl PerfStats {
    pub(super) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}
