//! Sunball Engine - bouncing-ball physics and lighting in WASM
//!
//! The JS host owns the DOM, the frame loop and the minute timer; this crate
//! owns the simulation state and all the math.
//!
//! Architecture:
//! - core/       - Math primitives (Vec2, Viewport)
//! - domain/     - Scene data (Body, Sun, Sky)
//! - systems/    - Motion, collision, drag, celestial, shadow
//! - simulation/ - Orchestration + WASM facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (keeps flat paths working)
pub use crate::core::vec2;
pub use crate::core::viewport;
pub use domain::body;
pub use domain::sky;
pub use domain::sun;
pub use systems::celestial;
pub use systems::collision;
pub use systems::drag;
pub use systems::motion;
pub use systems::shadow;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Sunball WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::body::{Body, DragState};
pub use domain::sky::SkyPhase;
pub use simulation::{PerfStats, Scene, SceneCore};
