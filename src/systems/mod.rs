//! Simulation systems. Each module is independently callable so the frame
//! driver and the minute driver invoke exactly what they need.

pub mod celestial;
pub mod collision;
pub mod drag;
pub mod motion;
pub mod shadow;
