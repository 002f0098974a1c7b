//! Math primitives shared by every system.

pub mod vec2;
pub mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
