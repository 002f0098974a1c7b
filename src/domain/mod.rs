//! Scene data: bodies, the sun, the sky palette.

pub mod body;
pub mod sky;
pub mod sun;

pub use body::{Body, BodyId, DragState};
pub use sky::{SkyPalette, SkyPhase};
pub use sun::Sun;
