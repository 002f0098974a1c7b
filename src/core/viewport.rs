use super::vec2::Vec2;

/// The bounded region bodies bounce inside, in CSS pixels.
///
/// Top-left origin, y grows downward (matches the DOM coordinate space the
/// host hands us pointer events in).
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if a square of `size` placed at top-left `pos` fits inside.
    pub fn fits(&self, pos: Vec2, size: f32) -> bool {
        pos.x >= 0.0
            && pos.y >= 0.0
            && pos.x + size <= self.width
            && pos.y + size <= self.height
    }
}
