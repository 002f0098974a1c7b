use crate::core::vec2::Vec2;

pub type BodyId = u32;

/// Per-body interaction state.
///
/// `Released` is a one-frame handoff marker: pointer-up happens between
/// frames, and the next `step()` clears it to `Idle` before integrating, so
/// the resume point is well-defined no matter when the event arrived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
    Released,
}

/// A simulated circular body.
///
/// `pos` is the top-left corner of the body's bounding square (DOM
/// convention); the circle center is `pos + (radius, radius)`.
pub struct Body {
    pub id: BodyId,
    pub pos: Vec2,
    /// Pixels per frame. Frozen (not written) while the body is dragged.
    pub velocity: Vec2,
    /// Fixed for the body's lifetime.
    pub radius: f32,
    /// 0xRRGGBB, picked at spawn.
    pub color: u32,
    pub drag: DragState,
}

impl Body {
    pub fn new(id: BodyId, pos: Vec2, velocity: Vec2, radius: f32, color: u32) -> Self {
        Self {
            id,
            pos,
            velocity,
            radius,
            color,
            drag: DragState::Idle,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.radius, self.pos.y + self.radius)
    }

    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// Circle hit test, used for pointer-down targeting.
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.center()).length_squared() <= self.radius * self.radius
    }
}
