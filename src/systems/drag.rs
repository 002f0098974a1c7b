//! Single-pointer drag state machine.
//!
//! Pointer callbacks arrive between frames; they only flip drag state and
//! copy coordinates, so the registry is always consistent when the next
//! `step()` starts. The controller is decoupled from any real event source -
//! tests feed it synthetic coordinates directly.

use crate::core::vec2::Vec2;
use crate::domain::body::{Body, DragState};

/// Tracks which body (if any) the single modeled pointer is holding.
#[derive(Debug, Default)]
pub struct DragController {
    active: Option<usize>,
    /// Pointer position relative to the grabbed body's top-left corner,
    /// captured at pointer-down so the body doesn't jump under the cursor.
    grab: Vec2,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Pointer pressed. Hit-tests topmost-first (reverse registry order:
    /// later bodies render on top) and starts a drag on the first circle
    /// containing the point. Returns the grabbed index, if any.
    pub fn pointer_down(&mut self, bodies: &mut [Body], point: Vec2) -> Option<usize> {
        if self.active.is_some() {
            // Second press while holding; single-pointer model ignores it.
            return self.active;
        }

        let index = bodies
            .iter()
            .enumerate()
            .rev()
            .find(|(_, body)| body.contains(point))
            .map(|(index, _)| index)?;

        self.grab = point - bodies[index].pos;
        bodies[index].drag = DragState::Dragging;
        self.active = Some(index);
        Some(index)
    }

    /// Pointer moved. While a drag is active the body position comes
    /// straight from the pointer; velocity is untouched so physics resumes
    /// seamlessly on release.
    pub fn pointer_move(&mut self, bodies: &mut [Body], point: Vec2) {
        if let Some(index) = self.active {
            bodies[index].pos = point - self.grab;
        }
    }

    /// Pointer released (anywhere). The body is marked `Released`; the next
    /// frame clears it to `Idle` and physics takes back over. No impulse
    /// from the drag motion is imparted.
    pub fn pointer_up(&mut self, bodies: &mut [Body]) {
        if let Some(index) = self.active.take() {
            bodies[index].drag = DragState::Released;
        }
    }
}
