use crate::core::vec2::Vec2;

/// Transient sun placement, recomputed on every minute tick.
///
/// `angle_degrees` is 0 at the horizon (not risen / set), 90 at zenith, 180
/// at sunset. `pos` is the top-left corner of the sun visual; shadows are
/// cast from its center.
#[derive(Clone, Copy, Debug)]
pub struct Sun {
    pub angle_degrees: f32,
    pub pos: Vec2,
    /// Rendered size of the sun visual, supplied by the host.
    pub diameter: f32,
}

impl Sun {
    pub fn center(&self) -> Vec2 {
        let half = self.diameter / 2.0;
        Vec2::new(self.pos.x + half, self.pos.y + half)
    }

    /// Below-horizon state; the host decides whether to hide the visual.
    pub fn is_risen(&self) -> bool {
        self.angle_degrees > 0.0
    }
}
