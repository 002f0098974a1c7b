//! Pointer command routing. These run between frames on the host's single
//! execution context; they only toggle drag state and copy coordinates, so
//! the registry is consistent when the next step starts.

use crate::core::vec2::Vec2;

use super::SceneCore;

pub(super) fn pointer_down(scene: &mut SceneCore, x: f32, y: f32) -> u32 {
    let point = Vec2::new(x, y);
    match scene.drag.pointer_down(&mut scene.bodies, point) {
        Some(index) => scene.bodies[index].id,
        None => 0,
    }
}

pub(super) fn pointer_move(scene: &mut SceneCore, x: f32, y: f32) {
    scene.drag.pointer_move(&mut scene.bodies, Vec2::new(x, y));
}

pub(super) fn pointer_up(scene: &mut SceneCore) {
    scene.drag.pointer_up(&mut scene.bodies);
}
