use crate::core::vec2::Vec2;
use crate::domain::body::Body;

use super::{random, SceneCore};

/// Default ball visual size when the host doesn't pick one.
pub(super) const DEFAULT_BODY_DIAMETER: f32 = 100.0;

const MIN_SPAWN_SPEED: f32 = 1.0;
const MAX_SPAWN_SPEED: f32 = 5.0;

pub(super) fn spawn_body(scene: &mut SceneCore, x: f32, y: f32, diameter: f32, color: u32) -> u32 {
    if !(x.is_finite() && y.is_finite() && diameter.is_finite()) || diameter <= 0.0 {
        return 0;
    }

    let pos = Vec2::new(x, y);
    if !scene.viewport.fits(pos, diameter) {
        return 0;
    }

    let id = scene.next_id;
    scene.next_id = scene.next_id.saturating_add(1);

    let velocity = Vec2::new(
        random::rand_range(&mut scene.rng_state, MIN_SPAWN_SPEED, MAX_SPAWN_SPEED),
        random::rand_range(&mut scene.rng_state, MIN_SPAWN_SPEED, MAX_SPAWN_SPEED),
    );

    scene
        .bodies
        .push(Body::new(id, pos, velocity, diameter / 2.0, color));
    id
}

pub(super) fn spawn_random_bodies(scene: &mut SceneCore, count: u32) -> u32 {
    let mut spawned = 0;
    for _ in 0..count {
        let diameter = DEFAULT_BODY_DIAMETER.min(scene.viewport.width).min(scene.viewport.height);
        let x = random::rand_range(
            &mut scene.rng_state,
            0.0,
            (scene.viewport.width - diameter).max(0.0),
        );
        let y = random::rand_range(
            &mut scene.rng_state,
            0.0,
            (scene.viewport.height - diameter).max(0.0),
        );
        let color = random::rand_color(&mut scene.rng_state);
        if spawn_body(scene, x, y, diameter, color) != 0 {
            spawned += 1;
        }
    }
    spawned
}

pub(super) fn clear_bodies(scene: &mut SceneCore) {
    scene.pointer_up();
    scene.bodies.clear();
    scene.render.positions.clear();
    scene.render.shadow_offsets.clear();
}
