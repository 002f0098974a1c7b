use crate::domain::body::DragState;
use crate::systems::{collision, motion};

use super::{render_extract, PerfTimer, SceneCore};

pub(super) fn step(scene: &mut SceneCore) {
    let perf_on = scene.perf_enabled;
    if perf_on {
        scene.perf_stats.reset();
        scene.perf_stats.body_count = scene.bodies.len() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Pointer-up arrived since the last frame: hand the body back to
    // physics before integrating.
    for body in scene.bodies.iter_mut() {
        if body.drag == DragState::Released {
            body.drag = DragState::Idle;
        }
    }

    // Move-then-collide per body, in registry order: each body integrates,
    // then resolves against all later bodies. Later pairs see earlier
    // separations within this frame.
    let viewport = scene.viewport;
    for i in 0..scene.bodies.len() {
        if perf_on {
            let t0 = PerfTimer::start();
            motion::advance(&mut scene.bodies[i], viewport);
            scene.perf_stats.motion_ms += t0.elapsed_ms();

            let t1 = PerfTimer::start();
            let (tested, collided) = collision::resolve_from(&mut scene.bodies, i);
            scene.perf_stats.collision_ms += t1.elapsed_ms();
            scene.perf_stats.pair_tests += tested;
            scene.perf_stats.collisions += collided;
        } else {
            motion::advance(&mut scene.bodies[i], viewport);
            collision::resolve_from(&mut scene.bodies, i);
        }
    }

    if perf_on {
        let t0 = PerfTimer::start();
        render_extract::extract(scene);
        scene.perf_stats.shadow_ms = t0.elapsed_ms();
    } else {
        render_extract::extract(scene);
    }

    scene.frame += 1;

    if let Some(t) = step_start {
        scene.perf_stats.step_ms = t.elapsed_ms();
    }
}
