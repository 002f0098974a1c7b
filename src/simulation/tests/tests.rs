use super::*;
use crate::core::vec2::Vec2;
use crate::core::viewport::Viewport;
use crate::domain::body::{Body, DragState};
use crate::domain::sky::SkyPhase;
use crate::systems::{collision, motion};

fn body_at(id: u32, x: f32, y: f32, vx: f32, vy: f32, radius: f32) -> Body {
    Body::new(id, Vec2::new(x, y), Vec2::new(vx, vy), radius, 0xFF8800)
}

#[test]
fn wall_reflection_flips_velocity_at_left_edge() {
    let viewport = Viewport::new(800.0, 600.0);
    let mut body = body_at(1, 0.0, 300.0, -3.0, 0.0, 50.0);

    motion::advance(&mut body, viewport);

    assert_eq!(body.velocity.x, 3.0);
    // Reflect-then-move: the body heads back in, never past the boundary.
    assert_eq!(body.pos.x, 3.0);
}

#[test]
fn wall_reflection_flips_velocity_at_far_edge() {
    let viewport = Viewport::new(800.0, 600.0);
    // Leading edge exactly on the right wall.
    let mut body = body_at(1, 700.0, 300.0, 4.0, 0.0, 50.0);

    motion::advance(&mut body, viewport);

    assert_eq!(body.velocity.x, -4.0);
    assert_eq!(body.pos.x, 696.0);
}

#[test]
fn interior_body_moves_by_its_velocity() {
    let viewport = Viewport::new(800.0, 600.0);
    let mut body = body_at(1, 100.0, 100.0, 2.5, -1.5, 50.0);

    motion::advance(&mut body, viewport);

    assert_eq!(body.pos.x, 102.5);
    assert_eq!(body.pos.y, 98.5);
    assert_eq!(body.velocity, Vec2::new(2.5, -1.5));
}

#[test]
fn collision_swaps_velocities_exactly() {
    let mut a = body_at(1, 100.0, 100.0, 2.0, 3.0, 50.0);
    let mut b = body_at(2, 160.0, 100.0, -1.0, 4.0, 50.0);

    let outcome = collision::resolve_pair(&mut a, &mut b);

    assert_eq!(outcome, collision::PairOutcome::Collided);
    assert_eq!(a.velocity, Vec2::new(-1.0, 4.0));
    assert_eq!(b.velocity, Vec2::new(2.0, 3.0));
}

#[test]
fn collision_separates_overlapping_pair() {
    let mut a = body_at(1, 100.0, 100.0, 1.0, 0.0, 50.0);
    let mut b = body_at(2, 160.0, 110.0, -1.0, 0.0, 50.0);

    collision::resolve_pair(&mut a, &mut b);

    let distance = (a.center() - b.center()).length();
    assert!(distance >= a.radius + b.radius - 1e-3);
}

#[test]
fn non_overlapping_pair_is_untouched() {
    let mut a = body_at(1, 0.0, 0.0, 1.0, 1.0, 20.0);
    let mut b = body_at(2, 500.0, 0.0, -1.0, 2.0, 20.0);

    let outcome = collision::resolve_pair(&mut a, &mut b);

    assert_eq!(outcome, collision::PairOutcome::Separate);
    assert_eq!(a.velocity, Vec2::new(1.0, 1.0));
    assert_eq!(b.velocity, Vec2::new(-1.0, 2.0));
    assert_eq!(a.pos, Vec2::new(0.0, 0.0));
}

#[test]
fn identical_centers_stay_finite() {
    let mut a = body_at(1, 100.0, 100.0, 1.0, 0.0, 50.0);
    let mut b = body_at(2, 100.0, 100.0, -1.0, 0.0, 50.0);

    collision::resolve_pair(&mut a, &mut b);

    assert!(a.pos.is_finite());
    assert!(b.pos.is_finite());
    assert!(a.velocity.is_finite());
    assert!(b.velocity.is_finite());
    // Velocities still exchange even when separation is skipped.
    assert_eq!(a.velocity, Vec2::new(-1.0, 0.0));
}

#[test]
fn dragged_body_is_exempt_from_integration() {
    let viewport = Viewport::new(800.0, 600.0);
    let mut body = body_at(1, 200.0, 200.0, 5.0, 5.0, 50.0);
    body.drag = DragState::Dragging;

    for _ in 0..100 {
        motion::advance(&mut body, viewport);
    }

    assert_eq!(body.pos, Vec2::new(200.0, 200.0));
    assert_eq!(body.velocity, Vec2::new(5.0, 5.0));
}

#[test]
fn dragged_body_serves_as_collision_partner_without_being_written() {
    let mut dragged = body_at(1, 100.0, 100.0, 2.0, 0.0, 50.0);
    dragged.drag = DragState::Dragging;
    let mut free = body_at(2, 170.0, 100.0, -3.0, 1.0, 50.0);

    collision::resolve_pair(&mut dragged, &mut free);

    // Pinned body untouched.
    assert_eq!(dragged.pos, Vec2::new(100.0, 100.0));
    assert_eq!(dragged.velocity, Vec2::new(2.0, 0.0));
    // Free partner bounces off with the frozen velocity and ends clear.
    assert_eq!(free.velocity, Vec2::new(2.0, 0.0));
    let distance = (dragged.center() - free.center()).length();
    assert!(distance >= dragged.radius + free.radius - 1e-3);
}

#[test]
fn pointer_drag_flow_preserves_grab_offset() {
    let mut scene = SceneCore::new(800.0, 600.0);
    let id = scene.spawn_body(100.0, 100.0, 100.0, 0x123456);
    assert_ne!(id, 0);

    // Grab 10px inside the top-left quadrant of the circle.
    let grabbed = scene.pointer_down(140.0, 140.0);
    assert_eq!(grabbed, id);
    assert_eq!(scene.bodies[0].drag, DragState::Dragging);

    scene.pointer_move(400.0, 300.0);
    // Body top-left follows the pointer minus the original grab offset.
    assert_eq!(scene.bodies[0].pos, Vec2::new(360.0, 260.0));

    scene.pointer_up();
    assert_eq!(scene.bodies[0].drag, DragState::Released);

    scene.step();
    assert_eq!(scene.bodies[0].drag, DragState::Idle);
}

#[test]
fn dragged_body_ignores_physics_until_released() {
    let mut scene = SceneCore::new(800.0, 600.0);
    scene.spawn_body(100.0, 100.0, 100.0, 0);
    scene.bodies[0].velocity = Vec2::new(4.0, 4.0);

    scene.pointer_down(150.0, 150.0);
    scene.pointer_move(300.0, 300.0);
    for _ in 0..10 {
        scene.step();
    }
    assert_eq!(scene.bodies[0].pos, Vec2::new(250.0, 250.0));

    scene.pointer_up();
    scene.step();
    // Physics resumes from the frozen velocity, no drag impulse.
    assert_eq!(scene.bodies[0].pos, Vec2::new(254.0, 254.0));
}

#[test]
fn pointer_down_picks_the_topmost_body() {
    let mut scene = SceneCore::new(800.0, 600.0);
    let bottom = scene.spawn_body(100.0, 100.0, 100.0, 0);
    let top = scene.spawn_body(120.0, 120.0, 100.0, 0);

    // Point inside both circles; the later-spawned body renders on top.
    let grabbed = scene.pointer_down(160.0, 160.0);
    assert_eq!(grabbed, top);
    assert_ne!(grabbed, bottom);
}

#[test]
fn pointer_down_outside_everything_grabs_nothing() {
    let mut scene = SceneCore::new(800.0, 600.0);
    scene.spawn_body(100.0, 100.0, 100.0, 0);

    assert_eq!(scene.pointer_down(700.0, 500.0), 0);
    assert_eq!(scene.bodies[0].drag, DragState::Idle);

    // Corner of the bounding square but outside the circle.
    assert_eq!(scene.pointer_down(101.0, 101.0), 0);
}

#[test]
fn second_pointer_down_while_holding_is_ignored() {
    let mut scene = SceneCore::new(800.0, 600.0);
    let first = scene.spawn_body(100.0, 100.0, 100.0, 0);
    let second = scene.spawn_body(400.0, 400.0, 100.0, 0);

    assert_eq!(scene.pointer_down(150.0, 150.0), first);
    // A press over the other body does not steal the drag.
    assert_eq!(scene.pointer_down(450.0, 450.0), first);
    assert_eq!(scene.bodies[1].drag, DragState::Idle);
    let _ = second;
}

#[test]
fn spawn_rejects_out_of_viewport_and_bad_sizes() {
    let mut scene = SceneCore::new(400.0, 300.0);

    assert_eq!(scene.spawn_body(350.0, 100.0, 100.0, 0), 0); // overflows right
    assert_eq!(scene.spawn_body(-10.0, 100.0, 50.0, 0), 0);
    assert_eq!(scene.spawn_body(10.0, 10.0, 0.0, 0), 0);
    assert_eq!(scene.spawn_body(10.0, 10.0, f32::NAN, 0), 0);
    assert_eq!(scene.body_count(), 0);

    assert_ne!(scene.spawn_body(10.0, 10.0, 100.0, 0xABCDEF), 0);
    assert_eq!(scene.body_count(), 1);
}

#[test]
fn random_spawn_lands_inside_the_viewport() {
    let mut scene = SceneCore::new(800.0, 600.0);
    let spawned = scene.spawn_random_bodies(8);
    assert_eq!(spawned, 8);
    assert_eq!(scene.body_count(), 8);

    for body in &scene.bodies {
        assert!(scene.viewport.fits(body.pos, body.diameter()));
        // Spawn speeds: both components in [1, 5).
        assert!(body.velocity.x >= 1.0 && body.velocity.x < 5.0);
        assert!(body.velocity.y >= 1.0 && body.velocity.y < 5.0);
    }
}

#[test]
fn empty_scene_steps_are_noops() {
    let mut scene = SceneCore::new(800.0, 600.0);
    for _ in 0..5 {
        scene.step();
    }
    assert_eq!(scene.frame(), 5);
    assert!(scene.render.positions.is_empty());
    assert!(scene.render.shadow_offsets.is_empty());
}

#[test]
fn minute_tick_places_the_sun_on_its_arc() {
    let mut scene = SceneCore::new(1000.0, 800.0);
    assert!(scene.sun().is_none());

    scene.minute_tick(12, 0);
    let sun = scene.sun().expect("noon tick should place the sun");
    assert_eq!(sun.angle_degrees, 90.0);
    assert_eq!(sun.pos, Vec2::new(500.0, 0.0));
    assert!(sun.is_risen());
    assert_eq!(scene.sky_phase(), SkyPhase::Day);

    scene.minute_tick(23, 30);
    let sun = scene.sun().unwrap();
    assert_eq!(sun.angle_degrees, 0.0);
    assert!(!sun.is_risen());
    assert_eq!(scene.sky_phase(), SkyPhase::Night);
}

#[test]
fn shadows_are_skipped_until_a_sun_exists() {
    let mut scene = SceneCore::new(800.0, 600.0);
    scene.spawn_body(100.0, 100.0, 100.0, 0);

    scene.step();
    assert_eq!(scene.render.positions.len(), 2);
    assert!(scene.render.shadow_offsets.is_empty());

    scene.minute_tick(10, 0);
    assert_eq!(scene.render.shadow_offsets.len(), 2);
    let dx = scene.render.shadow_offsets[0];
    let dy = scene.render.shadow_offsets[1];
    assert!(dx.abs() <= crate::systems::shadow::SHADOW_LENGTH);
    assert_eq!(dy, crate::systems::shadow::SHADOW_DROP);
}

#[test]
fn step_refreshes_shadows_as_bodies_move() {
    let mut scene = SceneCore::new(800.0, 600.0);
    scene.spawn_body(100.0, 300.0, 100.0, 0);
    scene.bodies[0].velocity = Vec2::new(30.0, 0.0);
    scene.minute_tick(9, 0);
    let before = scene.render.shadow_offsets[0];

    for _ in 0..5 {
        scene.step();
    }
    let after = scene.render.shadow_offsets[0];
    assert_ne!(before, after);
}

#[test]
fn resize_keeps_the_sun_on_the_arc_and_rejects_garbage() {
    let mut scene = SceneCore::new(1000.0, 800.0);
    scene.minute_tick(12, 0);

    scene.resize(500.0, 400.0).unwrap();
    let sun = scene.sun().unwrap();
    assert_eq!(sun.pos, Vec2::new(250.0, 0.0));

    assert!(scene.resize(0.0, 400.0).is_err());
    assert!(scene.resize(f32::NAN, 400.0).is_err());
    // Failed resize leaves dimensions alone.
    assert_eq!(scene.width(), 500.0);
}

#[test]
fn sky_manifest_round_trips_and_validates() {
    let mut scene = SceneCore::new(800.0, 600.0);
    let json = scene.sky_manifest_json();
    assert!(json.contains("dawn"));
    scene.load_sky_manifest_json(&json).unwrap();

    let custom = r##"{"gradients":[
        {"phase":"dawn","bottom":"#111111","top":"#222222"},
        {"phase":"day","bottom":"#333333","top":"#444444"},
        {"phase":"dusk","bottom":"#555555","top":"#666666"},
        {"phase":"night","bottom":"#777777","top":"#888888"}
    ]}"##;
    scene.load_sky_manifest_json(custom).unwrap();
    assert_eq!(
        scene.palette().gradient(SkyPhase::Day).to_css(),
        "linear-gradient(to top, #333333, #444444)"
    );

    let missing = r##"{"gradients":[
        {"phase":"dawn","bottom":"#111111","top":"#222222"}
    ]}"##;
    assert!(scene.load_sky_manifest_json(missing).is_err());

    let unknown = r##"{"gradients":[
        {"phase":"midnight","bottom":"#111111","top":"#222222"}
    ]}"##;
    assert!(scene.load_sky_manifest_json(unknown).is_err());
}

#[test]
fn clear_bodies_resets_the_registry_and_buffers() {
    let mut scene = SceneCore::new(800.0, 600.0);
    scene.spawn_random_bodies(4);
    let grab = scene.bodies[3].center();
    scene.pointer_down(grab.x, grab.y);
    scene.step();

    scene.clear_bodies();
    assert_eq!(scene.body_count(), 0);
    assert!(scene.render.positions.is_empty());
    // A stale drag must not survive the reset.
    assert!(scene.drag.active_index().is_none());
    scene.step();
}

#[test]
fn overlapping_spawn_pair_separates_within_a_frame() {
    let mut scene = SceneCore::new(800.0, 600.0);
    scene.spawn_body(100.0, 100.0, 100.0, 0);
    scene.spawn_body(140.0, 100.0, 100.0, 0);
    scene.bodies[0].velocity = Vec2::new(1.0, 0.0);
    scene.bodies[1].velocity = Vec2::new(-1.0, 0.0);

    scene.step();

    let distance = (scene.bodies[0].center() - scene.bodies[1].center()).length();
    let radius_sum = scene.bodies[0].radius + scene.bodies[1].radius;
    assert!(distance >= radius_sum - 1e-3);
}

#[test]
fn resolve_pairs_visits_each_unordered_pair_once() {
    // Three bodies in a row, only the outer two overlap the middle one.
    let mut bodies = vec![
        body_at(1, 0.0, 0.0, 1.0, 0.0, 30.0),
        body_at(2, 50.0, 0.0, 2.0, 0.0, 30.0),
        body_at(3, 400.0, 0.0, 3.0, 0.0, 30.0),
    ];

    let (tested, collided) = collision::resolve_pairs(&mut bodies);
    assert_eq!(tested, 3);
    assert_eq!(collided, 1);
    // The overlapping pair swapped; the far body is untouched.
    assert_eq!(bodies[0].velocity, Vec2::new(2.0, 0.0));
    assert_eq!(bodies[1].velocity, Vec2::new(1.0, 0.0));
    assert_eq!(bodies[2].velocity, Vec2::new(3.0, 0.0));
}

#[test]
fn perf_stats_count_pair_tests() {
    let mut scene = SceneCore::new(800.0, 600.0);
    scene.enable_perf_metrics(true);
    scene.spawn_random_bodies(5);

    scene.step();
    let stats = scene.get_perf_stats();
    assert_eq!(stats.body_count, 5);
    // 5 bodies -> C(5,2) unordered pairs per frame.
    assert_eq!(stats.pair_tests, 10);
    assert!(stats.step_ms >= 0.0);
}
