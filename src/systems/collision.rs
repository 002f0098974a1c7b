//! Circle-circle collision: velocity exchange + positional separation.
//!
//! Deliberately simplified response: a component-wise velocity swap
//! (mass-agnostic, not impulse-based) plus a push-apart along the center
//! line. Two bodies that stay within radius-sum distance across frames will
//! keep re-swapping; that is accepted behavior, not a bug.

use crate::domain::body::Body;

/// Outcome of a single pair test, fed into perf counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairOutcome {
    Separate,
    Collided,
}

/// Resolve one unordered pair.
///
/// Centers are compared, so bodies of different radii work. A body under
/// drag still serves as a collision partner, but nothing is ever written to
/// it: its velocity stays frozen and its position stays under the pointer,
/// while the free partner absorbs the full separation.
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> PairOutcome {
    let delta = a.center() - b.center();
    let distance = delta.length();

    if distance > a.radius + b.radius {
        return PairOutcome::Separate;
    }

    exchange_velocities(a, b);
    separate(a, b, distance);
    PairOutcome::Collided
}

/// Component-wise swap. Writes to a dragged body are suppressed (frozen
/// velocity), but the partner still receives the frozen value.
fn exchange_velocities(a: &mut Body, b: &mut Body) {
    let va = a.velocity;
    let vb = b.velocity;
    if !a.is_dragging() {
        a.velocity = vb;
    }
    if !b.is_dragging() {
        b.velocity = va;
    }
}

/// Push the pair apart along the center line so it no longer overlaps.
///
/// `distance == 0` (exact center coincidence) has no defined direction;
/// separation is skipped for this frame rather than dividing by zero. The
/// swapped velocities will usually drift the pair apart on their own.
fn separate(a: &mut Body, b: &mut Body, distance: f32) {
    if distance <= f32::EPSILON {
        return;
    }

    let delta = a.center() - b.center();
    let overlap = (a.radius + b.radius) - distance;
    let push = delta * (overlap / distance);

    match (a.is_dragging(), b.is_dragging()) {
        // Free pair splits the correction.
        (false, false) => {
            a.pos += push;
            b.pos += -push;
        }
        // The free partner takes the whole correction; the dragged body is
        // pinned to the pointer.
        (false, true) => a.pos += push * 2.0,
        (true, false) => b.pos += -(push * 2.0),
        // Unreachable with a single pointer, but harmless.
        (true, true) => {}
    }
}

/// Run the pair test over every unordered pair in registry order (`i < j`,
/// each pair exactly once). Later pairs observe earlier separations within
/// the same frame. Returns (pairs tested, collisions resolved).
pub fn resolve_pairs(bodies: &mut [Body]) -> (u32, u32) {
    let mut tested = 0;
    let mut collided = 0;
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            tested += 1;
            if resolve_pair(a, b) == PairOutcome::Collided {
                collided += 1;
            }
        }
    }
    (tested, collided)
}

/// Pair test for one body against all later bodies only. The frame loop
/// interleaves integration and collision per body (move-then-collide), so
/// each frame still covers every unordered pair exactly once.
pub fn resolve_from(bodies: &mut [Body], index: usize) -> (u32, u32) {
    let mut tested = 0;
    let mut collided = 0;
    let (head, tail) = bodies.split_at_mut(index + 1);
    let a = &mut head[index];
    for b in tail.iter_mut() {
        tested += 1;
        if resolve_pair(a, b) == PairOutcome::Collided {
            collided += 1;
        }
    }
    (tested, collided)
}
