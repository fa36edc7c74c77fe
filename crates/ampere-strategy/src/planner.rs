//! Energy-bounded movement planning.
//!
//! The planner never routes around terrain: it reasons only about
//! straight-line, axis-decomposed steps that fit the mover's energy
//! budget. Either the whole trip is taken in one jump, or the
//! displacement is split into an X step and whatever Y step the
//! remaining per-axis budget allows.

use ampere_types::{Position, Robot};

use crate::distance::squared_distance;

/// Best reachable next position on the way to `destination`.
///
/// The full jump fires only when the squared trip cost, squared once
/// more, still fits the raw energy budget -- the host's one-shot travel
/// model, far stricter than plain affordability. Otherwise
/// `max_distance = isqrt(energy)` grid units are split across the axes,
/// X first, Y receiving whatever X left over.
///
/// The result is always affordable: an `x` step of `a` and a `y` step
/// of at most `max_distance - a` cost at most `max_distance²`, which
/// never exceeds the energy budget. When the mover already stands on
/// `destination` the result is its current position.
pub fn next_position(mover: &Robot, destination: Position) -> Position {
    let trip_cost = squared_distance(destination, mover.position);
    if trip_cost.saturating_mul(trip_cost) < u64::from(mover.energy) {
        return destination;
    }

    let max_distance = u64::from(mover.energy).isqrt();
    let delta_x = i64::from(destination.x).saturating_sub(i64::from(mover.position.x));
    let delta_y = i64::from(destination.y).saturating_sub(i64::from(mover.position.y));

    let step_x = axis_step(delta_x, max_distance);
    let step_y = axis_step(delta_y, max_distance.saturating_sub(step_x.unsigned_abs()));

    Position {
        x: offset(mover.position.x, step_x),
        y: offset(mover.position.y, step_y),
    }
}

/// Clamp a signed axis displacement to the given budget of grid units.
fn axis_step(delta: i64, budget: u64) -> i64 {
    let magnitude = delta.unsigned_abs().min(budget);
    // magnitude <= |delta|, so it always fits back into i64.
    let magnitude = i64::try_from(magnitude).unwrap_or(i64::MAX);
    if delta < 0 { magnitude.saturating_neg() } else { magnitude }
}

/// Apply a step to a coordinate, clamped to the `i32` grid range.
fn offset(coordinate: i32, step: i64) -> i32 {
    let moved = i64::from(coordinate)
        .saturating_add(step)
        .clamp(i64::from(i32::MIN), i64::from(i32::MAX));
    i32::try_from(moved).unwrap_or(coordinate)
}
