//! Squared Euclidean distance, the single primitive every other
//! component builds on.
//!
//! The metric is deliberately left squared: movement cost in the host
//! game equals the squared distance travelled, so "distance" and
//! "energy to traverse" share a unit and the hot path never takes a
//! square root.

use ampere_types::Position;

/// Squared Euclidean distance between two grid positions.
///
/// Pure and total: the arithmetic runs in `i64` with saturation, so the
/// result is well-defined for every pair of `i32` coordinates (host
/// boards are orders of magnitude smaller than the saturation point).
pub fn squared_distance(a: Position, b: Position) -> u64 {
    let dx = i64::from(a.x).saturating_sub(i64::from(b.x));
    let dy = i64::from(a.y).saturating_sub(i64::from(b.y));
    dx.saturating_mul(dx)
        .saturating_add(dy.saturating_mul(dy))
        .unsigned_abs()
}
