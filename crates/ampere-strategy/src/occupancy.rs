//! Cell usability predicates.
//!
//! Two related but distinct rules decide whether a cell may be targeted.
//! They differ only in how they treat the mover's own cell, and that
//! difference is load-bearing: the turn decision uses [`cell_is_free`]
//! to ask "am I parked on a usable station?" and [`cell_is_unowned`] to
//! ask "where should I expand to next?", so a station under the mover
//! counts as usable for the first question but as taken for the second.
//! Do not unify the two.
//!
//! Both predicates short-circuit on the first occupant found. Under
//! co-located robots (which the host prevents) the first match in slice
//! order wins, making the result order-dependent in that degenerate
//! case.

use ampere_types::{Position, Robot};

/// Whether `cell` is a usable target for `mover`.
///
/// The mover's own cell is always free (staying put is always legal).
/// A cell held by a friendly robot is blocked; enemy occupants do not
/// block targeting. An empty cell is free.
pub fn cell_is_free(cell: Position, mover: &Robot, robots: &[Robot]) -> bool {
    for robot in robots {
        if robot.position == cell {
            if cell == mover.position {
                return true;
            }
            return robot.owner != mover.owner;
        }
    }
    true
}

/// Whether `cell` is clear of the mover's own team.
///
/// Blocks any cell occupied by a same-owner robot -- including the
/// mover itself, unlike [`cell_is_free`]. Enemy-held and empty cells
/// are clear.
pub fn cell_is_unowned(cell: Position, mover: &Robot, robots: &[Robot]) -> bool {
    for robot in robots {
        if robot.position == cell {
            return robot.owner != mover.owner;
        }
    }
    true
}
