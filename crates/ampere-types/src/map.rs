//! The strategy's read-only view of the game board.

use crate::entities::{EnergyStation, Robot};
use crate::position::Position;

/// What the host exposes of the board to a strategy.
///
/// Implemented by the host's concrete map; the strategy is generic over
/// it so tests can drive turns through a small fixture board.
pub trait Map {
    /// All energy stations on the board.
    fn stations(&self) -> &[EnergyStation];

    /// A free cell close to `near`, if one exists.
    ///
    /// "Free" is the host's notion (in bounds and unoccupied); the
    /// strategy uses the result only to price its next expansion.
    fn find_free_cell(&self, near: Position, robots: &[Robot]) -> Option<Position>;
}
