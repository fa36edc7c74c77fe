//! The two entities the strategy reads from the world snapshot.
//!
//! Both are owned, constructed, and mutated by the host simulation; the
//! strategy receives them fresh each turn and never writes to them. Only
//! the fields listed here are part of the contract -- the host may track
//! more state internally.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// A single controllable unit on the grid.
///
/// Robots sharing an `owner` string are friendly to each other; all
/// others are enemies. Energy is a non-negative consumable spent on
/// movement and on endowing spawned children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    /// Where the robot currently stands.
    pub position: Position,
    /// Remaining energy budget.
    pub energy: u32,
    /// The competitor controlling this robot.
    pub owner: String,
}

/// A fixed resource node robots harvest energy from.
///
/// The strategy only reads `position`; the recovery attributes are
/// consumed by the host when it applies a collect command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyStation {
    /// Where the station sits on the grid.
    pub position: Position,
    /// Energy currently stored in the station.
    pub energy: u32,
    /// Energy regenerated per turn.
    pub recovery_rate: u32,
}
