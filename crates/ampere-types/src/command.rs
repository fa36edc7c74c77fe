//! The command a strategy hands back to the host each turn.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Exactly one command is produced per strategy invocation.
///
/// The strategy never mutates world state directly; the host applies the
/// chosen command (and deducts the energy it costs) after the call
/// returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Move the acting robot to a new cell, paying the squared distance
    /// in energy.
    Move {
        /// The cell to move to.
        new_position: Position,
    },
    /// Harvest energy from the station under the acting robot.
    CollectEnergy,
    /// Spawn a child robot nearby, paying its endowment from the
    /// parent's budget.
    CreateNewRobot {
        /// Energy granted to the child.
        new_robot_energy: u32,
    },
}
