//! The turn decision entry point.
//!
//! Composes the locator, planner, and spawn policy into the single
//! choice the host asks for each turn: move, harvest, or spawn. The
//! [`Strategy`] trait abstracts the entry point so the host can slot in
//! competing implementations; [`HarvestExpandStrategy`] is this crate's
//! implementation.
//!
//! The procedure holds no mutable state -- identical inputs always
//! produce identical commands -- and is safe to run concurrently for
//! different robots against one shared snapshot.

use ampere_types::{Command, Map, Robot};
use tracing::debug;

use crate::config::StrategyConfig;
use crate::distance::squared_distance;
use crate::error::StrategyError;
use crate::locator::{nearest_free_station, nearest_unowned_station};
use crate::planner::next_position;
use crate::policy::SpawnPolicy;

/// Identity string reported to the host for attribution and scoring.
pub const AUTHOR: &str = "Ampere Harvest-Expand";

/// A per-turn decision procedure for one robot.
///
/// The host calls [`decide`] once per robot per turn with a fresh,
/// read-only snapshot of the board and applies the returned command
/// itself.
///
/// [`decide`]: Strategy::decide
pub trait Strategy {
    /// Constant identifier used by the host for attribution only.
    fn author(&self) -> &str;

    /// Choose the acting robot's single command for this turn.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InvalidActorIndex`] if `robot_index`
    /// does not address a robot in the snapshot -- caller misuse, never
    /// a board state.
    fn decide(
        &self,
        robots: &[Robot],
        robot_index: usize,
        map: &dyn Map,
    ) -> Result<Command, StrategyError>;
}

/// Harvest the station you stand on; expand when the economics allow.
///
/// Each turn: if the robot is parked on a usable station, compare its
/// energy against the [`SpawnPolicy`] threshold to pick harvest or
/// spawn. Otherwise advance toward the nearest station not held by the
/// robot's own team, one energy-bounded step at a time.
#[derive(Debug, Clone, Default)]
pub struct HarvestExpandStrategy {
    policy: SpawnPolicy,
}

impl HarvestExpandStrategy {
    /// Create a strategy with the given spawn policy.
    pub const fn new(policy: SpawnPolicy) -> Self {
        Self { policy }
    }

    /// Create a strategy from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::ZeroExpansionFactor`] if the config
    /// carries a zero expansion factor.
    pub fn from_config(config: &StrategyConfig) -> Result<Self, StrategyError> {
        Ok(Self {
            policy: SpawnPolicy::new(config.expansion_factor)?,
        })
    }

    /// The active spawn policy.
    pub const fn policy(&self) -> &SpawnPolicy {
        &self.policy
    }

    /// The parked branch: bank energy or pay for a child.
    ///
    /// The expansion is priced as the squared distance from the next
    /// station out (the parked one is excluded by the unowned scan) to
    /// a free cell near the parent. If either leg of that measurement
    /// is unavailable there is nothing to price, and harvesting in
    /// place is always productive on a station.
    fn harvest_or_spawn(&self, mover: &Robot, map: &dyn Map, robots: &[Robot]) -> Command {
        let target = nearest_unowned_station(mover, map, robots);
        let near_cell = map.find_free_cell(mover.position, robots);
        let (Some(target), Some(near_cell)) = (target, near_cell) else {
            debug!(position = %mover.position, "no expansion target; harvesting in place");
            return Command::CollectEnergy;
        };

        let expansion_cost = squared_distance(target, near_cell);
        let threshold = self.policy.spawn_threshold(expansion_cost);
        if u64::from(mover.energy) >= threshold {
            let new_robot_energy = self.policy.spawn_endowment(expansion_cost);
            debug!(expansion_cost, new_robot_energy, "spawning a child robot");
            Command::CreateNewRobot { new_robot_energy }
        } else {
            debug!(
                expansion_cost,
                threshold,
                energy = mover.energy,
                "below spawn threshold; harvesting"
            );
            Command::CollectEnergy
        }
    }
}

impl Strategy for HarvestExpandStrategy {
    fn author(&self) -> &str {
        AUTHOR
    }

    fn decide(
        &self,
        robots: &[Robot],
        robot_index: usize,
        map: &dyn Map,
    ) -> Result<Command, StrategyError> {
        let mover = robots
            .get(robot_index)
            .ok_or(StrategyError::InvalidActorIndex {
                index: robot_index,
                count: robots.len(),
            })?;

        let parked = nearest_free_station(mover, map, robots)
            .is_some_and(|station| station == mover.position);
        if parked {
            return Ok(self.harvest_or_spawn(mover, map, robots));
        }

        let Some(destination) = nearest_unowned_station(mover, map, robots) else {
            debug!(position = %mover.position, "no station available; holding position");
            return Ok(Command::Move {
                new_position: mover.position,
            });
        };

        let new_position = next_position(mover, destination);
        debug!(%destination, %new_position, "moving toward nearest station");
        Ok(Command::Move { new_position })
    }
}
