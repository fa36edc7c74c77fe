//! Turn decision procedure for a single robot in the Ampere grid game.
//!
//! Each turn the host hands the strategy a fresh snapshot of every robot
//! on the board plus a [`Map`] view, and receives exactly one
//! [`Command`] back: move toward the nearest usable energy station,
//! harvest the station the robot is parked on, or spawn a child robot
//! when the energy economics favour expansion.
//!
//! The whole procedure is pure and synchronous -- no state survives a
//! call except the tuning in [`SpawnPolicy`] -- so the host may evaluate
//! many robots concurrently against the same read-only snapshot.
//!
//! # Modules
//!
//! - [`config`] -- YAML-loadable strategy configuration
//! - [`decision`] -- [`Strategy`] trait and the [`HarvestExpandStrategy`]
//!   entry point
//! - [`distance`] -- Squared Euclidean distance primitive
//! - [`error`] -- [`StrategyError`]
//! - [`locator`] -- Nearest-station search
//! - [`occupancy`] -- Cell usability predicates
//! - [`planner`] -- Energy-bounded movement planning
//! - [`policy`] -- The harvest-vs-spawn economic threshold
//!
//! [`Command`]: ampere_types::Command
//! [`Map`]: ampere_types::Map

pub mod config;
pub mod decision;
pub mod distance;
pub mod error;
pub mod locator;
pub mod occupancy;
pub mod planner;
pub mod policy;

pub use config::{ConfigError, StrategyConfig};
pub use decision::{AUTHOR, HarvestExpandStrategy, Strategy};
pub use error::StrategyError;
pub use policy::SpawnPolicy;
