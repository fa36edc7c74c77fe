//! Shared contract types between the host game and the Ampere strategy.
//!
//! This crate is the single source of truth for every value that crosses
//! the host/strategy boundary. The host simulation owns and constructs
//! these entities each turn; the strategy only reads them and hands back
//! a [`Command`].
//!
//! # Modules
//!
//! - [`position`] -- Integer grid coordinates
//! - [`entities`] -- [`Robot`] actors and [`EnergyStation`] resource nodes
//! - [`command`] -- The three commands a strategy may emit
//! - [`map`] -- The [`Map`] view trait the host implements for the strategy

pub mod command;
pub mod entities;
pub mod map;
pub mod position;

// Re-export all public types at crate root for convenience.
pub use command::Command;
pub use entities::{EnergyStation, Robot};
pub use map::Map;
pub use position::Position;
