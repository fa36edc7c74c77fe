//! Error types for the `ampere-strategy` crate.
//!
//! "No station available" is deliberately not an error: the locators
//! return `Option<Position>` and the turn decision resolves absence to a
//! defined fallback command. Errors here signal caller misuse or invalid
//! tuning, never a losing board state.

/// Errors that can occur while deciding a turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    /// The acting robot index is out of range for the snapshot.
    #[error("robot index {index} out of range ({count} robots in snapshot)")]
    InvalidActorIndex {
        /// The requested index.
        index: usize,
        /// Number of robots in the snapshot.
        count: usize,
    },

    /// The spawn policy was configured with an expansion factor of zero,
    /// which would divide by zero in the threshold formulas.
    #[error("expansion factor must be at least 1")]
    ZeroExpansionFactor,
}
