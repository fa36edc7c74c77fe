//! Integer grid coordinates.

use serde::{Deserialize, Serialize};

/// A position on the game grid.
///
/// An immutable value type; equality is component-wise. The `Ord`
/// implementation exists only so positions can key deterministic
/// collections, it carries no spatial meaning.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Position {
    /// Create a position from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_component_wise() {
        assert_eq!(Position::new(3, 4), Position::new(3, 4));
        assert_ne!(Position::new(3, 4), Position::new(4, 3));
    }

    #[test]
    fn display_format() {
        assert_eq!(Position::new(-2, 7).to_string(), "(-2, 7)");
    }
}
