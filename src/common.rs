//! Common types shared across the crate.

use core::fmt;

/// A grid coordinate as a signed (row, col) pair.
///
/// Coordinates are signed because shape computations may step off the grid
/// (diagonal stamps, ability origins near an edge) before clipping decides
/// whether the cell is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The point shifted by (dr, dc).
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
