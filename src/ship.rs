//! Ship definitions, line coordinate generation and board stamping.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;

use crate::common::Point;
use crate::config::SHIP_CELL;
use crate::grid::Grid;

/// Orientation of a straight ship, as accepted by [`generate_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Direction of a stamped line on the board.
///
/// Extends [`Orientation`] with the two downward diagonals accepted by
/// [`stamp_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    /// Per-segment (row, col) step.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

impl From<Orientation> for Direction {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Direction::Horizontal,
            Orientation::Vertical => Direction::Vertical,
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: i32,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: i32) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length in cells.
    pub fn length(&self) -> i32 {
        self.length
    }
}

/// Generate the ordered cell coordinates of a straight line.
///
/// Pure: performs no bounds checking and touches no grid; the caller is
/// responsible for any downstream clipping. A non-positive `length` yields
/// an empty sequence.
pub fn generate_line(start: Point, length: i32, orientation: Orientation) -> Vec<Point> {
    let (dr, dc) = Direction::from(orientation).step();
    (0..length).map(|k| start.offset(dr * k, dc * k)).collect()
}

/// Stamp a line of occupied cells onto the board.
///
/// Each segment in bounds is set to the occupied sentinel; segments outside
/// the board are silently dropped. Overlapping stamps overwrite without
/// collision detection.
pub fn stamp_line(grid: &mut Grid<u8>, start: Point, length: i32, direction: Direction) {
    let (dr, dc) = direction.step();
    for k in 0..length {
        grid.set_clipped(start.offset(dr * k, dc * k), SHIP_CELL);
    }
}

/// A ship bound to an origin and direction on the board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    origin: Point,
    direction: Direction,
}

impl Ship {
    /// Create a ship of `ship_type` starting at `origin`, growing along
    /// `direction`.
    pub const fn new(ship_type: ShipType, origin: Point, direction: Direction) -> Self {
        Self {
            ship_type,
            origin,
            direction,
        }
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Origin of the ship.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Direction of the ship.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Ordered cell coordinates of the ship, bow to stern. Not clipped.
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        let (dr, dc) = self.direction.step();
        let origin = self.origin;
        (0..self.ship_type.length()).map(move |k| origin.offset(dr * k, dc * k))
    }

    /// Stamp the ship onto the board, clipping any segment off the edge.
    pub fn place_on(&self, grid: &mut Grid<u8>) {
        stamp_line(grid, self.origin, self.ship_type.length(), self.direction);
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, direction: {:?}, length: {} }}",
            self.ship_type.name(),
            self.origin,
            self.direction,
            self.ship_type.length(),
        )
    }
}
