//! Commonly used types and functions for ease of import.

pub use crate::{
    generate_line, stamp_line, Ability, Direction, Grid, GridError, Orientation, Point, Ship,
    ShipType,
};

#[cfg(feature = "std")]
pub use crate::{print_grid, print_section, print_separator, print_ship_coords};
