//! Ability masks: cross, diamond and cone area-of-effect shapes.
//!
//! A mask is a 0/1 grid; 1 marks an affected cell. Painting always starts
//! from a fully zeroed grid, so repeated paints with identical parameters
//! produce identical masks. Any cell a shape computes outside the grid is
//! clipped, never an error; a negative radius or height paints nothing.

use crate::common::Point;
use crate::config::AFFECTED_CELL;
use crate::grid::{Grid, GridError};

/// An area-of-effect shape with its size parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ability {
    /// Plus-shape: cells sharing the origin's row or column within `radius`.
    Cross { radius: i32 },
    /// Cells within Manhattan distance `radius` of the origin.
    Diamond { radius: i32 },
    /// Downward triangle from an apex, widening one cell per side per row,
    /// `height` rows tall.
    Cone { height: i32 },
}

impl Ability {
    /// Shape name for display.
    pub fn name(&self) -> &'static str {
        match self {
            Ability::Cross { .. } => "Cross",
            Ability::Diamond { .. } => "Diamond",
            Ability::Cone { .. } => "Cone",
        }
    }

    /// Build a freshly zeroed rows×cols mask and paint the shape at
    /// `origin` (centre for cross/diamond, apex for cone).
    pub fn mask(&self, rows: usize, cols: usize, origin: Point) -> Result<Grid<u8>, GridError> {
        let mut grid = Grid::new(rows, cols)?;
        self.paint(&mut grid, origin);
        Ok(grid)
    }

    /// Paint the shape into an existing grid. The grid is reset to zero
    /// first; this is a full overwrite, not additive.
    pub fn paint(&self, grid: &mut Grid<u8>, origin: Point) {
        grid.reset();
        match *self {
            Ability::Cross { radius } => paint_cross(grid, origin, radius),
            Ability::Diamond { radius } => paint_diamond(grid, origin, radius),
            Ability::Cone { height } => paint_cone(grid, origin, height),
        }
    }
}

fn paint_cross(grid: &mut Grid<u8>, centre: Point, radius: i32) {
    for d in -radius..=radius {
        grid.set_clipped(centre.offset(d, 0), AFFECTED_CELL);
        grid.set_clipped(centre.offset(0, d), AFFECTED_CELL);
    }
}

fn paint_diamond(grid: &mut Grid<u8>, centre: Point, radius: i32) {
    for i in 0..grid.rows() {
        for j in 0..grid.cols() {
            let manhattan = (i as i32 - centre.row).abs() + (j as i32 - centre.col).abs();
            if manhattan <= radius {
                grid.set_clipped(Point::new(i as i32, j as i32), AFFECTED_CELL);
            }
        }
    }
}

fn paint_cone(grid: &mut Grid<u8>, apex: Point, height: i32) {
    for t in 0..height {
        // width grows 1, 3, 5, ... per row descended from the apex
        for dc in -t..=t {
            grid.set_clipped(apex.offset(t, dc), AFFECTED_CELL);
        }
    }
}
