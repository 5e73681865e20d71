//! A dynamically-sized rectangular grid of integer cells.
//!
//! The type is `no_std` friendly (it only needs `alloc`). A grid is created
//! with fixed `rows`×`cols` dimensions, zero-initialised, and is never
//! resized afterwards. Accessors are bounds-checked; writes through
//! [`Grid::set_clipped`] silently drop out-of-range coordinates, which is
//! the normal path for shapes that extend past an edge.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use core::{any, fmt};
use num_traits::{PrimInt, Zero};

use crate::common::Point;

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Requested dimensions contain a zero extent.
    InvalidDimensions { rows: usize, cols: usize },
    /// Row or column index is out of bounds [0..rows) / [0..cols).
    IndexOutOfBounds { row: usize, col: usize },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::InvalidDimensions { rows, cols } => {
                write!(f, "InvalidDimensions: rows={}, cols={}", rows, cols)
            }
            GridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A rows×cols grid of integer cells stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T>
where
    T: PrimInt + Zero,
{
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T>
where
    T: PrimInt + Zero,
{
    /// Create a zero-initialised grid. Rejects zero extents.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Grid {
            rows,
            cols,
            cells: vec![T::zero(); rows * cols],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.rows || col >= self.cols {
            Err(GridError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Gets the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<T, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[self.index(row, col)])
    }

    /// Sets the cell at (row, col) to `value`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Returns true when the signed point lies within grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.col >= 0 && (p.row as usize) < self.rows && (p.col as usize) < self.cols
    }

    /// Writes `value` at `p` if it is in bounds, returning whether the cell
    /// was written. Out-of-range points are dropped, never an error.
    pub fn set_clipped(&mut self, p: Point, value: T) -> bool {
        if self.contains(p) {
            let idx = self.index(p.row as usize, p.col as usize);
            self.cells[idx] = value;
            true
        } else {
            false
        }
    }

    /// Reads the cell at `p`, or `None` if it is out of bounds.
    pub fn get_clipped(&self, p: Point) -> Option<T> {
        if self.contains(p) {
            Some(self.cells[self.index(p.row as usize, p.col as usize)])
        } else {
            None
        }
    }

    /// Sets every cell to `value`.
    #[inline]
    pub fn fill(&mut self, value: T) {
        for cell in self.cells.iter_mut() {
            *cell = value;
        }
    }

    /// Clears every cell back to zero.
    #[inline]
    pub fn reset(&mut self) {
        self.fill(T::zero());
    }

    /// Returns the number of cells equal to `value`.
    pub fn count(&self, value: T) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// Iterator over the `(row, col)` positions whose cell equals `value`,
    /// in row-major order.
    pub fn iter_equal(&self, value: T) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == value)
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }
}

impl<T> fmt::Debug for Grid<T>
where
    T: PrimInt + Zero + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid<{}> {}x{}:",
            any::type_name::<T>(),
            self.rows,
            self.cols
        )?;
        for r in 0..self.rows {
            for c in 0..self.cols {
                write!(f, "{} ", self.cells[self.index(r, c)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T> fmt::Display for Grid<T>
where
    T: PrimInt + Zero + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[self.index(r, c)])?;
            }
            if r + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
