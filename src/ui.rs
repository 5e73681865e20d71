#![cfg(feature = "std")]

//! Text rendering of boards, masks and coordinate lists.

use crate::common::Point;
use crate::grid::Grid;

/// Print a section header.
pub fn print_section(title: &str) {
    std::println!("\n=== {} ===", title);
}

/// Print a horizontal separator between demo stages.
pub fn print_separator() {
    std::println!("\n----------------------------------------");
}

/// Print a grid row by row, integer cell values separated by spaces.
pub fn print_grid(grid: &Grid<u8>) {
    std::println!("{}", grid);
}

/// Print a labelled, numbered list of ship segment coordinates.
pub fn print_ship_coords(label: &str, cells: &[Point]) {
    std::println!("{}:", label);
    for (i, p) in cells.iter().enumerate() {
        std::println!("  part {} -> {}", i, p);
    }
}
