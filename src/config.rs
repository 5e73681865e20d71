use crate::common::Point;
use crate::ship::{Direction, Ship, ShipType};

/// Side length of the occupancy board.
pub const BOARD_SIZE: usize = 10;
/// Side length of the ability mask grids.
pub const MASK_SIZE: usize = 5;

/// Cell value marking a ship segment on an occupancy grid.
pub const SHIP_CELL: u8 = 3;
/// Cell value marking an affected cell on an ability mask.
pub const AFFECTED_CELL: u8 = 1;

pub const NUM_SHIPS: usize = 4;
/// Demo fleet: fixed placements, including both diagonals. The cruiser's
/// down-left run crosses the battleship at (2, 7); stamps overwrite, so the
/// shared cell is simply marked once.
pub const FLEET: [Ship; NUM_SHIPS] = [
    Ship::new(
        ShipType::new("Carrier", 5),
        Point::new(0, 0),
        Direction::Horizontal,
    ),
    Ship::new(
        ShipType::new("Battleship", 4),
        Point::new(2, 7),
        Direction::Vertical,
    ),
    Ship::new(
        ShipType::new("Submarine", 4),
        Point::new(4, 1),
        Direction::DiagonalDownRight,
    ),
    Ship::new(
        ShipType::new("Cruiser", 5),
        Point::new(1, 8),
        Direction::DiagonalDownLeft,
    ),
];
