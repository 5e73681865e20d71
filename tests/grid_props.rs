use proptest::prelude::*;
use shipgrid::{
    generate_line, stamp_line, Ability, Direction, Grid, Orientation, Point, BOARD_SIZE,
    MASK_SIZE, SHIP_CELL,
};

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Horizontal),
        Just(Direction::Vertical),
        Just(Direction::DiagonalDownRight),
        Just(Direction::DiagonalDownLeft),
    ]
}

fn ability() -> impl Strategy<Value = Ability> {
    prop_oneof![
        (-2..8i32).prop_map(|radius| Ability::Cross { radius }),
        (-2..8i32).prop_map(|radius| Ability::Diamond { radius }),
        (-2..8i32).prop_map(|height| Ability::Cone { height }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn line_has_exact_length_and_unit_steps(
        row in -5..15i32,
        col in -5..15i32,
        length in 1..12i32,
        orientation in orientation(),
    ) {
        let cells = generate_line(Point::new(row, col), length, orientation);
        prop_assert_eq!(cells.len(), length as usize);
        prop_assert_eq!(cells[0], Point::new(row, col));
        for pair in cells.windows(2) {
            let (dr, dc) = (pair[1].row - pair[0].row, pair[1].col - pair[0].col);
            match orientation {
                Orientation::Horizontal => prop_assert_eq!((dr, dc), (0, 1)),
                Orientation::Vertical => prop_assert_eq!((dr, dc), (1, 0)),
            }
        }
    }

    #[test]
    fn in_bounds_stamp_marks_exactly_length_cells(
        row in 0..5i32,
        col in 4..5i32,
        length in 1..5i32,
        direction in direction(),
    ) {
        // start and length chosen so every segment stays on the 10x10 board
        let mut grid = Grid::<u8>::new(BOARD_SIZE, BOARD_SIZE).unwrap();
        stamp_line(&mut grid, Point::new(row, col), length, direction);
        prop_assert_eq!(grid.count(SHIP_CELL), length as usize);
    }

    #[test]
    fn out_of_bounds_stamp_leaves_grid_unchanged(
        row in 20..30i32,
        col in -30..-20i32,
        length in 0..8i32,
        direction in direction(),
    ) {
        let mut grid = Grid::<u8>::new(BOARD_SIZE, BOARD_SIZE).unwrap();
        let before = grid.clone();
        stamp_line(&mut grid, Point::new(row, col), length, direction);
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn stamped_cells_always_in_bounds(
        row in -15..25i32,
        col in -15..25i32,
        length in 0..12i32,
        direction in direction(),
    ) {
        let mut grid = Grid::<u8>::new(BOARD_SIZE, BOARD_SIZE).unwrap();
        stamp_line(&mut grid, Point::new(row, col), length, direction);
        // every marked cell is addressable through the checked accessor
        for (r, c) in grid.iter_equal(SHIP_CELL) {
            prop_assert!(grid.get(r, c).is_ok());
        }
        prop_assert!(grid.count(SHIP_CELL) <= length.max(0) as usize);
    }

    #[test]
    fn mask_paint_is_idempotent(
        ability in ability(),
        row in -3..8i32,
        col in -3..8i32,
    ) {
        let origin = Point::new(row, col);
        let first = ability.mask(MASK_SIZE, MASK_SIZE, origin).unwrap();
        let mut grid = first.clone();
        ability.paint(&mut grid, origin);
        prop_assert_eq!(grid, first);
    }

    #[test]
    fn diamond_mask_equals_manhattan_predicate(
        radius in -2..8i32,
        row in -3..8i32,
        col in -3..8i32,
    ) {
        let centre = Point::new(row, col);
        let mask = Ability::Diamond { radius }.mask(MASK_SIZE, MASK_SIZE, centre).unwrap();
        for i in 0..MASK_SIZE {
            for j in 0..MASK_SIZE {
                let manhattan =
                    (i as i32 - centre.row).abs() + (j as i32 - centre.col).abs();
                prop_assert_eq!(mask.get(i, j).unwrap() == 1, manhattan <= radius);
            }
        }
    }
}
