use std::collections::HashSet;

use broadside::{Board, Cell, Coordinate, Direction, Ship};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::X), Just(Direction::Y)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn deploy_occupies_contiguous_run_or_nothing(
        size in 1usize..6,
        x in 0usize..12,
        y in 0usize..12,
        dir in direction(),
    ) {
        let mut board = Board::new(10);
        let ship = Ship::new("Probe", size);
        let before: Vec<Cell> = board.cells().map(|(_, c)| c.clone()).collect();

        match board.deploy_ship(&ship, Coordinate::new(x, y), dir) {
            Ok(()) => {
                let coords = board.get_all_ship_part_coordinates(&ship);
                prop_assert_eq!(coords.len(), size);
                for (i, c) in coords.iter().enumerate() {
                    prop_assert!(board.has_ship_part_at_coordinate(*c).unwrap());
                    let expected = match dir {
                        Direction::X => Coordinate::new(x + i, y),
                        Direction::Y => Coordinate::new(x, y + i),
                    };
                    prop_assert_eq!(*c, expected);
                }
            }
            Err(_) => {
                let after: Vec<Cell> = board.cells().map(|(_, c)| c.clone()).collect();
                prop_assert_eq!(before, after);
                let fits = match dir {
                    Direction::X => x + size <= 10 && y < 10,
                    Direction::Y => y + size <= 10 && x < 10,
                };
                prop_assert!(!fits);
            }
        }
    }

    #[test]
    fn failed_deploys_never_write(
        placements in prop::collection::vec((1usize..6, 0usize..10, 0usize..10, direction()), 1..12),
    ) {
        let mut board = Board::new(10);
        let mut occupied = HashSet::new();
        for (size, x, y, dir) in placements {
            let ship = Ship::new("Probe", size);
            let before: Vec<Cell> = board.cells().map(|(_, c)| c.clone()).collect();
            if board.deploy_ship(&ship, Coordinate::new(x, y), dir).is_ok() {
                for c in board.get_all_ship_part_coordinates(&ship) {
                    prop_assert!(occupied.insert(c), "cell {} shared by two ships", c);
                }
            } else {
                let after: Vec<Cell> = board.cells().map(|(_, c)| c.clone()).collect();
                prop_assert_eq!(before, after);
            }
        }
        let parts = board.cells().filter(|(_, c)| c.ship_part().is_some()).count();
        prop_assert_eq!(parts, occupied.len());
    }

    #[test]
    fn second_shot_at_same_cell_is_rejected(x in 0usize..10, y in 0usize..10) {
        let mut board = Board::new(10);
        let ship = Ship::new("Battleship", 4);
        board.deploy_ship(&ship, Coordinate::new(3, 3), Direction::X).unwrap();
        let target = Coordinate::new(x, y);

        board.take_hit(target).unwrap();
        let after_first: Vec<Cell> = board.cells().map(|(_, c)| c.clone()).collect();
        prop_assert!(board.take_hit(target).is_err());
        let after_second: Vec<Cell> = board.cells().map(|(_, c)| c.clone()).collect();
        prop_assert_eq!(after_first, after_second);
    }
}
