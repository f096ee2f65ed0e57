use broadside::{Coordinate, Direction};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn equality_is_structural() {
    assert_eq!(Coordinate::new(3, 4), Coordinate::from((3, 4)));
    assert_ne!(Coordinate::new(3, 4), Coordinate::new(4, 3));
}

#[test]
fn ordering_is_row_major() {
    let mut coords = vec![
        Coordinate::new(1, 1),
        Coordinate::new(0, 1),
        Coordinate::new(5, 0),
    ];
    coords.sort();
    assert_eq!(
        coords,
        vec![Coordinate::new(5, 0), Coordinate::new(0, 1), Coordinate::new(1, 1)]
    );
}

#[test]
fn step_moves_along_axis() {
    let start = Coordinate::new(2, 2);
    assert_eq!(start.step(Direction::X, 2), Some(Coordinate::new(4, 2)));
    assert_eq!(start.step(Direction::Y, 0), Some(start));
    assert_eq!(Coordinate::new(usize::MAX, 0).step(Direction::X, 1), None);
}

#[test]
fn display_shows_pair() {
    assert_eq!(Coordinate::new(7, 1).to_string(), "(7, 1)");
}

#[test]
fn random_direction_produces_both_axes() {
    let mut rng = SmallRng::seed_from_u64(3);
    let dirs: Vec<_> = (0..64).map(|_| Direction::random(&mut rng)).collect();
    assert!(dirs.contains(&Direction::X));
    assert!(dirs.contains(&Direction::Y));
}

proptest! {
    #[test]
    fn random_coordinate_stays_in_bounds(seed in any::<u64>(), size in 1usize..32) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let c = Coordinate::random(size, &mut rng);
        prop_assert!(c.x() < size && c.y() < size);
        prop_assert!(c.in_bounds(size));
    }
}
