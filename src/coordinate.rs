//! Board coordinates and placement directions.

use core::fmt;
use rand::Rng;

/// Immutable `(x, y)` cell address. `x` is the column, `y` the row.
///
/// Ordering is row-major, so sorted coordinates read like the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    x: usize,
    y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// Uniformly random coordinate inside a `size`×`size` board.
    ///
    /// Panics if `size` is zero.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        Self {
            x: rng.random_range(0..size),
            y: rng.random_range(0..size),
        }
    }

    /// Whether this coordinate lies on a `size`×`size` board.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// The coordinate `offset` cells further along `direction`, or `None` on
    /// overflow.
    pub fn step(&self, direction: Direction, offset: usize) -> Option<Self> {
        match direction {
            Direction::X => self.x.checked_add(offset).map(|x| Self::new(x, self.y)),
            Direction::Y => self.y.checked_add(offset).map(|y| Self::new(self.x, y)),
        }
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis a ship extends along from its start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Horizontal, increasing `x`.
    X,
    /// Vertical, increasing `y`.
    Y,
}

impl Direction {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random() {
            Direction::X
        } else {
            Direction::Y
        }
    }
}
