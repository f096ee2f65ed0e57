//! Shot selection for computer-controlled players.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::coordinate::Coordinate;

/// Picks the next coordinate to fire at on the opponent's board.
///
/// Implementations only get read access; the controller fires the shot.
pub trait TargetingStrategy {
    fn select_target(&mut self, board: &Board) -> Coordinate;
}

/// Fires at a uniformly random cell that has not been shot yet.
pub struct RandomTargeting<R> {
    rng: R,
}

impl<R: Rng> RandomTargeting<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TargetingStrategy for RandomTargeting<R> {
    fn select_target(&mut self, board: &Board) -> Coordinate {
        let open: Vec<Coordinate> = board
            .cells()
            .filter(|(_, cell)| !cell.is_resolved())
            .map(|(c, _)| c)
            .collect();
        if open.is_empty() {
            // nothing left to hit; any cell will be rejected as a repeat
            return Coordinate::random(board.size(), &mut self.rng);
        }
        open[self.rng.random_range(0..open.len())]
    }
}

impl<F> TargetingStrategy for F
where
    F: FnMut(&Board) -> Coordinate,
{
    fn select_target(&mut self, board: &Board) -> Coordinate {
        self(board)
    }
}
