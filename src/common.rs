//! Errors shared by boards, players and the game controller.

use alloc::string::String;
use thiserror::Error;

use crate::coordinate::Coordinate;

/// Errors returned by `Board` and `Ship` operations.
///
/// Placement errors are expected while rejection-sampling positions; shot
/// errors tell a controller not to consume the turn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A read or shot addressed a cell outside the board.
    #[error("coordinate {coordinate} is outside the {size}x{size} board")]
    OutOfBounds { coordinate: Coordinate, size: usize },
    /// Ship placement would extend past the board edge.
    #[error("ship placement is out of bounds")]
    ShipOutOfBounds,
    /// Ship placement overlaps with another ship.
    #[error("ship placement overlaps with another ship")]
    ShipOverlaps,
    /// The ship is already on this board.
    #[error("ship is already deployed on this board")]
    ShipAlreadyDeployed,
    /// The cell was already shot at, or belongs to a ship that is already sunk.
    #[error("cell {0} was already resolved")]
    RepeatShot(Coordinate),
    /// A ship was hit more times than it has parts.
    #[error("ship is already fully hit")]
    OverHit,
}

/// Invalid player or fleet configuration. Reported before any placement loop
/// could spin forever.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be between 1 and {}", crate::config::MAX_BOARD_SIZE)]
    InvalidBoardSize,
    #[error("fleet has no ships")]
    EmptyFleet,
    #[error("ship {name:?} has no parts")]
    InvalidShipSize { name: String },
    #[error("ship {name:?} of size {size} does not fit on a {board_size}x{board_size} board")]
    ShipTooLarge {
        name: String,
        size: usize,
        board_size: usize,
    },
    #[error("fleet needs {cells} cells but the board only has {capacity}")]
    FleetTooLarge { cells: usize, capacity: usize },
    #[error("unable to place ship {name:?} after {attempts} attempts")]
    UnableToPlaceShip { name: String, attempts: usize },
}

/// Errors returned by the game controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("game has not started")]
    NotStarted,
    #[error("game is over")]
    GameOver,
    #[error("it is not this side's turn")]
    NotYourTurn,
}
