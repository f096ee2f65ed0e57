//! Players: a board, a fleet and the turn-gating flags.

use alloc::{string::String, vec::Vec};
use log::{debug, trace};
use rand::Rng;

use crate::board::{Board, Shot};
use crate::common::{BoardError, ConfigError};
use crate::config::{PlayerConfig, MAX_PLACEMENT_ATTEMPTS};
use crate::coordinate::{Coordinate, Direction};
use crate::model::{self, Change, EventEmitter, Model, EVENT_SHOT};
use crate::ship::Ship;

/// Events emitted by a [`Player`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// Emitted on `changed` and `changed:<attribute>`.
    Changed(Change),
    /// A shot against this player's board, forwarded from the board's
    /// `shot` event.
    Shot(Shot),
}

/// One side of the game.
///
/// `activated` marks the player as the current shooter, which also shields
/// its own board from shots; see [`Player::take_hit`]. `can_play` is a plain
/// flag for the presentation layer and starts out equal to `activated`.
/// Keeping the two players' flags mutually exclusive is up to the controller.
#[derive(Debug)]
pub struct Player {
    name: String,
    board_size: usize,
    activated: bool,
    can_play: bool,
    board: Board,
    fleet: Vec<Ship>,
    events: EventEmitter<PlayerEvent>,
}

impl Player {
    /// Build a player with an empty board and an undeployed fleet.
    pub fn new(config: PlayerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.board_size);
        let fleet = config
            .fleet
            .iter()
            .map(|def| Ship::new(def.name(), def.size()))
            .collect();
        let events = EventEmitter::new();

        let forward = events.clone();
        board.on(EVENT_SHOT, move |name, shot: &Shot| {
            forward.emit(name, &PlayerEvent::Shot(shot.clone()));
        });

        Ok(Self {
            name: config.name,
            board_size: config.board_size,
            activated: config.activated,
            can_play: config.activated,
            board,
            fleet,
            events,
        })
    }

    /// Build a player and deploy its fleet at random positions.
    pub fn deployed<R: Rng + ?Sized>(config: PlayerConfig, rng: &mut R) -> Result<Self, ConfigError> {
        let mut player = Self::new(config)?;
        player.deploy_fleet(rng)?;
        Ok(player)
    }

    /// Place every ship not yet on the board by rejection sampling: draw a
    /// random start cell and direction until the board accepts the ship.
    ///
    /// Gives up on a ship after [`MAX_PLACEMENT_ATTEMPTS`] draws.
    pub fn deploy_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ConfigError> {
        for ship in &self.fleet {
            if self.board.deployed_ships().any(|s| s == ship) {
                continue;
            }
            Self::deploy_ship(&mut self.board, ship, rng)?;
        }
        debug!("{} deployed {} ships", self.name, self.fleet.len());
        Ok(())
    }

    fn deploy_ship<R: Rng + ?Sized>(
        board: &mut Board,
        ship: &Ship,
        rng: &mut R,
    ) -> Result<(), ConfigError> {
        for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
            let start = Coordinate::random(board.size(), rng);
            let direction = Direction::random(rng);
            match board.deploy_ship(ship, start, direction) {
                Ok(()) => {
                    trace!("{} placed after {} attempts", ship.name(), attempt);
                    return Ok(());
                }
                Err(BoardError::ShipAlreadyDeployed) => return Ok(()),
                Err(_) => continue,
            }
        }
        Err(ConfigError::UnableToPlaceShip {
            name: ship.name(),
            attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    /// Fire at this player's board.
    ///
    /// Returns `Ok(None)` without touching the board while the player is
    /// activated.
    pub fn take_hit(&mut self, coordinate: Coordinate) -> Result<Option<Shot>, BoardError> {
        if self.activated {
            debug!("{} is activated, ignoring shot at {}", self.name, coordinate);
            return Ok(None);
        }
        self.board.take_hit(coordinate).map(Some)
    }

    /// Sink a fleet ship outright, marking all of its cells on the board.
    /// Returns `false` if the ship is not deployed on this player's board.
    pub fn sink_ship(&mut self, ship: &Ship) -> bool {
        self.board.sink_ship(ship)
    }

    /// `true` once every ship in the fleet is sunk.
    pub fn is_sunk(&self) -> bool {
        self.fleet.iter().all(Ship::is_sunk)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        model::set_attribute(&mut self.name, name.into(), "name", &self.events, PlayerEvent::Changed)
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn activated(&self) -> bool {
        self.activated
    }

    pub fn set_activated(&mut self, activated: bool) -> bool {
        model::set_attribute(
            &mut self.activated,
            activated,
            "activated",
            &self.events,
            PlayerEvent::Changed,
        )
    }

    pub fn can_play(&self) -> bool {
        self.can_play
    }

    pub fn set_can_play(&mut self, can_play: bool) -> bool {
        model::set_attribute(
            &mut self.can_play,
            can_play,
            "can_play",
            &self.events,
            PlayerEvent::Changed,
        )
    }
}

impl Model for Player {
    type Event = PlayerEvent;

    fn events(&self) -> &EventEmitter<PlayerEvent> {
        &self.events
    }
}
