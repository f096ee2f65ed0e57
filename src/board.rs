//! Board grid: ship placement and shot resolution.

use alloc::vec::Vec;
use log::{debug, trace};

use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::coordinate::{Coordinate, Direction};
use crate::model::{EventEmitter, Model, EVENT_SHOT};
use crate::ship::Ship;

/// Damage state of one ship part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartState {
    Intact,
    Hit,
    /// The whole ship is sunk.
    Sunk,
}

/// Cell contents referring to part `index` of `ship`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipPart {
    ship: Ship,
    index: usize,
    state: PartState,
}

impl ShipPart {
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Position of this part along the ship, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> PartState {
        self.state
    }

    /// `true` once the part has been shot, including when the ship is sunk.
    pub fn is_hit(&self) -> bool {
        self.state != PartState::Intact
    }

    pub fn is_sunk(&self) -> bool {
        self.state == PartState::Sunk
    }
}

/// Contents of a grid cell. Cells only move forward:
/// `Empty -> Missed` or `ShipPart(Intact) -> Hit -> Sunk`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    ShipPart(ShipPart),
    Missed,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_missed(&self) -> bool {
        matches!(self, Cell::Missed)
    }

    pub fn ship_part(&self) -> Option<&ShipPart> {
        match self {
            Cell::ShipPart(part) => Some(part),
            _ => None,
        }
    }

    /// Whether a shot at this cell would be rejected as a repeat. Intact
    /// parts of a ship that was sunk outright count as resolved.
    pub fn is_resolved(&self) -> bool {
        match self {
            Cell::Empty => false,
            Cell::Missed => true,
            Cell::ShipPart(part) => part.is_hit() || part.ship.is_sunk(),
        }
    }
}

/// Outcome of a resolved shot, delivered with the `shot` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shot {
    pub coordinate: Coordinate,
    pub hit: bool,
    /// The ship that was hit is sunk after this shot.
    pub sunk: bool,
    /// Ship that was hit, `None` on a miss.
    pub ship: Option<Ship>,
}

#[derive(Debug, Clone)]
struct Placement {
    ship: Ship,
    start: Coordinate,
    direction: Direction,
}

impl Placement {
    fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.ship.size()).filter_map(move |i| self.start.step(self.direction, i))
    }
}

/// Square grid holding the ships of one player.
#[derive(Debug)]
pub struct Board {
    size: usize,
    grid: Vec<Cell>,
    placements: Vec<Placement>,
    events: EventEmitter<Shot>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Self {
        let mut grid = Vec::with_capacity(size * size);
        grid.resize_with(size * size, Cell::default);
        Self {
            size,
            grid,
            placements: Vec::new(),
            events: EventEmitter::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn offset(&self, coordinate: Coordinate) -> Result<usize, BoardError> {
        if !coordinate.in_bounds(self.size) {
            return Err(BoardError::OutOfBounds {
                coordinate,
                size: self.size,
            });
        }
        Ok(coordinate.y() * self.size + coordinate.x())
    }

    /// Place `ship` on `ship.size()` consecutive cells starting at `start` and
    /// extending along `direction`.
    ///
    /// Fails without touching the grid when any cell would be off the board or
    /// occupied, or when the ship is already on this board. Ships without
    /// parts cannot be placed.
    pub fn deploy_ship(
        &mut self,
        ship: &Ship,
        start: Coordinate,
        direction: Direction,
    ) -> Result<(), BoardError> {
        if self.placements.iter().any(|p| p.ship == *ship) {
            return Err(BoardError::ShipAlreadyDeployed);
        }
        if ship.size() == 0 {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mut offsets = Vec::with_capacity(ship.size());
        for i in 0..ship.size() {
            let offset = start
                .step(direction, i)
                .and_then(|c| self.offset(c).ok())
                .ok_or(BoardError::ShipOutOfBounds)?;
            offsets.push(offset);
        }
        if offsets.iter().any(|&o| !self.grid[o].is_empty()) {
            trace!("{:?} at {} along {:?} overlaps", ship, start, direction);
            return Err(BoardError::ShipOverlaps);
        }

        for (index, offset) in offsets.into_iter().enumerate() {
            self.grid[offset] = Cell::ShipPart(ShipPart {
                ship: ship.clone(),
                index,
                state: PartState::Intact,
            });
        }
        self.placements.push(Placement {
            ship: ship.clone(),
            start,
            direction,
        });
        debug!(
            "deployed {} {} at {} along {:?}",
            ship.name(),
            ship.id(),
            start,
            direction
        );
        Ok(())
    }

    /// Resolve a shot at `coordinate`.
    ///
    /// Marks an intact ship part hit (sinking every part of the ship once the
    /// last one is hit) or an empty cell missed, then emits a single `shot`
    /// event. Cells that were already shot, and parts of ships that are
    /// already sunk, yield [`BoardError::RepeatShot`] with no mutation and no
    /// event.
    pub fn take_hit(&mut self, coordinate: Coordinate) -> Result<Shot, BoardError> {
        let offset = self.offset(coordinate)?;
        let target = match &self.grid[offset] {
            Cell::Empty => None,
            Cell::Missed => return Err(BoardError::RepeatShot(coordinate)),
            cell if cell.is_resolved() => return Err(BoardError::RepeatShot(coordinate)),
            Cell::ShipPart(part) => Some(part.ship.clone()),
        };

        let shot = match target {
            None => {
                self.grid[offset] = Cell::Missed;
                Shot {
                    coordinate,
                    hit: false,
                    sunk: false,
                    ship: None,
                }
            }
            Some(ship) => {
                ship.take_hit()?;
                if let Cell::ShipPart(part) = &mut self.grid[offset] {
                    part.state = PartState::Hit;
                }
                let sunk = ship.is_sunk();
                if sunk {
                    self.mark_sunk(&ship);
                }
                Shot {
                    coordinate,
                    hit: true,
                    sunk,
                    ship: Some(ship),
                }
            }
        };

        match &shot.ship {
            Some(ship) => debug!(
                "shot at {}: hit {} {} sunk={}",
                coordinate,
                ship.name(),
                ship.id(),
                shot.sunk
            ),
            None => debug!("shot at {}: miss", coordinate),
        }
        self.events.emit(EVENT_SHOT, &shot);
        Ok(shot)
    }

    /// Sink `ship` outright and mark all of its cells sunk. Returns `false`
    /// if the ship is not on this board.
    pub fn sink_ship(&mut self, ship: &Ship) -> bool {
        if !self.placements.iter().any(|p| p.ship == *ship) {
            return false;
        }
        ship.sink();
        self.mark_sunk(ship);
        true
    }

    fn mark_sunk(&mut self, ship: &Ship) {
        for coordinate in self.get_all_ship_part_coordinates(ship) {
            let offset = coordinate.y() * self.size + coordinate.x();
            if let Cell::ShipPart(part) = &mut self.grid[offset] {
                part.state = PartState::Sunk;
            }
        }
    }

    pub fn get_at_coordinate(&self, coordinate: Coordinate) -> Result<&Cell, BoardError> {
        let offset = self.offset(coordinate)?;
        Ok(&self.grid[offset])
    }

    pub fn has_ship_part_at_coordinate(&self, coordinate: Coordinate) -> Result<bool, BoardError> {
        Ok(self.get_at_coordinate(coordinate)?.ship_part().is_some())
    }

    /// Whether `coordinate` has already been shot at.
    pub fn is_resolved(&self, coordinate: Coordinate) -> Result<bool, BoardError> {
        Ok(self.get_at_coordinate(coordinate)?.is_resolved())
    }

    /// Cells occupied by `ship`, from its start cell outwards. Empty if the
    /// ship is not on this board.
    pub fn get_all_ship_part_coordinates(&self, ship: &Ship) -> Vec<Coordinate> {
        self.placements
            .iter()
            .find(|p| p.ship == *ship)
            .map(|p| p.coordinates().collect())
            .unwrap_or_default()
    }

    /// Ships on this board, in deployment order.
    pub fn deployed_ships(&self) -> impl Iterator<Item = &Ship> {
        self.placements.iter().map(|p| &p.ship)
    }

    /// Every cell with its coordinate, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, &Cell)> + '_ {
        let size = self.size;
        self.grid
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coordinate::new(i % size, i / size), cell))
    }

    /// Number of cells that have not been shot at yet.
    pub fn remaining_targets(&self) -> usize {
        self.grid.iter().filter(|c| !c.is_resolved()).count()
    }
}

impl Model for Board {
    type Event = Shot;

    fn events(&self) -> &EventEmitter<Shot> {
        &self.events
    }
}
