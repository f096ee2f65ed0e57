use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use crate::common::ConfigError;

pub const BOARD_SIZE: usize = 10;

/// Largest accepted board side.
pub const MAX_BOARD_SIZE: usize = 1024;

/// Upper bound on random placement attempts per ship during fleet deployment.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Fleet slot: ship name and number of parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    size: usize,
}

impl ShipDef {
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

pub const STANDARD_FLEET: [ShipDef; 5] = [
    ShipDef::new("Aircraft Carrier", 5),
    ShipDef::new("Battleship", 4),
    ShipDef::new("Destroyer", 3),
    ShipDef::new("Submarine", 3),
    ShipDef::new("Patrol Boat", 2),
];

/// Construction parameters for a `Player`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub name: String,
    pub board_size: usize,
    pub fleet: Vec<ShipDef>,
    pub activated: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: "Player".to_string(),
            board_size: BOARD_SIZE,
            fleet: STANDARD_FLEET.to_vec(),
            activated: false,
        }
    }
}

impl PlayerConfig {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn with_fleet(mut self, fleet: impl IntoIterator<Item = ShipDef>) -> Self {
        self.fleet = fleet.into_iter().collect();
        self
    }

    /// Total number of cells the fleet occupies once deployed.
    pub fn fleet_cells(&self) -> usize {
        self.fleet.iter().map(ShipDef::size).sum()
    }

    /// Reject fleets that could never be deployed on the configured board.
    ///
    /// Passing validation does not guarantee a packing exists for every
    /// fleet that fits by cell count; the bounded placement loop reports
    /// those.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidBoardSize);
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        for def in &self.fleet {
            if def.size() == 0 {
                return Err(ConfigError::InvalidShipSize {
                    name: def.name().to_string(),
                });
            }
            if def.size() > self.board_size {
                return Err(ConfigError::ShipTooLarge {
                    name: def.name().to_string(),
                    size: def.size(),
                    board_size: self.board_size,
                });
            }
        }
        let capacity = self.board_size * self.board_size;
        let cells = self.fleet_cells();
        if cells > capacity {
            return Err(ConfigError::FleetTooLarge { cells, capacity });
        }
        Ok(())
    }
}
