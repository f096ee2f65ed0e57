//! Turn controller for a human player against a computer player.
//!
//! The controller owns both players and is the only place their gating flags
//! change. Contract: the current shooter is `activated` (and `can_play`),
//! its opponent is neither. Because an activated player refuses shots, the
//! shooter can never hit its own board.

use log::info;

use crate::board::Shot;
use crate::common::GameError;
use crate::coordinate::Coordinate;
use crate::player::Player;
use crate::targeting::TargetingStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Computer => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress { turn: Side },
    Won(Side),
}

/// Result of one accepted shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub shooter: Side,
    pub shot: Shot,
    /// Set when this shot sank the opponent's last ship.
    pub winner: Option<Side>,
}

#[derive(Debug)]
pub struct Game {
    human: Player,
    computer: Player,
    status: GameStatus,
    shots: [usize; 2],
}

impl Game {
    pub fn new(human: Player, computer: Player) -> Self {
        Self {
            human,
            computer,
            status: GameStatus::NotStarted,
            shots: [0; 2],
        }
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Won(side) => Some(side),
            _ => None,
        }
    }

    /// Accepted shots fired by `side` so far.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Give the first turn to `first`. Restarting a running game just hands
    /// the turn over.
    pub fn start(&mut self, first: Side) -> Result<(), GameError> {
        if let GameStatus::Won(_) = self.status {
            return Err(GameError::GameOver);
        }
        self.hand_turn_to(first);
        Ok(())
    }

    fn current_turn(&self) -> Result<Side, GameError> {
        match self.status {
            GameStatus::NotStarted => Err(GameError::NotStarted),
            GameStatus::InProgress { turn } => Ok(turn),
            GameStatus::Won(_) => Err(GameError::GameOver),
        }
    }

    // The outgoing shooter is released before the next one is activated, so
    // observers never see two active players.
    fn hand_turn_to(&mut self, side: Side) {
        let waiting = self.player_mut(side.opponent());
        waiting.set_activated(false);
        waiting.set_can_play(false);
        let shooter = self.player_mut(side);
        shooter.set_activated(true);
        shooter.set_can_play(true);
        self.status = GameStatus::InProgress { turn: side };
    }

    /// The current shooter fires at its opponent's board.
    ///
    /// Rejected shots (repeats, out of bounds) are returned as errors and do
    /// not consume the turn. Otherwise the turn passes to the opponent, or
    /// the game ends if the opponent's fleet is sunk.
    pub fn fire(&mut self, coordinate: Coordinate) -> Result<Turn, GameError> {
        let shooter = self.current_turn()?;
        let target = shooter.opponent();
        let shot = self
            .player_mut(target)
            .take_hit(coordinate)?
            .ok_or(GameError::NotYourTurn)?;
        self.shots[shooter.index()] += 1;

        let winner = if self.player(target).is_sunk() {
            let loser = self.player_mut(target);
            loser.set_activated(false);
            loser.set_can_play(false);
            let winning = self.player_mut(shooter);
            winning.set_activated(false);
            winning.set_can_play(false);
            self.status = GameStatus::Won(shooter);
            info!(
                "{} wins after {} shots",
                self.player(shooter).name(),
                self.shots_fired(shooter)
            );
            Some(shooter)
        } else {
            self.hand_turn_to(target);
            None
        };

        Ok(Turn {
            shooter,
            shot,
            winner,
        })
    }

    /// Let `strategy` pick a target for whoever's turn it is and fire.
    pub fn play_turn<S>(&mut self, strategy: &mut S) -> Result<Turn, GameError>
    where
        S: TargetingStrategy + ?Sized,
    {
        let shooter = self.current_turn()?;
        let coordinate = strategy.select_target(self.player(shooter.opponent()).board());
        self.fire(coordinate)
    }

    /// Fire the computer's shot chosen by `strategy`. Fails if it is the
    /// human's turn.
    pub fn play_computer_turn<S>(&mut self, strategy: &mut S) -> Result<Turn, GameError>
    where
        S: TargetingStrategy + ?Sized,
    {
        if self.current_turn()? != Side::Computer {
            return Err(GameError::NotYourTurn);
        }
        self.play_turn(strategy)
    }
}
