#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
mod coordinate;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod model;
mod player;
mod ship;
pub mod targeting;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use model::{Change, EventEmitter, ListenerId, Model, Value, CHANGED, EVENT_SHOT};
pub use player::*;
pub use ship::*;
pub use targeting::{RandomTargeting, TargetingStrategy};
