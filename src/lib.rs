#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod attacker;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
pub mod runner;
mod ship;

pub use attacker::*;
pub use bitboard::CellSet;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use runner::*;
pub use ship::*;
