//! Player trait and implementations
//!
//! A Player is the source of decisions the rules engine cannot make itself:
//! - ComputerPlayer: random fleet placement, targeting by the attacker's strategy
//! - CliPlayer: interactive command-line player (std only)

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    game::{Match, Seat, TurnReport},
};

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing ships on its own board during setup
/// - Choosing and submitting an attack when it is the active side
/// - Reacting to every resolved turn
pub trait Player {
    /// Place the whole fleet onto the provided board.
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()>;

    /// Resolve exactly one turn for the active side of `game`.
    fn take_turn(&mut self, rng: &mut SmallRng, game: &mut Match) -> anyhow::Result<TurnReport>;

    /// Inform the player, seated at `me`, of a resolved turn.
    fn handle_turn(&mut self, _me: Seat, _report: &TurnReport) {}
}

pub mod ai;
pub use ai::ComputerPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
