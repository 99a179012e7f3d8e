//! Commonly used types for ease of import.

pub use crate::{
    run_match, AttackOutcome, Attacker, Board, ComputerPlayer, Coordinate, GameError, Match,
    MatchSummary, Orientation, Player, Seat, Strategy, TurnReport, FLEET,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
