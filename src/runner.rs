//! Drives a match between two players: setup, then alternating turns.

use rand::rngs::SmallRng;

use crate::{
    game::{Match, Seat},
    player::Player,
};

/// Outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub winner: Seat,
    pub turns: usize,
    /// Attacks made by `First` and `Second`.
    pub attacks: [usize; 2],
    /// Enemy ships sunk by `First` and `Second`.
    pub ships_sunk: [usize; 2],
}

impl MatchSummary {
    fn from_match(game: &Match, winner: Seat) -> Self {
        let seats = [Seat::First, Seat::Second];
        Self {
            winner,
            turns: game.turn_count(),
            attacks: seats.map(|s| game.attacker(s).attack_count()),
            ships_sunk: seats.map(|s| game.board(s.opponent()).sunk_ships_count()),
        }
    }
}

/// Ask each player with an empty board to place its fleet.
pub fn place_fleets(
    game: &mut Match,
    players: &mut [&mut dyn Player; 2],
    rng: &mut SmallRng,
) -> anyhow::Result<()> {
    for seat in [Seat::First, Seat::Second] {
        if game.board(seat).ships().is_empty() {
            players[seat.index()].place_fleet(rng, game.board_mut(seat))?;
        }
    }
    Ok(())
}

/// Place any missing fleets, then alternate turns until one fleet is sunk.
pub fn run_match(
    game: &mut Match,
    mut players: [&mut dyn Player; 2],
    rng: &mut SmallRng,
) -> anyhow::Result<MatchSummary> {
    place_fleets(game, &mut players, rng)?;

    loop {
        let seat = game.current_turn();
        let report = players[seat.index()].take_turn(rng, game)?;
        for me in [Seat::First, Seat::Second] {
            players[me.index()].handle_turn(me, &report);
        }
        if let Some(winner) = report.winner {
            return Ok(MatchSummary::from_match(game, winner));
        }
    }
}
