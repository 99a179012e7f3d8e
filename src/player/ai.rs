use rand::rngs::SmallRng;

use crate::{
    board::Board,
    config::FLEET,
    game::{Match, TurnReport},
    ship::ShipType,
};

use super::Player;

/// Computer player: random placement, targets chosen by the seat's strategy.
pub struct ComputerPlayer {
    fleet: &'static [ShipType],
}

impl ComputerPlayer {
    pub fn new() -> Self {
        Self::with_fleet(&FLEET)
    }

    /// Computer player that places `fleet` instead of the standard one.
    pub fn with_fleet(fleet: &'static [ShipType]) -> Self {
        Self { fleet }
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for ComputerPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()> {
        board
            .place_fleet_randomly(rng, self.fleet)
            .map_err(|e| anyhow::anyhow!(e))
    }

    fn take_turn(&mut self, rng: &mut SmallRng, game: &mut Match) -> anyhow::Result<TurnReport> {
        game.take_computer_turn(rng).map_err(|e| anyhow::anyhow!(e))
    }
}
