use log::info;
use rand::Rng;

use crate::{
    attacker::{Attacker, Strategy},
    board::Board,
    common::{AttackOutcome, Coordinate, GameError},
};

/// Identifies one side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// The other side.
    pub fn opponent(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Position of this side in two-element per-seat arrays.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// What happened during one resolved turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Side that attacked.
    pub seat: Seat,
    pub target: Coordinate,
    pub outcome: AttackOutcome,
    /// Set when this turn ended the match.
    pub winner: Option<Seat>,
}

/// Attacker and own board for one side.
#[derive(Debug, Clone)]
struct Side {
    attacker: Attacker,
    board: Board,
}

/// Two sides, whose turn it is, and how many turns have resolved.
#[derive(Debug, Clone)]
pub struct Match {
    sides: [Side; 2],
    turn: Seat,
    turns: usize,
}

impl Default for Match {
    fn default() -> Self {
        Self::new(Strategy::default(), Strategy::default())
    }
}

impl Match {
    /// Create a match with empty boards; `First` moves first.
    pub fn new(first: Strategy, second: Strategy) -> Self {
        let side = |strategy| Side {
            attacker: Attacker::new(strategy),
            board: Board::new(),
        };
        Self {
            sides: [side(first), side(second)],
            turn: Seat::First,
            turns: 0,
        }
    }

    pub fn board(&self, seat: Seat) -> &Board {
        &self.sides[seat.index()].board
    }

    /// Mutable board for ship placement during setup.
    pub fn board_mut(&mut self, seat: Seat) -> &mut Board {
        &mut self.sides[seat.index()].board
    }

    pub fn attacker(&self, seat: Seat) -> &Attacker {
        &self.sides[seat.index()].attacker
    }

    pub fn current_turn(&self) -> Seat {
        self.turn
    }

    pub fn current_turn_attacker(&self) -> &Attacker {
        self.attacker(self.turn)
    }

    /// Board the active side is attacking.
    pub fn opponent_board(&self) -> &Board {
        self.board(self.turn.opponent())
    }

    /// Number of resolved turns.
    pub fn turn_count(&self) -> usize {
        self.turns
    }

    /// `true` once either fleet is fully sunk.
    pub fn is_over(&self) -> bool {
        self.sides.iter().any(|s| s.board.all_ships_sunk())
    }

    /// Side whose opponent has no ships left.
    pub fn winner(&self) -> Option<Seat> {
        [Seat::First, Seat::Second]
            .into_iter()
            .find(|seat| self.board(seat.opponent()).all_ships_sunk())
    }

    /// Resolve an externally chosen attack by the active side.
    pub fn take_turn(&mut self, target: Coordinate) -> Result<TurnReport, GameError> {
        self.check_playable()?;
        self.sides[self.turn.index()].attacker.attack(target)?;
        Ok(self.resolve(target))
    }

    /// Let the active side's strategy pick the target and resolve it.
    pub fn take_computer_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<TurnReport, GameError> {
        self.check_playable()?;
        let target = self.sides[self.turn.index()].attacker.next_target(rng)?;
        Ok(self.resolve(target))
    }

    fn check_playable(&self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.sides.iter().any(|s| s.board.ships().is_empty()) {
            return Err(GameError::SetupIncomplete);
        }
        Ok(())
    }

    fn resolve(&mut self, target: Coordinate) -> TurnReport {
        let seat = self.turn;
        let outcome = self.sides[seat.opponent().index()].board.receive_attack(target);
        if outcome.is_hit() {
            self.sides[seat.index()].attacker.register_hit(target);
        }
        self.turns += 1;

        let winner = self.winner();
        match winner {
            Some(w) => info!("{:?} wins after {} turns", w, self.turns),
            None => self.turn = seat.opponent(),
        }
        TurnReport {
            seat,
            target,
            outcome,
            winner,
        }
    }
}
