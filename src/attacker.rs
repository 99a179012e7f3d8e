// Targeting for one participant: attack history plus random or hunt/target
// selection. Uses a bitboard for the attacked-set and allocates only the
// follow-up queue.

use alloc::collections::VecDeque;

use log::trace;
use rand::Rng;

use crate::bitboard::CellSet;
use crate::common::{Coordinate, GameError};
use crate::config::{BOARD_SIZE, CELL_COUNT};

/// How a computer-controlled attacker picks its next target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Uniformly random untried cell.
    Random,
    /// Probe the neighbours of earlier hits first, otherwise random.
    #[default]
    Smart,
}

/// One participant's record of attacks against the opponent's board.
#[derive(Debug, Clone)]
pub struct Attacker {
    strategy: Strategy,
    attacked: CellSet,
    target_queue: VecDeque<Coordinate>,
    last_hit: Option<Coordinate>,
}

impl Default for Attacker {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

impl Attacker {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            attacked: CellSet::new(),
            target_queue: VecDeque::new(),
            last_hit: None,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Record an externally chosen target, rejecting repeats.
    pub fn attack(&mut self, target: Coordinate) -> Result<Coordinate, GameError> {
        if !self.attacked.insert(target) {
            return Err(GameError::AlreadyAttacked(target));
        }
        Ok(target)
    }

    /// Pick and record a target using this attacker's own strategy.
    pub fn next_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coordinate, GameError> {
        match self.strategy {
            Strategy::Random => self.random_attack(rng),
            Strategy::Smart => self.smart_attack(rng),
        }
    }

    /// Uniformly random cell not attacked before.
    pub fn random_attack<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coordinate, GameError> {
        if self.attacked.count_ones() >= CELL_COUNT {
            return Err(GameError::ExhaustedSearchSpace);
        }
        loop {
            let target = Coordinate::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            )?;
            if self.attacked.insert(target) {
                return Ok(target);
            }
        }
    }

    /// Hunt/target: drain the follow-up queue for a fresh cell, then fall
    /// back to a random attack.
    pub fn smart_attack<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coordinate, GameError> {
        while let Some(target) = self.target_queue.pop_front() {
            if self.attacked.insert(target) {
                return Ok(target);
            }
            trace!("dropping stale target {}", target);
        }
        self.random_attack(rng)
    }

    /// Queue the untried in-bounds neighbours of a confirmed hit.
    pub fn register_hit(&mut self, coord: Coordinate) {
        for neighbor in coord.neighbors() {
            if !self.attacked.contains(neighbor) && !self.target_queue.contains(&neighbor) {
                self.target_queue.push_back(neighbor);
            }
        }
        self.last_hit = Some(coord);
    }

    pub fn has_attacked(&self, coord: Coordinate) -> bool {
        self.attacked.contains(coord)
    }

    /// Attacked cells in row-major order.
    pub fn attacked(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.attacked.coordinates()
    }

    pub fn attack_count(&self) -> usize {
        self.attacked.count_ones()
    }

    /// Pending follow-up targets, head first.
    pub fn target_queue(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.target_queue.iter().copied()
    }

    pub fn last_hit(&self) -> Option<Coordinate> {
        self.last_hit
    }
}
