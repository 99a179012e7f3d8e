//! One player's grid: fleet placement, occupancy, attack resolution.

use alloc::vec::Vec;
use core::fmt;

use log::debug;
use rand::Rng;

use crate::bitboard::CellSet;
use crate::common::{AttackOutcome, Coordinate, GameError};
use crate::config::{BOARD_SIZE, CELL_COUNT, PLACEMENT_ATTEMPTS};
use crate::ship::{span, Orientation, ShipType, Vessel};

/// A vessel together with where it was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedShip {
    vessel: Vessel,
    origin: Coordinate,
    orientation: Orientation,
}

impl PlacedShip {
    pub fn vessel(&self) -> &Vessel {
        &self.vessel
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells the ship covers.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (row, col) = (self.origin.row(), self.origin.col());
        let horizontal = self.orientation == Orientation::Horizontal;
        (0..self.vessel.length()).filter_map(move |i| {
            if horizontal {
                Coordinate::new(row, col + i).ok()
            } else {
                Coordinate::new(row + i, col).ok()
            }
        })
    }
}

/// Board state: fleet, occupancy by cell index, struck cells and misses.
#[derive(Clone)]
pub struct Board {
    fleet: Vec<PlacedShip>,
    occupancy: [Option<usize>; CELL_COUNT],
    hits: CellSet,
    misses: Vec<Coordinate>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            fleet: Vec::new(),
            occupancy: [None; CELL_COUNT],
            hits: CellSet::new(),
            misses: Vec::new(),
        }
    }

    /// Place a ship of `length` at `origin` extending per `orientation`.
    ///
    /// The board is left untouched when the span leaves the grid or crosses
    /// another ship.
    pub fn place_ship(
        &mut self,
        origin: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let vessel = Vessel::new(length)?;
        let cells = span(origin.row(), origin.col(), length, orientation)?;
        let mut indices = Vec::with_capacity(length);
        for cell in cells {
            if self.occupancy[cell.index()].is_some() {
                return Err(GameError::OverlapConflict {
                    row: cell.row(),
                    col: cell.col(),
                });
            }
            indices.push(cell.index());
        }

        let ship_idx = self.fleet.len();
        for idx in indices {
            self.occupancy[idx] = Some(ship_idx);
        }
        self.fleet.push(PlacedShip {
            vessel,
            origin,
            orientation,
        });
        debug!("placed ship of length {} at {} ({:?})", length, origin, orientation);
        Ok(())
    }

    /// Returns a random in-bounds, non-overlapping (origin, orientation) for a
    /// ship of `length`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(Coordinate, Orientation), GameError> {
        Vessel::new(length)?;
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - length),
                Orientation::Vertical => (BOARD_SIZE - length, BOARD_SIZE - 1),
            };
            let origin = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c))?;
            let free = span(origin.row(), origin.col(), length, orientation)?
                .all(|cell| self.occupancy[cell.index()].is_none());
            if free {
                return Ok((origin, orientation));
            }
        }
        Err(GameError::UnableToPlaceShip { length })
    }

    /// Place every ship of `fleet` at random positions.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &[ShipType],
    ) -> Result<(), GameError> {
        for ship in fleet {
            let (origin, orientation) = self.random_placement(rng, ship.length())?;
            self.place_ship(origin, ship.length(), orientation)?;
        }
        Ok(())
    }

    /// Resolve an attack on `target`.
    ///
    /// Repeat attacks are not rejected here: a struck cell reports `Hit`
    /// again and an empty cell is appended to the miss list again.
    pub fn receive_attack(&mut self, target: Coordinate) -> AttackOutcome {
        let outcome = match self.occupancy[target.index()] {
            Some(ship_idx) => {
                let vessel = &mut self.fleet[ship_idx].vessel;
                let was_sunk = vessel.is_sunk();
                vessel.hit();
                self.hits.insert(target);
                if vessel.is_sunk() && !was_sunk {
                    AttackOutcome::Sunk
                } else {
                    AttackOutcome::Hit
                }
            }
            None => {
                self.misses.push(target);
                AttackOutcome::Miss
            }
        };
        debug!("attack at {} -> {:?}", target, outcome);
        outcome
    }

    /// `true` once at least one ship is placed and every ship is sunk.
    pub fn all_ships_sunk(&self) -> bool {
        !self.fleet.is_empty() && self.fleet.iter().all(|s| s.vessel.is_sunk())
    }

    pub fn sunk_ships_count(&self) -> usize {
        self.fleet.iter().filter(|s| s.vessel.is_sunk()).count()
    }

    /// Ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.fleet.len() - self.sunk_ships_count()
    }

    /// Placed ships in placement order.
    pub fn ships(&self) -> &[PlacedShip] {
        &self.fleet
    }

    /// The ship covering `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&PlacedShip> {
        self.occupancy[coord.index()].map(|idx| &self.fleet[idx])
    }

    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.occupancy[coord.index()].is_some()
    }

    /// Cells occupied by any ship.
    pub fn ship_map(&self) -> CellSet {
        self.fleet.iter().flat_map(|s| s.cells()).collect()
    }

    /// Ship cells that have been struck.
    pub fn hits(&self) -> CellSet {
        self.hits
    }

    /// Attacks that found open water, in the order received.
    pub fn misses(&self) -> &[Coordinate] {
        &self.misses
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  ships: {:?}\n}}",
            self.ship_map(),
            self.hits,
            self.misses,
            self.fleet
        )
    }
}
