//! Ship definitions: fleet entries, orientation, and a vessel's damage state.

use crate::common::{Coordinate, GameError};
use crate::config::MAX_SHIP_LENGTH;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along columns from the origin.
    Horizontal,
    /// Extends along rows from the origin.
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A single ship's length and accumulated damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    hits: usize,
}

impl Vessel {
    /// Create an undamaged vessel. Length must be in `1..=MAX_SHIP_LENGTH`.
    pub fn new(length: usize) -> Result<Self, GameError> {
        if length == 0 || length > MAX_SHIP_LENGTH {
            return Err(GameError::InvalidConfiguration { length });
        }
        Ok(Self { length, hits: 0 })
    }

    /// Record one strike. No effect once sunk.
    pub fn hit(&mut self) {
        if !self.is_sunk() {
            self.hits += 1;
        }
        debug_assert!(self.hits <= self.length);
    }

    pub fn is_sunk(&self) -> bool {
        self.hits == self.length
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}

/// Cells covered by a ship of `length` starting at (`row`, `col`).
///
/// Fails with `OutOfBounds` naming the first cell that leaves the grid.
pub fn span(
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
) -> Result<impl Iterator<Item = Coordinate>, GameError> {
    let cells = (0..length).map(move |i| match orientation {
        Orientation::Horizontal => (row, col + i),
        Orientation::Vertical => (row + i, col),
    });
    for (r, c) in cells.clone() {
        Coordinate::new(r, c)?;
    }
    Ok(cells.filter_map(|(r, c)| Coordinate::new(r, c).ok()))
}
