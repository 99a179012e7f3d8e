//! Common types for Broadside: grid coordinates, attack outcomes and errors.

use core::fmt;

use crate::config::BOARD_SIZE;

/// A cell on the 10×10 grid. Always in bounds once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "std",
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Validate and build a coordinate.
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Coordinate for a canonical index in `0..CELL_COUNT`.
    pub fn from_index(index: usize) -> Result<Self, GameError> {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Canonical, collision-free key: `row * BOARD_SIZE + col`.
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Orthogonal neighbours inside the grid, in up, down, left, right order.
    pub fn neighbors(&self) -> impl Iterator<Item = Coordinate> {
        let (r, c) = (self.row, self.col);
        [
            r.checked_sub(1).map(|r| (r, c)),
            Some((r + 1, c)),
            c.checked_sub(1).map(|c| (r, c)),
            Some((r, c + 1)),
        ]
        .into_iter()
        .flatten()
        .filter_map(|(r, c)| Coordinate::new(r, c).ok())
    }
}

impl TryFrom<(usize, usize)> for Coordinate {
    type Error = GameError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, GameError> {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of resolving a single attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// No vessel at the target.
    Miss,
    /// A vessel was struck but is still afloat (or was already sunk).
    Hit,
    /// The strike sank the vessel.
    Sunk,
}

impl AttackOutcome {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackOutcome::Miss)
    }
}

/// Errors returned by board, attacker and match operations.
///
/// All of them are recoverable: a front end reports them and asks again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Ship length outside `1..=MAX_SHIP_LENGTH`.
    InvalidConfiguration { length: usize },
    /// Placement or attack falls outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Placement collides with a vessel already on the board.
    OverlapConflict { row: usize, col: usize },
    /// Attacker already targeted this cell.
    AlreadyAttacked(Coordinate),
    /// Every cell has been attacked; nothing left to sample.
    ExhaustedSearchSpace,
    /// Random placement gave up.
    UnableToPlaceShip { length: usize },
    /// A turn was requested before both fleets were placed.
    SetupIncomplete,
    /// A turn was requested after the match ended.
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidConfiguration { length } => {
                write!(f, "Invalid ship length {} (must be 1-10)", length)
            }
            GameError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is outside the board", row, col)
            }
            GameError::OverlapConflict { row, col } => {
                write!(f, "Position ({}, {}) is already occupied by a ship", row, col)
            }
            GameError::AlreadyAttacked(coord) => write!(f, "Already attacked {}", coord),
            GameError::ExhaustedSearchSpace => write!(f, "Every cell has already been attacked"),
            GameError::UnableToPlaceShip { length } => {
                write!(f, "Unable to place ship of length {}", length)
            }
            GameError::SetupIncomplete => write!(f, "Both fleets must be placed first"),
            GameError::GameOver => write!(f, "The match is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
