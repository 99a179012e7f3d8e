//! A fixed-size cell set packed into an unsigned integer.
//!
//! Cells are addressed by their canonical index `row * N + col`, so the set
//! doubles as the attacked-set and hit map without any string keys.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coordinate;
use crate::config::BOARD_SIZE;

/// Set of game-grid cells.
pub type CellSet = BitBoard<u128, BOARD_SIZE>;

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    // Evaluated per instantiation: an N×N grid that does not fit in `T`
    // fails to compile instead of overflowing a shift at runtime.
    const FITS: () = assert!(N * N <= mem::size_of::<T>() * 8, "N*N exceeds the bits of T");

    /// Create an empty board.
    #[inline]
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    #[inline]
    fn bit(&self, index: usize) -> bool {
        ((self.bits >> index) & T::one()) != T::zero()
    }

    fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..N * N).filter(move |&idx| self.bit(idx))
    }
}

impl<T> BitBoard<T, BOARD_SIZE>
where
    T: PrimInt + Unsigned + Zero,
{
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.bit(coord.index())
    }

    /// Adds `coord`, returning `true` if it was not present before.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        let fresh = !self.contains(coord);
        self.bits = self.bits | (T::one() << coord.index());
        fresh
    }

    /// Iterator over the coordinates in the set, row-major.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.indices()
            .filter_map(|idx| Coordinate::from_index(idx).ok())
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Coordinate> for BitBoard<T, BOARD_SIZE>
where
    T: PrimInt + Unsigned + Zero,
{
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut board = Self::new();
        for coord in iter {
            board.insert(coord);
        }
        board
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let cell = if self.bit(r * N + c) { '■' } else { '□' };
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
