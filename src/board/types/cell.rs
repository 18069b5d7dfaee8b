//! Cell coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use crate::board::error::CellError;

/// A cell on the board, represented as (rank, file).
///
/// Rank 0 is row "1" and file 0 is column "A"; cell (0, 0) is bit 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell(pub usize, pub usize); // (rank, file)

impl Cell {
    /// Create a new cell with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Cell(rank, file))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = row 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = column A)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Get the cell's index (0-63, A1=0, B1=1, ..., H8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a cell from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Cell(idx / 8, idx % 8)
    }

    /// Single-bit bitboard for this cell
    #[inline]
    #[must_use]
    pub const fn bit(self) -> Bitboard {
        Bitboard::from_cell(self)
    }

    /// All 64 cells in index order
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..64).map(Cell::from_index)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'A') as char, self.0 + 1)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Cell {
    type Error = CellError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(CellError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(CellError::FileOutOfBounds { file });
        }
        Ok(Cell(rank, file))
    }
}

impl FromStr for Cell {
    type Err = CellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CellError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };

        let file = match file_char.to_ascii_uppercase() {
            c @ 'A'..='H' => c as usize - 'A' as usize,
            _ => return Err(invalid()),
        };
        let rank = match rank_char {
            '1'..='8' => rank_char as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Ok(Cell(rank, file))
    }
}
