//! Bitboard type and operations.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// A 64-bit bitboard, one bit per cell (bit `rank * 8 + file`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bitboard(pub u64);

// File masks (columns)
impl Bitboard {
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    pub const RANK_1: Bitboard = Bitboard(0x00000000000000FF);
    pub const RANK_8: Bitboard = Bitboard(0xFF00000000000000);

    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);

    /// Everything except files A and H
    pub const NOT_EDGE_FILES: Bitboard = Bitboard(0x7E7E7E7E7E7E7E7E);
    /// Everything except ranks 1 and 8
    pub const NOT_EDGE_RANKS: Bitboard = Bitboard(0x00FFFFFFFFFFFF00);
    /// Cells with no edge neighbour in any direction
    pub const INTERIOR: Bitboard = Bitboard(0x007E7E7E7E7E7E00);

    /// The four corner cells
    pub const CORNERS: Bitboard = Bitboard(0x8100000000000081);
}

impl Bitboard {
    /// Create a bitboard with a single cell set
    #[inline]
    #[must_use]
    pub const fn from_cell(cell: Cell) -> Self {
        Bitboard(1 << (cell.0 * 8 + cell.1))
    }

    /// Returns an iterator over the cells set in this bitboard, lowest index first
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given cell is set
    #[inline]
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        (self.0 & (1 << (cell.0 * 8 + cell.1))) != 0
    }

    /// Copy of this bitboard with `cell` set
    #[inline]
    #[must_use]
    pub const fn with(self, cell: Cell) -> Self {
        Bitboard(self.0 | (1 << (cell.0 * 8 + cell.1)))
    }

    /// Copy of this bitboard with `cell` cleared
    #[inline]
    #[must_use]
    pub const fn without(self, cell: Cell) -> Self {
        Bitboard(self.0 & !(1 << (cell.0 * 8 + cell.1)))
    }

    /// Lowest set cell, if any
    #[inline]
    #[must_use]
    pub fn first(self) -> Option<Cell> {
        self.iter().next()
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

/// The eight ray directions, named by compass point with north = toward rank 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Shift every bit one cell in this direction without any wrap protection.
    #[inline]
    #[must_use]
    pub const fn shift_raw(self, bb: Bitboard) -> Bitboard {
        match self {
            Direction::North => Bitboard(bb.0 << 8),
            Direction::South => Bitboard(bb.0 >> 8),
            Direction::East => Bitboard(bb.0 << 1),
            Direction::West => Bitboard(bb.0 >> 1),
            Direction::NorthEast => Bitboard(bb.0 << 9),
            Direction::NorthWest => Bitboard(bb.0 << 7),
            Direction::SouthEast => Bitboard(bb.0 >> 7),
            Direction::SouthWest => Bitboard(bb.0 >> 9),
        }
    }

    /// Shift one cell in this direction, dropping bits that would wrap around a file edge.
    #[inline]
    #[must_use]
    pub const fn step(self, bb: Bitboard) -> Bitboard {
        let shifted = self.shift_raw(bb).0;
        match self {
            Direction::North | Direction::South => Bitboard(shifted),
            Direction::East | Direction::NorthEast | Direction::SouthEast => {
                Bitboard(shifted & !Bitboard::FILE_A.0)
            }
            Direction::West | Direction::NorthWest | Direction::SouthWest => {
                Bitboard(shifted & !Bitboard::FILE_H.0)
            }
        }
    }

    /// Cells that may sit strictly inside a run along this direction.
    ///
    /// A stone on an excluded edge can never be bracketed in this direction,
    /// so masking the opponent with this guard also stops raw shifts from wrapping.
    #[inline]
    #[must_use]
    pub const fn interior(self) -> Bitboard {
        match self {
            Direction::East | Direction::West => Bitboard::NOT_EDGE_FILES,
            Direction::North | Direction::South => Bitboard::NOT_EDGE_RANKS,
            _ => Bitboard::INTERIOR,
        }
    }
}

pub(crate) fn pop_lsb(bb: &mut Bitboard) -> Cell {
    let idx = bb.0.trailing_zeros() as usize;
    bb.0 &= bb.0 - 1;
    Cell::from_index(idx)
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(pop_lsb(&mut self.0))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.popcount() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Cell;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> BitboardIter {
        self.iter()
    }
}

impl FromIterator<Cell> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Bitboard::EMPTY, |bb, cell| bb.with(cell))
    }
}
