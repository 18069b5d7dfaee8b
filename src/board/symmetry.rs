//! The eight symmetries of the square board.

use super::{Bitboard, Board, Cell};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symmetry {
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    /// Mirror ranks (row 1 <-> row 8)
    FlipVertical,
    /// Mirror files (column A <-> column H)
    FlipHorizontal,
    /// Mirror across the A1-H8 diagonal
    Transpose,
    /// Mirror across the A8-H1 diagonal
    AntiTranspose,
}

impl Symmetry {
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::Rotate90,
        Symmetry::Rotate180,
        Symmetry::Rotate270,
        Symmetry::FlipVertical,
        Symmetry::FlipHorizontal,
        Symmetry::Transpose,
        Symmetry::AntiTranspose,
    ];

    /// Symmetries that map the starting layout onto itself.
    pub const PRESERVING_INITIAL: [Symmetry; 4] = [
        Symmetry::Identity,
        Symmetry::Rotate180,
        Symmetry::Transpose,
        Symmetry::AntiTranspose,
    ];

    #[must_use]
    pub const fn apply(self, cell: Cell) -> Cell {
        let (r, f) = (cell.0, cell.1);
        match self {
            Symmetry::Identity => Cell(r, f),
            Symmetry::Rotate90 => Cell(f, 7 - r),
            Symmetry::Rotate180 => Cell(7 - r, 7 - f),
            Symmetry::Rotate270 => Cell(7 - f, r),
            Symmetry::FlipVertical => Cell(7 - r, f),
            Symmetry::FlipHorizontal => Cell(r, 7 - f),
            Symmetry::Transpose => Cell(f, r),
            Symmetry::AntiTranspose => Cell(7 - f, 7 - r),
        }
    }

    /// The symmetry that undoes this one
    #[must_use]
    pub const fn inverse(self) -> Symmetry {
        match self {
            Symmetry::Rotate90 => Symmetry::Rotate270,
            Symmetry::Rotate270 => Symmetry::Rotate90,
            other => other,
        }
    }

    #[must_use]
    pub fn apply_mask(self, bb: Bitboard) -> Bitboard {
        bb.iter().map(|cell| self.apply(cell)).collect()
    }

    #[must_use]
    pub fn apply_board(self, board: &Board) -> Board {
        Board {
            stones: [
                self.apply_mask(board.stones[0]),
                self.apply_mask(board.stones[1]),
            ],
        }
    }
}
