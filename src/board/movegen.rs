//! Legal move and flip generation.
//!
//! Legal moves are computed for all cells at once with a directional fill:
//! starting from the mover's stones, each step extends the run through
//! contiguous opponent stones, and one more step onto an empty cell marks a
//! legal placement. An 8x8 board needs at most six opponent stones in a row,
//! so five extension steps after the first are enough.

use super::{Bitboard, Board, Cell, Color, Direction};

/// Legal placements for a player owning `own` against `opp`.
#[inline]
pub(crate) fn mobility_mask(own: Bitboard, opp: Bitboard) -> Bitboard {
    let empty = !(own | opp);
    let mut moves = Bitboard::EMPTY;

    for dir in Direction::ALL {
        let inner = opp & dir.interior();
        let mut run = inner & dir.shift_raw(own);
        for _ in 0..5 {
            run |= inner & dir.shift_raw(run);
        }
        moves |= empty & dir.shift_raw(run);
    }

    moves
}

/// Stones that flip when the owner of `own` places on `cell`.
///
/// Does not check that `cell` is empty.
#[inline]
pub(crate) fn flips_for(own: Bitboard, opp: Bitboard, cell: Cell) -> Bitboard {
    let origin = cell.bit();
    let mut flips = Bitboard::EMPTY;

    for dir in Direction::ALL {
        let mut run = Bitboard::EMPTY;
        let mut cursor = dir.step(origin);
        while !(cursor & opp).is_empty() {
            run |= cursor;
            cursor = dir.step(cursor);
        }
        // The run only counts when it is closed by one of our own stones.
        if !(cursor & own).is_empty() {
            flips |= run;
        }
    }

    flips
}

impl Board {
    /// Every cell where `color` may place a stone.
    #[inline]
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Bitboard {
        mobility_mask(self.stones(color), self.stones(color.opponent()))
    }

    /// Number of legal placements for `color`
    #[inline]
    #[must_use]
    pub fn mobility(&self, color: Color) -> u32 {
        self.legal_moves(color).popcount()
    }

    #[inline]
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        !self.legal_moves(color).is_empty()
    }

    /// Stones of the opponent that a placement by `color` on `cell` would flip.
    ///
    /// Empty if `cell` is occupied.
    #[must_use]
    pub fn flip_mask(&self, color: Color, cell: Cell) -> Bitboard {
        if self.occupied().contains(cell) {
            return Bitboard::EMPTY;
        }
        flips_for(self.stones(color), self.stones(color.opponent()), cell)
    }

    /// A cell is legal iff it is empty and flips at least one stone
    #[must_use]
    pub fn is_legal(&self, color: Color, cell: Cell) -> bool {
        !self.flip_mask(color, cell).is_empty()
    }

    /// True when neither color can move.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        let black = self.stones[Color::Black.index()];
        let white = self.stones[Color::White.index()];
        (mobility_mask(black, white) | mobility_mask(white, black)).is_empty()
    }

    /// True when `color` has no move but the game goes on, so `color` passes.
    #[must_use]
    pub fn must_pass(&self, color: Color) -> bool {
        !self.has_legal_move(color) && self.has_legal_move(color.opponent())
    }
}
