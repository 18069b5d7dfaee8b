use super::{Bitboard, Board, Cell, Color, InvalidMove, InvalidMoveReason};

impl Board {
    /// XOR the placed stone and its flips into the position.
    ///
    /// Applying the same `(color, cell, flips)` twice restores the board bit for bit,
    /// which is what makes it usable as its own undo.
    #[inline]
    pub(crate) fn toggle(&mut self, color: Color, cell: Cell, flips: Bitboard) {
        let own = color.index();
        let opp = color.opponent().index();
        self.stones[own] ^= flips | cell.bit();
        self.stones[opp] ^= flips;
        self.debug_validate();
    }

    /// Place a stone for `color` on `cell` and flip the bracketed stones.
    ///
    /// Returns the flip mask, which must be handed back to [`Board::undo_move`].
    ///
    /// # Errors
    /// Returns `InvalidMove` if the cell is occupied or would flip nothing;
    /// the board is not modified in that case.
    pub fn apply_move(&mut self, color: Color, cell: Cell) -> Result<Bitboard, InvalidMove> {
        if self.occupied().contains(cell) {
            return Err(InvalidMove {
                cell,
                reason: InvalidMoveReason::Occupied,
            });
        }
        let flips = self.flip_mask(color, cell);
        if flips.is_empty() {
            return Err(InvalidMove {
                cell,
                reason: InvalidMoveReason::NoFlips,
            });
        }
        self.toggle(color, cell, flips);
        Ok(flips)
    }

    /// Take back a move made with [`Board::apply_move`].
    ///
    /// `flips` must be the mask that call returned, and no other move may have
    /// been left applied in between.
    pub fn undo_move(&mut self, color: Color, cell: Cell, flips: Bitboard) {
        debug_assert!(
            self.stones(color).contains(cell),
            "undo of {cell} for {color}: stone not present"
        );
        debug_assert!(
            (self.stones(color) & flips) == flips,
            "undo of {cell} for {color}: flipped stones not owned by mover"
        );
        self.toggle(color, cell, flips);
    }

    /// Copy of this board with the move applied.
    ///
    /// # Errors
    /// Same as [`Board::apply_move`].
    pub fn after_move(&self, color: Color, cell: Cell) -> Result<Board, InvalidMove> {
        let mut next = *self;
        next.apply_move(color, cell)?;
        Ok(next)
    }
}
