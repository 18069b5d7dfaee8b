//! Fluent builder for constructing positions.
//!
//! Allows creating positions stone by stone rather than from raw masks.
//!
//! # Example
//! ```
//! use reversi_engine::board::{BoardBuilder, Cell, Color};
//!
//! let board = BoardBuilder::new()
//!     .stone(Cell(0, 0), Color::Black)
//!     .stone(Cell(0, 1), Color::White)
//!     .build()
//!     .unwrap();
//! assert!(board.is_legal(Color::Black, Cell(0, 2)));
//! ```

use super::{Bitboard, Board, BoardError, Cell, Color};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    stones: [Bitboard; 2],
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            stones: [Bitboard::EMPTY; 2],
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let initial = Board::initial();
        BoardBuilder {
            stones: initial.stones,
        }
    }

    /// Place a stone, replacing whatever was on the cell.
    #[must_use]
    pub fn stone(mut self, cell: Cell, color: Color) -> Self {
        self = self.clear(cell);
        self.stones[color.index()] = self.stones[color.index()].with(cell);
        self
    }

    /// Place stones of one color on every cell of `mask`, replacing existing stones.
    #[must_use]
    pub fn stones(mut self, color: Color, mask: Bitboard) -> Self {
        self.stones[color.opponent().index()] &= !mask;
        self.stones[color.index()] |= mask;
        self
    }

    /// Remove any stone from a cell.
    #[must_use]
    pub fn clear(mut self, cell: Cell) -> Self {
        for mask in &mut self.stones {
            *mask = mask.without(cell);
        }
        self
    }

    /// Finish building.
    ///
    /// # Errors
    /// Returns `BoardError::Overlap` if the colors share a cell. The builder's
    /// own methods keep them disjoint.
    pub fn build(self) -> Result<Board, BoardError> {
        Board::from_masks(self.stones[0], self.stones[1])
    }
}
