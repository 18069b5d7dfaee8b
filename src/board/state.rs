#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Bitboard, BoardError, Cell, Color};

/// Black's stones in the starting layout: E4 and D5.
const INITIAL_BLACK: Bitboard = Bitboard(0x0000_0008_1000_0000);
/// White's stones in the starting layout: D4 and E5.
const INITIAL_WHITE: Bitboard = Bitboard(0x0000_0010_0800_0000);

/// A game position: one stone mask per color.
///
/// The masks are always disjoint. The side to move is not part of the
/// position; callers pass the mover explicitly to every operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) stones: [Bitboard; 2],
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub const fn initial() -> Self {
        Board {
            stones: [INITIAL_BLACK, INITIAL_WHITE],
        }
    }

    /// Same as [`Board::initial`].
    #[must_use]
    pub const fn new() -> Self {
        Self::initial()
    }

    /// A board with no stones at all.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            stones: [Bitboard::EMPTY; 2],
        }
    }

    /// Build a board from raw stone masks.
    ///
    /// # Errors
    /// Returns `BoardError::Overlap` if any cell is claimed by both colors.
    pub fn from_masks(black: Bitboard, white: Bitboard) -> Result<Self, BoardError> {
        let overlap = black & white;
        if !overlap.is_empty() {
            return Err(BoardError::Overlap { mask: overlap });
        }
        Ok(Board {
            stones: [black, white],
        })
    }

    /// Stones owned by `color`
    #[inline]
    #[must_use]
    pub const fn stones(&self, color: Color) -> Bitboard {
        self.stones[color.index()]
    }

    /// Every occupied cell
    #[inline]
    #[must_use]
    pub const fn occupied(&self) -> Bitboard {
        Bitboard(self.stones[0].0 | self.stones[1].0)
    }

    /// Every empty cell
    #[inline]
    #[must_use]
    pub const fn empty_cells(&self) -> Bitboard {
        Bitboard(!self.occupied().0)
    }

    #[inline]
    #[must_use]
    pub const fn stone_count(&self, color: Color) -> u32 {
        self.stones(color).popcount()
    }

    /// Number of stones placed since the starting layout (passes excluded)
    #[inline]
    #[must_use]
    pub const fn turn_count(&self) -> u32 {
        self.occupied().popcount().saturating_sub(4)
    }

    #[inline]
    #[must_use]
    pub const fn empty_count(&self) -> u32 {
        64 - self.occupied().popcount()
    }

    /// Returns true if `color` has a stone on `cell`
    #[inline]
    #[must_use]
    pub const fn exist_stone(&self, color: Color, cell: Cell) -> bool {
        self.stones(color).contains(cell)
    }

    /// Color of the stone on `cell`, if any
    #[must_use]
    pub const fn color_at(&self, cell: Cell) -> Option<Color> {
        if self.stones[0].contains(cell) {
            Some(Color::Black)
        } else if self.stones[1].contains(cell) {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Stone count of `color` minus the opponent's
    #[inline]
    #[must_use]
    pub const fn disc_difference(&self, color: Color) -> i32 {
        self.stone_count(color) as i32 - self.stone_count(color.opponent()) as i32
    }

    /// Winner of a finished game; `None` for a draw or a game still in progress.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        if !self.is_terminal() {
            return None;
        }
        match self.disc_difference(Color::Black) {
            d if d > 0 => Some(Color::Black),
            d if d < 0 => Some(Color::White),
            _ => None,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}
