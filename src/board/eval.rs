//! Positional evaluation.
//!
//! A position is scored by summing a per-cell weight for every own stone and
//! subtracting it for every opposing stone. Which weight table applies depends
//! on the game phase, read off the number of empty cells.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Bitboard, Board, Color};

/// Coarse game stage
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    Opening,
    Midgame,
    Endgame,
}

/// Empty-cell counts at which the phase changes.
///
/// `empty <= endgame_at` is the endgame, otherwise `empty <= midgame_at` is the
/// midgame, otherwise the opening.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseThresholds {
    pub midgame_at: u32,
    pub endgame_at: u32,
}

impl PhaseThresholds {
    pub const STANDARD: PhaseThresholds = PhaseThresholds {
        midgame_at: 44,
        endgame_at: 12,
    };

    #[must_use]
    pub const fn phase_for(&self, empty: u32) -> Phase {
        if empty <= self.endgame_at {
            Phase::Endgame
        } else if empty <= self.midgame_at {
            Phase::Midgame
        } else {
            Phase::Opening
        }
    }
}

impl Default for PhaseThresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}

// Opening: corners are worth a lot, the cells next to them are poison because
// they hand the corner to the opponent, and the centre is mildly negative so
// the engine does not grab too many stones early.
#[rustfmt::skip]
const OPENING: [i32; 64] = [
    100, -12,  0, -1, -1,  0, -12, 100,
    -12, -15, -3, -3, -3, -3, -15, -12,
      0,  -3,  0, -1, -1,  0,  -3,   0,
     -1,  -3, -1, -1, -1, -1,  -3,  -1,
     -1,  -3, -1, -1, -1, -1,  -3,  -1,
      0,  -3,  0, -1, -1,  0,  -3,   0,
    -12, -15, -3, -3, -3, -3, -15, -12,
    100, -12,  0, -1, -1,  0, -12, 100,
];

#[rustfmt::skip]
const MIDGAME: [i32; 64] = [
     80, -10, 8,  4,  4, 8, -10,  80,
    -10, -12, 0,  0,  0, 0, -12, -10,
      8,   0, 2,  1,  1, 2,   0,   8,
      4,   0, 1,  2,  2, 1,   0,   4,
      4,   0, 1,  2,  2, 1,   0,   4,
      8,   0, 2,  1,  1, 2,   0,   8,
    -10, -12, 0,  0,  0, 0, -12, -10,
     80, -10, 8,  4,  4, 8, -10,  80,
];

// Endgame: every stone counts. Edges and the centre block get extra weight
// because an opposing stone there tends to flip whole lines.
#[rustfmt::skip]
const ENDGAME: [i32; 64] = [
    30, 12, 10,  5,  5, 10, 12, 30,
    12,  8,  4,  2,  2,  4,  8, 12,
    10,  4,  1,  1,  1,  1,  4, 10,
     5,  2,  1, 10, 10,  1,  2,  5,
     5,  2,  1, 10, 10,  1,  2,  5,
    10,  4,  1,  1,  1,  1,  4, 10,
    12,  8,  4,  2,  2,  4,  8, 12,
    30, 12, 10,  5,  5, 10, 12, 30,
];

/// One weight table per phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalTables {
    pub opening: [i32; 64],
    pub midgame: [i32; 64],
    pub endgame: [i32; 64],
}

impl EvalTables {
    pub const STANDARD: EvalTables = EvalTables {
        opening: OPENING,
        midgame: MIDGAME,
        endgame: ENDGAME,
    };

    #[inline]
    #[must_use]
    pub const fn table(&self, phase: Phase) -> &[i32; 64] {
        match phase {
            Phase::Opening => &self.opening,
            Phase::Midgame => &self.midgame,
            Phase::Endgame => &self.endgame,
        }
    }
}

impl Default for EvalTables {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Phase-selected table scorer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluator {
    pub tables: EvalTables,
    pub thresholds: PhaseThresholds,
}

impl Evaluator {
    #[must_use]
    pub const fn new(tables: EvalTables, thresholds: PhaseThresholds) -> Self {
        Evaluator { tables, thresholds }
    }

    #[inline]
    #[must_use]
    pub fn phase(&self, board: &Board) -> Phase {
        self.thresholds.phase_for(board.empty_count())
    }

    /// Score `board` for `color` using the table of the board's own phase.
    #[must_use]
    pub fn score(&self, board: &Board, color: Color) -> i32 {
        self.score_in(board, color, self.phase(board))
    }

    /// Score `board` for `color` with the table of a fixed `phase`.
    #[must_use]
    pub fn score_in(&self, board: &Board, color: Color, phase: Phase) -> i32 {
        board.weighted_score(color, self.tables.table(phase))
    }
}

#[inline]
fn weight_sum(mask: Bitboard, table: &[i32; 64]) -> i32 {
    mask.iter().map(|cell| table[cell.as_index()]).sum()
}

impl Board {
    /// Sum of `table` over own stones minus the sum over opposing stones.
    ///
    /// Swapping `color` negates the result.
    #[inline]
    #[must_use]
    pub fn weighted_score(&self, color: Color, table: &[i32; 64]) -> i32 {
        weight_sum(self.stones(color), table) - weight_sum(self.stones(color.opponent()), table)
    }
}
