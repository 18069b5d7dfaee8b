//! Error types for board and engine operations.

use std::fmt;

use super::{Bitboard, Cell};

/// Why a placement was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// The target cell already holds a stone
    Occupied,
    /// Placing on the cell would not flip any opposing stone
    NoFlips,
}

/// Error returned by `Board::apply_move` for a cell that is not a legal move.
///
/// The board is left unchanged whenever this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMove {
    pub cell: Cell,
    pub reason: InvalidMoveReason,
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            InvalidMoveReason::Occupied => {
                write!(f, "Invalid move {}: cell is occupied", self.cell)
            }
            InvalidMoveReason::NoFlips => {
                write!(f, "Invalid move {}: no stones would be flipped", self.cell)
            }
        }
    }
}

impl std::error::Error for InvalidMove {}

/// Error type for cell parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid board notation
    InvalidNotation { notation: String },
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            CellError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            CellError::InvalidNotation { notation } => {
                write!(f, "Invalid cell notation '{notation}', expected e.g. 'D3'")
            }
        }
    }
}

impl std::error::Error for CellError {}

/// Error type for constructing a board from raw stone sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The same cells were given to both colors
    Overlap { mask: Bitboard },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Overlap { mask } => {
                write!(
                    f,
                    "Both colors occupy {} cell(s) (mask {:#018x})",
                    mask.popcount(),
                    mask.0
                )
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for rejected search configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// The normal search depth must be at least one ply
    ZeroDepth,
    /// The move-ordering probe must be shallower than the main search
    ProbeTooDeep { probe: u32, depth: u32 },
    /// Phase thresholds must satisfy `endgame_at <= midgame_at <= 60`
    PhaseThresholds { midgame_at: u32, endgame_at: u32 },
    /// The time budget must be non-zero
    ZeroTimeBudget,
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::ZeroDepth => write!(f, "Search depth must be at least 1"),
            ParamsError::ProbeTooDeep { probe, depth } => {
                write!(
                    f,
                    "Ordering probe depth {probe} must be below search depth {depth}"
                )
            }
            ParamsError::PhaseThresholds {
                midgame_at,
                endgame_at,
            } => {
                write!(
                    f,
                    "Invalid phase thresholds: endgame at {endgame_at} empties, midgame at {midgame_at} empties"
                )
            }
            ParamsError::ZeroTimeBudget => write!(f, "Time budget must be non-zero"),
        }
    }
}

impl std::error::Error for ParamsError {}
