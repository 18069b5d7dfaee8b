//! Reversi board representation and game logic.
//!
//! Each color's stones are a 64-bit mask, so move generation, flipping and
//! evaluation are a handful of shifts and masks per direction.
//!
//! # Example
//! ```
//! use reversi_engine::board::{Board, Cell, Color};
//!
//! let mut board = Board::initial();
//! let moves = board.legal_moves(Color::Black);
//! assert_eq!(moves.popcount(), 4);
//!
//! board.apply_move(Color::Black, Cell(2, 3)).unwrap();
//! assert_eq!(board.stone_count(Color::Black), 4);
//! ```

mod builder;
mod debug;
mod error;
mod eval;
mod make_unmake;
mod movegen;
mod perft;
pub mod prelude;
mod search;
mod state;
mod symmetry;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, CellError, InvalidMove, InvalidMoveReason, ParamsError};
pub use eval::{EvalTables, Evaluator, Phase, PhaseThresholds};
pub use state::Board;
pub use symmetry::Symmetry;
pub use types::{Bitboard, BitboardIter, Cell, Color, Direction};

// Public API - search and configuration
pub use search::{
    find_best_move, FirstLegalSelector, MoveSelector, RandomSelector, SearchEngine, SearchParams,
    SearchResult, SearchStats, TerminalScoring,
};

// Search plumbing for callers that plug in their own pieces
#[cfg(feature = "logging")]
pub use search::LogLogger;
pub use search::{
    CandidateInfo, DefaultLogger, NoBook, OpeningBook, OpeningTable, SearchClock, SearchLogger,
    SearchSummary, SilentLogger, StandardOpenings, SCORE_INFINITY,
};
