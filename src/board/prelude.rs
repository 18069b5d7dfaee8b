//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use reversi_engine::board::prelude::*;
//!
//! let engine = SearchEngine::new(SearchParams::quick()).unwrap();
//! let result = engine.select_move(&Board::initial(), Color::Black, std::time::Duration::from_secs(1));
//! assert!(result.is_some());
//! ```

pub use super::{
    find_best_move, Bitboard, Board, BoardBuilder, Cell, Color, Evaluator, InvalidMove,
    MoveSelector, Phase, SearchEngine, SearchParams, SearchResult,
};
