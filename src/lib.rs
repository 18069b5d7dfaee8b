pub mod board;

pub use board::{Board, Cell, Color, SearchEngine, SearchParams};
