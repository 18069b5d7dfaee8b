//! Core board types.
//!
//! This module contains the fundamental value types used throughout the engine:
//! - `Color` - the two stone colors
//! - `Cell` - compact (rank, file) board coordinate
//! - `Bitboard` - 64-bit cell set, plus the eight ray `Direction`s

mod bitboard;
mod cell;
mod color;

pub use bitboard::{Bitboard, BitboardIter, Direction};
pub use cell::Cell;
pub use color::Color;
