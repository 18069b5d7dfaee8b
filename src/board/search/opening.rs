//! Opening shortcuts consulted before searching.
//!
//! A book only maps positions to replies; it never takes part in the
//! recursion itself.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::board::{Board, Cell, Color, InvalidMove, Symmetry};

/// Position-to-move lookup.
pub trait OpeningBook {
    /// Book reply for `color` in `board`, if the book knows one.
    fn lookup(&self, board: &Board, color: Color) -> Option<Cell>;
}

/// A book that never answers.
pub struct NoBook;

impl OpeningBook for NoBook {
    fn lookup(&self, _board: &Board, _color: Color) -> Option<Cell> {
        None
    }
}

type BookKey = (u64, u64, Color);

#[inline]
fn key(board: &Board, color: Color) -> BookKey {
    (
        board.stones(Color::Black).0,
        board.stones(Color::White).0,
        color,
    )
}

/// Book built from move sequences played out from the starting position.
#[derive(Clone, Debug, Default)]
pub struct OpeningTable {
    entries: HashMap<BookKey, Cell>,
}

impl OpeningTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of moves starting from the initial position with Black to move.
    ///
    /// Earlier lines win when two lines disagree about the same position.
    ///
    /// # Errors
    /// Returns the first illegal move of the line; moves before it stay in the table.
    pub fn add_line(&mut self, line: &[Cell]) -> Result<(), InvalidMove> {
        let mut board = Board::initial();
        let mut color = Color::FIRST;
        for &cell in line {
            if board.must_pass(color) {
                color = color.opponent();
            }
            let position = key(&board, color);
            board.apply_move(color, cell)?;
            self.entries.entry(position).or_insert(cell);
            color = color.opponent();
        }
        Ok(())
    }

    /// Add `line` under each symmetry that preserves the starting layout.
    ///
    /// # Errors
    /// Same as [`OpeningTable::add_line`].
    pub fn add_line_with_symmetries(&mut self, line: &[Cell]) -> Result<(), InvalidMove> {
        for sym in Symmetry::PRESERVING_INITIAL {
            let mapped: Vec<Cell> = line.iter().map(|&cell| sym.apply(cell)).collect();
            self.add_line(&mapped)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl OpeningBook for OpeningTable {
    fn lookup(&self, board: &Board, color: Color) -> Option<Cell> {
        self.entries
            .get(&key(board, color))
            .copied()
            .filter(|&cell| board.is_legal(color, cell))
    }
}

/// F5 for Black, answered by the perpendicular D6.
const MAIN_LINE: [Cell; 2] = [Cell(4, 5), Cell(5, 3)];

static STANDARD_TABLE: Lazy<OpeningTable> = Lazy::new(|| {
    let mut table = OpeningTable::new();
    let added = table.add_line_with_symmetries(&MAIN_LINE);
    debug_assert!(added.is_ok(), "built-in opening line rejected: {added:?}");
    table
});

/// The built-in two-ply book.
pub struct StandardOpenings;

impl OpeningBook for StandardOpenings {
    fn lookup(&self, board: &Board, color: Color) -> Option<Cell> {
        STANDARD_TABLE.lookup(board, color)
    }
}
