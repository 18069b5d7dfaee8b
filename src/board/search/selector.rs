//! Pluggable move choosers for a game driver.

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use super::SearchEngine;
use crate::board::{Board, Cell, Color};

/// Something that picks a move for `color`, or `None` when it has to pass.
pub trait MoveSelector {
    fn select(&mut self, board: &Board, color: Color) -> Option<Cell>;
}

impl MoveSelector for SearchEngine {
    fn select(&mut self, board: &Board, color: Color) -> Option<Cell> {
        let budget = self.params().time_budget;
        self.select_move(board, color, budget).map(|result| result.best)
    }
}

/// Uniformly random legal move.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        RandomSelector {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        RandomSelector {
            rng: StdRng::from_entropy(),
        }
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, board: &Board, color: Color) -> Option<Cell> {
        board.legal_moves(color).iter().choose(&mut self.rng)
    }
}

/// Lowest-index legal move.
pub struct FirstLegalSelector;

impl MoveSelector for FirstLegalSelector {
    fn select(&mut self, board: &Board, color: Color) -> Option<Cell> {
        board.legal_moves(color).first()
    }
}
