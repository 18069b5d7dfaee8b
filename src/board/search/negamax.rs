//! Negamax with fail-hard alpha-beta over a single mutable board.
//!
//! Every node applies a child move, recurses and takes the move back before
//! looking at the next child, including on the cutoff path, so the shared board
//! is exactly as the caller left it when a call returns.

use super::clock::SearchClock;
use super::constants::SCORE_INFINITY;
use super::params::TerminalScoring;
use crate::board::{Board, Color};

pub(crate) struct SearchContext<'a> {
    pub board: Board,
    pub root_color: Color,
    pub table: &'a [i32; 64],
    pub terminal_scoring: TerminalScoring,
    pub clock: SearchClock,
    pub nodes: u64,
    pub leaves: u64,
    pub timed_out: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(
        board: Board,
        root_color: Color,
        table: &'a [i32; 64],
        terminal_scoring: TerminalScoring,
        clock: SearchClock,
    ) -> Self {
        SearchContext {
            board,
            root_color,
            table,
            terminal_scoring,
            clock,
            nodes: 0,
            leaves: 0,
            timed_out: false,
        }
    }

    /// Value of the position for `color`, searched `depth` plies deep.
    ///
    /// Passes do not consume depth. Once the clock runs out every node is
    /// scored statically instead of expanded.
    pub fn negamax(&mut self, color: Color, mut alpha: i32, beta: i32, depth: u32) -> i32 {
        debug_assert!(alpha <= beta, "alpha {alpha} > beta {beta}");
        self.nodes += 1;

        let moves = self.board.legal_moves(color);
        let terminal = moves.is_empty() && !self.board.has_legal_move(color.opponent());

        if self.clock.expired() {
            self.timed_out = true;
            return self.leaf(color, terminal);
        }
        if depth == 0 || terminal {
            return self.leaf(color, terminal);
        }

        if moves.is_empty() {
            return -self.negamax(color.opponent(), -beta, -alpha, depth);
        }

        for cell in moves {
            let flips = self.board.flip_mask(color, cell);
            self.board.toggle(color, cell, flips);
            let value = -self.negamax(color.opponent(), -beta, -alpha, depth - 1);
            self.board.toggle(color, cell, flips);

            alpha = alpha.max(value);
            if alpha >= beta {
                return beta;
            }
        }

        alpha
    }

    fn leaf(&mut self, color: Color, terminal: bool) -> i32 {
        self.leaves += 1;
        if terminal
            && self.terminal_scoring == TerminalScoring::LossSentinel
            && self.board.disc_difference(self.root_color) <= 0
        {
            return if color == self.root_color {
                -SCORE_INFINITY
            } else {
                SCORE_INFINITY
            };
        }
        self.board.weighted_score(color, self.table)
    }
}
