//! Root move ordering.

use super::constants::SCORE_INFINITY;
use super::negamax::SearchContext;
use crate::board::{Bitboard, Cell, Color};

/// A root candidate paired with its probe value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ScoredCell {
    pub cell: Cell,
    pub score: i32,
}

/// Order `moves` best first by a full-window probe of `probe_depth` plies.
///
/// The sort is stable, so candidates with equal probe values keep their
/// enumeration order.
pub(crate) fn order_root_moves(
    ctx: &mut SearchContext<'_>,
    color: Color,
    moves: Bitboard,
    probe_depth: u32,
) -> Vec<Cell> {
    let mut scored: Vec<ScoredCell> = Vec::with_capacity(moves.popcount() as usize);
    for cell in moves {
        let flips = ctx.board.flip_mask(color, cell);
        ctx.board.toggle(color, cell, flips);
        let score = -ctx.negamax(color.opponent(), -SCORE_INFINITY, SCORE_INFINITY, probe_depth);
        ctx.board.toggle(color, cell, flips);
        scored.push(ScoredCell { cell, score });
    }

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.into_iter().map(|s| s.cell).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::search::clock::SearchClock;
    use crate::board::search::params::TerminalScoring;
    use crate::board::{Board, EvalTables};
    use std::time::Duration;

    #[test]
    fn test_ordering_is_a_permutation_and_restores_board() {
        let board = Board::initial();
        let tables = EvalTables::STANDARD;
        let mut ctx = SearchContext::new(
            board,
            Color::Black,
            &tables.opening,
            TerminalScoring::Evaluator,
            SearchClock::start(Duration::from_secs(60)),
        );
        let moves = board.legal_moves(Color::Black);
        let mut ordered = order_root_moves(&mut ctx, Color::Black, moves, 1);
        assert_eq!(ctx.board, board);
        ordered.sort();
        let mut expected: Vec<Cell> = moves.iter().collect();
        expected.sort();
        assert_eq!(ordered, expected);
    }

    #[test]
    fn test_ties_keep_enumeration_order() {
        // A uniform zero table makes every probe tie.
        let board = Board::initial();
        let zeros = [0; 64];
        let mut ctx = SearchContext::new(
            board,
            Color::Black,
            &zeros,
            TerminalScoring::Evaluator,
            SearchClock::start(Duration::from_secs(60)),
        );
        let moves = board.legal_moves(Color::Black);
        let ordered = order_root_moves(&mut ctx, Color::Black, moves, 2);
        assert_eq!(ordered, moves.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_probe_prefers_higher_static_value() {
        // Depth-0 probe: value is the table score after the move, so the move
        // landing on the heaviest cell wins.
        let board = Board::initial();
        let mut table = [0; 64];
        table[Cell(5, 4).as_index()] = 100;
        let mut ctx = SearchContext::new(
            board,
            Color::Black,
            &table,
            TerminalScoring::Evaluator,
            SearchClock::start(Duration::from_secs(60)),
        );
        let moves = board.legal_moves(Color::Black);
        let ordered = order_root_moves(&mut ctx, Color::Black, moves, 0);
        assert_eq!(ordered[0], Cell(5, 4));
    }
}
