//! Move selection by negamax with alpha-beta pruning.
//!
//! Features:
//! - Fixed-depth search that switches to solving the game out near the end
//! - Wall-clock budget polled at every node
//! - Root move ordering by a shallow probe search
//! - Phase-dependent weight tables, chosen once per search at the root
//! - Optional opening book for the first plies

mod clock;
mod constants;
mod move_order;
mod negamax;
mod opening;
mod params;
mod report;
mod selector;

use std::time::Duration;

use super::{Board, Cell, Color, ParamsError, Phase};
use constants::BOOK_MAX_TURN;
use negamax::SearchContext;

pub use clock::SearchClock;
pub use constants::SCORE_INFINITY;
#[cfg(feature = "logging")]
pub use report::LogLogger;
pub use opening::{NoBook, OpeningBook, OpeningTable, StandardOpenings};
pub use params::{SearchParams, TerminalScoring};
pub use report::{CandidateInfo, DefaultLogger, SearchLogger, SearchSummary, SilentLogger};
pub use selector::{FirstLegalSelector, MoveSelector, RandomSelector};

/// Counters gathered during one move selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Negamax calls, probe searches included
    pub nodes: u64,
    /// Nodes scored statically
    pub leaves: u64,
    pub elapsed: Duration,
    /// The budget ran out before the search completed
    pub timed_out: bool,
}

/// The chosen move and how it was found
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best: Cell,
    /// Negamax value of `best` for the mover; zero for book moves
    pub value: i32,
    pub phase: Phase,
    pub depth: u32,
    pub from_book: bool,
    pub stats: SearchStats,
}

/// Configured move chooser.
///
/// The engine never mutates the caller's board; each search works on a
/// private copy.
pub struct SearchEngine {
    params: SearchParams,
    book: Box<dyn OpeningBook>,
    logger: Box<dyn SearchLogger>,
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine {
            params: SearchParams::default(),
            book: Box::new(StandardOpenings),
            logger: Box::new(DefaultLogger {}),
        }
    }
}

impl SearchEngine {
    /// # Errors
    /// Returns the first problem [`SearchParams::validate`] finds.
    pub fn new(params: SearchParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(SearchEngine {
            params,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_book(mut self, book: impl OpeningBook + 'static) -> Self {
        self.book = Box::new(book);
        self
    }

    #[must_use]
    pub fn without_book(self) -> Self {
        self.with_book(NoBook)
    }

    #[must_use]
    pub fn with_logger(mut self, logger: impl SearchLogger + 'static) -> Self {
        self.logger = Box::new(logger);
        self
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Choose a move for `color` within `time_budget`.
    ///
    /// Returns `None` when `color` has no legal move and must pass. When the
    /// budget runs out the search still returns a legal move, scored from
    /// whatever was searched before time ran out. The first ordered candidate
    /// is always searched; later ones are skipped once the clock has expired.
    pub fn select_move(
        &self,
        board: &Board,
        color: Color,
        time_budget: Duration,
    ) -> Option<SearchResult> {
        let clock = SearchClock::start(time_budget);
        let moves = board.legal_moves(color);
        let first = moves.first()?;

        let evaluator = &self.params.evaluator;
        let phase = evaluator.phase(board);

        if let Some(cell) = self.book_move(board, color) {
            let result = SearchResult {
                best: cell,
                value: 0,
                phase,
                depth: 0,
                from_book: true,
                stats: SearchStats {
                    elapsed: clock.elapsed(),
                    ..SearchStats::default()
                },
            };
            self.report(color, &result);
            return Some(result);
        }

        let empty = board.empty_count();
        let depth = if empty <= self.params.exhaustive_at() {
            empty
        } else {
            self.params.normal_depth
        };

        let mut ctx = SearchContext::new(
            *board,
            color,
            evaluator.tables.table(phase),
            self.params.terminal_scoring,
            clock,
        );

        let ordered = match self.params.ordering_depth {
            Some(probe) if moves.popcount() > 1 => {
                move_order::order_root_moves(&mut ctx, color, moves, probe)
            }
            _ => moves.iter().collect(),
        };

        let beta = SCORE_INFINITY;
        let mut alpha = -SCORE_INFINITY;
        let mut best = ordered.first().copied().unwrap_or(first);
        let mut best_value = -SCORE_INFINITY;

        for (i, &cell) in ordered.iter().enumerate() {
            if i > 0 && ctx.clock.expired() {
                ctx.timed_out = true;
                break;
            }
            let flips = ctx.board.flip_mask(color, cell);
            ctx.board.toggle(color, cell, flips);
            let value = -ctx.negamax(color.opponent(), -beta, -alpha, depth - 1);
            ctx.board.toggle(color, cell, flips);

            self.logger.candidate(&CandidateInfo {
                color,
                cell,
                remaining: ordered.len() - i - 1,
                value,
            });

            if value > best_value {
                best_value = value;
                best = cell;
            }
            alpha = alpha.max(value);
        }
        debug_assert_eq!(ctx.board, *board);

        let result = SearchResult {
            best,
            value: best_value,
            phase,
            depth,
            from_book: false,
            stats: SearchStats {
                nodes: ctx.nodes,
                leaves: ctx.leaves,
                elapsed: ctx.clock.elapsed(),
                timed_out: ctx.timed_out,
            },
        };
        self.report(color, &result);
        Some(result)
    }

    fn book_move(&self, board: &Board, color: Color) -> Option<Cell> {
        if !self.params.use_opening_book || board.turn_count() >= BOOK_MAX_TURN {
            return None;
        }
        self.book
            .lookup(board, color)
            .filter(|&cell| board.is_legal(color, cell))
    }

    fn report(&self, color: Color, result: &SearchResult) {
        self.logger.finished(&SearchSummary {
            color,
            best: result.best,
            value: result.value,
            phase: result.phase,
            depth: result.depth,
            from_book: result.from_book,
            nodes: result.stats.nodes,
            leaves: result.stats.leaves,
            elapsed: result.stats.elapsed,
            timed_out: result.stats.timed_out,
        });
    }
}

/// One-shot search with `params` and its own time budget.
///
/// # Errors
/// Returns the validation error if `params` are unusable.
pub fn find_best_move(
    board: &Board,
    color: Color,
    params: &SearchParams,
) -> Result<Option<Cell>, ParamsError> {
    let engine = SearchEngine::new(params.clone())?;
    Ok(engine
        .select_move(board, color, params.time_budget)
        .map(|result| result.best))
}
