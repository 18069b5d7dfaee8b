use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::{
    CLASSIC_DEPTH, CLASSIC_ENDGAME_AT, CLASSIC_TIME_BUDGET, DEFAULT_DEPTH, DEFAULT_ORDERING_DEPTH,
    DEFAULT_TIME_BUDGET, MAX_PHASE_THRESHOLD, QUICK_DEPTH, QUICK_ENDGAME_AT, QUICK_ORDERING_DEPTH,
    QUICK_TIME_BUDGET,
};
use crate::board::{EvalTables, Evaluator, ParamsError, PhaseThresholds};

/// How a finished game is scored at a search leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TerminalScoring {
    /// Same table evaluation as any other leaf
    Evaluator,
    /// A finished game the root mover does not win scores as an infinite loss
    /// for the root mover. Draws count as losses.
    LossSentinel,
}

/// Complete search configuration.
///
/// Every tunable of the engine lives here so that one engine type can play at
/// several strengths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Depth used before the exhaustive endgame
    pub normal_depth: u32,
    /// Depth of the root move-ordering probe; `None` keeps enumeration order
    pub ordering_depth: Option<u32>,
    /// Weight tables and phase thresholds. Reaching the endgame phase also
    /// switches the search to solving the game out.
    pub evaluator: Evaluator,
    /// Default wall-clock budget for a move
    pub time_budget: Duration,
    pub terminal_scoring: TerminalScoring,
    pub use_opening_book: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            normal_depth: DEFAULT_DEPTH,
            ordering_depth: Some(DEFAULT_ORDERING_DEPTH),
            evaluator: Evaluator::default(),
            time_budget: DEFAULT_TIME_BUDGET,
            terminal_scoring: TerminalScoring::Evaluator,
            use_opening_book: true,
        }
    }
}

impl SearchParams {
    /// Deep unordered search with an early exhaustive endgame, an opening and
    /// an endgame table only, and the loss sentinel.
    #[must_use]
    pub fn classic() -> Self {
        SearchParams {
            normal_depth: CLASSIC_DEPTH,
            ordering_depth: None,
            evaluator: Evaluator::new(
                EvalTables::STANDARD,
                PhaseThresholds {
                    midgame_at: CLASSIC_ENDGAME_AT,
                    endgame_at: CLASSIC_ENDGAME_AT,
                },
            ),
            time_budget: CLASSIC_TIME_BUDGET,
            terminal_scoring: TerminalScoring::LossSentinel,
            use_opening_book: false,
        }
    }

    /// Shallow profile for fast play and tests
    #[must_use]
    pub fn quick() -> Self {
        SearchParams {
            normal_depth: QUICK_DEPTH,
            ordering_depth: Some(QUICK_ORDERING_DEPTH),
            evaluator: Evaluator::new(
                EvalTables::STANDARD,
                PhaseThresholds {
                    midgame_at: PhaseThresholds::STANDARD.midgame_at,
                    endgame_at: QUICK_ENDGAME_AT,
                },
            ),
            time_budget: QUICK_TIME_BUDGET,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.normal_depth = depth;
        self
    }

    #[must_use]
    pub fn with_ordering_depth(mut self, depth: Option<u32>) -> Self {
        self.ordering_depth = depth;
        self
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: PhaseThresholds) -> Self {
        self.evaluator.thresholds = thresholds;
        self
    }

    #[must_use]
    pub fn with_tables(mut self, tables: EvalTables) -> Self {
        self.evaluator.tables = tables;
        self
    }

    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    #[must_use]
    pub fn with_terminal_scoring(mut self, scoring: TerminalScoring) -> Self {
        self.terminal_scoring = scoring;
        self
    }

    #[must_use]
    pub fn with_opening_book(mut self, enabled: bool) -> Self {
        self.use_opening_book = enabled;
        self
    }

    /// Empty-cell count at or below which the search solves to the end
    #[inline]
    #[must_use]
    pub fn exhaustive_at(&self) -> u32 {
        self.evaluator.thresholds.endgame_at
    }

    /// Check the configuration for values the search cannot work with.
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.normal_depth == 0 {
            return Err(ParamsError::ZeroDepth);
        }
        if let Some(probe) = self.ordering_depth {
            if probe >= self.normal_depth {
                return Err(ParamsError::ProbeTooDeep {
                    probe,
                    depth: self.normal_depth,
                });
            }
        }
        let PhaseThresholds {
            midgame_at,
            endgame_at,
        } = self.evaluator.thresholds;
        if endgame_at > midgame_at || midgame_at > MAX_PHASE_THRESHOLD {
            return Err(ParamsError::PhaseThresholds {
                midgame_at,
                endgame_at,
            });
        }
        if self.time_budget.is_zero() {
            return Err(ParamsError::ZeroTimeBudget);
        }
        Ok(())
    }
}
