use std::time::Duration;

use crate::board::{Cell, Color, Phase};

/// Outcome of searching one root candidate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateInfo {
    pub color: Color,
    pub cell: Cell,
    /// Candidates still to be searched after this one
    pub remaining: usize,
    /// Negamax value; a bound rather than exact once below the current best
    pub value: i32,
}

/// Outcome of a whole move selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchSummary {
    pub color: Color,
    pub best: Cell,
    pub value: i32,
    pub phase: Phase,
    pub depth: u32,
    pub from_book: bool,
    pub nodes: u64,
    pub leaves: u64,
    pub elapsed: Duration,
    pub timed_out: bool,
}

pub trait SearchLogger {
    fn candidate(&self, info: &CandidateInfo);
    fn finished(&self, summary: &SearchSummary);
}

/// Drops all search reports.
pub struct SilentLogger;

impl SearchLogger for SilentLogger {
    fn candidate(&self, _info: &CandidateInfo) {}
    fn finished(&self, _summary: &SearchSummary) {}
}

/// Forwards search reports to the `log` facade.
#[cfg(feature = "logging")]
pub struct LogLogger;

#[cfg(feature = "logging")]
impl SearchLogger for LogLogger {
    fn candidate(&self, info: &CandidateInfo) {
        log::debug!(
            "{:2}:{}:{} value {}",
            info.remaining,
            info.color.symbol(),
            info.cell,
            info.value
        );
    }

    fn finished(&self, summary: &SearchSummary) {
        if summary.from_book {
            log::trace!("{} plays book move {}", summary.color, summary.best);
            return;
        }
        log::info!(
            "{} plays {} value {} phase {:?} depth {} nodes {} leaves {} time {}ms{}",
            summary.color,
            summary.best,
            summary.value,
            summary.phase,
            summary.depth,
            summary.nodes,
            summary.leaves,
            summary.elapsed.as_millis(),
            if summary.timed_out { " (budget exhausted)" } else { "" }
        );
    }
}

#[cfg(feature = "logging")]
pub type DefaultLogger = LogLogger;

#[cfg(not(feature = "logging"))]
pub type DefaultLogger = SilentLogger;
