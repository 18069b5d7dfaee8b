//! Wall-clock budget for a single search.

use std::time::{Duration, Instant};

/// Tracks the time spent since a search started against its budget.
#[derive(Clone, Copy, Debug)]
pub struct SearchClock {
    start_time: Instant,
    budget: Duration,
}

impl SearchClock {
    /// Start a clock now.
    #[must_use]
    pub fn start(budget: Duration) -> Self {
        SearchClock {
            start_time: Instant::now(),
            budget,
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    #[must_use]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// True once the elapsed time exceeds the budget
    #[inline]
    #[must_use]
    pub fn expired(&self) -> bool {
        self.start_time.elapsed() > self.budget
    }
}
