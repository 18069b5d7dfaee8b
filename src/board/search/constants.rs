//! Search constants and default tuning.

use std::time::Duration;

/// Score bound used for the root window and the loss sentinel.
///
/// `i32::MAX` rather than `i32::MIN` so that it can always be negated.
pub const SCORE_INFINITY: i32 = i32::MAX;

// ============================================================================
// STANDARD PROFILE
// ============================================================================

pub const DEFAULT_DEPTH: u32 = 6;
pub const DEFAULT_ORDERING_DEPTH: u32 = 2;
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(5);

// ============================================================================
// CLASSIC PROFILE
// ============================================================================
// Deep fixed search with an early exhaustive endgame and no move ordering.

pub const CLASSIC_DEPTH: u32 = 9;
pub const CLASSIC_ENDGAME_AT: u32 = 18;
pub const CLASSIC_TIME_BUDGET: Duration = Duration::from_secs(290);

// ============================================================================
// QUICK PROFILE
// ============================================================================

pub const QUICK_DEPTH: u32 = 3;
pub const QUICK_ORDERING_DEPTH: u32 = 1;
pub const QUICK_ENDGAME_AT: u32 = 8;
pub const QUICK_TIME_BUDGET: Duration = Duration::from_secs(1);

/// Book moves are only looked up while fewer stones than this have been placed.
pub const BOOK_MAX_TURN: u32 = 2;

/// Highest threshold that still leaves the phase reachable: 60 empties is the start.
pub const MAX_PHASE_THRESHOLD: u32 = 60;
