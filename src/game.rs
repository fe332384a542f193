#![warn(clippy::all, clippy::pedantic)]

use std::time::Duration;

// Lane dimensions
pub const LANE_HEIGHT: i32 = 10;
pub const VIEW_COLUMNS: u16 = 12; // Columns visible before the view starts scrolling

// Piece sizes
pub const FIRST_PIECE_CELLS: usize = 4;
pub const MIN_PIECE_CELLS: usize = 4;
pub const MAX_PIECE_CELLS: usize = 8;

// Game timing
pub const INITIAL_STEP_PERIOD: Duration = Duration::from_millis(400);
pub const PERIOD_SCALE_SECONDS: f64 = 0.5; // Period after a drop is PERIOD_SCALE / sqrt(score)

/// Step period used after a successful drop once the score has reached `score`.
///
/// Returns `None` for a zero score, where the formula is undefined; callers keep
/// their current period in that case.
#[must_use]
pub fn step_period_for_score(score: u32) -> Option<Duration> {
    if score == 0 {
        return None;
    }
    Some(Duration::from_secs_f64(
        PERIOD_SCALE_SECONDS / f64::from(score).sqrt(),
    ))
}
