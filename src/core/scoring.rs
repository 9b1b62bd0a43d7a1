//! Scoring module - line-clear points, level progression, gravity pacing
//!
//! Rules:
//! - A clear of `n` rows is worth `n * 100 * level`, using the level in effect
//!   before the clear is tallied.
//! - The level is derived from total lines, never stored independently:
//!   `level = lines / 10 + 1`, so play starts at level 1.
//! - Gravity period is `1000ms / level`; the driver owns the timer.

use crate::types::{BASE_DROP_MS, LINES_PER_LEVEL, POINTS_PER_LINE};

/// Points for clearing `lines` rows at the given level.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    (lines as u32)
        .saturating_mul(POINTS_PER_LINE)
        .saturating_mul(level)
}

/// Level for a total line count. Starts at 1, advances every 10 lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity step period for a level (in milliseconds).
///
/// Strictly decreasing in level; clamped at 1ms so the driver timer stays
/// well-formed even at absurd levels.
pub fn gravity_interval_ms(level: u32) -> u32 {
    (BASE_DROP_MS / level.max(1)).max(1)
}
