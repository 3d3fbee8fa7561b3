//! Scoring module - line rewards, levels and gravity
//!
//! The rules are deliberately simple: a fixed reward per number of rows
//! cleared, multiplied by the current level. No drop points, combos, T-spins
//! or back-to-back bonuses.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_FLOOR_MS, LEVEL_DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `lines` rows in a single lock at `level`.
///
/// More than four rows cannot come from one piece; they score nothing.
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(lines)
        .copied()
        .unwrap_or(0)
        .saturating_mul(level)
}

/// Level reached after clearing `total_lines` rows (starts at 1).
pub fn calculate_level(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}

/// Gravity interval for a level, in milliseconds.
///
/// `max(1000 - (level - 1) * 75, 90)`
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(LEVEL_DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_FLOOR_MS)
}
