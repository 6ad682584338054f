//! Level progression - pure mappings between lines, level, and fall speed
//!
//! The engine is stateless: every function here is total and deterministic.
//! [`RpgState`] is owned and mutated by the game loop; the functions only
//! derive values from it. Arguments below the domain minimum (level 0)
//! clamp to the minimum valid value instead of failing.

use crate::types::{
    FALL_INTERVALS_MS, FALL_INTERVAL_FLOOR_MS, LINES_PER_LEVEL,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Session difficulty state: level starts at 1 with zero lines cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpgState {
    pub level: u32,
    pub lines_cleared: u32,
}

impl RpgState {
    /// Fresh session state.
    pub fn new() -> Self {
        Self {
            level: 1,
            lines_cleared: 0,
        }
    }

    /// Add cleared lines and recompute the level. Returns `true` when the
    /// level increased, which is the caller's trigger for obstacle spawning.
    pub fn record_cleared_lines(&mut self, lines: u32) -> bool {
        self.lines_cleared += lines;
        let new_level = level_from_lines(self.lines_cleared);
        let leveled_up = new_level > self.level;
        if leveled_up {
            debug!(level = new_level, lines = self.lines_cleared, "level up");
        }
        self.level = new_level;
        leveled_up
    }

    /// Current fall interval for this state's level.
    pub fn fall_interval_ms(&self) -> u32 {
        fall_interval_ms(self.level)
    }

    /// Lines still needed to reach the next level.
    pub fn lines_to_next_level(&self) -> u32 {
        lines_required_for_level(self.level + 1).saturating_sub(self.lines_cleared)
    }
}

impl Default for RpgState {
    fn default() -> Self {
        Self::new()
    }
}

/// Level for a cumulative line count. Monotone non-decreasing step
/// function: level 1 at zero lines, +1 every [`LINES_PER_LEVEL`] lines.
pub fn level_from_lines(cumulative_lines: u32) -> u32 {
    cumulative_lines / LINES_PER_LEVEL + 1
}

/// Minimum cumulative line count at which [`level_from_lines`] first
/// returns `target_level`. Exact inverse; levels below 1 clamp to 1.
pub fn lines_required_for_level(target_level: u32) -> u32 {
    (target_level.max(1) - 1) * LINES_PER_LEVEL
}

/// Fall interval for a level, in milliseconds per row. Monotone
/// non-increasing, floored at [`FALL_INTERVAL_FLOOR_MS`]; levels below 1
/// clamp to 1.
pub fn fall_interval_ms(level: u32) -> u32 {
    let index = (level.max(1) - 1) as usize;
    if index < FALL_INTERVALS_MS.len() {
        FALL_INTERVALS_MS[index]
    } else {
        FALL_INTERVAL_FLOOR_MS
    }
}
