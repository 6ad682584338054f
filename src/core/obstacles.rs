//! Obstacle scaling - level-driven garbage placement
//!
//! The obstacle count is a capped step function of the level:
//! 3 at levels 1-5, 5 at 6-10, 7 at 11-15, and so on, capped at 15.
//! Placement itself is the field's job; under-fulfillment is reported
//! through, not treated as an error.

use crate::core::field::PlayField;
use crate::types::{
    BASE_OBSTACLE_COUNT, MAX_OBSTACLE_COUNT, OBSTACLE_LEVEL_STRIDE, OBSTACLE_STEP,
};
use tracing::debug;

/// Obstacle count for a level. Levels below 1 clamp to 1.
pub fn obstacle_count_for_level(level: u32) -> u32 {
    let level = level.max(1);
    let raw = BASE_OBSTACLE_COUNT + OBSTACLE_STEP * ((level - 1) / OBSTACLE_LEVEL_STRIDE);
    raw.min(MAX_OBSTACLE_COUNT)
}

/// Compute the target count for `level` and ask the field to place that
/// many obstacles. Returns the count the field actually placed.
pub fn spawn_obstacles_for_level(field: &mut dyn PlayField, level: u32) -> u32 {
    let requested = obstacle_count_for_level(level);
    let placed = field.spawn_obstacles(requested, level);
    debug!(level, requested, placed, "spawned obstacles");
    placed
}
