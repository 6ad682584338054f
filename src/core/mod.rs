//! Core module - the game's non-visual decision logic
//!
//! Piece sequencing, level progression, obstacle scaling, and ability
//! effects. Everything here is synchronous and total; the playing field is
//! reached only through the [`field::PlayField`] trait.

pub mod abilities;
pub mod catalog;
pub mod field;
pub mod obstacles;
pub mod progression;
pub mod sequencer;

// Re-export commonly used types
pub use catalog::PieceCatalog;
pub use field::{CellMatrix, ColumnCells, PlayField};
pub use obstacles::{obstacle_count_for_level, spawn_obstacles_for_level};
pub use progression::{fall_interval_ms, level_from_lines, lines_required_for_level, RpgState};
pub use sequencer::BrickSequencer;
