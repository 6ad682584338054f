//! Playing-field collaborator contract
//!
//! The core never owns field cells; it requests mutations through this
//! trait and passes the field's reported outcomes through transparently.
//! Every capability the orchestrator needs is part of the abstract
//! contract, so callers dispatch polymorphically with no downcasting.

use crate::types::CellColor;

/// Cells of a single column of the active piece's matrix, top to bottom.
/// A value of [`EMPTY_CELL`](crate::types::EMPTY_CELL) means empty.
pub type ColumnCells = Vec<CellColor>;

/// Column-major cell matrix of the active piece. Absent columns are `None`.
pub type CellMatrix = Vec<Option<ColumnCells>>;

/// Mutation surface the core requires from the playing field.
pub trait PlayField {
    /// Place up to `count` obstacle blocks for the given level. Returns the
    /// number actually placed, which may be less if space ran out.
    fn spawn_obstacles(&mut self, count: u32, level: u32) -> u32;

    /// Clear `count` rows from the bottom of the field.
    fn clear_bottom_rows(&mut self, count: u32);

    /// Remove every cell matching `color`. Returns the number removed.
    fn clear_cells_of_color(&mut self, color: CellColor) -> u32;

    /// Repaint every occupied cell to `color`, regardless of its current
    /// color. Returns the number changed.
    fn convert_all_cells_to_color(&mut self, color: CellColor) -> u32;

    /// Snapshot of the active piece's cell matrix, column-major. `None`
    /// when no piece is active.
    fn active_piece_cell_matrix(&self) -> Option<CellMatrix>;
}
