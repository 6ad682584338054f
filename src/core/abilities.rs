//! Ability orchestration - discrete special effects against the field
//!
//! Stateless dispatch over [`AbilityType`]: each invocation derives its
//! target (if any) from the active piece's cell matrix and requests the
//! matching field mutation. Degenerate inputs fizzle to a no-op returning
//! 0, never an error.

use crate::core::field::{CellMatrix, PlayField};
use crate::types::{AbilityType, CellColor, ABILITY_CLEAR_ROW_COUNT, EMPTY_CELL, SLOW_TIME_DURATION_SECS};
use tracing::debug;

/// Target color for the bomb and sync abilities.
///
/// Scans the matrix in column-major order (outer columns, inner rows),
/// skipping absent columns; the first non-empty cell wins. The ordering is
/// load-bearing: when several colors are present, the first in column-major
/// order is selected, not the most frequent or the smallest.
pub fn select_target_color(matrix: &CellMatrix) -> Option<CellColor> {
    for column in matrix {
        let Some(cells) = column else {
            continue;
        };
        for &cell in cells {
            if cell != EMPTY_CELL {
                return Some(cell);
            }
        }
    }
    None
}

fn target_color_from_field(field: &dyn PlayField) -> Option<CellColor> {
    field
        .active_piece_cell_matrix()
        .and_then(|matrix| select_target_color(&matrix))
}

/// Clear a fixed number of rows from the bottom of the field,
/// unconditionally. No target color is needed.
pub fn execute_clear_rows(field: &mut dyn PlayField) {
    debug!(rows = ABILITY_CLEAR_ROW_COUNT, "ability: clear rows");
    field.clear_bottom_rows(ABILITY_CLEAR_ROW_COUNT);
}

/// Remove every field cell matching the active piece's target color.
/// Fizzles to 0 with no field mutation when no target can be derived.
pub fn execute_color_bomb(field: &mut dyn PlayField) -> u32 {
    let Some(color) = target_color_from_field(field) else {
        return 0;
    };
    let cleared = field.clear_cells_of_color(color);
    debug!(color, cleared, "ability: color bomb");
    cleared
}

/// Repaint every occupied field cell to the active piece's target color.
/// Same derivation and fizzle rule as the color bomb.
pub fn execute_color_sync(field: &mut dyn PlayField) -> u32 {
    let Some(color) = target_color_from_field(field) else {
        return 0;
    };
    let changed = field.convert_all_cells_to_color(color);
    debug!(color, changed, "ability: color sync");
    changed
}

/// Duration of the slow-time effect, in seconds. The time dilation itself
/// is applied by the caller; this only supplies the parameter.
pub fn slow_time_duration_secs() -> u32 {
    SLOW_TIME_DURATION_SECS
}

/// Execute one ability against the field. Returns the number of cells
/// affected where the field reports one (bomb and sync); clear-rows and
/// slow-time report 0 here, and `None` performs no action.
pub fn execute(ability: AbilityType, field: &mut dyn PlayField) -> u32 {
    match ability {
        AbilityType::None => 0,
        AbilityType::ClearRows => {
            execute_clear_rows(field);
            0
        }
        AbilityType::SlowTime => {
            debug!(secs = slow_time_duration_secs(), "ability: slow time");
            0
        }
        AbilityType::ColorBomb => execute_color_bomb(field),
        AbilityType::ColorSync => execute_color_sync(field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_first_color_in_column_major_order() {
        // Column 0 absent, column 1 holds 5 below the top, column 2 holds 7
        // at an earlier row index. Column-major scanning must pick 5.
        let matrix: CellMatrix = vec![
            None,
            Some(vec![0, 0, 5]),
            Some(vec![7, 0, 0]),
        ];
        assert_eq!(select_target_color(&matrix), Some(5));
    }

    #[test]
    fn test_select_skips_absent_and_empty_columns() {
        let matrix: CellMatrix = vec![
            None,
            Some(vec![0, 0]),
            None,
            Some(vec![0, 9]),
        ];
        assert_eq!(select_target_color(&matrix), Some(9));
    }

    #[test]
    fn test_select_none_when_all_empty() {
        let matrix: CellMatrix = vec![Some(vec![0, 0]), Some(vec![0])];
        assert_eq!(select_target_color(&matrix), None);

        let absent: CellMatrix = vec![None, None];
        assert_eq!(select_target_color(&absent), None);

        let empty: CellMatrix = vec![];
        assert_eq!(select_target_color(&empty), None);
    }
}
