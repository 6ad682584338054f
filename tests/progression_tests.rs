//! Progression tests - level mapping laws and speed scaling

use brickrpg_core::core::{
    fall_interval_ms, level_from_lines, lines_required_for_level, obstacle_count_for_level,
    RpgState,
};
use proptest::prelude::*;

// ============== Law Tests ==============

proptest! {
    #[test]
    fn prop_level_round_trip(level in 1u32..=10_000) {
        prop_assert_eq!(level_from_lines(lines_required_for_level(level)), level);
    }

    #[test]
    fn prop_level_from_lines_monotone(lines in 0u32..=1_000_000) {
        prop_assert!(level_from_lines(lines + 1) >= level_from_lines(lines));
    }

    #[test]
    fn prop_fall_interval_monotone_and_floored(level in 1u32..=10_000) {
        let interval = fall_interval_ms(level);
        prop_assert!(interval >= fall_interval_ms(level + 1));
        prop_assert!(interval >= 120);
    }

    #[test]
    fn prop_lines_required_is_first_threshold(level in 2u32..=10_000) {
        let lines = lines_required_for_level(level);
        // The threshold is exact: one line fewer stays on the level below.
        prop_assert_eq!(level_from_lines(lines - 1), level - 1);
    }

    #[test]
    fn prop_obstacle_count_bounded_and_monotone(level in 1u32..=10_000) {
        let count = obstacle_count_for_level(level);
        prop_assert!((3..=15).contains(&count));
        prop_assert!(obstacle_count_for_level(level + 1) >= count);
    }
}

// ============== State Tests ==============

#[test]
fn test_session_starts_at_level_one() {
    let state = RpgState::new();
    assert_eq!(state.level, 1);
    assert_eq!(state.lines_cleared, 0);
    assert_eq!(state.fall_interval_ms(), 1000);
}

#[test]
fn test_level_up_sequence_over_a_session() {
    let mut state = RpgState::new();
    let mut level_ups = 0;

    // 12 clears of 4 lines: 48 lines total, level 5.
    for _ in 0..12 {
        if state.record_cleared_lines(4) {
            level_ups += 1;
        }
    }

    assert_eq!(state.lines_cleared, 48);
    assert_eq!(state.level, 5);
    assert_eq!(level_ups, 4);
    assert_eq!(state.fall_interval_ms(), 400);
}

#[test]
fn test_rpg_state_serde_round_trip() {
    let mut state = RpgState::new();
    state.record_cleared_lines(23);

    let json = serde_json::to_string(&state).unwrap();
    let restored: RpgState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
    assert_eq!(restored.level, 3);
}
