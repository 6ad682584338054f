//! Core types shared across the crate
//!
//! This module contains pure data types and tuning constants with no
//! behavior beyond lookup. Everything here is constructed once per session
//! and never mutated.
//!
//! # Piece weights
//!
//! The sampling weight table (I favored over the rest):
//!
//! | Piece | Weight |
//! |-------|--------|
//! | I | 6 |
//! | J, L, O, S, T, Z | 4 each |
//!
//! Total weight is 30, so an unconstrained draw yields I 20% of the time
//! and each other piece 13.33% of the time.
//!
//! # Fall intervals by level
//!
//! Gravity speeds up with level (milliseconds per row), floored at
//! `FALL_INTERVAL_FLOOR_MS` so the interval never reaches zero.

use serde::{Deserialize, Serialize};

/// Cell color on the playing field. Positive values are colors, 0 is empty.
pub type CellColor = u32;

/// Sentinel for an empty cell in the active-piece matrix.
pub const EMPTY_CELL: CellColor = 0;

/// Sampling weight of the I piece (the only piece with a streak rule).
pub const I_PIECE_WEIGHT: u32 = 6;

/// Sampling weight of every piece other than I.
pub const STANDARD_PIECE_WEIGHT: u32 = 4;

/// How many recently generated pieces the sequencer remembers.
pub const HISTORY_LEN: usize = 2;

/// Lookahead ring capacity. `peek_at` indices are clamped below this.
pub const LOOKAHEAD_CAP: usize = 16;

/// Minimum lookahead length after any sequencer operation.
pub const LOOKAHEAD_MIN: usize = 2;

/// Lines cleared per difficulty level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Fall intervals for levels 1..=9 (milliseconds per row).
pub const FALL_INTERVALS_MS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Fall interval floor for levels beyond the table.
pub const FALL_INTERVAL_FLOOR_MS: u32 = 120;

/// Obstacles placed at the lowest levels.
pub const BASE_OBSTACLE_COUNT: u32 = 3;

/// Extra obstacles added per level stride.
pub const OBSTACLE_STEP: u32 = 2;

/// Levels between obstacle count increases.
pub const OBSTACLE_LEVEL_STRIDE: u32 = 5;

/// Hard cap on the obstacle count.
pub const MAX_OBSTACLE_COUNT: u32 = 15;

/// Rows removed from the bottom by the clear-rows ability.
pub const ABILITY_CLEAR_ROW_COUNT: u32 = 3;

/// Duration of the slow-time ability, in seconds. The clock effect itself
/// is applied by the caller.
pub const SLOW_TIME_DURATION_SECS: u32 = 10;

/// Lines to clear in Sprint mode.
pub const SPRINT_GOAL_LINES: u32 = 40;

/// Ultra mode session window, in seconds.
pub const ULTRA_TIME_LIMIT_SECS: u32 = 120;

/// Piece identities, in the fixed enumeration order the weighted draw walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All pieces in enumeration order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Position in the enumeration order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Special ability discriminants. Variants carry no payload; targets are
/// derived from field state at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityType {
    None,
    ClearRows,
    SlowTime,
    ColorBomb,
    ColorSync,
}

impl AbilityType {
    /// Display label for the ability.
    pub fn label(&self) -> &'static str {
        match self {
            AbilityType::None => "None",
            AbilityType::ClearRows => "Row Sweep",
            AbilityType::SlowTime => "Slow Time",
            AbilityType::ColorBomb => "Color Bomb",
            AbilityType::ColorSync => "Color Sync",
        }
    }

    /// Short description shown in ability pickers.
    pub fn description(&self) -> &'static str {
        match self {
            AbilityType::None => "No ability selected",
            AbilityType::ClearRows => "Clears the bottom three rows of the field",
            AbilityType::SlowTime => "Slows the fall clock for a short while",
            AbilityType::ColorBomb => "Removes every cell matching the active piece's color",
            AbilityType::ColorSync => "Repaints every occupied cell to the active piece's color",
        }
    }

    /// Parse ability from string (for config and protocols)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(AbilityType::None),
            "clearrows" | "clear_rows" => Some(AbilityType::ClearRows),
            "slowtime" | "slow_time" => Some(AbilityType::SlowTime),
            "colorbomb" | "color_bomb" => Some(AbilityType::ColorBomb),
            "colorsync" | "color_sync" => Some(AbilityType::ColorSync),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            AbilityType::None => "none",
            AbilityType::ClearRows => "clearRows",
            AbilityType::SlowTime => "slowTime",
            AbilityType::ColorBomb => "colorBomb",
            AbilityType::ColorSync => "colorSync",
        }
    }
}

/// Game modes. Read-only configuration: modes select which progression
/// outputs the caller consults, they never change the core's behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    Classic,
    Sprint,
    Ultra,
    Survival,
}

/// Display metadata for a game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeInfo {
    pub label: &'static str,
    pub description: &'static str,
}

impl GameMode {
    /// All modes in menu order.
    pub const ALL: [GameMode; 4] = [
        GameMode::Classic,
        GameMode::Sprint,
        GameMode::Ultra,
        GameMode::Survival,
    ];

    /// Display metadata for the mode.
    pub fn info(&self) -> ModeInfo {
        match self {
            GameMode::Classic => ModeInfo {
                label: "Classic",
                description: "Endless play, speed rises with level",
            },
            GameMode::Sprint => ModeInfo {
                label: "Sprint",
                description: "Clear 40 lines as fast as possible",
            },
            GameMode::Ultra => ModeInfo {
                label: "Ultra",
                description: "Maximize score in a two minute window",
            },
            GameMode::Survival => ModeInfo {
                label: "Survival",
                description: "Speed escalates with survival time",
            },
        }
    }

    /// Parse mode from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(GameMode::Classic),
            "sprint" => Some(GameMode::Sprint),
            "ultra" => Some(GameMode::Ultra),
            "survival" => Some(GameMode::Survival),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::Sprint => "sprint",
            GameMode::Ultra => "ultra",
            GameMode::Survival => "survival",
        }
    }
}
