//! Decision core for a falling-block RPG puzzle game - pure, deterministic,
//! and testable
//!
//! This crate decides *what piece comes next* and *how difficulty escalates
//! and special abilities resolve* over a session. It has **zero
//! dependencies** on UI, field mechanics, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: The playing field is a trait, trivially mocked
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`core::catalog`]: Piece identities and sampling weights
//! - [`core::sequencer`]: Weighted, streak-limited piece generation with a
//!   lookahead ring
//! - [`core::progression`]: Lines-to-level mapping, its exact inverse, and
//!   fall-speed scaling
//! - [`core::obstacles`]: Capped step function from level to obstacle count
//! - [`core::abilities`]: Area and color-targeted ability effects
//! - [`core::field`]: The playing-field collaborator contract
//! - [`types`]: Shared data types, game modes, and tuning constants
//!
//! # Game Rules
//!
//! - **Weighted draw**: The I piece is weighted 6, every other piece 4, so
//!   I appears about 20% of the time
//! - **Streak limit**: I can never be generated a third consecutive time;
//!   when excluded, the other pieces keep their relative proportions
//! - **RPG levels**: Level 1 at zero lines, +1 every 10 cleared lines, with
//!   an exact inverse mapping
//! - **Obstacles**: 3 at levels 1-5, then +2 per five levels, capped at 15
//! - **Abilities**: Row sweep, slow time, color bomb, and color sync; bomb
//!   and sync target the first color of the active piece in column-major
//!   scan order
//!
//! # Example
//!
//! ```
//! use brickrpg_core::core::{
//!     fall_interval_ms, obstacle_count_for_level, BrickSequencer, RpgState,
//! };
//!
//! // Deterministic piece stream for the session.
//! let mut sequencer = BrickSequencer::new(12345);
//! let upcoming = sequencer.peek_next();
//! assert_eq!(sequencer.next_piece(), upcoming);
//!
//! // Progression is driven by cumulative cleared lines.
//! let mut rpg = RpgState::new();
//! let leveled_up = rpg.record_cleared_lines(10);
//! assert!(leveled_up);
//! assert_eq!(rpg.level, 2);
//! assert_eq!(obstacle_count_for_level(rpg.level), 3);
//! assert_eq!(fall_interval_ms(rpg.level), 800);
//! ```

pub mod core;
pub mod types;

// Re-export the main entry points at the crate root for convenience
pub use crate::core::{BrickSequencer, PieceCatalog, PlayField, RpgState};
pub use crate::types::{AbilityType, GameMode, PieceKind};
