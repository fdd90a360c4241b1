//! Core game logic - pure, deterministic, and testable
//!
//! Everything that decides what happens on the board lives here: the grid,
//! piece shapes and rotation, the 7-bag randomizer, hold, line clearing and
//! the score/level/speed curve. There is no I/O and no clock; a host feeds in
//! commands and timestamps and draws [`GameSnapshot`]s.
//!
//! # Module Structure
//!
//! - [`board`]: runtime-sized grid with collision detection and line clearing
//! - [`shapes`]: base matrices for the seven kinds
//! - [`piece`]: square orientation matrices, spawning and rotation
//! - [`controller`]: moving and rotating the active piece, the hold slot
//! - [`rng`]: 7-bag random piece generation
//! - [`scoring`]: line/drop scores, levels and fall intervals
//! - [`game_state`]: one session and its Ready/Running/Paused/GameOver lifecycle
//! - [`config`]: board dimensions and seed
//! - [`snapshot`]: render-ready copy of a session
//!
//! # Rules
//!
//! - **7-Bag**: every aligned run of 7 pieces is a permutation of all kinds
//! - **Rotation**: a square matrix turned in place, then kicked horizontally by
//!   0, -1, +1, -2, +2 columns; the first fit wins
//! - **Hidden rows**: cells above row 0 only collide with the walls
//! - **Hold**: once per spawned piece; a held piece comes back in its spawn
//!   orientation
//! - **Scoring**: 100/300/500/800 × level for 1-4 rows, +1 per soft-drop cell,
//!   +2 per hard-drop cell
//!
//! # Example
//!
//! ```
//! use cyber_tetris_core::GameState;
//! use cyber_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`] with a monotonic millisecond timestamp. Gravity
//! steps once per elapsed fall interval (1000ms at level 1, 70ms faster per
//! level, never below 80ms).

pub mod board;
pub mod config;
pub mod controller;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use cyber_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use controller::{HoldOutcome, PieceController};
pub use game_state::{GameState, SessionStatus};
pub use piece::{Piece, PieceMatrix};
pub use rng::BagRandomizer;
pub use scoring::{
    calculate_drop_score, calculate_level, calculate_line_score, fall_interval_ms, Progression,
};
pub use snapshot::GameSnapshot;
