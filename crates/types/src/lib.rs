//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the engine and its hosts.
//! All types are plain data with no external dependencies, so they can be used
//! from the core logic, the terminal front-end, and tests alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! Pieces spawn partly above row 0; their rows may be negative until they fall
//! onto the visible board.
//!
//! # Speed Curve
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FALL_INTERVAL_MS` | 1000 | Gravity at level 1 |
//! | `FALL_INTERVAL_STEP_MS` | 70 | Interval removed per level |
//! | `FALL_INTERVAL_FLOOR_MS` | 80 | Fastest gravity |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines per level |
//!
//! # Examples
//!
//! ```
//! use cyber_tetris_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Minimum number of upcoming kinds kept in the next queue
pub const NEXT_QUEUE_LEN: usize = 5;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval at level 1 (one row per second)
pub const BASE_FALL_INTERVAL_MS: u32 = 1000;

/// Gravity interval removed for every level above 1
pub const FALL_INTERVAL_STEP_MS: u32 = 70;

/// Fastest gravity interval
pub const FALL_INTERVAL_FLOOR_MS: u32 = 80;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cell moved by a soft drop
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per cell descended by a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// Line clear scoring table, indexed by cleared rows (4 or more use the last entry).
///
/// The value is multiplied by the level that was current when the rows cleared.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Column offsets tried, in order, when a rotated piece collides.
///
/// This is a simplified wall kick: only horizontal shifts, first fit wins.
pub const KICK_OFFSETS: [i8; 5] = [0, -1, 1, -2, 2];

/// The seven piece kinds
///
/// Each kind owns exactly one base shape:
/// - **I**: horizontal bar
/// - **J**, **L**: three-wide with a raised end (mirrors of each other)
/// - **O**: 2x2 square
/// - **S**, **Z**: offset pairs (mirrors of each other)
/// - **T**: three-wide with a raised center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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
    /// Number of piece kinds.
    pub const LEN: usize = 7;

    /// All kinds in canonical order; a fresh bag starts from this.
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
    ///
    /// # Examples
    ///
    /// ```
    /// use cyber_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
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

    /// Uppercase letter for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Quarter-turn rotation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDir {
    /// 90° clockwise
    Cw,
    /// 90° counter-clockwise
    Ccw,
}

/// Commands a host can issue to a game session
///
/// These are the only ways the outside world mutates the engine, apart from
/// the timed `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it cannot fall
    SoftDrop,
    /// Drop piece to its landing row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Swap the active piece with the hold slot (once per spawned piece)
    Hold,
    /// Start a ready game, or resume a paused one
    Start,
    /// Toggle pause
    Pause,
    /// Reinitialize everything back to the ready state
    Reset,
}

impl GameAction {
    /// Parse action from its camelCase command name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use cyber_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateCCW"), Some(GameAction::RotateCcw));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "hold" => Some(GameAction::Hold),
            "start" => Some(GameAction::Start),
            "pause" => Some(GameAction::Pause),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// Convert to the camelCase command name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCW",
            GameAction::RotateCcw => "rotateCCW",
            GameAction::Hold => "hold",
            GameAction::Start => "start",
            GameAction::Pause => "pause",
            GameAction::Reset => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_curve_constants() {
        assert_eq!(BASE_FALL_INTERVAL_MS, 1000);
        assert_eq!(FALL_INTERVAL_STEP_MS, 70);
        assert_eq!(FALL_INTERVAL_FLOOR_MS, 80);
        assert_eq!(LINES_PER_LEVEL, 10);
    }

    #[test]
    fn kick_offsets_order() {
        assert_eq!(KICK_OFFSETS, [0, -1, 1, -2, 2]);
    }

    #[test]
    fn action_names_parse_back() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::RotateCw,
            GameAction::RotateCcw,
            GameAction::Hold,
            GameAction::Start,
            GameAction::Pause,
            GameAction::Reset,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
