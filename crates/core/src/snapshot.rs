use arrayvec::ArrayVec;

use crate::game_state::{SessionStatus, NEXT_QUEUE_CAPACITY};
use crate::piece::Piece;
use crate::types::{Cell, PieceKind, BASE_FALL_INTERVAL_MS, BOARD_HEIGHT, BOARD_WIDTH};

/// Everything a host needs to draw one frame.
///
/// Reuse one snapshot across frames with
/// [`GameState::snapshot_into`](crate::GameState::snapshot_into); the board
/// buffer keeps its allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major locked cells
    pub board: Vec<Cell>,
    pub active: Option<Piece>,
    pub ghost_y: Option<i8>,
    pub hold: Option<PieceKind>,
    pub next_queue: ArrayVec<PieceKind, NEXT_QUEUE_CAPACITY>,
    pub can_hold: bool,
    pub status: SessionStatus,
    pub episode_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub last_clear: usize,
}

impl GameSnapshot {
    /// Locked cell at (x, y); out of bounds reads as empty.
    pub fn cell(&self, x: i8, y: i8) -> Cell {
        if x < 0 || y < 0 || x >= self.width as i8 || y >= self.height as i8 {
            return None;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }

    pub fn playable(&self) -> bool {
        self.status == SessionStatus::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: vec![None; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            hold: None,
            next_queue: ArrayVec::new(),
            can_hold: true,
            status: SessionStatus::Ready,
            episode_id: 0,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: BASE_FALL_INTERVAL_MS,
            last_clear: 0,
        }
    }
}
