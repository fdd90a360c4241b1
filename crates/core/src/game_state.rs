//! Game state module - one complete game session
//!
//! This module ties together the board, the piece controller, the randomizer
//! and scoring. It owns the spawn → fall → lock → clear → respawn cycle and
//! the session lifecycle:
//!
//! ```text
//! Ready --start--> Running --pause--> Paused --resume/start--> Running
//!                     |
//!                     +--(spawn or hold-swap collides)--> GameOver --reset--> Ready
//! ```
//!
//! There is no clock inside the session. The host calls [`GameState::tick`]
//! with a monotonic timestamp and the session compares the elapsed time
//! against the current fall interval.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::config::GameConfig;
use crate::controller::{HoldOutcome, PieceController};
use crate::piece::Piece;
use crate::rng::BagRandomizer;
use crate::scoring::Progression;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, PieceKind, RotateDir, NEXT_QUEUE_LEN};

/// Room in the next queue: the minimum preview plus slack for the initial fill.
pub const NEXT_QUEUE_CAPACITY: usize = NEXT_QUEUE_LEN + 3;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// Initialized, first piece visible, gravity not running
    Ready,
    Running,
    /// All state retained, ticks and commands ignored
    Paused,
    /// A fresh piece collided where it spawned
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    controller: PieceController,
    randomizer: BagRandomizer,
    next_queue: ArrayVec<PieceKind, NEXT_QUEUE_CAPACITY>,
    progression: Progression,
    status: SessionStatus,
    /// Timestamp of the last gravity step; `None` until the next tick anchors it.
    last_drop_ms: Option<u64>,
    /// Rows cleared by the most recent lock.
    last_clear: usize,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
}

impl GameState {
    /// Create a standard 10x20 game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::seeded(seed))
    }

    /// Create a game from a config.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`GameConfig::validate`]; hosts are expected to
    /// validate user input first.
    pub fn with_config(config: GameConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid game config: {}", err);
        }

        let mut state = Self {
            config,
            board: Board::new(config.cols, config.rows),
            controller: PieceController::new(),
            randomizer: BagRandomizer::new(config.seed),
            next_queue: ArrayVec::new(),
            progression: Progression::new(),
            status: SessionStatus::Ready,
            last_drop_ms: None,
            last_clear: 0,
            episode_id: 0,
        };
        state.init();
        state
    }

    /// Put every piece of state back to a fresh game, keeping the randomizer
    /// running.
    fn init(&mut self) {
        self.board.clear();
        self.controller = PieceController::new();
        self.progression = Progression::new();
        self.status = SessionStatus::Ready;
        self.last_drop_ms = None;
        self.last_clear = 0;

        self.next_queue.clear();
        while self.next_queue.len() <= NEXT_QUEUE_LEN {
            self.next_queue.push(self.randomizer.next_kind());
        }

        let first = self.spawn_next();
        self.controller.install(first);
    }

    // ---- queries ----

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn game_over(&self) -> bool {
        self.status == SessionStatus::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.controller.active()
    }

    pub fn next_queue(&self) -> &[PieceKind] {
        &self.next_queue
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.controller.hold_piece()
    }

    pub fn can_hold(&self) -> bool {
        self.controller.can_hold()
    }

    pub fn score(&self) -> u32 {
        self.progression.score()
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn lines(&self) -> u32 {
        self.progression.lines()
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.progression.fall_interval_ms()
    }

    pub fn last_clear(&self) -> usize {
        self.last_clear
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Calculate the ghost piece Y position (where piece would land)
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.controller.active()?;
        Some(active.y + self.board.drop_distance(active) as i8)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.controller.active().copied();
        out.ghost_y = self.ghost_y();
        out.hold = self.controller.hold_piece();
        out.next_queue.clone_from(&self.next_queue);
        out.can_hold = self.controller.can_hold();
        out.status = self.status;
        out.episode_id = self.episode_id;
        out.score = self.progression.score();
        out.level = self.progression.level();
        out.lines = self.progression.lines();
        out.fall_interval_ms = self.progression.fall_interval_ms();
        out.last_clear = self.last_clear;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    // ---- lifecycle ----

    /// Start a ready game or resume a paused one.
    pub fn start(&mut self) -> bool {
        match self.status {
            SessionStatus::Ready | SessionStatus::Paused => {
                self.status = SessionStatus::Running;
                self.last_drop_ms = None;
                true
            }
            SessionStatus::Running | SessionStatus::GameOver => false,
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.status != SessionStatus::Running {
            return false;
        }
        self.status = SessionStatus::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.status != SessionStatus::Paused {
            return false;
        }
        self.start()
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            SessionStatus::Running => self.pause(),
            SessionStatus::Paused => self.resume(),
            SessionStatus::Ready | SessionStatus::GameOver => false,
        }
    }

    /// Throw the current game away and return to `Ready`.
    pub fn reset(&mut self) {
        self.init();
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    // ---- piece commands ----

    pub fn move_left(&mut self) -> bool {
        self.is_running() && self.controller.try_shift(&self.board, -1)
    }

    pub fn move_right(&mut self) -> bool {
        self.is_running() && self.controller.try_shift(&self.board, 1)
    }

    pub fn rotate_cw(&mut self) -> bool {
        self.is_running() && self.controller.try_rotate(&self.board, RotateDir::Cw)
    }

    pub fn rotate_ccw(&mut self) -> bool {
        self.is_running() && self.controller.try_rotate(&self.board, RotateDir::Ccw)
    }

    /// Move down one row for a point, or lock if the piece is resting.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_running() || self.controller.active().is_none() {
            return false;
        }

        if self.controller.try_step_down(&self.board) {
            self.progression.on_soft_drop_cell();
        } else {
            self.lock_piece();
        }
        true
    }

    /// Drop to the landing row (2 points per row) and lock.
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_running() || self.controller.active().is_none() {
            return false;
        }

        let distance = self.controller.drop_to_floor(&self.board);
        self.progression.on_hard_drop_cells(distance as u32);
        self.lock_piece();
        true
    }

    /// Swap the active piece with the hold slot, once per spawned piece.
    pub fn hold(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        let cols = self.board.width();
        let outcome = self.controller.hold(cols, || {
            draw_next(&mut self.next_queue, &mut self.randomizer)
        });
        if outcome == HoldOutcome::Rejected {
            return false;
        }

        if self.controller.active_collides(&self.board) {
            self.status = SessionStatus::GameOver;
        }
        true
    }

    /// Merge the active piece, clear lines, score, and bring in the next piece.
    fn lock_piece(&mut self) {
        let Some(piece) = self.controller.take_active() else {
            return;
        };

        self.board.merge(&piece);
        let cleared = self.board.clear_lines();
        self.progression.on_lines_cleared(cleared);
        self.last_clear = cleared;

        let next = self.spawn_next();
        self.controller.install(next);
        if self.controller.active_collides(&self.board) {
            self.status = SessionStatus::GameOver;
        }
    }

    /// Pop the next kind off the queue and build its piece.
    fn spawn_next(&mut self) -> Piece {
        let kind = draw_next(&mut self.next_queue, &mut self.randomizer);
        Piece::spawn(kind, self.board.width())
    }

    // ---- timing ----

    /// Advance gravity to `now_ms`.
    ///
    /// A step is due once strictly more than one fall interval has passed since
    /// the last step. Overdue steps are caught up one interval at a time, so an
    /// irregular host cadence never loses drops for the piece in play. A step
    /// that cannot move the piece locks it and re-anchors the timer at `now_ms`;
    /// any intervals still owed are discarded, so the next piece starts its fall
    /// fresh at its spawn row. Returns whether anything moved or locked.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.is_running() {
            return false;
        }

        let mut last = *self.last_drop_ms.get_or_insert(now_ms);
        let mut advanced = false;

        while self.is_running() {
            let interval = self.progression.fall_interval_ms() as u64;
            if now_ms.saturating_sub(last) <= interval {
                break;
            }
            advanced = true;

            if self.controller.try_step_down(&self.board) {
                last += interval;
            } else {
                self.lock_piece();
                last = now_ms;
                break;
            }
        }

        self.last_drop_ms = Some(last);
        advanced
    }

    /// Apply a host command
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::RotateCcw => self.rotate_ccw(),
            GameAction::Hold => self.hold(),
            GameAction::Start => self.start(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    // ---- test hooks ----

    #[doc(hidden)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece with a freshly spawned `kind`, re-arming hold.
    #[doc(hidden)]
    pub fn force_active(&mut self, kind: PieceKind) {
        let piece = Piece::spawn(kind, self.board.width());
        self.controller.install(piece);
    }

    /// Replace the active piece with an arbitrary placement.
    #[doc(hidden)]
    pub fn force_active_piece(&mut self, piece: Piece) {
        self.controller.force_active(piece);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

/// Pop the head of the queue and top it back up to the preview length.
fn draw_next(
    queue: &mut ArrayVec<PieceKind, NEXT_QUEUE_CAPACITY>,
    randomizer: &mut BagRandomizer,
) -> PieceKind {
    let kind = queue
        .pop_at(0)
        .unwrap_or_else(|| randomizer.next_kind());
    while queue.len() < NEXT_QUEUE_LEN {
        queue.push(randomizer.next_kind());
    }
    kind
}
