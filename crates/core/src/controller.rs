//! Controller module - moves the active piece and manages the hold slot
//!
//! Every operation is all-or-nothing: an illegal move or rotation leaves the
//! piece untouched and reports `false`. The controller never locks on its own;
//! it tells the session when a piece can no longer fall.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{PieceKind, RotateDir, KICK_OFFSETS};

/// Result of a hold request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldOutcome {
    /// Nothing to hold, or hold already used for this piece
    Rejected,
    /// Hold slot was empty; a fresh piece became active
    Stored,
    /// Active piece and held piece traded places
    Swapped,
}

/// Owner of the active piece, the hold slot and the can-hold flag
#[derive(Debug, Clone)]
pub struct PieceController {
    active: Option<Piece>,
    hold: Option<PieceKind>,
    can_hold: bool,
}

impl PieceController {
    pub fn new() -> Self {
        Self {
            active: None,
            hold: None,
            can_hold: true,
        }
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    /// Make `piece` the active piece after a lock, re-arming hold.
    pub fn install(&mut self, piece: Piece) {
        self.active = Some(piece);
        self.can_hold = true;
    }

    /// Remove the active piece for locking.
    pub fn take_active(&mut self) -> Option<Piece> {
        self.active.take()
    }

    /// Shift the active piece by `dx` columns if nothing is in the way.
    pub fn try_shift(&mut self, board: &Board, dx: i8) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if board.collides(active, dx, 0) {
            return false;
        }
        active.x += dx;
        true
    }

    /// Move the active piece down one row if nothing is in the way.
    pub fn try_step_down(&mut self, board: &Board) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if board.collides(active, 0, 1) {
            return false;
        }
        active.y += 1;
        true
    }

    /// Move the active piece to its landing row; returns rows descended.
    pub fn drop_to_floor(&mut self, board: &Board) -> u8 {
        let Some(active) = self.active.as_mut() else {
            return 0;
        };
        let distance = board.drop_distance(active);
        active.y += distance as i8;
        distance
    }

    /// Rotate the active piece, trying each kick offset in order.
    ///
    /// The first column offset where the rotated matrix fits wins. This is a
    /// horizontal-only approximation of a kick table.
    pub fn try_rotate(&mut self, board: &Board, dir: RotateDir) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let rotated = active.matrix.rotated(dir);
        for kick in KICK_OFFSETS {
            let candidate = active.with_matrix(rotated, active.x + kick);
            if !board.collides(&candidate, 0, 0) {
                *active = candidate;
                return true;
            }
        }

        false
    }

    /// Put the active piece in the hold slot.
    ///
    /// With an empty slot, `draw` supplies the kind of the fresh piece; with a
    /// full slot the held kind comes back as a freshly spawned piece, losing
    /// whatever orientation it had. Either way hold stays disabled until the
    /// next [`PieceController::install`].
    pub fn hold(&mut self, cols: u8, draw: impl FnOnce() -> PieceKind) -> HoldOutcome {
        if !self.can_hold {
            return HoldOutcome::Rejected;
        }
        let Some(active) = self.active else {
            return HoldOutcome::Rejected;
        };

        let outcome = match self.hold.replace(active.kind) {
            Some(held) => {
                self.active = Some(Piece::spawn(held, cols));
                HoldOutcome::Swapped
            }
            None => {
                self.active = Some(Piece::spawn(draw(), cols));
                HoldOutcome::Stored
            }
        };

        self.can_hold = false;
        outcome
    }

    /// Does the active piece overlap the board where it stands?
    pub fn active_collides(&self, board: &Board) -> bool {
        self.active
            .as_ref()
            .is_some_and(|piece| board.collides(piece, 0, 0))
    }

    /// Replace the active piece without touching hold state.
    #[doc(hidden)]
    pub fn force_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }
}

impl Default for PieceController {
    fn default() -> Self {
        Self::new()
    }
}
