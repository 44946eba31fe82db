//! Game-state evaluation: checkmate, stalemate and the draw rules.

use serde::{Deserialize, Serialize};

use crate::attacks::in_check;
use crate::board::{Board, FIFTY_MOVE_LIMIT, Material};
use crate::types::{Color, PieceKind};

/// Plies in one repetition window: a move pair out and the move pair back.
pub const REPETITION_WINDOW: usize = 4;
/// Occurrences of the same cycle end-point that make a repetition draw. The
/// last `REPETITION_COUNT - 1` windows must match.
pub const REPETITION_COUNT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    Repetition,
    FiftyMove,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Draw(DrawReason),
}

impl Board {
    pub fn status(&self) -> GameStatus {
        for c in [Color::White, Color::Black] {
            if self.is_checkmated(c) {
                return GameStatus::Checkmate { winner: c.other() };
            }
        }
        match self.draw {
            Some(reason) => GameStatus::Draw(reason),
            None => GameStatus::Ongoing,
        }
    }

    /// Any piece of `c` has a non-empty cached legal-move list.
    pub fn has_any_legal_move(&self, c: Color) -> bool {
        self.movable_pieces(c).next().is_some()
    }

    pub fn is_checkmate(&self, c: Color) -> bool {
        in_check(self.position(), c) && !self.has_any_legal_move(c)
    }

    pub fn is_stalemate(&self, c: Color) -> bool {
        !in_check(self.position(), c) && !self.has_any_legal_move(c)
    }

    /// No pawns, rooks or queens anywhere, and at most one minor piece on the
    /// whole board.
    pub fn is_draw_by_material(&self) -> bool {
        let white = self.material(Color::White);
        let black = self.material(Color::Black);
        let heavy = |c: PieceKind| white.count(c) + black.count(c);
        if heavy(PieceKind::Pawn) + heavy(PieceKind::Rook) + heavy(PieceKind::Queen) > 0 {
            return false;
        }
        let minors = |m: &Material| {
            (m.count(PieceKind::Knight), m.count(PieceKind::Bishop))
        };
        matches!(
            (minors(white), minors(black)),
            ((0, 0), (0, 0))
                | ((1, 0), (0, 0))
                | ((0, 1), (0, 0))
                | ((0, 0), (1, 0))
                | ((0, 0), (0, 1))
        )
    }

    /// Textual check over the move log: the last two adjacent windows of
    /// `REPETITION_WINDOW` plies are identical, so the position closing them
    /// has come up a third time. Not a position comparison.
    pub fn is_draw_by_repetition(&self) -> bool {
        let log = self.move_log();
        let span = REPETITION_WINDOW * (REPETITION_COUNT - 1);
        if log.len() < span {
            return false;
        }
        let tail = &log[log.len() - span..];
        let first = &tail[..REPETITION_WINDOW];
        tail.chunks(REPETITION_WINDOW).all(|window| window == first)
    }

    pub fn is_draw_by_fifty_move(&self) -> bool {
        self.halfmove_clock() >= FIFTY_MOVE_LIMIT
    }

    /// Draw verdict for the position with `to_move` on move.
    pub(crate) fn detect_draw(&self, to_move: Color) -> Option<DrawReason> {
        if self.is_stalemate(to_move) {
            Some(DrawReason::Stalemate)
        } else if self.is_draw_by_material() {
            Some(DrawReason::InsufficientMaterial)
        } else if self.is_draw_by_fifty_move() {
            Some(DrawReason::FiftyMove)
        } else if self.is_draw_by_repetition() {
            Some(DrawReason::Repetition)
        } else {
            None
        }
    }
}
