//! Rules engine for standard chess: legal move generation, special-move
//! state and game-end classification.
//!
//! The [`Board`] owns every piece. Pieces are addressed by [`PieceId`] and
//! all mutation goes through [`Board::apply_move`].

pub mod attacks;
pub mod board;
pub mod error;
mod fen;
pub mod movegen;
mod notation;
pub mod perft;
pub mod piece;
pub mod status;
pub mod types;

pub use attacks::*;
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use perft::perft;
pub use piece::{Piece, PieceId, Ray};
pub use status::*;
pub use types::*;

// =============================================================================
// Player trait: anything that picks moves for one side (random, scripted, UI)
// =============================================================================

/// Trait implemented by move choosers.
pub trait Player: Send {
    /// Pick a piece and destination from the board's cached legal moves.
    ///
    /// Returns `None` when the side to move has nothing to play.
    fn choose_move(&mut self, board: &Board) -> Option<(PieceId, Square)>;

    /// Display name used in logs and game records.
    fn name(&self) -> &str;

    /// Reset internal state before a new game.
    fn new_game(&mut self) {}
}
