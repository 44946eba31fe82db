//! Error types for rejected requests.
//!
//! Every `MoveError` is returned before the board is touched, so a rejected
//! move is always a no-op.

use thiserror::Error;

use crate::piece::PieceId;
use crate::types::{Color, Square};

/// Algebraic square text that does not name one of the 64 squares.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("square `{0}` is off the board")]
    OffBoard(String),

    #[error("`{0}` is not a square name (expected file a-h and rank 1-8)")]
    Malformed(String),
}

/// A move request that was not applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    OffBoard(#[from] SquareError),

    #[error("there is no piece on {0}")]
    EmptySquare(Square),

    #[error("piece {0:?} is not on the board")]
    NoSuchPiece(PieceId),

    #[error("it is {turn}'s turn, the piece belongs to {piece}")]
    NotYourTurn { turn: Color, piece: Color },

    #[error("{to} is not a legal destination for the piece on {from}")]
    IllegalDestination { from: Square, to: Square },

    #[error("the game is over")]
    GameOver,
}

/// Position setup text that could not be read.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected at least {expected} fields, found {found}")]
    MissingFields { expected: usize, found: usize },

    #[error("expected 8 ranks in the placement field, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 files")]
    FileCount { rank: i8 },

    #[error("invalid piece character `{0}`")]
    PieceChar(char),

    #[error("invalid side to move `{0}`")]
    SideToMove(String),

    #[error("invalid castling character `{0}`")]
    CastlingChar(char),

    #[error("invalid en-passant field: {0}")]
    EnPassant(String),

    #[error("invalid half-move clock `{0}`")]
    HalfmoveClock(String),

    #[error("expected exactly one {0} king")]
    KingCount(Color),
}
