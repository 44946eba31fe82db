//! Position setup from FEN text.
//!
//! Reads placement, side to move, castling and en-passant fields plus an
//! optional half-move clock. Used by tests and analysis; there is no writer.

use crate::board::{Board, Position};
use crate::error::{FenError, SquareError};
use crate::piece::Piece;
use crate::types::*;

impl Board {
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields {
                expected: 4,
                found: parts.len(),
            });
        }

        let mut pieces = parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        // Kings and rooks start out "moved"; castling rights re-arm them.
        for pc in pieces.iter_mut() {
            match pc.kind {
                PieceKind::Pawn => pc.unmoved = pc.square.rank() == pc.color.pawn_rank(),
                PieceKind::King | PieceKind::Rook => pc.unmoved = false,
                _ => {}
            }
        }
        if parts[2] != "-" {
            for ch in parts[2].chars() {
                let (color, rook_file) = match ch {
                    'K' => (Color::White, 7),
                    'Q' => (Color::White, 0),
                    'k' => (Color::Black, 7),
                    'q' => (Color::Black, 0),
                    _ => return Err(FenError::CastlingChar(ch)),
                };
                arm_castling(&mut pieces, color, rook_file);
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            field => {
                let behind: Square = field
                    .parse()
                    .map_err(|e: SquareError| FenError::EnPassant(e.to_string()))?;
                // The pawn stands one step past the skipped square.
                let pawn_sq = behind
                    .offset(0, side_to_move.other().forward())
                    .ok_or_else(|| FenError::EnPassant(field.to_string()))?;
                Some(pawn_sq)
            }
        };

        let halfmove_clock = match parts.get(4) {
            Some(txt) => txt
                .parse()
                .map_err(|_| FenError::HalfmoveClock(txt.to_string()))?,
            None => 0,
        };

        let position = Position::from_pieces(pieces, side_to_move, en_passant)?;
        Ok(Board::from_position(position, halfmove_clock))
    }
}

fn parse_placement(field: &str) -> Result<Vec<Piece>, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut pieces = Vec::with_capacity(32);
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
        let mut file: i8 = 0;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                file += d as i8;
            } else {
                let color = if ch.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let kind = match ch.to_ascii_lowercase() {
                    'p' => PieceKind::Pawn,
                    'n' => PieceKind::Knight,
                    'b' => PieceKind::Bishop,
                    'r' => PieceKind::Rook,
                    'q' => PieceKind::Queen,
                    'k' => PieceKind::King,
                    _ => return Err(FenError::PieceChar(ch)),
                };
                let sq = Square::new(file, rank).ok_or(FenError::FileCount { rank: rank + 1 })?;
                pieces.push(Piece::new(kind, color, sq));
                file += 1;
            }
            if file > 8 {
                return Err(FenError::FileCount { rank: rank + 1 });
            }
        }
        if file != 8 {
            return Err(FenError::FileCount { rank: rank + 1 });
        }
    }
    Ok(pieces)
}

/// Mark the home king and the given corner rook as unmoved, if both are there.
fn arm_castling(pieces: &mut [Piece], color: Color, rook_file: i8) {
    let rank = color.home_rank();
    let is_at = |pc: &Piece, kind: PieceKind, file: i8| {
        pc.color == color && pc.kind == kind && Square::new(file, rank) == Some(pc.square)
    };
    let king_home = pieces.iter().any(|pc| is_at(pc, PieceKind::King, 4));
    let rook_home = pieces.iter().any(|pc| is_at(pc, PieceKind::Rook, rook_file));
    if !(king_home && rook_home) {
        return;
    }
    for pc in pieces.iter_mut() {
        if is_at(pc, PieceKind::King, 4) || is_at(pc, PieceKind::Rook, rook_file) {
            pc.unmoved = true;
        }
    }
}
