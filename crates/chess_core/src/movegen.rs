use crate::{
    attacks::{in_check, is_attacked},
    board::Position,
    piece::{Piece, PieceId},
    types::*,
};

/// Rook half of a castling move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastleRook {
    pub rook: PieceId,
    pub to: Square,
}

/// A move candidate for one piece.
///
/// For en passant `capture` names a pawn that is not on `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub to: Square,
    pub capture: Option<PieceId>,
    pub castle: Option<CastleRook>,
}

impl Move {
    pub fn quiet(to: Square) -> Self {
        Self {
            to,
            capture: None,
            castle: None,
        }
    }

    pub fn capture(to: Square, victim: PieceId) -> Self {
        Self {
            to,
            capture: Some(victim),
            castle: None,
        }
    }

    pub fn is_castle(&self) -> bool {
        self.castle.is_some()
    }
}

/// Legal moves of one piece, in pattern order with castling last.
///
/// Each pseudo-legal candidate is played on a copy of the position and dropped
/// if it leaves the mover's own king attacked.
pub fn legal_moves(pos: &Position, id: PieceId) -> Vec<Move> {
    let Some(piece) = pos.piece(id) else {
        return Vec::new();
    };
    let color = piece.color;
    let mut out = pseudo_legal_moves(pos, id);
    out.retain(|mv| !in_check(&pos.after(id, mv), color));
    out
}

/// Candidates that respect geometry and same-color blocking only.
pub fn pseudo_legal_moves(pos: &Position, id: PieceId) -> Vec<Move> {
    let mut out = Vec::with_capacity(28);
    let Some(piece) = pos.piece(id) else {
        return out;
    };
    match piece.kind {
        PieceKind::Pawn => gen_pawn(pos, piece, &mut out),
        PieceKind::King => {
            gen_rays(pos, piece, &mut out);
            gen_castles(pos, piece, &mut out);
        }
        _ => gen_rays(pos, piece, &mut out),
    }
    out
}

fn gen_rays(pos: &Position, piece: &Piece, out: &mut Vec<Move>) {
    for ray in piece.pattern() {
        for (df, dr) in ray.steps() {
            let Some(to) = piece.square.offset(df, dr) else {
                break;
            };
            match pos.occupant(to) {
                None => out.push(Move::quiet(to)),
                Some((victim, pc)) => {
                    if pc.color != piece.color {
                        out.push(Move::capture(to, victim));
                    }
                    break;
                }
            }
        }
    }
}

fn gen_pawn(pos: &Position, pawn: &Piece, out: &mut Vec<Move>) {
    let c = pawn.color;
    let dir = c.forward();
    let from = pawn.square;

    // forward 1, then forward 2 from the start rank
    if let Some(one) = from.offset(0, dir)
        && pos.occupant(one).is_none()
    {
        out.push(Move::quiet(one));
        if from.rank() == c.pawn_rank()
            && let Some(two) = from.offset(0, 2 * dir)
            && pos.occupant(two).is_none()
        {
            out.push(Move::quiet(two));
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = from.offset(df, dir) else {
            continue;
        };
        match pos.occupant(to) {
            Some((victim, pc)) if pc.color != c => out.push(Move::capture(to, victim)),
            Some(_) => {}
            None => {
                if let Some(victim) = en_passant_victim(pos, c, to) {
                    out.push(Move::capture(to, victim));
                }
            }
        }
    }
}

/// The pawn a `c` pawn would take by moving diagonally onto the empty `to`.
fn en_passant_victim(pos: &Position, c: Color, to: Square) -> Option<PieceId> {
    let victim = pos.en_passant()?;
    let pc = pos.piece(victim)?;
    let behind = to.offset(0, -c.forward())?;
    (pc.kind == PieceKind::Pawn && pc.color != c && pc.square == behind).then_some(victim)
}

fn gen_castles(pos: &Position, king: &Piece, out: &mut Vec<Move>) {
    if !king.unmoved {
        return;
    }
    let c = king.color;
    let enemy = c.other();
    // Can't castle out of check.
    if is_attacked(pos, king.square, enemy) {
        return;
    }

    // King side first, then queen side.
    for (rook_file, step) in [(7i8, 1i8), (0, -1)] {
        let Some(rook_sq) = Square::new(rook_file, king.square.rank()) else {
            continue;
        };
        let Some((rook_id, rook)) = pos.occupant(rook_sq) else {
            continue;
        };
        if rook.kind != PieceKind::Rook || rook.color != c || !rook.unmoved {
            continue;
        }

        // Everything between king and rook must be empty (b-file included on
        // the queen side).
        let lo = king.square.file().min(rook_file) + 1;
        let hi = king.square.file().max(rook_file);
        let path_clear = (lo..hi).all(|f| {
            Square::new(f, king.square.rank()).is_some_and(|sq| pos.occupant(sq).is_none())
        });
        if !path_clear {
            continue;
        }

        // The king may not pass through or land on an attacked square.
        let (Some(pass), Some(land)) = (
            king.square.offset(step, 0),
            king.square.offset(2 * step, 0),
        ) else {
            continue;
        };
        if is_attacked(pos, pass, enemy) || is_attacked(pos, land, enemy) {
            continue;
        }

        out.push(Move {
            to: land,
            capture: None,
            castle: Some(CastleRook {
                rook: rook_id,
                to: pass,
            }),
        });
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
