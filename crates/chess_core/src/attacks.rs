//! Attack and check detection.
//!
//! Scans outward from the target square instead of enumerating every enemy
//! piece's moves:
//! - two pawn-capture offsets (color specific)
//! - eight knight jumps
//! - eight king steps
//! - eight sliding rays, stopped at the first occupied square

use crate::{
    board::Position,
    piece::{KING_STEPS, KNIGHT_JUMPS, Ray, SLIDING_RAYS},
    types::*,
};

/// Whether any `by` piece attacks `target`. Never mutates the position.
pub fn is_attacked(pos: &Position, target: Square, by: Color) -> bool {
    // Pawn attacks: a `by` pawn sits one rank behind the target from its own
    // point of view.
    let behind = -by.forward();
    for df in [-1, 1] {
        if holds(pos, target.offset(df, behind), by, PieceKind::Pawn) {
            return true;
        }
    }

    if single_steps(pos, target, by, KNIGHT_JUMPS, PieceKind::Knight)
        || single_steps(pos, target, by, KING_STEPS, PieceKind::King)
    {
        return true;
    }

    SLIDING_RAYS.iter().any(|&ray| slider_on_ray(pos, target, by, ray))
}

/// Whether `c`'s king is attacked. A position without that king is never in
/// check.
pub fn in_check(pos: &Position, c: Color) -> bool {
    match pos.king_square(c) {
        Some(ksq) => is_attacked(pos, ksq, c.other()),
        None => false,
    }
}

fn holds(pos: &Position, sq: Option<Square>, by: Color, kind: PieceKind) -> bool {
    sq.and_then(|s| pos.piece_at(s))
        .is_some_and(|pc| pc.color == by && pc.kind == kind)
}

fn single_steps(pos: &Position, target: Square, by: Color, rays: &[Ray], kind: PieceKind) -> bool {
    rays.iter()
        .any(|ray| holds(pos, target.offset(ray.df, ray.dr), by, kind))
}

fn slider_on_ray(pos: &Position, target: Square, by: Color, ray: Ray) -> bool {
    for (df, dr) in ray.steps() {
        let Some(sq) = target.offset(df, dr) else {
            return false;
        };
        if let Some(pc) = pos.piece_at(sq) {
            return pc.color == by && pc.kind.slides_along(ray);
        }
    }
    false
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
