//! Pieces and their movement patterns.
//!
//! A piece's geometry is data: each kind carries an ordered list of rays and
//! the generator walks them in order. Pawns are the exception and are
//! special-cased by the generator.

use serde::{Deserialize, Serialize};

use crate::types::{Color, PieceKind, Square};

/// Handle into the board's piece collection.
///
/// Ids are stable for the life of a piece. A promoted pawn keeps its id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    /// Still on its starting square and never moved. Only read for pawns,
    /// rooks and kings.
    pub unmoved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            unmoved: true,
        }
    }

    pub fn pattern(&self) -> &'static [Ray] {
        self.kind.pattern()
    }
}

/// A line of movement: `reach` repeated steps of `(df, dr)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ray {
    pub df: i8,
    pub dr: i8,
    pub reach: u8,
}

impl Ray {
    const fn slide(df: i8, dr: i8) -> Self {
        Self { df, dr, reach: 7 }
    }

    const fn step(df: i8, dr: i8) -> Self {
        Self { df, dr, reach: 1 }
    }

    /// Offsets from the origin, nearest first.
    pub fn steps(self) -> impl Iterator<Item = (i8, i8)> {
        (1..=self.reach as i8).map(move |k| (self.df * k, self.dr * k))
    }

    pub fn is_diagonal(self) -> bool {
        self.df != 0 && self.dr != 0
    }
}

const ROOK_RAYS: [Ray; 4] = [
    Ray::slide(0, 1),
    Ray::slide(1, 0),
    Ray::slide(0, -1),
    Ray::slide(-1, 0),
];

const BISHOP_RAYS: [Ray; 4] = [
    Ray::slide(1, 1),
    Ray::slide(1, -1),
    Ray::slide(-1, -1),
    Ray::slide(-1, 1),
];

const QUEEN_RAYS: [Ray; 8] = [
    Ray::slide(0, 1),
    Ray::slide(1, 0),
    Ray::slide(0, -1),
    Ray::slide(-1, 0),
    Ray::slide(1, 1),
    Ray::slide(1, -1),
    Ray::slide(-1, -1),
    Ray::slide(-1, 1),
];

const KING_RAYS: [Ray; 8] = [
    Ray::step(0, 1),
    Ray::step(1, 0),
    Ray::step(0, -1),
    Ray::step(-1, 0),
    Ray::step(1, 1),
    Ray::step(1, -1),
    Ray::step(-1, -1),
    Ray::step(-1, 1),
];

const KNIGHT_RAYS: [Ray; 8] = [
    Ray::step(1, 2),
    Ray::step(2, 1),
    Ray::step(2, -1),
    Ray::step(1, -2),
    Ray::step(-1, -2),
    Ray::step(-2, -1),
    Ray::step(-2, 1),
    Ray::step(-1, 2),
];

impl PieceKind {
    /// Movement-pattern descriptor, in the order moves are generated.
    pub fn pattern(self) -> &'static [Ray] {
        match self {
            PieceKind::Pawn => &[],
            PieceKind::Knight => &KNIGHT_RAYS,
            PieceKind::Bishop => &BISHOP_RAYS,
            PieceKind::Rook => &ROOK_RAYS,
            PieceKind::Queen => &QUEEN_RAYS,
            PieceKind::King => &KING_RAYS,
        }
    }

    /// Whether a slider of this kind attacks along `ray`'s orientation.
    pub fn slides_along(self, ray: Ray) -> bool {
        match self {
            PieceKind::Queen => true,
            PieceKind::Rook => !ray.is_diagonal(),
            PieceKind::Bishop => ray.is_diagonal(),
            _ => false,
        }
    }
}

pub(crate) const SLIDING_RAYS: &[Ray] = &QUEEN_RAYS;
pub(crate) const KNIGHT_JUMPS: &[Ray] = &KNIGHT_RAYS;
pub(crate) const KING_STEPS: &[Ray] = &KING_RAYS;
