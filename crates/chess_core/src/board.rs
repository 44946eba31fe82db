use tracing::{debug, info};

use crate::attacks;
use crate::error::{FenError, MoveError};
use crate::movegen::{self, Move};
use crate::notation;
use crate::piece::{Piece, PieceId};
use crate::status::{DrawReason, GameStatus};
use crate::types::*;

/// Half-moves without a capture or pawn move after which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u32 = 100;

/// Piece placement plus the state move generation reads.
///
/// This is the part of the game that gets deep-copied when a candidate move is
/// tried on a hypothetical board.
#[derive(Clone, Debug)]
pub struct Position {
    pieces: Vec<Option<Piece>>,
    index: [Option<PieceId>; 64],
    kings: [PieceId; 2],
    side_to_move: Color,
    en_passant: Option<PieceId>, // pawn that just advanced two squares
}

impl Position {
    pub fn startpos() -> Self {
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut pieces = Vec::with_capacity(32);
        for color in [Color::White, Color::Black] {
            for (f, &kind) in back.iter().enumerate() {
                if let Some(sq) = Square::new(f as i8, color.home_rank()) {
                    pieces.push(Piece::new(kind, color, sq));
                }
            }
            for f in 0..8 {
                if let Some(sq) = Square::new(f, color.pawn_rank()) {
                    pieces.push(Piece::new(PieceKind::Pawn, color, sq));
                }
            }
        }
        match Position::from_pieces(pieces, Color::White, None) {
            Ok(pos) => pos,
            Err(e) => unreachable!("standard setup is valid: {e}"),
        }
    }

    /// Build a position from a piece list. `en_passant` names the square of a
    /// pawn that has just advanced two squares.
    pub(crate) fn from_pieces(
        pieces: Vec<Piece>,
        side_to_move: Color,
        en_passant: Option<Square>,
    ) -> Result<Self, FenError> {
        let mut index = [None; 64];
        let mut kings: [Option<PieceId>; 2] = [None, None];
        let mut king_counts = [0usize; 2];

        for (i, pc) in pieces.iter().enumerate() {
            let id = PieceId(i as u8);
            index[pc.square.index()] = Some(id);
            if pc.kind == PieceKind::King {
                kings[pc.color.idx()] = Some(id);
                king_counts[pc.color.idx()] += 1;
            }
        }

        let mut king_ids = [PieceId(0); 2];
        for color in [Color::White, Color::Black] {
            match kings[color.idx()] {
                Some(id) if king_counts[color.idx()] == 1 => king_ids[color.idx()] = id,
                _ => return Err(FenError::KingCount(color)),
            }
        }

        let mut pos = Position {
            pieces: pieces.into_iter().map(Some).collect(),
            index,
            kings: king_ids,
            side_to_move,
            en_passant: None,
        };

        if let Some(sq) = en_passant {
            match pos.occupant(sq) {
                Some((id, pc))
                    if pc.kind == PieceKind::Pawn && pc.color == side_to_move.other() =>
                {
                    pos.en_passant = Some(id);
                }
                _ => return Err(FenError::EnPassant(format!("no pawn to capture on {sq}"))),
            }
        }

        Ok(pos)
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index()).and_then(Option::as_ref)
    }

    pub fn occupant(&self, sq: Square) -> Option<(PieceId, &Piece)> {
        let id = self.index[sq.index()]?;
        self.piece(id).map(|pc| (id, pc))
    }

    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.occupant(sq).map(|(_, pc)| pc)
    }

    /// All pieces still on the board, in id order.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| pc.as_ref().map(|pc| (PieceId(i as u8), pc)))
    }

    pub(crate) fn slots(&self) -> usize {
        self.pieces.len()
    }

    pub fn king(&self, c: Color) -> PieceId {
        self.kings[c.idx()]
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.piece(self.king(c)).map(|pc| pc.square)
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn en_passant(&self) -> Option<PieceId> {
        self.en_passant
    }

    /// Deep copy with `mv` played by `id`.
    pub fn after(&self, id: PieceId, mv: &Move) -> Position {
        let mut next = self.clone();
        next.play(id, mv);
        next
    }

    /// Relocate the mover (and a castling rook), drop a captured piece and
    /// update the en-passant marker. Turn, flags and counters are the board's
    /// business.
    pub(crate) fn play(&mut self, id: PieceId, mv: &Move) {
        let Some(mover) = self.piece(id).copied() else {
            return;
        };
        let double_step =
            mover.kind == PieceKind::Pawn && (mv.to.rank() - mover.square.rank()).abs() == 2;

        if let Some(castle) = mv.castle {
            self.relocate(castle.rook, castle.to);
        } else if let Some(victim) = mv.capture {
            // Before relocating: the victim's index slot may be the destination.
            self.remove(victim);
        }
        self.relocate(id, mv.to);
        self.en_passant = double_step.then_some(id);
    }

    fn relocate(&mut self, id: PieceId, to: Square) {
        let Some(pc) = self.pieces.get_mut(id.index()).and_then(Option::as_mut) else {
            return;
        };
        if self.index[pc.square.index()] == Some(id) {
            self.index[pc.square.index()] = None;
        }
        pc.square = to;
        pc.unmoved = false;
        self.index[to.index()] = Some(id);
    }

    fn remove(&mut self, id: PieceId) {
        if let Some(pc) = self.pieces.get_mut(id.index()).and_then(Option::take)
            && self.index[pc.square.index()] == Some(id)
        {
            self.index[pc.square.index()] = None;
        }
    }

    fn promote(&mut self, id: PieceId, kind: PieceKind) {
        if let Some(pc) = self.pieces.get_mut(id.index()).and_then(Option::as_mut) {
            pc.kind = kind;
        }
    }

    /// Every occupied square is claimed by exactly one live piece and every
    /// live piece is indexed on the square it records.
    pub fn index_is_consistent(&self) -> bool {
        let indexed = self.index.iter().filter(|slot| slot.is_some()).count();
        let live = self.pieces().count();
        if indexed != live {
            return false;
        }
        let pieces_agree = self
            .pieces()
            .all(|(id, pc)| self.index[pc.square.index()] == Some(id));
        let index_agrees = Square::all().all(|sq| match self.index[sq.index()] {
            Some(id) => self.piece(id).is_some_and(|pc| pc.square == sq),
            None => true,
        });
        pieces_agree && index_agrees
    }
}

/// Per-kind piece counts for one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Material([u8; 6]);

impl Material {
    pub fn count(&self, kind: PieceKind) -> u8 {
        self.0[kind.idx()]
    }

    fn add(&mut self, kind: PieceKind) {
        self.0[kind.idx()] += 1;
    }

    fn remove(&mut self, kind: PieceKind) {
        self.0[kind.idx()] = self.0[kind.idx()].saturating_sub(1);
    }
}

/// The game: a position plus everything derived from the moves played so far.
#[derive(Clone, Debug)]
pub struct Board {
    position: Position,
    in_check: [bool; 2],
    checkmated: [bool; 2],
    pub(crate) draw: Option<DrawReason>,
    halfmove_clock: u32,
    material: [Material; 2],
    move_log: Vec<String>,
    legal: Vec<Vec<Move>>, // indexed by PieceId
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    /// Standard starting array, White to move.
    pub fn new_game() -> Self {
        Self::from_position(Position::startpos(), 0)
    }

    pub(crate) fn from_position(position: Position, halfmove_clock: u32) -> Self {
        let mut material = [Material::default(); 2];
        for (_, pc) in position.pieces() {
            material[pc.color.idx()].add(pc.kind);
        }
        let mut board = Board {
            position,
            in_check: [false; 2],
            checkmated: [false; 2],
            draw: None,
            halfmove_clock,
            material,
            move_log: Vec::new(),
            legal: Vec::new(),
        };
        for c in [Color::White, Color::Black] {
            board.in_check[c.idx()] = attacks::in_check(&board.position, c);
        }
        board.refresh_legal_moves();
        let to_move = board.turn();
        board.checkmated[to_move.idx()] = board.is_checkmate(to_move);
        if !board.checkmated[to_move.idx()] {
            board.draw = board.detect_draw(to_move);
        }
        board
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn turn(&self) -> Color {
        self.position.side_to_move
    }

    pub fn in_check(&self, c: Color) -> bool {
        self.in_check[c.idx()]
    }

    pub fn is_checkmated(&self, c: Color) -> bool {
        self.checkmated[c.idx()]
    }

    pub fn draw(&self) -> Option<DrawReason> {
        self.draw
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn material(&self, c: Color) -> &Material {
        &self.material[c.idx()]
    }

    /// Notated moves, oldest first.
    pub fn move_log(&self) -> &[String] {
        &self.move_log
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.position.piece(id)
    }

    pub fn piece_at(&self, sq: Square) -> Option<(PieceId, &Piece)> {
        self.position.occupant(sq)
    }

    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.position.pieces()
    }

    pub fn king(&self, c: Color) -> PieceId {
        self.position.king(c)
    }

    pub fn en_passant(&self) -> Option<PieceId> {
        self.position.en_passant
    }

    /// Cached legal moves of a piece; empty for captured pieces.
    pub fn legal_moves(&self, id: PieceId) -> &[Move] {
        self.legal.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Pieces of `c` with at least one legal move.
    pub fn movable_pieces(&self, c: Color) -> impl Iterator<Item = (PieceId, &[Move])> {
        self.position
            .pieces()
            .filter(move |(_, pc)| pc.color == c)
            .map(|(id, _)| (id, self.legal_moves(id)))
            .filter(|(_, moves)| !moves.is_empty())
    }

    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::Ongoing
    }

    /// Move by algebraic square names, e.g. `play("e2", "e4")`.
    pub fn play(&mut self, from: &str, to: &str) -> Result<Move, MoveError> {
        let from: Square = from.parse()?;
        let to: Square = to.parse()?;
        let (id, _) = self
            .position
            .occupant(from)
            .ok_or(MoveError::EmptySquare(from))?;
        self.apply_move(id, to)
    }

    /// The only mutating entry point. A rejected request changes nothing.
    pub fn apply_move(&mut self, id: PieceId, to: Square) -> Result<Move, MoveError> {
        let result = self.validate(id, to);
        match result {
            Ok(mv) => {
                self.commit(id, mv);
                Ok(mv)
            }
            Err(e) => {
                debug!(piece = ?id, %to, error = %e, "move rejected");
                Err(e)
            }
        }
    }

    fn validate(&self, id: PieceId, to: Square) -> Result<Move, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let piece = self.piece(id).ok_or(MoveError::NoSuchPiece(id))?;
        if piece.color != self.turn() {
            return Err(MoveError::NotYourTurn {
                turn: self.turn(),
                piece: piece.color,
            });
        }
        self.legal_moves(id)
            .iter()
            .find(|mv| mv.to == to)
            .copied()
            .ok_or(MoveError::IllegalDestination {
                from: piece.square,
                to,
            })
    }

    fn commit(&mut self, id: PieceId, mv: Move) {
        let Some(mover) = self.position.piece(id).copied() else {
            return;
        };
        let us = mover.color;
        let them = us.other();
        let captured = mv
            .capture
            .and_then(|victim| self.position.piece(victim))
            .map(|pc| pc.kind);

        self.in_check = [false; 2];
        self.position.play(id, &mv);
        if let Some(kind) = captured {
            self.material[them.idx()].remove(kind);
        }

        let promoted =
            mover.kind == PieceKind::Pawn && mv.to.rank() == us.promotion_rank();
        if promoted {
            self.position.promote(id, PieceKind::Queen);
            self.material[us.idx()].remove(PieceKind::Pawn);
            self.material[us.idx()].add(PieceKind::Queen);
        }

        self.position.side_to_move = them;
        self.in_check[them.idx()] = attacks::in_check(&self.position, them);
        self.refresh_legal_moves();

        if mover.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        let mated = self.in_check[them.idx()] && !self.has_any_legal_move(them);
        self.checkmated[them.idx()] = mated;

        let san = notation::describe(
            mover.kind,
            mover.square,
            &mv,
            promoted,
            self.in_check[them.idx()],
            mated,
        );
        debug!(%san, color = %us, clock = self.halfmove_clock, "move applied");
        self.move_log.push(san);

        if !mated {
            self.draw = self.detect_draw(them);
        }
        match self.status() {
            GameStatus::Ongoing => {}
            status => info!(?status, plies = self.move_log.len(), "game over"),
        }
    }

    fn refresh_legal_moves(&mut self) {
        self.legal = (0..self.position.slots())
            .map(|i| movegen::legal_moves(&self.position, PieceId(i as u8)))
            .collect();
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
