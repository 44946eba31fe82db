//! Special moves and game-ending positions, driven through the public API.

use chess_core::{Board, Color, GameStatus, MoveError, PieceId, PieceKind, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn id_at(board: &Board, name: &str) -> PieceId {
    board.piece_at(sq(name)).expect("occupied square").0
}

fn play_all(board: &mut Board, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        board
            .play(from, to)
            .unwrap_or_else(|e| panic!("{from}-{to} rejected: {e}"));
    }
}

fn destinations(board: &Board, name: &str) -> Vec<String> {
    board
        .legal_moves(id_at(board, name))
        .iter()
        .map(|m| m.to.to_string())
        .collect()
}

fn has_castle(board: &Board, name: &str) -> bool {
    board
        .legal_moves(id_at(board, name))
        .iter()
        .any(|m| m.is_castle())
}

// =============================================================================
// Castling
// =============================================================================

#[test]
fn test_kingside_castle_waits_for_knight() {
    let mut board = Board::new_game();
    play_all(&mut board, &[("e2", "e4"), ("e7", "e5"), ("f1", "c4"), ("f8", "c5")]);
    // g1 knight still home
    assert_eq!(destinations(&board, "e1"), ["e2", "f1"]);

    play_all(&mut board, &[("g1", "f3"), ("g8", "f6")]);
    assert_eq!(destinations(&board, "e1"), ["e2", "f1", "g1"]);

    let king = id_at(&board, "e1");
    let rook = id_at(&board, "h1");
    let mv = board.apply_move(king, sq("g1")).unwrap();
    let castle = mv.castle.expect("castling candidate");
    assert_eq!(castle.rook, rook);
    assert_eq!(castle.to, sq("f1"));

    assert_eq!(board.piece(rook).unwrap().square, sq("f1"));
    assert_eq!(board.piece(king).unwrap().square, sq("g1"));
    assert!(!board.piece(rook).unwrap().unmoved);
    assert!(board.piece_at(sq("h1")).is_none());
    assert!(board.piece_at(sq("e1")).is_none());
    assert_eq!(board.move_log().last().map(String::as_str), Some("0-0"));
    assert!(board.position().index_is_consistent());
}

#[test]
fn test_castle_rejected_through_or_into_attack() {
    let open = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    assert!(has_castle(&open, "e1"));

    // bishop h3 covers f1
    let transit = Board::from_fen("4k3/8/8/8/8/7b/8/4K2R w K - 0 1").unwrap();
    assert!(!has_castle(&transit, "e1"));

    // bishop h2 covers g1
    let landing = Board::from_fen("4k3/8/8/8/8/8/7b/4K2R w K - 0 1").unwrap();
    assert!(!has_castle(&landing, "e1"));

    // rook a1 checks the king
    let checked = Board::from_fen("4k3/8/8/8/8/8/8/r3K2R w K - 0 1").unwrap();
    assert!(checked.in_check(Color::White));
    assert!(!has_castle(&checked, "e1"));
}

#[test]
fn test_queenside_allows_attacked_knight_square() {
    // bishop d3 covers b1 but not d1 or c1
    let board = Board::from_fen("4k3/8/8/8/8/3b4/8/R3K3 w Q - 0 1").unwrap();
    let king = id_at(&board, "e1");
    let castle = board
        .legal_moves(king)
        .iter()
        .find(|m| m.is_castle())
        .copied()
        .expect("queenside castle");
    assert_eq!(castle.to, sq("c1"));
    assert_eq!(castle.castle.unwrap().to, sq("d1"));

    let mut board = board;
    board.apply_move(king, sq("c1")).unwrap();
    assert_eq!(board.move_log(), ["0-0-0"]);
    assert_eq!(board.piece_at(sq("d1")).unwrap().1.kind, PieceKind::Rook);

    // but b1 must still be empty
    let blocked = Board::from_fen("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1").unwrap();
    assert!(!has_castle(&blocked, "e1"));
}

#[test]
fn test_moved_rook_loses_castling() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    play_all(&mut board, &[("h1", "h2"), ("e8", "e7"), ("h2", "h1"), ("e7", "e8")]);
    assert!(!has_castle(&board, "e1"));
}

// =============================================================================
// En passant and promotion
// =============================================================================

#[test]
fn test_en_passant_removes_pawn_behind_destination() {
    let mut board = Board::new_game();
    play_all(&mut board, &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")]);

    let black_pawn = id_at(&board, "d5");
    let white_pawn = id_at(&board, "e5");
    let ep = board
        .legal_moves(white_pawn)
        .iter()
        .find(|m| m.to == sq("d6"))
        .copied()
        .expect("en-passant capture");
    assert_eq!(ep.capture, Some(black_pawn));

    board.apply_move(white_pawn, sq("d6")).unwrap();
    assert!(board.piece(black_pawn).is_none());
    assert!(board.piece_at(sq("d5")).is_none());
    assert_eq!(board.piece_at(sq("d6")).unwrap().0, white_pawn);
    assert_eq!(board.move_log().last().map(String::as_str), Some("exd6"));
    assert_eq!(board.material(Color::Black).count(PieceKind::Pawn), 7);
    assert_eq!(board.halfmove_clock(), 0);
    assert!(board.position().index_is_consistent());
}

#[test]
fn test_en_passant_expires_after_one_move() {
    let mut board = Board::new_game();
    play_all(
        &mut board,
        &[
            ("e2", "e4"),
            ("a7", "a6"),
            ("e4", "e5"),
            ("d7", "d5"),
            ("h2", "h3"),
            ("h7", "h6"),
        ],
    );
    assert_eq!(destinations(&board, "e5"), ["e6"]);
    assert_eq!(
        board.play("e5", "d6"),
        Err(MoveError::IllegalDestination {
            from: sq("e5"),
            to: sq("d6")
        })
    );
}

#[test]
fn test_promotion_to_queen_keeps_id() {
    let mut board = Board::from_fen("8/P6k/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let pawn = id_at(&board, "a7");
    board.apply_move(pawn, sq("a8")).unwrap();

    let queen = board.piece(pawn).unwrap();
    assert_eq!(queen.kind, PieceKind::Queen);
    assert_eq!(queen.color, Color::White);
    assert_eq!(queen.square, sq("a8"));
    assert_eq!(board.move_log(), ["a8=Q"]);

    let material = board.material(Color::White);
    assert_eq!(material.count(PieceKind::Pawn), 0);
    assert_eq!(material.count(PieceKind::Queen), 1);

    // The new queen moves like one on the next turn.
    board.play("h7", "g7").unwrap();
    assert!(board.legal_moves(pawn).iter().any(|m| m.to == sq("h1")));
}

// =============================================================================
// Checkmate
// =============================================================================

#[test]
fn test_scholars_mate_sets_only_black_checkmate() {
    let mut board = Board::new_game();
    play_all(
        &mut board,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("d1", "h5"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("g8", "f6"),
            ("h5", "f7"),
        ],
    );

    assert_eq!(board.move_log().last().map(String::as_str), Some("Qxf7#"));
    assert!(board.in_check(Color::Black));
    assert!(board.is_checkmated(Color::Black));
    assert!(!board.is_checkmated(Color::White));
    assert!(!board.in_check(Color::White));
    assert_eq!(board.draw(), None);
    assert!(board.is_checkmate(Color::Black));
    assert!(!board.has_any_legal_move(Color::Black));
    assert!(board
        .pieces()
        .filter(|(_, pc)| pc.color == Color::Black)
        .all(|(id, _)| board.legal_moves(id).is_empty()));
    assert_eq!(
        board.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );

    // Nothing moves after mate.
    assert_eq!(board.play("a7", "a6"), Err(MoveError::GameOver));
    assert_eq!(board.move_log().len(), 7);
}

#[test]
fn test_back_rank_mate_from_setup() {
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    board.play("a1", "a8").unwrap();
    assert_eq!(board.move_log(), ["Ra8#"]);
    assert_eq!(
        board.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn test_check_is_not_checkmate() {
    let board =
        Board::from_fen("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2").unwrap();
    assert!(board.in_check(Color::Black));
    assert!(board.has_any_legal_move(Color::Black));
    assert!(!board.is_checkmated(Color::Black));
    assert_eq!(board.status(), GameStatus::Ongoing);
}
