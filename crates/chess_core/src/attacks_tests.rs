use super::*;
use crate::board::Board;

fn position(fen: &str) -> Position {
    Board::from_fen(fen).unwrap().position().clone()
}

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn test_knight_gives_check() {
    let pos = position("4k3/8/8/8/8/5n2/8/4K3 w - - 0 1");
    assert!(in_check(&pos, Color::White));
    assert!(!in_check(&pos, Color::Black));
    assert!(is_attacked(&pos, sq("h2"), Color::Black));
    assert!(!is_attacked(&pos, sq("e2"), Color::Black));
}

#[test]
fn test_pawn_attacks_are_diagonal_and_forward() {
    let pos = position("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
    assert!(is_attacked(&pos, sq("d5"), Color::White));
    assert!(is_attacked(&pos, sq("f5"), Color::White));
    assert!(!is_attacked(&pos, sq("e5"), Color::White));
    assert!(!is_attacked(&pos, sq("d3"), Color::White));

    let pos = position("4k3/8/8/4p3/8/8/8/4K3 w - - 0 1");
    assert!(is_attacked(&pos, sq("d4"), Color::Black));
    assert!(is_attacked(&pos, sq("f4"), Color::Black));
    assert!(!is_attacked(&pos, sq("d6"), Color::Black));
}

#[test]
fn test_sliding_ray_stops_at_first_piece() {
    // Rook a1, own pawn a4
    let pos = position("4k3/8/8/8/P7/8/8/R3K3 w - - 0 1");
    assert!(is_attacked(&pos, sq("a3"), Color::White));
    assert!(is_attacked(&pos, sq("a4"), Color::White)); // defended
    assert!(!is_attacked(&pos, sq("a5"), Color::White)); // blocked
    assert!(is_attacked(&pos, sq("b5"), Color::White)); // by the pawn
}

#[test]
fn test_ray_orientation_matches_piece_kind() {
    let rook = position("4k3/8/8/8/8/2R5/8/4K3 w - - 0 1");
    assert!(!is_attacked(&rook, sq("d4"), Color::White));
    assert!(is_attacked(&rook, sq("c7"), Color::White));
    assert!(is_attacked(&rook, sq("h3"), Color::White));

    let bishop = position("4k3/8/8/8/8/2B5/8/4K3 w - - 0 1");
    assert!(is_attacked(&bishop, sq("d4"), Color::White));
    assert!(!is_attacked(&bishop, sq("c7"), Color::White));

    let queen = position("4k3/8/8/8/8/2Q5/8/4K3 w - - 0 1");
    assert!(is_attacked(&queen, sq("d4"), Color::White));
    assert!(is_attacked(&queen, sq("c7"), Color::White));
}

#[test]
fn test_king_adjacency() {
    let pos = position("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert!(is_attacked(&pos, sq("d2"), Color::White));
    assert!(is_attacked(&pos, sq("f1"), Color::White));
    assert!(!is_attacked(&pos, sq("c3"), Color::White));
}

#[test]
fn test_enemy_blocker_does_not_attack_through() {
    // Black rook e8 behind a black pawn on e4 cannot see e1.
    let pos = position("k3r3/8/8/8/4p3/8/8/4K3 w - - 0 1");
    assert!(!in_check(&pos, Color::White));
    assert!(is_attacked(&pos, sq("e5"), Color::Black));
}
