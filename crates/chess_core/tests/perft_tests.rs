use rayon::prelude::*;

use chess_core::{Board, perft};

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -";

#[test]
fn perft_known_positions() {
    let cases: Vec<(&str, u8, u64)> = vec![
        (STARTPOS, 1, 20),
        (STARTPOS, 2, 400),
        (STARTPOS, 3, 8_902),
        (KIWIPETE, 1, 48),
        (KIWIPETE, 2, 2_039),
        (KIWIPETE, 3, 97_862),
        (ENDGAME, 1, 14),
        (ENDGAME, 2, 191),
        (ENDGAME, 3, 2_812),
    ];

    cases.par_iter().for_each(|&(fen, depth, expected)| {
        let board = Board::from_fen(fen).unwrap_or_else(|e| panic!("{fen}: {e}"));
        let nodes = perft(&board, depth);
        assert_eq!(nodes, expected, "perft({depth}) mismatch for {fen}");
    });
}

#[test]
fn perft_new_game_matches_fen() {
    assert_eq!(perft(&Board::new_game(), 2), perft(&Board::from_fen(STARTPOS).unwrap(), 2));
}

#[test]
fn perft_finished_game_has_no_children() {
    let stalemate = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(perft(&stalemate, 0), 1);
    assert_eq!(perft(&stalemate, 1), 0);

    // Bare kings still have king moves but the game is already drawn.
    let bare = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert_eq!(perft(&bare, 1), 0);
}
