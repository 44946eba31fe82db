use crate::{board::Board, piece::PieceId, types::Square};

/// Leaf-node count of the move tree below `board`, `depth` plies deep.
///
/// Goes through the public API, so every node pays for a full board copy and
/// legal-move refresh. Finished games (mate or a draw rule) have no children.
pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.is_over() {
        return 0;
    }

    let moves: Vec<(PieceId, Square)> = board
        .movable_pieces(board.turn())
        .flat_map(|(id, moves)| moves.iter().map(move |mv| (id, mv.to)))
        .collect();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for (id, to) in moves {
        let mut next = board.clone();
        if next.apply_move(id, to).is_ok() {
            nodes += perft(&next, depth - 1);
        }
    }
    nodes
}
