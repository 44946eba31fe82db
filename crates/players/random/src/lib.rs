//! Random Move Player
//!
//! Selects uniformly among every cached legal move of the side to move.
//! Useful for:
//! - Driving self-play games through the whole rule set
//! - Stress testing move generation and game-end detection

use chess_core::{Board, PieceId, Player, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A player that picks a random legal move.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible move sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            name: "Random".to_string(),
            rng,
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn choose_move(&mut self, board: &Board) -> Option<(PieceId, Square)> {
        if board.is_over() {
            return None;
        }
        let moves: Vec<(PieceId, Square)> = board
            .movable_pieces(board.turn())
            .flat_map(|(id, moves)| moves.iter().map(move |mv| (id, mv.to)))
            .collect();
        moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
