//! Game runner for playing complete games between two players

use chess_core::{Board, Color, Player};
use tracing::{debug, info, warn};

use crate::config::SelfPlayConfig;
use crate::record::{GameOutcome, GameRecord, SelfPlayResults};

/// Runs self-play games
pub struct GameRunner {
    config: SelfPlayConfig,
}

impl GameRunner {
    pub fn new(config: SelfPlayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Play `config.games` games with the same two players.
    pub fn run<'p>(
        &self,
        white: &mut (dyn Player + 'p),
        black: &mut (dyn Player + 'p),
    ) -> SelfPlayResults {
        let mut results = SelfPlayResults::new(self.config.clone());

        for game_num in 0..self.config.games {
            let record = self.play_game(&mut *white, &mut *black);

            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.games,
                    result = record.outcome.score(),
                    outcome = ?record.outcome,
                    plies = record.plies,
                    "game finished"
                );
            } else {
                debug!(game = game_num + 1, outcome = ?record.outcome, "game finished");
            }
            results.add_game(record);
        }

        results
    }

    /// Play a single game from the standard array.
    pub fn play_game<'p>(
        &self,
        white: &mut (dyn Player + 'p),
        black: &mut (dyn Player + 'p),
    ) -> GameRecord {
        let mut board = Board::new_game();
        white.new_game();
        black.new_game();

        let max_plies = self.config.max_plies as usize;
        while !board.is_over() && board.move_log().len() < max_plies {
            let player = match board.turn() {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };

            let Some((id, to)) = player.choose_move(&board) else {
                warn!(player = player.name(), "no move offered in an ongoing game");
                break;
            };
            if let Err(e) = board.apply_move(id, to) {
                warn!(player = player.name(), error = %e, "player chose an illegal move");
                break;
            }
        }

        GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            moves: board.move_log().to_vec(),
            outcome: GameOutcome::from_status(board.status()),
            plies: board.move_log().len(),
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
