use std::sync::Arc;

use rand::prelude::*;

use crate::game::board::{Symbol, BOARD_SIZE};
use crate::game::state::{GameProgress, GameState, MoveOutcome};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Policy {
    Sequential,
    Random,
}

/// One player's unit of control: a symbol, a shared game and a move-selection
/// policy loop. Runs on its own thread until the game reaches a terminal
/// state (or, for the sequential policy, until its candidates are exhausted).
pub struct Actor {
    game: Arc<GameState>,
    symbol: Symbol,
}

impl Actor {
    pub fn new(game: Arc<GameState>, symbol: Symbol) -> Self {
        Self { game, symbol }
    }

    pub fn run(&self, policy: Policy) {
        match policy {
            Policy::Sequential => self.run_sequential(),
            Policy::Random => self.run_random(),
        }
    }

    /// Scans candidate cells in row-major order, one attempt per cell. An
    /// occupied candidate is simply skipped; the next attempt moves on to the
    /// next cell.
    pub fn run_sequential(&self) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.game.is_game_over() {
                    return;
                }
                self.game.wait_for_turn(self.symbol);
                if self.game.is_game_over() {
                    return;
                }

                log::info!(
                    "player {} attempting move at ({}, {})",
                    self.symbol,
                    row,
                    col
                );
                if self.play(row, col) {
                    return;
                }
            }
        }
    }

    pub fn run_random(&self) {
        self.run_random_from_seed(rand::rng().random())
    }

    /// Picks uniformly random cells until one is accepted; an occupied pick is
    /// retried with a fresh cell within the same turn.
    pub fn run_random_from_seed(&self, seed: u64) {
        log::debug!("player {} using seed {}", self.symbol, seed);
        let mut rand = StdRng::seed_from_u64(seed);

        while !self.game.is_game_over() {
            self.game.wait_for_turn(self.symbol);
            if self.game.is_game_over() {
                return;
            }

            let row = rand.random_range(0..BOARD_SIZE);
            let col = rand.random_range(0..BOARD_SIZE);
            log::info!(
                "player {} attempting random move at ({}, {})",
                self.symbol,
                row,
                col
            );
            if self.play(row, col) {
                return;
            }
        }
    }

    /* Returns true when this attempt ended the game */
    fn play(&self, row: usize, col: usize) -> bool {
        match self.game.attempt_move(self.symbol, row, col) {
            MoveOutcome::Accepted(progress, board) => {
                println!("Current board:\n{}\n", board);
                match progress {
                    GameProgress::Continue => false,
                    GameProgress::Win => {
                        println!("Player {} wins!", self.symbol);
                        true
                    }
                    GameProgress::Draw => {
                        println!("Game ended in a draw.");
                        true
                    }
                }
            }
            MoveOutcome::Rejected(reason) => {
                log::info!(
                    "player {}: move ({}, {}) rejected: {}",
                    self.symbol,
                    row,
                    col,
                    reason
                );
                false
            }
        }
    }
}
