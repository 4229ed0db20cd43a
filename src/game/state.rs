use std::fmt::{self, Display};
use std::sync::{Condvar, Mutex};

use crate::game::board::{Board, Symbol, BOARD_SIZE};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameProgress {
    Continue,
    Win,
    Draw,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RejectReason {
    OutOfBounds,
    Occupied,
    GameOver,
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::OutOfBounds => write!(f, "position out of bounds"),
            RejectReason::Occupied => write!(f, "position already occupied"),
            RejectReason::GameOver => write!(f, "game is already over"),
        }
    }
}

/// Result of a single move attempt. An accepted move carries the board as it
/// stood right after the write, so callers can render the exact snapshot this
/// move produced without re-locking.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Accepted(GameProgress, Board),
    Rejected(RejectReason),
}

struct TurnState {
    board: Board,
    turn: Symbol,
    game_over: bool,
    winner: Option<Symbol>,
}

/// Shared state of one game and the turn-coordination protocol around it.
///
/// A single mutex guards the board together with the turn marker and the
/// game-over flag, so a cell write and its turn toggle (or terminal
/// transition) are atomic as one unit. The condvar is broadcast on every turn
/// toggle and on the terminal transition; waiters re-check their predicate in
/// a loop, which also covers spurious wakes.
///
/// Note that [`attempt_move`](Self::attempt_move) does not verify the caller
/// actually holds the turn. Turn correctness is cooperative: each actor is
/// expected to block in [`wait_for_turn`](Self::wait_for_turn) first.
pub struct GameState {
    state: Mutex<TurnState>,
    turn_cv: Condvar,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(TurnState {
                board: Board::new(),
                turn: Symbol::X,
                game_over: false,
                winner: None,
            }),
            turn_cv: Condvar::new(),
        }
    }

    pub fn attempt_move(&self, player: Symbol, row: usize, col: usize) -> MoveOutcome {
        let mut state = self.state.lock().unwrap();

        if state.game_over {
            return MoveOutcome::Rejected(RejectReason::GameOver);
        }
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return MoveOutcome::Rejected(RejectReason::OutOfBounds);
        }
        if state.board.tile(row, col).is_some() {
            return MoveOutcome::Rejected(RejectReason::Occupied);
        }

        state.board.set_tile(player, row, col);

        /* Win takes priority over draw on a move that does both */
        if state.board.has_line(player) {
            state.game_over = true;
            state.winner = Some(player);
            self.turn_cv.notify_all();
            return MoveOutcome::Accepted(GameProgress::Win, state.board);
        }
        if state.board.is_full() {
            state.game_over = true;
            self.turn_cv.notify_all();
            return MoveOutcome::Accepted(GameProgress::Draw, state.board);
        }

        state.turn = state.turn.opposite();
        self.turn_cv.notify_all();
        MoveOutcome::Accepted(GameProgress::Continue, state.board)
    }

    /// Blocks until it is `player`'s turn or the game is over.
    pub fn wait_for_turn(&self, player: Symbol) {
        let mut state = self.state.lock().unwrap();
        while state.turn != player && !state.game_over {
            state = self.turn_cv.wait(state).unwrap();
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.state.lock().unwrap().game_over
    }

    pub fn turn(&self) -> Symbol {
        self.state.lock().unwrap().turn
    }

    pub fn winner(&self) -> Option<Symbol> {
        self.state.lock().unwrap().winner
    }

    pub fn board(&self) -> Board {
        self.state.lock().unwrap().board
    }
}
