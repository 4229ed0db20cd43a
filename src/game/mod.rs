pub mod actor;
pub mod board;
pub mod state;

mod actor_test;

pub use actor::{Actor, Policy};
pub use board::{symbol_to_str, Bitboard, Board, Symbol, BOARD_SIZE};
pub use state::{GameProgress, GameState, MoveOutcome, RejectReason};
