//! Core Connect Four rules: grid with gravity, line-of-four detection, and
//! the game state machine that applies moves and decides win or tie.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, DropError, CONNECT};
pub use player::{PlayerId, PlayerLabels};
pub use state::{GameState, GameStatus, MoveError, MoveOutcome, DEFAULT_HEIGHT, DEFAULT_WIDTH};
