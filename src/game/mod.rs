//! Core game logic: the 4x4 board, marks, win detection and the game state
//! machine.

mod board;
mod player;
pub mod rules;
mod state;

pub use board::{Board, Cell, CELLS, SIZE};
pub use player::Mark;
pub use rules::{evaluate, winning_line, Evaluation, LINES};
pub use state::{GameOutcome, GameState, PlaceError, Placement};
