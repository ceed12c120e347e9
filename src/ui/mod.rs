//! Terminal UI: the 4x4 board, turn and score readouts, and the pacing delay
//! before the opponent answers.

mod app;
pub mod game_view;

pub use app::App;
