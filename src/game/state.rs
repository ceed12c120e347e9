use tracing::debug;

use super::rules::{self, Evaluation};
use super::{Board, Mark, CELLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Mark),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("cell {0} is not on the board")]
    InvalidCell(usize),

    #[error("cell {0} is already occupied")]
    CellOccupied(usize),

    #[error("game is already over")]
    GameOver,
}

/// A move that was applied: where, by whom, and what it led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub mark: Mark,
    pub outcome: Option<GameOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Mark,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Mark::X, // X starts
            outcome: None,
        }
    }

    /// Mark to move next. After a terminal move this is the mark that ended the game.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_cell_empty(&self, index: usize) -> bool {
        self.board.is_empty(index)
    }

    /// Legal cells (empty once the game is over)
    pub fn empty_cells(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.empty_cells()
    }

    /// Put the current player's mark on `index` and evaluate the result.
    ///
    /// Rejected moves leave the state untouched.
    pub fn place(&mut self, index: usize) -> Result<Placement, PlaceError> {
        if index >= CELLS {
            return Err(PlaceError::InvalidCell(index));
        }
        if self.is_over() {
            return Err(PlaceError::GameOver);
        }

        let mark = self.current_player;
        if !self.board.set(index, mark) {
            return Err(PlaceError::CellOccupied(index));
        }

        self.outcome = match rules::evaluate(&self.board, mark) {
            Evaluation::Win(winner) => Some(GameOutcome::Winner(winner)),
            Evaluation::Draw => Some(GameOutcome::Draw),
            Evaluation::Ongoing => None,
        };

        if self.outcome.is_none() {
            self.current_player = mark.other();
        }

        debug!(index, %mark, outcome = ?self.outcome, "placed mark");

        Ok(Placement {
            index,
            mark,
            outcome: self.outcome,
        })
    }

    /// Back to the freshly created state
    pub fn reset(&mut self) {
        *self = GameState::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
