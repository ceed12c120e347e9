//! Win detection over the ten fixed lines of the 4x4 board.

use super::{Board, Cell, Mark};

/// Every length-4 line on the board: 4 rows, 4 columns, 2 diagonals.
pub const LINES: [[usize; 4]; 10] = [
    // Rows
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [8, 9, 10, 11],
    [12, 13, 14, 15],
    // Columns
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    // Diagonals
    [0, 5, 10, 15],
    [3, 6, 9, 12],
];

/// Result of evaluating a board for one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    Win(Mark),
    Draw,
    Ongoing,
}

/// First line fully held by `mark`, if any.
pub fn winning_line(board: &Board, mark: Mark) -> Option<[usize; 4]> {
    LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&i| board.get(i) == Some(Cell::Taken(mark))))
}

/// Decide whether `mark` has won, the board is drawn, or play continues.
///
/// Only the board contents matter; the order the moves were played in does not.
pub fn evaluate(board: &Board, mark: Mark) -> Evaluation {
    if winning_line(board, mark).is_some() {
        Evaluation::Win(mark)
    } else if board.is_full() {
        Evaluation::Draw
    } else {
        Evaluation::Ongoing
    }
}
