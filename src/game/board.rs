use serde::{Deserialize, Serialize};

use super::Mark;

pub const SIZE: usize = 4;
pub const CELLS: usize = SIZE * SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Taken(Mark),
}

/// 4x4 board in row-major order: index `i` is row `i / 4`, column `i % 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Get the cell at an index, `None` when out of range
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Get the cell at a (row, col) position
    pub fn at(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= SIZE || col >= SIZE {
            return None;
        }
        self.get(row * SIZE + col)
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index) == Some(Cell::Empty)
    }

    /// Put a mark on an empty cell. Occupied and out-of-range cells are left
    /// untouched and reported back as `false`.
    pub fn set(&mut self, index: usize, mark: Mark) -> bool {
        if !self.is_empty(index) {
            return false;
        }
        self.cells[index] = Cell::Taken(mark);
        true
    }

    /// Indices of all empty cells, ascending
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.is_empty(i)).collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Taken(mark)).count()
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
