use crate::game::Board;

/// Move policy for the computer-controlled side.
pub trait Opponent {
    /// Pick a cell to play on. Returns `None` only when the board has no empty
    /// cell left.
    fn choose_move(&mut self, board: &Board) -> Option<usize>;

    /// Display name
    fn name(&self) -> &str;
}
