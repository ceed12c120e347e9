mod opponent;
mod random;

pub use opponent::Opponent;
pub use random::RandomOpponent;
