use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::opponent::Opponent;
use crate::game::Board;

/// An opponent that picks uniformly at random among the empty cells.
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    pub fn new() -> Self {
        RandomOpponent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sequence of choices for a given seed
    pub fn seeded(seed: u64) -> Self {
        RandomOpponent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn choose_move(&mut self, board: &Board) -> Option<usize> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..empty.len());
        Some(empty[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
