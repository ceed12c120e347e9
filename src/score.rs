use crate::game::{GameOutcome, Mark};

/// Running tally of finished games for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTally {
    wins_x: u32,
    wins_o: u32,
    ties: u32,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(Mark::X) => self.wins_x += 1,
            GameOutcome::Winner(Mark::O) => self.wins_o += 1,
            GameOutcome::Draw => self.ties += 1,
        }
    }

    pub fn wins_x(&self) -> u32 {
        self.wins_x
    }

    pub fn wins_o(&self) -> u32 {
        self.wins_o
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.wins_x,
            Mark::O => self.wins_o,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins_x + self.wins_o + self.ties
    }
}
