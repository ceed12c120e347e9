//! A play session: one game at a time, a mode, and the running score.
//!
//! This is the call/return surface the presentation layer drives. It owns the
//! game state and the opponent, applies moves, and tallies every finished game
//! exactly once.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::ai::{Opponent, RandomOpponent};
use crate::error::{MoveRejection, OpponentMoveError, UnknownMode};
use crate::game::{GameState, Mark, Placement};
use crate::score::ScoreTally;

/// Mark played by the human in human-vs-ai mode.
pub const HUMAN_MARK: Mark = Mark::X;
/// Mark played by the opponent in human-vs-ai mode.
pub const OPPONENT_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    HumanVsAi,
}

impl GameMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "human-vs-human",
            GameMode::HumanVsAi => "human-vs-ai",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human-vs-human" => Ok(GameMode::HumanVsHuman),
            "human-vs-ai" => Ok(GameMode::HumanVsAi),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

pub struct Session {
    state: GameState,
    mode: GameMode,
    score: ScoreTally,
    opponent: Box<dyn Opponent>,
}

impl Session {
    /// New session with a randomly seeded opponent
    pub fn new(mode: GameMode) -> Self {
        Self::with_opponent(mode, Box::new(RandomOpponent::new()))
    }

    pub fn with_opponent(mode: GameMode, opponent: Box<dyn Opponent>) -> Self {
        info!(%mode, opponent = opponent.name(), "starting session");
        Session {
            state: GameState::new(),
            mode,
            score: ScoreTally::new(),
            opponent,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> ScoreTally {
        self.score
    }

    pub fn opponent_name(&self) -> &str {
        self.opponent.name()
    }

    /// Fresh board in the given mode. The score carries over.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self, mode: GameMode) {
        self.state.reset();
        self.mode = mode;
        info!(%mode, "new game");
    }

    /// New game in the current mode
    pub fn restart(&mut self) {
        self.start_new_game(self.mode);
    }

    /// Switching mode always starts a new game, even if the mode is unchanged.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.start_new_game(mode);
    }

    /// True when the next move belongs to the opponent.
    pub fn awaiting_opponent(&self) -> bool {
        self.mode == GameMode::HumanVsAi
            && !self.state.is_over()
            && self.state.current_player() == OPPONENT_MARK
    }

    /// Apply a human move for whichever mark is to play.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: usize) -> Result<Placement, MoveRejection> {
        if self.state.is_over() {
            debug!("move ignored, game is over");
            return Err(MoveRejection::GameOver);
        }
        if self.awaiting_opponent() {
            debug!("move ignored, opponent to play");
            return Err(MoveRejection::OpponentToMove);
        }

        let placement = self.state.place(index).map_err(|e| {
            debug!(error = %e, "move rejected");
            MoveRejection::from(e)
        })?;
        self.settle(&placement);
        Ok(placement)
    }

    /// Let the opponent play its move. Only valid in human-vs-ai mode on the
    /// opponent's turn.
    #[instrument(skip(self))]
    pub fn request_opponent_move(&mut self) -> Result<Placement, OpponentMoveError> {
        if self.mode != GameMode::HumanVsAi {
            warn!("opponent move requested in human-vs-human mode");
            return Err(OpponentMoveError::WrongMode);
        }
        if self.state.is_over() {
            warn!("opponent move requested after game over");
            return Err(OpponentMoveError::GameOver);
        }
        if self.state.current_player() != OPPONENT_MARK {
            warn!("opponent move requested out of turn");
            return Err(OpponentMoveError::OutOfTurn);
        }

        let index = self
            .opponent
            .choose_move(self.state.board())
            .ok_or(OpponentMoveError::NoLegalMove)?;
        let placement = self.state.place(index)?;
        self.settle(&placement);
        Ok(placement)
    }

    fn settle(&mut self, placement: &Placement) {
        if let Some(outcome) = placement.outcome {
            self.score.record(outcome);
            info!(
                ?outcome,
                wins_x = self.score.wins_x(),
                wins_o = self.score.wins_o(),
                ties = self.score.ties(),
                "game over"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Cell, GameOutcome};

    /// Plays the lowest empty cell, so tests can predict the opponent.
    struct FirstEmpty;

    impl Opponent for FirstEmpty {
        fn choose_move(&mut self, board: &Board) -> Option<usize> {
            board.empty_cells().first().copied()
        }

        fn name(&self) -> &str {
            "FirstEmpty"
        }
    }

    /// Always tries the same cell, legal or not.
    struct Stubborn(usize);

    impl Opponent for Stubborn {
        fn choose_move(&mut self, _board: &Board) -> Option<usize> {
            Some(self.0)
        }

        fn name(&self) -> &str {
            "Stubborn"
        }
    }

    fn vs_first_empty() -> Session {
        Session::with_opponent(GameMode::HumanVsAi, Box::new(FirstEmpty))
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("human-vs-human".parse::<GameMode>(), Ok(GameMode::HumanVsHuman));
        assert_eq!("human-vs-ai".parse::<GameMode>(), Ok(GameMode::HumanVsAi));
        assert_eq!(
            "robot".parse::<GameMode>(),
            Err(UnknownMode("robot".to_string()))
        );
        assert_eq!(GameMode::HumanVsAi.to_string(), "human-vs-ai");
    }

    #[test]
    fn test_human_vs_human_alternates() {
        let mut session = Session::new(GameMode::HumanVsHuman);
        assert_eq!(session.submit_move(0).unwrap().mark, Mark::X);
        assert_eq!(session.submit_move(1).unwrap().mark, Mark::O);
        assert_eq!(session.submit_move(2).unwrap().mark, Mark::X);
        assert!(!session.awaiting_opponent());
    }

    #[test]
    fn test_second_submit_on_same_cell_is_rejected() {
        let mut session = Session::new(GameMode::HumanVsHuman);
        session.submit_move(5).unwrap();
        let board = *session.state().board();

        assert_eq!(session.submit_move(5), Err(MoveRejection::CellOccupied(5)));
        assert_eq!(*session.state().board(), board);
        assert_eq!(session.state().current_player(), Mark::O);
    }

    #[test]
    fn test_opponent_replies_in_ai_mode() {
        let mut session = vs_first_empty();
        let human = session.submit_move(5).unwrap();
        assert_eq!(human.mark, HUMAN_MARK);
        assert!(session.awaiting_opponent());

        let reply = session.request_opponent_move().unwrap();
        assert_eq!(reply.mark, OPPONENT_MARK);
        assert_eq!(reply.index, 0);
        assert_eq!(session.state().board().get(0), Some(Cell::Taken(Mark::O)));
        assert!(!session.awaiting_opponent());
    }

    #[test]
    fn test_human_cannot_move_for_opponent() {
        let mut session = vs_first_empty();
        session.submit_move(5).unwrap();
        let before = session.state().clone();

        assert_eq!(session.submit_move(6), Err(MoveRejection::OpponentToMove));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_opponent_move_out_of_turn() {
        let mut session = vs_first_empty();
        assert_eq!(
            session.request_opponent_move(),
            Err(OpponentMoveError::OutOfTurn)
        );

        let mut session = Session::new(GameMode::HumanVsHuman);
        session.submit_move(0).unwrap();
        assert_eq!(
            session.request_opponent_move(),
            Err(OpponentMoveError::WrongMode)
        );
    }

    #[test]
    fn test_opponent_illegal_move_is_reported() {
        let mut session = Session::with_opponent(GameMode::HumanVsAi, Box::new(Stubborn(3)));
        session.submit_move(3).unwrap();
        assert!(matches!(
            session.request_opponent_move(),
            Err(OpponentMoveError::IllegalMove(_))
        ));
        assert!(session.awaiting_opponent());
    }

    #[test]
    fn test_human_wins_against_opponent() {
        // FirstEmpty answers 0, 1, 2 while the human builds column 3
        let mut session = vs_first_empty();
        for index in [3, 7, 11] {
            session.submit_move(index).unwrap();
            session.request_opponent_move().unwrap();
        }
        let last = session.submit_move(15).unwrap();

        assert_eq!(last.outcome, Some(GameOutcome::Winner(Mark::X)));
        assert_eq!(
            session.request_opponent_move(),
            Err(OpponentMoveError::GameOver)
        );
        assert_eq!(session.score().wins_x(), 1);
    }

    #[test]
    fn test_opponent_can_win() {
        // Opponent fills the top row; the human never blocks it
        let mut session = vs_first_empty();
        for index in [4, 5, 6] {
            session.submit_move(index).unwrap();
            session.request_opponent_move().unwrap();
        }
        session.submit_move(12).unwrap();
        let last = session.request_opponent_move().unwrap();

        assert_eq!(last.outcome, Some(GameOutcome::Winner(Mark::O)));
        assert_eq!(session.score().wins_o(), 1);
        assert_eq!(session.submit_move(13), Err(MoveRejection::GameOver));
    }

    #[test]
    fn test_score_counts_once_and_survives_new_game() {
        let mut session = Session::new(GameMode::HumanVsHuman);
        for index in [0, 4, 1, 5, 2, 6, 3] {
            session.submit_move(index).unwrap();
        }
        // Rejected moves after the end must not count again
        let _ = session.submit_move(9);
        let _ = session.submit_move(10);
        assert_eq!(session.score().wins_x(), 1);

        session.restart();
        assert_eq!(session.state(), &GameState::new());
        assert_eq!(session.score().wins_x(), 1);
        assert_eq!(session.score().games(), 1);
    }

    #[test]
    fn test_set_mode_starts_new_game() {
        let mut session = Session::new(GameMode::HumanVsHuman);
        session.submit_move(0).unwrap();
        session.set_mode(GameMode::HumanVsAi);

        assert_eq!(session.mode(), GameMode::HumanVsAi);
        assert_eq!(session.state(), &GameState::new());

        session.submit_move(0).unwrap();
        session.set_mode(GameMode::HumanVsAi);
        assert_eq!(session.state(), &GameState::new());
    }
}
