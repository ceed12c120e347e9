use std::path::PathBuf;

use crate::game::PlaceError;

/// Why a move submitted through a session was not applied. None of these end
/// the session; the caller simply ignores the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("cell {0} is not on the board")]
    InvalidCell(usize),

    #[error("cell {0} is already occupied")]
    CellOccupied(usize),

    #[error("game is already over")]
    GameOver,

    #[error("waiting for the opponent to move")]
    OpponentToMove,
}

impl MoveRejection {
    /// Stable identifier reported to the presentation layer
    pub fn code(&self) -> &'static str {
        match self {
            MoveRejection::InvalidCell(_) => "invalid_cell",
            MoveRejection::CellOccupied(_) => "cell_occupied",
            MoveRejection::GameOver => "game_already_over",
            MoveRejection::OpponentToMove => "opponent_to_move",
        }
    }
}

impl From<PlaceError> for MoveRejection {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::InvalidCell(i) => MoveRejection::InvalidCell(i),
            PlaceError::CellOccupied(i) => MoveRejection::CellOccupied(i),
            PlaceError::GameOver => MoveRejection::GameOver,
        }
    }
}

/// Contract violations when asking the opponent to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OpponentMoveError {
    #[error("no opponent in human-vs-human mode")]
    WrongMode,

    #[error("it is not the opponent's turn")]
    OutOfTurn,

    #[error("game is already over")]
    GameOver,

    #[error("opponent chose an illegal move: {0}")]
    IllegalMove(#[from] PlaceError),

    #[error("opponent found no legal move")]
    NoLegalMove,
}

impl OpponentMoveError {
    pub fn code(&self) -> &'static str {
        match self {
            OpponentMoveError::WrongMode
            | OpponentMoveError::OutOfTurn
            | OpponentMoveError::GameOver => "opponent_move_out_of_turn",
            OpponentMoveError::IllegalMove(_) => "opponent_illegal_move",
            OpponentMoveError::NoLegalMove => "opponent_no_legal_move",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game mode '{0}' (expected 'human-vs-human' or 'human-vs-ai')")]
pub struct UnknownMode(pub String);

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LogInitError {
    #[error("failed to open log file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to install log subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}
