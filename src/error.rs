use std::fmt;
use std::path::PathBuf;

use crate::board::{Player, Pos};

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// The position lies outside the 15x15 grid.
    OffBoard,
    /// The target cell already holds a stone.
    Occupied,
    /// The current position already has five in a row.
    GameWon(Player),
    /// Every cell is taken.
    BoardFull,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::OffBoard => f.write_str("position is off the board"),
            IllegalMoveReason::Occupied => f.write_str("cell is occupied"),
            IllegalMoveReason::GameWon(winner) => write!(f, "game already won by {winner}"),
            IllegalMoveReason::BoardFull => f.write_str("board is full"),
        }
    }
}

/// Errors returned by game operations. A rejected operation never changes state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("illegal move at {pos}: {reason}")]
    IllegalMove { pos: Pos, reason: IllegalMoveReason },

    #[error("history index {index} out of range (history length {len})")]
    OutOfRange { index: usize, len: usize },
}

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
