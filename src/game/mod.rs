//! Turn and history state machine

mod state;

pub use state::GameState;

use crate::board::Player;

/// What the current position means for the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// No winner, free cells left; `Player` is to move.
    Turn(Player),
    /// Five in a row on the current snapshot.
    Won(Player),
    /// Board full without five in a row.
    Draw,
}

impl Status {
    /// Checks if the game is over.
    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::Turn(_))
    }

    pub fn phase(&self) -> Phase {
        match self {
            Status::Turn(_) => Phase::InProgress,
            Status::Won(_) => Phase::Won,
            Status::Draw => Phase::Draw,
        }
    }
}

/// Coarse game progress, without the player attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    InProgress,
    Won,
    Draw,
}
