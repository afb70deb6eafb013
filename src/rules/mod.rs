//! Game rules for freestyle Gomoku on a 15x15 board
//!
//! The only rule with logic behind it is the win condition: five or more
//! stones in a row. Move legality (empty cell, game not decided) is enforced
//! by [`crate::game::GameState`].

pub mod win;

// Re-exports for convenient access
pub use win::{detect_winner, find_winning_line, WinningLine, WIN_LENGTH};
