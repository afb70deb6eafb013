//! Two-player Gomoku with move history
//!
//! Freestyle five-in-a-row on a 15x15 board:
//! - Black moves first, players alternate
//! - Five or more stones in a row wins (overlines allowed)
//! - A full board with no five is a draw
//! - Any earlier position can be revisited; playing from it discards the
//!   abandoned continuation
//!
//! # Architecture
//!
//! - [`board`]: Stones, positions and immutable board snapshots
//! - [`rules`]: Win detection
//! - [`game`]: Snapshot history and the turn/status state machine
//! - [`error`]: Error types
//! - [`config`]: TOML configuration for the GUI
//! - [`ui`]: egui front end driving [`GameState`]
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameState, Player, Pos, Status};
//!
//! let mut game = GameState::new();
//! game.apply_move(Pos::new(7, 7)).unwrap();
//! assert_eq!(game.status(), Status::Turn(Player::White));
//!
//! // Occupied cells are refused and leave the game untouched
//! assert!(game.apply_move(Pos::new(7, 7)).is_err());
//! assert_eq!(game.history_len(), 2);
//!
//! game.undo().unwrap();
//! assert_eq!(game.current_move_index(), 0);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
pub use error::{GameError, IllegalMoveReason};
pub use game::{GameState, Phase, Status};
pub use rules::{detect_winner, find_winning_line, WinningLine};
