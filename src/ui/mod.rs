//! GUI module for the Gomoku game
//!
//! Presentation only: every user action is forwarded to [`crate::GameState`]
//! and the board is redrawn from its accessors each frame.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
