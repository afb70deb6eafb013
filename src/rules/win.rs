//! Win condition checking for freestyle Gomoku
//!
//! A player wins with five or more of their stones in an unbroken line,
//! horizontally, vertically or along either diagonal. Overlines count.
//!
//! A full board without such a line is a draw, but that is decided by the
//! game state, not here.

use crate::board::{Board, Player, Pos, Stone};

/// Stones needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 directions), in scan order
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// A completed five: who made it and where it lies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub winner: Player,
    pub positions: [Pos; WIN_LENGTH],
}

/// Check for a winner on a board snapshot.
///
/// Returns `Some(Player)` if either side has five in a row, `None` otherwise.
pub fn detect_winner(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|line| line.winner)
}

/// Find the first five-in-a-row on the board.
///
/// Start cells are scanned in row-major order and, for each one, the four
/// directions in the order horizontal, vertical, diagonal, anti-diagonal.
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    if board.stone_count() < WIN_LENGTH as u32 {
        return None;
    }

    for (start, stone) in board.cells() {
        let Some(player) = stone.player() else {
            continue;
        };
        for &dir in &DIRECTIONS {
            if let Some(positions) = run_from(board, start, stone, dir) {
                return Some(WinningLine { winner: player, positions });
            }
        }
    }
    None
}

/// Walk five cells from `start` along `dir`.
///
/// Gives up at the first cell that is off the board, empty, or holds a
/// different stone. Off-board checks are done on (row, col) so diagonal
/// runs never wrap across a row edge.
fn run_from(board: &Board, start: Pos, stone: Stone, (dr, dc): (i32, i32)) -> Option<[Pos; WIN_LENGTH]> {
    let mut line = [start; WIN_LENGTH];

    for (i, slot) in line.iter_mut().enumerate().skip(1) {
        let r = start.row as i32 + dr * i as i32;
        let c = start.col as i32 + dc * i as i32;
        if !Pos::is_valid(r, c) {
            return None;
        }
        let pos = Pos::new(r as u8, c as u8);
        if board.get(pos) != stone {
            return None;
        }
        *slot = pos;
    }

    Some(line)
}
