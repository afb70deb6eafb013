//! Game state: snapshot history plus a pointer to the viewed move

use tracing::{debug, info};

use super::{Phase, Status};
use crate::board::{Board, Player, Pos};
use crate::error::{GameError, IllegalMoveReason};
use crate::rules::{detect_winner, find_winning_line, WinningLine};

/// Authoritative state of one game session.
///
/// `history[0]` is always the empty board and each later entry adds exactly
/// one stone to its predecessor. `current_move` indexes the snapshot being
/// shown and played from; it is always a valid index into `history`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Board>,
    current_move: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Place the current player's stone at `pos`.
    ///
    /// Any history past the current move is discarded before the new
    /// snapshot is appended.
    pub fn apply_move(&mut self, pos: Pos) -> Result<(), GameError> {
        let board = *self.current_snapshot();

        let rejected = match self.status() {
            _ if !pos.is_on_board() => Some(IllegalMoveReason::OffBoard),
            Status::Won(winner) => Some(IllegalMoveReason::GameWon(winner)),
            Status::Draw => Some(IllegalMoveReason::BoardFull),
            Status::Turn(_) if !board.is_empty(pos) => Some(IllegalMoveReason::Occupied),
            Status::Turn(_) => None,
        };
        if let Some(reason) = rejected {
            debug!(%pos, %reason, "move rejected");
            return Err(GameError::IllegalMove { pos, reason });
        }

        let player = self.current_player();
        let next = board.with_stone(pos, player);

        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;
        debug!(%pos, %player, move_index = self.current_move, "move applied");

        match self.status() {
            Status::Won(winner) => info!(%winner, moves = self.current_move, "five in a row"),
            Status::Draw => info!(moves = self.current_move, "board full, draw"),
            Status::Turn(_) => {}
        }
        Ok(())
    }

    /// View the position after `index` moves. History itself is kept.
    pub fn jump_to(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.history.len() {
            debug!(index, len = self.history.len(), "history jump rejected");
            return Err(GameError::OutOfRange {
                index,
                len: self.history.len(),
            });
        }
        self.current_move = index;
        debug!(index, "jumped to move");
        Ok(())
    }

    /// Step back one move; fails at the start of the game.
    pub fn undo(&mut self) -> Result<(), GameError> {
        match self.current_move.checked_sub(1) {
            Some(prev) => self.jump_to(prev),
            None => Err(GameError::OutOfRange {
                index: 0,
                len: self.history.len(),
            }),
        }
    }

    /// Back to a single empty board
    pub fn restart(&mut self) {
        self.history.clear();
        self.history.push(Board::new());
        self.current_move = 0;
        debug!("game restarted");
    }

    /// Player who wins if the side to move resigns.
    ///
    /// Does not touch the history; callers restart afterwards.
    pub fn resign(&self) -> Player {
        let winner = self.current_player().opponent();
        info!(resigning = %self.current_player(), %winner, "resignation");
        winner
    }

    /// Winner takes precedence over a full board.
    pub fn status(&self) -> Status {
        let board = self.current_snapshot();
        if let Some(winner) = detect_winner(board) {
            Status::Won(winner)
        } else if board.is_full() {
            Status::Draw
        } else {
            Status::Turn(self.current_player())
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.status().phase()
    }

    /// Black on even move indices, White on odd
    #[inline]
    pub fn current_player(&self) -> Player {
        Player::to_move(self.current_move)
    }

    #[inline]
    pub fn current_snapshot(&self) -> &Board {
        &self.history[self.current_move]
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn current_move_index(&self) -> usize {
        self.current_move
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Stone placed to reach the current snapshot
    pub fn last_move(&self) -> Option<Pos> {
        let prev = self.history.get(self.current_move.checked_sub(1)?)?;
        prev.diff(self.current_snapshot()).next()
    }

    /// Five-in-a-row on the current snapshot, for highlighting
    pub fn winning_line(&self) -> Option<WinningLine> {
        find_winning_line(self.current_snapshot())
    }

    /// Caption for the history list entry at `index`
    pub fn move_label(index: usize) -> String {
        if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{index}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Stone, TOTAL_CELLS};

    fn play(state: &mut GameState, cells: &[(u8, u8)]) {
        for &(r, c) in cells {
            state.apply_move(Pos::new(r, c)).unwrap();
        }
    }

    /// Checks the history invariants every test state must satisfy
    fn assert_history_consistent(state: &GameState) {
        assert!(state.current_move_index() < state.history_len());
        assert!(state.history()[0].is_board_empty());
        for (i, pair) in state.history().windows(2).enumerate() {
            let changed: Vec<Pos> = pair[0].diff(&pair[1]).collect();
            assert_eq!(changed.len(), 1, "snapshot {} adds more than one stone", i + 1);
            assert_eq!(pair[0].get(changed[0]), Stone::Empty);
            assert_eq!(pair[1].get(changed[0]), Player::to_move(i).stone());
        }
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.history_len(), 1);
        assert_eq!(state.current_move_index(), 0);
        assert_eq!(state.status(), Status::Turn(Player::Black));
        assert_eq!(state.phase(), Phase::InProgress);
        assert!(state.current_snapshot().is_board_empty());
        assert_eq!(state.last_move(), None);
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn test_first_move_passes_turn() {
        let mut state = GameState::new();
        state.apply_move(Pos::from_index(0)).unwrap();

        assert_eq!(state.status(), Status::Turn(Player::White));
        assert_eq!(state.current_snapshot().get(Pos::new(0, 0)), Stone::Black);
        assert_eq!(state.last_move(), Some(Pos::new(0, 0)));
        assert_history_consistent(&state);
    }

    #[test]
    fn test_horizontal_win() {
        let mut state = GameState::new();
        // Black on row 0, White on row 1
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3), (0, 4)]);

        assert_eq!(state.status(), Status::Won(Player::Black));
        assert_eq!(state.phase(), Phase::Won);
        let line = state.winning_line().unwrap();
        assert_eq!(line.positions[0], Pos::new(0, 0));
        assert_history_consistent(&state);
    }

    #[test]
    fn test_move_after_win_rejected() {
        let mut state = GameState::new();
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3), (0, 4)]);
        let before = state.clone();

        let err = state.apply_move(Pos::new(5, 5)).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                pos: Pos::new(5, 5),
                reason: IllegalMoveReason::GameWon(Player::Black),
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_draw_on_full_board() {
        let cells: Vec<Pos> = (0..TOTAL_CELLS).map(Pos::from_index).collect();
        let is_black = |p: &Pos| (p.col as usize + 2 * p.row as usize) % 4 < 2;
        let mut black = cells.iter().filter(|p| is_black(p));
        let mut white = cells.iter().filter(|p| !is_black(p));

        let mut state = GameState::new();
        for i in 0..TOTAL_CELLS {
            let next = if i % 2 == 0 { black.next() } else { white.next() };
            state.apply_move(*next.unwrap()).unwrap();
            if i + 1 < TOTAL_CELLS {
                assert!(matches!(state.status(), Status::Turn(_)));
            }
        }

        assert_eq!(state.status(), Status::Draw);
        assert_eq!(state.phase(), Phase::Draw);
        assert_eq!(state.history_len(), TOTAL_CELLS + 1);

        // Nothing left to click, but the draw itself is what blocks play
        let err = state.apply_move(Pos::new(0, 0)).unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalMove { reason: IllegalMoveReason::BoardFull, .. }
        ));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = GameState::new();
        play(&mut state, &[(7, 7), (7, 8)]);
        let before = state.clone();

        let err = state.apply_move(Pos::new(7, 7)).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                pos: Pos::new(7, 7),
                reason: IllegalMoveReason::Occupied,
            }
        );
        assert_eq!(state, before);
        assert_eq!(state.history_len(), 3);
        assert_eq!(state.current_move_index(), 2);
    }

    #[test]
    fn test_off_board_move_rejected() {
        let mut state = GameState::new();
        play(&mut state, &[(7, 7)]);
        let before = state.clone();

        // Column 15 would alias into the next row, row 20 past the bitboard
        for pos in [Pos { row: 0, col: 15 }, Pos { row: 14, col: 15 }, Pos { row: 20, col: 0 }] {
            let err = state.apply_move(pos).unwrap_err();
            assert_eq!(
                err,
                GameError::IllegalMove {
                    pos,
                    reason: IllegalMoveReason::OffBoard,
                }
            );
            assert_eq!(state, before);
        }
        assert_eq!(state.current_snapshot().get(Pos::new(1, 0)), Stone::Empty);
        assert_eq!(state.current_snapshot().stone_count(), 1);
        assert!(!state.current_snapshot().is_full());
    }

    #[test]
    fn test_branch_from_past_truncates() {
        let mut state = GameState::new();
        for i in 0..10u8 {
            state.apply_move(Pos::new(i, i % 2)).unwrap();
        }
        assert_eq!(state.history_len(), 11);

        state.jump_to(3).unwrap();
        assert_eq!(state.history_len(), 11);
        assert_eq!(state.current_player(), Player::White);

        state.apply_move(Pos::new(14, 14)).unwrap();
        assert_eq!(state.history_len(), 5);
        assert_eq!(state.current_move_index(), 4);
        assert_eq!(state.current_snapshot().get(Pos::new(14, 14)), Stone::White);
        // Moves 4..10 of the abandoned line are gone
        assert_eq!(state.current_snapshot().get(Pos::new(4, 0)), Stone::Empty);
        assert_history_consistent(&state);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut state = GameState::new();
        play(&mut state, &[(0, 0), (0, 1)]);

        let err = state.jump_to(3).unwrap_err();
        assert_eq!(err, GameError::OutOfRange { index: 3, len: 3 });
        assert_eq!(state.current_move_index(), 2);

        state.jump_to(0).unwrap();
        assert_eq!(state.status(), Status::Turn(Player::Black));
        state.jump_to(2).unwrap();
        assert_eq!(state.last_move(), Some(Pos::new(0, 1)));
    }

    #[test]
    fn test_jump_back_from_win_reopens_play() {
        let mut state = GameState::new();
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3), (0, 4)]);
        assert!(state.status().is_over());

        state.jump_to(8).unwrap();
        assert_eq!(state.status(), Status::Turn(Player::Black));
        state.apply_move(Pos::new(5, 5)).unwrap();
        assert_eq!(state.history_len(), 10);
        assert_eq!(state.status(), Status::Turn(Player::White));
    }

    #[test]
    fn test_undo() {
        let mut state = GameState::new();
        assert!(matches!(state.undo(), Err(GameError::OutOfRange { .. })));

        play(&mut state, &[(3, 3), (4, 4)]);
        state.undo().unwrap();
        assert_eq!(state.current_move_index(), 1);
        assert_eq!(state.history_len(), 3);
        assert_eq!(state.current_player(), Player::White);

        state.undo().unwrap();
        assert_eq!(state.current_move_index(), 0);
        assert!(state.undo().is_err());
        assert_eq!(state.current_move_index(), 0);
    }

    #[test]
    fn test_restart_from_any_state() {
        let mut state = GameState::new();
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3), (0, 4)]);
        state.jump_to(4).unwrap();

        state.restart();
        assert_eq!(state, GameState::new());
        assert_eq!(state.status(), Status::Turn(Player::Black));
    }

    #[test]
    fn test_resign_awards_opponent() {
        let mut state = GameState::new();
        assert_eq!(state.resign(), Player::White);

        play(&mut state, &[(7, 7)]);
        let before = state.clone();
        assert_eq!(state.resign(), Player::Black);
        assert_eq!(state, before);
    }

    #[test]
    fn test_status_is_idempotent() {
        let mut state = GameState::new();
        play(&mut state, &[(7, 7), (8, 8), (6, 6)]);
        assert_eq!(state.status(), state.status());
    }

    #[test]
    fn test_move_labels() {
        assert_eq!(GameState::move_label(0), "Go to game start");
        assert_eq!(GameState::move_label(7), "Go to move #7");
    }
}
