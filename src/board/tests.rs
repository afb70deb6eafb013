use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
}

#[test]
fn test_stone_player_mapping() {
    assert_eq!(Stone::Black.player(), Some(Player::Black));
    assert_eq!(Stone::White.player(), Some(Player::White));
    assert_eq!(Stone::Empty.player(), None);
    assert_eq!(Player::Black.stone(), Stone::Black);
    assert_eq!(Player::White.stone(), Stone::White);
}

#[test]
fn test_player_to_move_alternates() {
    assert_eq!(Player::to_move(0), Player::Black);
    assert_eq!(Player::to_move(1), Player::White);
    assert_eq!(Player::to_move(14), Player::Black);
    assert_eq!(Player::to_move(15), Player::White);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2.row, 7);
    assert_eq!(pos2.col, 7);
}

#[test]
fn test_pos_try_from_index() {
    assert_eq!(Pos::try_from_index(0), Some(Pos::new(0, 0)));
    assert_eq!(Pos::try_from_index(224), Some(Pos::new(14, 14)));
    assert_eq!(Pos::try_from_index(225), None);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_pos_display() {
    assert_eq!(Pos::new(0, 0).to_string(), "A15");
    assert_eq!(Pos::new(14, 14).to_string(), "O1");
    assert_eq!(Pos::new(7, 7).to_string(), "H8");
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 14).to_index(), 14);
    assert_eq!(Pos::new(14, 0).to_index(), 210);
    assert_eq!(Pos::new(14, 14).to_index(), 224);
}

#[test]
fn test_with_stone_leaves_original_untouched() {
    let empty = Board::new();
    let next = empty.with_stone(Pos::new(3, 4), Player::Black);

    assert!(empty.is_board_empty());
    assert_eq!(next.get(Pos::new(3, 4)), Stone::Black);
    assert_eq!(next.stone_count(), 1);
    assert_eq!(next.count(Stone::Empty), 224);
}

#[test]
fn test_with_stone_never_overwrites() {
    let board = Board::new().with_stone(Pos::new(5, 5), Player::Black);
    let again = board.with_stone(Pos::new(5, 5), Player::White);

    assert_eq!(again, board);
    assert_eq!(again.get(Pos::new(5, 5)), Stone::Black);
    assert_eq!(again.count(Stone::White), 0);
}

#[test]
fn test_off_board_positions() {
    let board = Board::new().with_stone(Pos::new(1, 0), Player::Black);
    let aliasing = Pos { row: 0, col: 15 };
    let past_end = Pos { row: 20, col: 0 };

    assert!(!aliasing.is_on_board());
    assert!(!past_end.is_on_board());
    assert!(Pos::new(14, 14).is_on_board());

    // Reads never alias into the next row and never index past the bitset
    assert_eq!(board.get(aliasing), Stone::Empty);
    assert_eq!(board.get(past_end), Stone::Empty);
    assert_eq!(board.with_stone(aliasing, Player::White), board);
    assert_eq!(board.with_stone(Pos { row: 14, col: 15 }, Player::White), board);
    assert_eq!(board.with_stone(past_end, Player::White), board);
    assert_eq!(past_end.to_string(), "(20, 0)");
}

#[test]
fn test_board_diff_single_cell() {
    let before = Board::new().with_stone(Pos::new(0, 0), Player::Black);
    let after = before.with_stone(Pos::new(14, 14), Player::White);

    let diff: Vec<Pos> = before.diff(&after).collect();
    assert_eq!(diff, vec![Pos::new(14, 14)]);
    assert_eq!(after.diff(&after).count(), 0);
}

#[test]
fn test_full_board() {
    let mut board = Board::new();
    for idx in 0..TOTAL_CELLS {
        assert!(!board.is_full());
        board = board.with_stone(Pos::from_index(idx), Player::to_move(idx));
    }
    assert!(board.is_full());
    assert_eq!(board.count(Stone::Black), 113);
    assert_eq!(board.count(Stone::White), 112);
}

#[test]
fn test_bitboard_iter_ones_ascending() {
    let bb = Bitboard::new()
        .with(Pos::new(14, 14))
        .with(Pos::new(0, 3))
        .with(Pos::new(4, 4));
    let found: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(found, vec![Pos::new(0, 3), Pos::new(4, 4), Pos::new(14, 14)]);
    assert_eq!(bb.count(), 3);
}
