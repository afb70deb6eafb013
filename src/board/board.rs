//! Immutable board snapshot

use super::bitboard::Bitboard;
use super::{Player, Pos, Stone, TOTAL_CELLS};

/// Board occupancy at one point in the game.
///
/// Snapshots are `Copy` and never modified once built: placing a stone
/// goes through [`Board::with_stone`], which returns a new snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    /// Empty board
    pub const fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get stone at position. Off-board positions read as Empty.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if !pos.is_on_board() {
            Stone::Empty
        } else if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// New snapshot with `player`'s stone at `pos`.
    ///
    /// Off-board positions and occupied cells leave the copy unchanged;
    /// callers validate moves first.
    #[must_use]
    pub fn with_stone(&self, pos: Pos, player: Player) -> Board {
        let mut next = *self;
        if !pos.is_on_board() || !self.is_empty(pos) {
            return next;
        }
        match player {
            Player::Black => next.black = next.black.with(pos),
            Player::White => next.white = next.white.with(pos),
        }
        next
    }

    /// Number of cells holding `stone`
    pub fn count(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black.count(),
            Stone::White => self.white.count(),
            Stone::Empty => TOTAL_CELLS as u32 - self.stone_count(),
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Every cell occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Positions whose contents differ between the two snapshots
    pub fn diff(&self, other: &Board) -> impl Iterator<Item = Pos> {
        let occupied = (self.black ^ other.black) | (self.white ^ other.white);
        occupied.iter_ones()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        (0..TOTAL_CELLS).map(move |idx| {
            let pos = Pos::from_index(idx);
            (pos, self.get(pos))
        })
    }
}
