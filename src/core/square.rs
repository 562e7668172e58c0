use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 8;

/// A square that is guaranteed to be on the 8×8 board.
///
/// Row 0 is White's back rank, row 7 is Red's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Panics if `(row, col)` is off the board: callers are expected to clamp input first.
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "square ({row}, {col}) is off the {BOARD_SIZE}x{BOARD_SIZE} board"
        );
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    #[inline]
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then(|| Self {
            row: row as u8,
            col: col as u8,
        })
    }

    #[inline]
    pub fn from_coord(c: Coord) -> Option<Self> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        Self::try_new(c.row as usize, c.col as usize)
    }

    #[inline]
    pub fn coord(self) -> Coord {
        Coord::new(self.row as i32, self.col as i32)
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Pieces only ever stand on dark squares.
    #[inline]
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
