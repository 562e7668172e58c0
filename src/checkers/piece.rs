use serde::{Deserialize, Serialize};

use crate::core::coord::{Coord, DIAGONAL_STEPS};
use crate::core::square::{Square, BOARD_SIZE};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Starts on rows 5..=7 and moves towards row 0.
    Red,
    /// Starts on rows 0..=2 and moves towards row 7.
    White,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Red, Side::White];

    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::Red => Side::White,
            Side::White => Side::Red,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::White => 1,
        }
    }

    /// Row delta of a forward step.
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Side::Red => -1,
            Side::White => 1,
        }
    }

    /// The row on which this side's men are crowned.
    #[inline]
    pub fn promotion_row(self) -> usize {
        match self {
            Side::Red => 0,
            Side::White => BOARD_SIZE - 1,
        }
    }

    /// Rows holding this side's men in the standard layout.
    pub fn home_rows(self) -> std::ops::RangeInclusive<usize> {
        match self {
            Side::Red => 5..=7,
            Side::White => 0..=2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Man,
    King,
}

/// A piece together with the square it stands on.
///
/// The board is the authority for `square`; it rewrites the field on every relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub rank: Rank,
    pub square: Square,
}

impl Piece {
    #[inline]
    pub fn man(side: Side, square: Square) -> Self {
        Self {
            side,
            rank: Rank::Man,
            square,
        }
    }

    #[inline]
    pub fn king(side: Side, square: Square) -> Self {
        Self {
            side,
            rank: Rank::King,
            square,
        }
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    /// Diagonal directions this piece may step or jump in.
    pub fn directions(&self) -> &'static [Coord] {
        match (self.rank, self.side) {
            (Rank::King, _) => &DIAGONAL_STEPS,
            (Rank::Man, Side::Red) => &DIAGONAL_STEPS[..2],
            (Rank::Man, Side::White) => &DIAGONAL_STEPS[2..],
        }
    }
}
