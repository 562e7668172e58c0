//! Plain-text board diagrams.
//!
//! One line per row, row 0 first. Cells are `.` (empty), `r`/`R` (red man/king) and
//! `w`/`W` (white man/king); spaces inside a line and blank lines are ignored.
//!
//! ```
//! use draughts::checkers::board::Board;
//!
//! let board = Board::from_diagram(
//!     "
//!     . . . . . . . .
//!     . . . . . . . .
//!     . . . . . . . .
//!     . . . . w . . .
//!     . . . r . . . .
//!     . . . . . . . .
//!     . . . . . . . .
//!     . . . . . . . .
//!     ",
//! )
//! .unwrap();
//! assert_eq!(board.pieces().count(), 2);
//! ```

use std::fmt;

use crate::checkers::board::Board;
use crate::checkers::piece::{Piece, Rank, Side};
use crate::core::square::{Square, BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Reasons a diagram cannot be turned into a board.
pub enum BoardError {
    RowCount { found: usize },
    ColumnCount { row: usize, found: usize },
    UnknownSymbol { row: usize, col: usize, symbol: char },
    /// Pieces may only stand on dark squares.
    LightSquare { row: usize, col: usize },
    /// A man on its own promotion row would already have been crowned.
    ManOnPromotionRow { row: usize, col: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::RowCount { found } => {
                write!(f, "expected {BOARD_SIZE} rows, found {found}")
            }
            BoardError::ColumnCount { row, found } => {
                write!(f, "row {row}: expected {BOARD_SIZE} cells, found {found}")
            }
            BoardError::UnknownSymbol { row, col, symbol } => {
                write!(f, "unknown symbol {symbol:?} at ({row}, {col})")
            }
            BoardError::LightSquare { row, col } => {
                write!(f, "piece on light square ({row}, {col})")
            }
            BoardError::ManOnPromotionRow { row, col } => {
                write!(f, "uncrowned man on its promotion row at ({row}, {col})")
            }
        }
    }
}

impl std::error::Error for BoardError {}

fn symbol_of(piece: Piece) -> char {
    match (piece.side, piece.rank) {
        (Side::Red, Rank::Man) => 'r',
        (Side::Red, Rank::King) => 'R',
        (Side::White, Rank::Man) => 'w',
        (Side::White, Rank::King) => 'W',
    }
}

fn piece_of(symbol: char, sq: Square) -> Option<Option<Piece>> {
    match symbol {
        '.' => Some(None),
        'r' => Some(Some(Piece::man(Side::Red, sq))),
        'R' => Some(Some(Piece::king(Side::Red, sq))),
        'w' => Some(Some(Piece::man(Side::White, sq))),
        'W' => Some(Some(Piece::king(Side::White, sq))),
        _ => None,
    }
}

impl Board {
    pub fn from_diagram(diagram: &str) -> Result<Board, BoardError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|cells| !cells.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(BoardError::RowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != BOARD_SIZE {
                return Err(BoardError::ColumnCount {
                    row,
                    found: cells.len(),
                });
            }
            for (col, &symbol) in cells.iter().enumerate() {
                let sq = Square::new(row, col);
                let piece = piece_of(symbol, sq)
                    .ok_or(BoardError::UnknownSymbol { row, col, symbol })?;
                let Some(piece) = piece else {
                    continue;
                };
                if !sq.is_dark() {
                    return Err(BoardError::LightSquare { row, col });
                }
                if !piece.is_king() && row == piece.side.promotion_row() {
                    return Err(BoardError::ManOnPromotionRow { row, col });
                }
                board.place(piece);
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            let line = (0..BOARD_SIZE)
                .map(|col| {
                    self.piece_at(Square::new(row, col))
                        .map_or('.', symbol_of)
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board_round_trips_through_display() {
        let board = Board::new();
        let parsed = Board::from_diagram(&board.to_string()).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn rejects_light_square_and_bad_symbols() {
        let mut rows = vec![". . . . . . . ."; BOARD_SIZE];
        rows[3] = ". r . . . . . .";
        assert_eq!(
            Board::from_diagram(&rows.join("\n")),
            Err(BoardError::LightSquare { row: 3, col: 1 })
        );
        // (3, 0) is dark, so the same piece one column left is fine.
        rows[3] = "r . . . . . . .";
        assert_eq!(Board::from_diagram(&rows.join("\n")).map(|b| b.pieces().count()), Ok(1));
        rows[3] = ". x . . . . . .";
        assert_eq!(
            Board::from_diagram(&rows.join("\n")),
            Err(BoardError::UnknownSymbol {
                row: 3,
                col: 1,
                symbol: 'x'
            })
        );
        rows[3] = ". . . .";
        assert_eq!(
            Board::from_diagram(&rows.join("\n")),
            Err(BoardError::ColumnCount { row: 3, found: 4 })
        );
    }

    #[test]
    fn rejects_uncrowned_man_on_promotion_row() {
        let mut rows = vec![". . . . . . . ."; BOARD_SIZE];
        rows[0] = ". r . . . . . .";
        assert_eq!(
            Board::from_diagram(&rows.join("\n")),
            Err(BoardError::ManOnPromotionRow { row: 0, col: 1 })
        );
        rows[0] = ". R . . . . . .";
        let board = Board::from_diagram(&rows.join("\n")).unwrap();
        assert_eq!(board.king_count(Side::Red), 1);
    }
}
