use crate::checkers::piece::{Piece, Rank, Side};
use crate::core::square::{Square, BOARD_SIZE};

/// The 8×8 grid plus per-side live-piece and king counters.
///
/// Every mutation that changes the grid updates the counters in the same call, so
/// `piece_count` / `king_count` always agree with the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    live: [u8; 2],
    kings: [u8; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting layout: each side fills the dark squares of its three home rows.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for sq in Square::all().filter(|sq| sq.is_dark()) {
            let home = Side::BOTH
                .into_iter()
                .find(|side| side.home_rows().contains(&sq.row()));
            if let Some(side) = home {
                board.place(Piece::man(side, sq));
            }
        }
        board
    }

    pub fn empty() -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            live: [0; 2],
            kings: [0; 2],
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row()][sq.col()]
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    pub fn piece_count(&self, side: Side) -> u8 {
        self.live[side.index()]
    }

    #[inline]
    pub fn king_count(&self, side: Side) -> u8 {
        self.kings[side.index()]
    }

    /// Put `piece` on `piece.square`, returning whatever stood there before.
    ///
    /// Used to build layouts; regular play goes through [`Board::relocate`] and [`Board::remove`].
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        let sq = piece.square;
        let previous = self.grid[sq.row()][sq.col()].replace(piece);
        if let Some(old) = previous {
            self.uncount(old);
        }
        self.count(piece);
        previous
    }

    /// Move the piece standing on `from` to the empty square `to`.
    ///
    /// A man landing on its promotion row is crowned in the same call and its side's king
    /// counter incremented; kings are never crowned twice. Returns the piece as it stands
    /// after the move, or `None` (and no change) if `from` is empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        debug_assert!(
            from == to || self.is_empty_at(to),
            "relocate onto occupied square {to}"
        );
        let mut piece = self.grid[from.row()][from.col()].take()?;
        piece.square = to;
        if to.row() == piece.side.promotion_row() && piece.rank == Rank::Man {
            piece.rank = Rank::King;
            self.kings[piece.side.index()] += 1;
        }
        self.grid[to.row()][to.col()] = Some(piece);
        Some(piece)
    }

    /// Clear the squares of every listed piece, decrementing the matching side's counters.
    ///
    /// Entries are keyed by square. An entry whose square is empty, or now holds a piece of
    /// the other side, is skipped. Returns how many pieces were actually removed.
    pub fn remove(&mut self, pieces: &[Piece]) -> usize {
        let mut removed = 0;
        for listed in pieces {
            let sq = listed.square;
            if let Some(occupant) = self.piece_at(sq).filter(|p| p.side == listed.side) {
                self.grid[sq.row()][sq.col()] = None;
                self.uncount(occupant);
                removed += 1;
            }
        }
        removed
    }

    /// The side that still has pieces once the other has none.
    pub fn winner(&self) -> Option<Side> {
        match (self.piece_count(Side::Red), self.piece_count(Side::White)) {
            (0, w) if w > 0 => Some(Side::White),
            (r, 0) if r > 0 => Some(Side::Red),
            _ => None,
        }
    }

    /// All pieces in row-major order (the draw snapshot for renderers).
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.grid.iter().flatten().filter_map(|cell| *cell)
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.side == side)
    }

    fn count(&mut self, piece: Piece) {
        self.live[piece.side.index()] += 1;
        if piece.is_king() {
            self.kings[piece.side.index()] += 1;
        }
    }

    fn uncount(&mut self, piece: Piece) {
        self.live[piece.side.index()] -= 1;
        if piece.is_king() {
            self.kings[piece.side.index()] -= 1;
        }
    }
}
