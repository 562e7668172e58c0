use crate::checkers::board::Board;
use crate::checkers::piece::Side;
use crate::checkers::rules::{apply_move, side_moves, CapturePolicy, Move};

/// Candidate moves for `side` at a search node, in generation order.
#[inline]
pub fn node_moves(board: &Board, side: Side, policy: CapturePolicy) -> Vec<Move> {
    side_moves(board, side, policy)
}

/// A fresh copy of `board` with `mv` applied. The input board is never touched.
///
/// The move's capture list is removed in full; whether the mover could keep jumping is not
/// considered here, the next ply belongs to the other side.
pub fn child_board(board: &Board, mv: &Move) -> Board {
    let mut next = board.clone();
    apply_move(&mut next, mv);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::square::Square;

    #[test]
    fn child_leaves_parent_untouched() {
        let board = Board::new();
        let moves = node_moves(&board, Side::Red, CapturePolicy::PerPiece);
        assert_eq!(moves.len(), 7);
        let child = child_board(&board, &moves[0]);
        assert_eq!(board, Board::new());
        assert!(child.piece_at(Square::new(4, 1)).is_some());
    }
}
