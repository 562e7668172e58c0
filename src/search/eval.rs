use crate::checkers::board::Board;
use crate::checkers::piece::Side;

/// Score of a node whose side to move has no legal move, from the winner's point of view.
///
/// A node where one side has no pieces left is a terminal too, but it is scored with
/// [`evaluate`] like any other leaf. The two wins therefore sit on different scales: the
/// search prefers leaving the opponent without a move over taking its last piece.
pub const WIN_SCORE: f64 = 1_000.0;

/// Static evaluation from `side`'s point of view.
///
/// `(own pieces - opponent pieces) + 0.5 * (own kings - opponent kings)`. Kings are
/// already included in the piece counts, so each king is worth 1.5 in total.
pub fn evaluate(board: &Board, side: Side) -> f64 {
    let other = side.other();
    let pieces = board.piece_count(side) as f64 - board.piece_count(other) as f64;
    let kings = board.king_count(side) as f64 - board.king_count(other) as f64;
    pieces + 0.5 * kings
}
