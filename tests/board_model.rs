use draughts::checkers::board::Board;
use draughts::checkers::piece::{Piece, Rank, Side};
use draughts::core::square::Square;

fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col)
}

fn grid_counts(board: &Board, side: Side) -> (u8, u8) {
    let pieces: Vec<Piece> = board.pieces_of(side).collect();
    let kings = pieces.iter().filter(|p| p.is_king()).count();
    (pieces.len() as u8, kings as u8)
}

#[test]
fn standard_layout_rows_and_counts() {
    let board = Board::new();
    for side in Side::BOTH {
        assert_eq!(grid_counts(&board, side), (12, 0));
        assert_eq!(board.piece_count(side), 12);
        for p in board.pieces_of(side) {
            assert!(side.home_rows().contains(&p.square.row()));
            assert_eq!(p.rank, Rank::Man);
        }
    }
    assert_eq!(board.piece_at(sq(5, 0)).map(|p| p.side), Some(Side::Red));
    assert_eq!(board.piece_at(sq(2, 1)).map(|p| p.side), Some(Side::White));
    assert_eq!(board.winner(), None);
}

#[test]
fn snapshot_is_row_major_and_positions_match_cells() {
    let board = Board::new();
    let squares: Vec<Square> = board.pieces().map(|p| p.square).collect();
    let mut sorted = squares.clone();
    sorted.sort();
    assert_eq!(squares, sorted);
    for p in board.pieces() {
        assert_eq!(board.piece_at(p.square), Some(p));
    }
}

#[test]
fn promotion_happens_once() {
    let mut board = Board::empty();
    board.place(Piece::man(Side::Red, sq(1, 2)));
    board.place(Piece::man(Side::White, sq(2, 5)));

    let crowned = board.relocate(sq(1, 2), sq(0, 1)).unwrap();
    assert_eq!(crowned.rank, Rank::King);
    assert_eq!(board.king_count(Side::Red), 1);

    board.relocate(sq(0, 1), sq(1, 2)).unwrap();
    let again = board.relocate(sq(1, 2), sq(0, 3)).unwrap();
    assert!(again.is_king());
    assert_eq!(board.king_count(Side::Red), 1);
    assert_eq!(board.piece_count(Side::Red), 1);
}

#[test]
fn white_promotes_on_row_seven_only() {
    let mut board = Board::empty();
    board.place(Piece::man(Side::White, sq(1, 2)));
    let moved = board.relocate(sq(1, 2), sq(0, 1)).unwrap();
    assert_eq!(moved.rank, Rank::Man);

    board.place(Piece::man(Side::White, sq(6, 1)));
    let crowned = board.relocate(sq(6, 1), sq(7, 2)).unwrap();
    assert!(crowned.is_king());
    assert_eq!(board.king_count(Side::White), 1);
}

#[test]
fn remove_updates_counters_and_skips_empty_cells() {
    let mut board = Board::empty();
    let king = Piece::king(Side::White, sq(3, 2));
    let man = Piece::man(Side::White, sq(3, 4));
    board.place(king);
    board.place(man);
    board.place(Piece::man(Side::Red, sq(6, 1)));

    let stale = Piece::man(Side::White, sq(4, 5));
    assert_eq!(board.remove(&[king, stale, man]), 2);
    assert_eq!(board.piece_count(Side::White), 0);
    assert_eq!(board.king_count(Side::White), 0);
    assert!(board.is_empty_at(sq(3, 2)));

    // Removing again is harmless.
    assert_eq!(board.remove(&[king, man]), 0);
    assert_eq!(board.piece_count(Side::Red), 1);
}

#[test]
fn remove_ignores_cell_now_held_by_other_side() {
    let mut board = Board::empty();
    board.place(Piece::man(Side::Red, sq(3, 2)));
    let listed = Piece::man(Side::White, sq(3, 2));
    assert_eq!(board.remove(&[listed]), 0);
    assert_eq!(board.piece_count(Side::Red), 1);
}

#[test]
fn winner_iff_other_side_has_no_pieces() {
    let mut board = Board::empty();
    assert_eq!(board.winner(), None);

    board.place(Piece::man(Side::Red, sq(5, 0)));
    assert_eq!(board.winner(), Some(Side::Red));

    let white = Piece::man(Side::White, sq(2, 1));
    board.place(white);
    assert_eq!(board.winner(), None);

    board.remove(&[board.piece_at(sq(5, 0)).unwrap()]);
    assert_eq!(board.winner(), Some(Side::White));
}

#[test]
fn clone_is_independent() {
    let board = Board::new();
    let mut copy = board.clone();
    copy.relocate(sq(5, 0), sq(4, 1)).unwrap();
    copy.remove(&[board.piece_at(sq(2, 1)).unwrap()]);

    assert_eq!(board, Board::new());
    assert_eq!(copy.piece_count(Side::White), 11);
    assert_eq!(board.piece_count(Side::White), 12);
}

#[test]
#[should_panic(expected = "off the 8x8 board")]
fn out_of_range_square_fails_fast() {
    let board = Board::new();
    let _ = board.piece_at(Square::new(0, 8));
}
