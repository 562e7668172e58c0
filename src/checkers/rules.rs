//! Move generation.
//!
//! [`valid_moves`] is the raw generator: every destination a piece can reach, with the
//! pieces each destination captures. Multi-jump chains are resolved by recursion into a
//! single destination whose capture list holds the whole chain. [`legal_moves`] layers the
//! mandatory-capture policy on top.

use serde::{Deserialize, Serialize};

use crate::checkers::board::Board;
use crate::checkers::piece::{Piece, Side};
use crate::core::coord::Coord;
use crate::core::square::Square;

/// Where the "must capture" rule is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapturePolicy {
    /// Only the selected piece is considered: if it can capture it must, otherwise its
    /// plain steps stand even when another piece of the same side could capture.
    #[default]
    PerPiece,
    /// Standard draughts: if any piece of the side can capture, only captures are legal.
    SideWide,
}

/// A complete decision for one piece: origin, destination and the pieces it takes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Most recent capture first. Empty for a plain step.
    pub captures: Vec<Piece>,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

/// Destinations for one piece, each with its capture list, in generation order.
///
/// Built fresh for every query; nothing here stays valid once the board changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoves {
    entries: Vec<(Square, Vec<Piece>)>,
}

impl LegalMoves {
    /// Register `to` unless it is already present: the first registration wins.
    fn insert(&mut self, to: Square, captures: Vec<Piece>) {
        if !self.contains(to) {
            self.entries.push((to, captures));
        }
    }

    pub fn get(&self, to: Square) -> Option<&[Piece]> {
        self.entries
            .iter()
            .find(|(sq, _)| *sq == to)
            .map(|(_, caps)| caps.as_slice())
    }

    #[inline]
    pub fn contains(&self, to: Square) -> bool {
        self.entries.iter().any(|(sq, _)| *sq == to)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, &[Piece])> + '_ {
        self.entries.iter().map(|(sq, caps)| (*sq, caps.as_slice()))
    }

    pub fn destinations(&self) -> impl Iterator<Item = Square> + '_ {
        self.entries.iter().map(|(sq, _)| *sq)
    }

    pub fn has_capture(&self) -> bool {
        self.entries.iter().any(|(_, caps)| !caps.is_empty())
    }

    /// Keep only capturing entries if there are any; otherwise keep everything.
    pub fn mandatory(self) -> Self {
        if self.has_capture() {
            self.captures_only()
        } else {
            self
        }
    }

    pub fn captures_only(mut self) -> Self {
        self.entries.retain(|(_, caps)| !caps.is_empty());
        self
    }

    /// Expand into full moves starting at `from`.
    pub fn into_moves(self, from: Square) -> impl Iterator<Item = Move> {
        self.entries.into_iter().map(move |(to, captures)| Move {
            from,
            to,
            captures,
        })
    }
}

/// Every destination `piece` can reach on `board`, before any capture policy.
pub fn valid_moves(board: &Board, piece: &Piece) -> LegalMoves {
    let mut out = LegalMoves::default();
    for &dir in piece.directions() {
        walk(board, piece.side, piece.square.coord(), dir, &[], &mut out);
    }
    out
}

/// Walk from `from` along `dir`, registering a plain step or a jump.
///
/// `captured` holds the chain taken so far; when non-empty, only further jumps count.
/// After a jump the walk continues from the landing square in the same vertical direction,
/// to both sides, seeded with the extended chain.
fn walk(
    board: &Board,
    side: Side,
    from: Coord,
    dir: Coord,
    captured: &[Piece],
    out: &mut LegalMoves,
) {
    let mut cur = from;
    let mut pending: Option<Piece> = None;

    loop {
        cur = cur + dir;
        let Some(sq) = Square::from_coord(cur) else {
            return;
        };

        match board.piece_at(sq) {
            None => {
                match pending {
                    None if captured.is_empty() => out.insert(sq, Vec::new()),
                    // Mid-chain a plain step ends nothing.
                    None => {}
                    Some(captive) => {
                        let mut chain = Vec::with_capacity(captured.len() + 1);
                        chain.push(captive);
                        chain.extend_from_slice(captured);
                        out.insert(sq, chain.clone());

                        if Square::from_coord(cur + Coord::new(dir.row, 0)).is_some() {
                            for lateral in [-1, 1] {
                                walk(board, side, cur, Coord::new(dir.row, lateral), &chain, out);
                            }
                        }
                    }
                }
                return;
            }
            Some(p) if p.side == side => return,
            Some(p) => {
                if pending.is_some() {
                    return;
                }
                pending = Some(p);
            }
        }
    }
}

/// True if any piece of `side` has a capture available.
pub fn side_can_capture(board: &Board, side: Side) -> bool {
    board
        .pieces_of(side)
        .any(|p| valid_moves(board, &p).has_capture())
}

/// The moves `piece` may actually play under `policy`.
pub fn legal_moves(board: &Board, piece: &Piece, policy: CapturePolicy) -> LegalMoves {
    let moves = valid_moves(board, piece);
    match policy {
        CapturePolicy::PerPiece => moves.mandatory(),
        CapturePolicy::SideWide => {
            if moves.has_capture() || side_can_capture(board, piece.side) {
                moves.captures_only()
            } else {
                moves
            }
        }
    }
}

/// Every legal move of `side`, piece by piece in row-major order.
pub fn side_moves(board: &Board, side: Side, policy: CapturePolicy) -> Vec<Move> {
    let forced = policy == CapturePolicy::SideWide && side_can_capture(board, side);
    let mut out = Vec::new();
    for piece in board.pieces_of(side) {
        let moves = valid_moves(board, &piece);
        let moves = if forced {
            moves.captures_only()
        } else {
            moves.mandatory()
        };
        out.extend(moves.into_moves(piece.square));
    }
    out
}

/// Apply `mv` to `board`: relocate, then remove the captured pieces.
///
/// Returns the moved piece, or `None` if `mv.from` was empty.
pub fn apply_move(board: &mut Board, mv: &Move) -> Option<Piece> {
    let moved = board.relocate(mv.from, mv.to)?;
    board.remove(&mv.captures);
    Some(moved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn opening_edge_piece_has_single_step() {
        let board = Board::new();
        let piece = board.piece_at(sq(5, 0)).unwrap();
        let moves = valid_moves(&board, &piece);
        assert_eq!(moves.destinations().collect::<Vec<_>>(), vec![sq(4, 1)]);
        assert_eq!(moves.get(sq(4, 1)), Some(&[][..]));
    }

    #[test]
    fn back_rank_piece_is_blocked() {
        let board = Board::new();
        let piece = board.piece_at(sq(7, 0)).unwrap();
        assert!(valid_moves(&board, &piece).is_empty());
    }

    #[test]
    fn first_registration_wins() {
        let mut moves = LegalMoves::default();
        moves.insert(sq(3, 2), Vec::new());
        moves.insert(sq(3, 2), vec![Piece::man(Side::White, sq(4, 3))]);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves.get(sq(3, 2)), Some(&[][..]));
    }
}
