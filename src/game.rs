//! Turn management: the select-then-move protocol driven by player input.
//!
//! A [`TurnController`] owns the live [`Board`]. Input arrives as square selections:
//! the first picks up one of the side-to-move's pieces, the second drops it on one of the
//! highlighted destinations. After a capture, the same piece must keep jumping while it can;
//! the turn passes only when the chain is exhausted.
//!
//! While a piece is selected and no chain is in progress, selecting another of the mover's
//! pieces that has legal moves switches the selection. Any other non-destination input
//! (empty square, opponent piece, a piece with no moves, anything mid-chain) is ignored and
//! changes nothing.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::checkers::board::Board;
use crate::checkers::piece::{Piece, Side};
use crate::checkers::rules::{legal_moves, side_moves, valid_moves, CapturePolicy, LegalMoves, Move};
use crate::core::square::Square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Idle,
    Selected {
        piece: Piece,
        moves: LegalMoves,
        /// The piece has just captured and must continue; nothing else may be selected.
        chained: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinReason {
    /// The loser has no pieces left.
    NoPieces,
    /// The loser is to move and has no legal move.
    NoMoves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { winner: Side, reason: WinReason },
}

#[derive(Debug, Clone)]
pub struct TurnController {
    board: Board,
    turn: Side,
    first_side: Side,
    policy: CapturePolicy,
    selection: Selection,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    /// A fresh game: standard layout, Red to move, per-piece mandatory capture.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Side::Red)
    }

    /// Resume from an arbitrary position with `turn` to move.
    pub fn from_board(board: Board, turn: Side) -> Self {
        Self {
            board,
            turn,
            first_side: turn,
            policy: CapturePolicy::default(),
            selection: Selection::Idle,
        }
    }

    pub fn with_policy(mut self, policy: CapturePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the side that moves first, now and after every [`TurnController::reset`].
    pub fn with_first_side(mut self, side: Side) -> Self {
        self.first_side = side;
        self.turn = side;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[inline]
    pub fn policy(&self) -> CapturePolicy {
        self.policy
    }

    #[inline]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected(&self) -> Option<Piece> {
        match &self.selection {
            Selection::Idle => None,
            Selection::Selected { piece, .. } => Some(*piece),
        }
    }

    /// True while a piece is in the middle of a multi-jump.
    pub fn is_chained(&self) -> bool {
        matches!(self.selection, Selection::Selected { chained: true, .. })
    }

    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.board.winner() {
            return GameStatus::Won {
                winner,
                reason: WinReason::NoPieces,
            };
        }
        if !self.is_chained() && side_moves(&self.board, self.turn, self.policy).is_empty() {
            return GameStatus::Won {
                winner: self.turn.other(),
                reason: WinReason::NoMoves,
            };
        }
        GameStatus::InProgress
    }

    /// Feed one square of input. Panics if `(row, col)` is off the board.
    ///
    /// Returns whether the input changed any state.
    pub fn select(&mut self, row: usize, col: usize) -> bool {
        self.select_square(Square::new(row, col))
    }

    pub fn select_square(&mut self, sq: Square) -> bool {
        if self.status() != GameStatus::InProgress {
            return false;
        }

        let (piece, captures, chained) = match &self.selection {
            Selection::Idle => return self.pick_up(sq),
            Selection::Selected {
                piece,
                moves,
                chained,
            } => (*piece, moves.get(sq).map(<[Piece]>::to_vec), *chained),
        };

        if let Some(captures) = captures {
            return self.drop_on(piece, sq, captures);
        }
        if chained || sq == piece.square {
            return false;
        }
        self.pick_up(sq)
    }

    /// Destinations of the selected piece, for highlighting.
    pub fn current_legal_moves(&self) -> FxHashSet<Square> {
        match &self.selection {
            Selection::Idle => FxHashSet::default(),
            Selection::Selected { moves, .. } => moves.destinations().collect(),
        }
    }

    /// Every move the side to move could complete right now.
    ///
    /// Mid-chain this is only the forced continuation of the jumping piece.
    pub fn pending_moves(&self) -> Vec<Move> {
        if self.status() != GameStatus::InProgress {
            return Vec::new();
        }
        match &self.selection {
            Selection::Selected {
                piece,
                moves,
                chained: true,
            } => moves.clone().into_moves(piece.square).collect(),
            _ => side_moves(&self.board, self.turn, self.policy),
        }
    }

    /// Play a complete move through the same two-step protocol as player input.
    ///
    /// Returns `false` and changes nothing unless `mv` is one of [`Self::pending_moves`].
    pub fn play(&mut self, mv: &Move) -> bool {
        if !self
            .pending_moves()
            .iter()
            .any(|m| m.from == mv.from && m.to == mv.to)
        {
            return false;
        }
        if self.selected().map(|p| p.square) != Some(mv.from) && !self.select_square(mv.from) {
            return false;
        }
        self.select_square(mv.to)
    }

    /// Back to the standard layout with the first side to move.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = self.first_side;
        self.selection = Selection::Idle;
    }

    fn pick_up(&mut self, sq: Square) -> bool {
        let Some(piece) = self.board.piece_at(sq) else {
            return false;
        };
        if piece.side != self.turn {
            return false;
        }
        let moves = legal_moves(&self.board, &piece, self.policy);
        if moves.is_empty() {
            return false;
        }
        self.selection = Selection::Selected {
            piece,
            moves,
            chained: false,
        };
        true
    }

    fn drop_on(&mut self, piece: Piece, to: Square, captures: Vec<Piece>) -> bool {
        let Some(moved) = self.board.relocate(piece.square, to) else {
            self.selection = Selection::Idle;
            return false;
        };
        self.board.remove(&captures);

        if !captures.is_empty() {
            let next = valid_moves(&self.board, &moved).captures_only();
            if !next.is_empty() {
                self.selection = Selection::Selected {
                    piece: moved,
                    moves: next,
                    chained: true,
                };
                return true;
            }
        }

        self.selection = Selection::Idle;
        self.turn = self.turn.other();
        true
    }
}
