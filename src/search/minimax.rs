//! Depth-bounded minimax with optional alpha-beta pruning.
//!
//! Nodes are `(Board, side to move)` pairs. Children are built by cloning the parent board
//! and applying one generated move, so the caller's board is never mutated and no undo
//! bookkeeping is needed. Ties are broken in favour of the first move (in generation order)
//! that reaches the extremal score.

use crate::checkers::board::Board;
use crate::checkers::piece::Side;
use crate::checkers::rules::Move;
use crate::search::eval::{evaluate, WIN_SCORE};
use crate::search::movegen::{child_board, node_moves};
use crate::search::resources::ResourceTracker;
use crate::search::{Pruning, SearchConfig, SearchError, SearchOutcome};

#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Best move for `side` among all of its legal moves.
    pub fn search(&self, board: &Board, side: Side) -> Result<SearchOutcome, SearchError> {
        let candidates = node_moves(board, side, self.config.capture_policy);
        self.search_among(board, side, candidates)
    }

    /// Best move for `side` among `candidates` only.
    ///
    /// At depth 0 the root is a leaf: no move is chosen and the score is the static
    /// evaluation.
    ///
    /// Used when the choice is already restricted, e.g. a piece that must continue a
    /// multi-jump. Below the root, every legal move is considered as usual.
    pub fn search_among(
        &self,
        board: &Board,
        side: Side,
        candidates: Vec<Move>,
    ) -> Result<SearchOutcome, SearchError> {
        let mut tracker = ResourceTracker::new(self.config.limits);
        tracker.bump_nodes("search_root")?;

        if self.config.depth == 0 || board.winner().is_some() {
            tracker.note_leaf();
            return Ok(SearchOutcome {
                best: None,
                score: evaluate(board, side),
                stats: tracker.stats(),
            });
        }
        if candidates.is_empty() {
            tracker.note_leaf();
            return Ok(SearchOutcome {
                best: None,
                score: -WIN_SCORE,
                stats: tracker.stats(),
            });
        }

        let child_depth = self.config.depth - 1;
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best: Option<Move> = None;
        let mut best_score = f64::NEG_INFINITY;

        for mv in candidates {
            let child = child_board(board, &mv);
            let score = self.minimax(
                &child,
                side.other(),
                child_depth,
                alpha,
                beta,
                side,
                &mut tracker,
            )?;
            if best.is_none() || score > best_score {
                best_score = score;
                best = Some(mv);
            }
            if self.config.pruning == Pruning::AlphaBeta {
                alpha = alpha.max(best_score);
            }
        }

        Ok(SearchOutcome {
            best,
            score: best_score,
            stats: tracker.stats(),
        })
    }

    /// Score of the node `(board, to_move)` from `root`'s point of view.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &self,
        board: &Board,
        to_move: Side,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        root: Side,
        tracker: &mut ResourceTracker,
    ) -> Result<f64, SearchError> {
        tracker.bump_nodes("search_node")?;

        if depth == 0 || board.winner().is_some() {
            tracker.note_leaf();
            return Ok(evaluate(board, root));
        }

        let moves = node_moves(board, to_move, self.config.capture_policy);
        if moves.is_empty() {
            // A side that cannot move loses.
            tracker.note_leaf();
            return Ok(if to_move == root { -WIN_SCORE } else { WIN_SCORE });
        }

        let maximizing = to_move == root;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for mv in moves {
            let child = child_board(board, &mv);
            let score = self.minimax(
                &child,
                to_move.other(),
                depth - 1,
                alpha,
                beta,
                root,
                tracker,
            )?;
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if self.config.pruning == Pruning::AlphaBeta && beta <= alpha {
                tracker.note_cutoff();
                break;
            }
        }

        Ok(best)
    }
}
