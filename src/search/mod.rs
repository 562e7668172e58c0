//! Adversarial search for the computer opponent.
//!
//! - [`minimax`]: depth-bounded minimax / alpha-beta over cloned boards.
//! - [`eval`]: the static evaluation.
//! - [`movegen`]: child expansion shared by the search and [`perft`].
//! - [`resources`]: node budgets.

pub mod eval;
pub mod minimax;
pub mod movegen;
pub mod perft;
pub mod resources;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::checkers::board::Board;
use crate::checkers::piece::Side;
use crate::checkers::rules::{CapturePolicy, Move};
use crate::search::minimax::Searcher;

/// Search depth used when nothing else is configured.
pub const DEFAULT_DEPTH: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pruning {
    #[default]
    AlphaBeta,
    /// Plain minimax; visits every node. Same result, more work.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Search budgets. The default is unbounded.
pub struct SearchLimits {
    pub max_nodes: u64,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_nodes: u64::MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Running counters tracked during a search.
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Plies to look ahead; 3 is the classic difficulty.
    pub depth: u32,
    pub pruning: Pruning,
    pub capture_policy: CapturePolicy,
    pub limits: SearchLimits,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            pruning: Pruning::default(),
            capture_policy: CapturePolicy::default(),
            limits: SearchLimits::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_capture_policy(mut self, policy: CapturePolicy) -> Self {
        self.capture_policy = policy;
        self
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// `None` when the side to move has no move or the game is already decided.
    pub best: Option<Move>,
    /// Score of `best` from the searching side's point of view.
    pub score: f64,
    pub stats: SearchStats,
}

#[derive(Debug)]
/// Structured errors returned by search routines.
pub enum SearchError {
    /// A configured resource limit was exceeded.
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        stats: SearchStats,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                stats,
            } => write!(
                f,
                "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); \
                 stats(nodes={}, leaves={}, cutoffs={})",
                stats.nodes, stats.leaves, stats.cutoffs
            ),
        }
    }
}

impl std::error::Error for SearchError {}

/// Best move for `side` at `depth` plies with alpha-beta pruning and no node budget.
///
/// Returns `None` if `side` has no legal move, the game is already over, or `depth` is 0
/// (a depth-0 node is a leaf and has no move to pick).
pub fn choose_move(board: &Board, side: Side, depth: u32) -> Option<Move> {
    let searcher = Searcher::new(SearchConfig::default().with_depth(depth));
    match searcher.search(board, side) {
        Ok(outcome) => outcome.best,
        // Unbounded limits cannot be exceeded.
        Err(_) => None,
    }
}
