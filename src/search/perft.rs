//! Perft: leaf counts of the search tree, for checking move generation.
//!
//! Expansion is exactly the one the search uses (one generated move per ply, sides
//! alternating), so these counts also bound the work of a full-width search.

use rustc_hash::FxHashMap;

use crate::checkers::board::Board;
use crate::checkers::piece::Side;
use crate::checkers::rules::{CapturePolicy, Move};
use crate::search::movegen::{child_board, node_moves};

pub fn perft(board: &Board, side: Side, depth: u32, policy: CapturePolicy) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = node_moves(board, side, policy);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|mv| perft(&child_board(board, mv), side.other(), depth - 1, policy))
        .sum()
}

/// Per-root-move breakdown of [`perft`].
pub fn perft_divide(
    board: &Board,
    side: Side,
    depth: u32,
    policy: CapturePolicy,
) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    node_moves(board, side, policy)
        .into_iter()
        .map(|mv| {
            let n = perft(&child_board(board, &mv), side.other(), depth - 1, policy);
            (mv, n)
        })
        .collect()
}

/// [`perft`] with a transposition cache keyed by position, side and remaining depth.
pub fn perft_cached(board: &Board, side: Side, depth: u32, policy: CapturePolicy) -> u64 {
    let mut cache: FxHashMap<(Board, Side, u32), u64> = FxHashMap::default();
    perft_with_cache(board, side, depth, policy, &mut cache)
}

fn perft_with_cache(
    board: &Board,
    side: Side,
    depth: u32,
    policy: CapturePolicy,
    cache: &mut FxHashMap<(Board, Side, u32), u64>,
) -> u64 {
    if depth <= 1 {
        return perft(board, side, depth, policy);
    }
    let key = (board.clone(), side, depth);
    if let Some(&n) = cache.get(&key) {
        return n;
    }
    let n = node_moves(board, side, policy)
        .iter()
        .map(|mv| perft_with_cache(&child_board(board, mv), side.other(), depth - 1, policy, cache))
        .sum();
    cache.insert(key, n);
    n
}
