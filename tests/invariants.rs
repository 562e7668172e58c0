//! Property tests over random games.

use draughts::checkers::board::Board;
use draughts::checkers::piece::{Rank, Side};
use draughts::checkers::rules::{CapturePolicy, Move};
use draughts::game::{GameStatus, TurnController};
use draughts::search::minimax::Searcher;
use draughts::search::{Pruning, SearchConfig};
use proptest::prelude::*;

fn policy() -> impl Strategy<Value = CapturePolicy> {
    prop::sample::select(vec![CapturePolicy::PerPiece, CapturePolicy::SideWide])
}

fn counters_match_grid(board: &Board) -> Result<(), TestCaseError> {
    for side in Side::BOTH {
        let pieces: Vec<_> = board.pieces_of(side).collect();
        let kings = pieces.iter().filter(|p| p.is_king()).count();
        prop_assert_eq!(board.piece_count(side) as usize, pieces.len());
        prop_assert_eq!(board.king_count(side) as usize, kings);
        for p in &pieces {
            prop_assert!(p.square.is_dark());
            prop_assert_eq!(board.piece_at(p.square), Some(*p));
            if p.rank == Rank::Man {
                prop_assert_ne!(p.square.row(), side.promotion_row());
            }
        }
    }
    Ok(())
}

fn move_geometry(board: &Board, mv: &Move) -> Result<(), TestCaseError> {
    let piece = board.piece_at(mv.from);
    prop_assert!(piece.is_some());
    let piece = piece.unwrap();
    prop_assert!(board.is_empty_at(mv.to));

    if !mv.is_capture() {
        let step = mv.to.coord() - mv.from.coord();
        prop_assert!(piece.directions().contains(&step));
        return Ok(());
    }

    // Replay the chain oldest capture first.
    let mut cur = mv.from.coord();
    for captive in mv.captures.iter().rev() {
        prop_assert_ne!(captive.side, piece.side);
        prop_assert_eq!(board.piece_at(captive.square), Some(*captive));
        let hop = captive.square.coord() - cur;
        prop_assert!(hop.is_diagonal_step());
        if !piece.is_king() {
            prop_assert_eq!(hop.row, piece.side.forward());
        }
        cur = cur + hop * 2;
    }
    prop_assert_eq!(cur, mv.to.coord());
    Ok(())
}

fn capture_is_mandatory(moves: &[Move], policy: CapturePolicy) -> Result<(), TestCaseError> {
    match policy {
        CapturePolicy::SideWide => {
            if moves.iter().any(Move::is_capture) {
                prop_assert!(moves.iter().all(Move::is_capture));
            }
        }
        CapturePolicy::PerPiece => {
            for mv in moves {
                let siblings: Vec<_> = moves.iter().filter(|m| m.from == mv.from).collect();
                if siblings.iter().any(|m| m.is_capture()) {
                    prop_assert!(siblings.iter().all(|m| m.is_capture()));
                }
            }
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_games_keep_the_board_consistent(
        picks in prop::collection::vec(any::<usize>(), 0..120),
        policy in policy(),
    ) {
        let mut game = TurnController::new().with_policy(policy);
        for pick in picks {
            if game.status() != GameStatus::InProgress {
                break;
            }
            let moves = game.pending_moves();
            prop_assert!(!moves.is_empty());
            capture_is_mandatory(&moves, policy)?;

            let mv = moves[pick % moves.len()].clone();
            move_geometry(game.board(), &mv)?;

            let mover = game.turn();
            let opponents = game.board().piece_count(mover.other());
            prop_assert!(game.play(&mv));
            prop_assert_eq!(
                game.board().piece_count(mover.other()) as usize,
                opponents as usize - mv.captures.len()
            );
            if game.turn() == mover {
                prop_assert!(mv.is_capture());
                prop_assert!(game.is_chained());
            }
            counters_match_grid(game.board())?;
        }
    }

    #[test]
    fn pruning_never_changes_the_decision(
        picks in prop::collection::vec(any::<usize>(), 0..30),
        depth in 1u32..=3,
    ) {
        let mut game = TurnController::new();
        for pick in picks {
            let moves = game.pending_moves();
            if moves.is_empty() {
                break;
            }
            prop_assert!(game.play(&moves[pick % moves.len()]));
        }

        let board = game.board().clone();
        let side = game.turn();
        let candidates = game.pending_moves();
        let pruned = Searcher::new(SearchConfig::default().with_depth(depth))
            .search_among(&board, side, candidates.clone())
            .unwrap();
        let full = Searcher::new(
            SearchConfig::default()
                .with_depth(depth)
                .with_pruning(Pruning::None),
        )
        .search_among(&board, side, candidates)
        .unwrap();
        prop_assert_eq!(pruned.best, full.best);
        prop_assert_eq!(pruned.score, full.score);
        prop_assert_eq!(game.board(), &board);
    }
}
