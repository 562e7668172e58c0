use std::path::PathBuf;

use draughts::config::EngineConfig;
use draughts::game::GameStatus;
use draughts::search::minimax::Searcher;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: selfplay [config.json]");
        std::process::exit(2);
    }

    let config = match args.get(1) {
        None => EngineConfig::default(),
        Some(path) => match EngineConfig::load(&PathBuf::from(path)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
        },
    };

    let searcher = Searcher::new(config.search_config());
    let mut game = config.new_game();
    let mut turns: u32 = 0;
    let mut nodes: u64 = 0;

    println!("{}", game.board());

    while game.status() == GameStatus::InProgress && turns < config.max_plies {
        let side = game.turn();
        let outcome = match searcher.search_among(game.board(), side, game.pending_moves()) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("Search failed on turn {}: {e}", turns + 1);
                std::process::exit(1);
            }
        };
        nodes += outcome.stats.nodes;

        let Some(mv) = outcome.best else {
            break;
        };
        if !game.play(&mv) {
            eprintln!("Engine chose an unplayable move {} -> {}", mv.from, mv.to);
            std::process::exit(1);
        }

        println!(
            "{side:?}: {} -> {} (captures {}, score {:.1}, nodes {})",
            mv.from,
            mv.to,
            mv.captures.len(),
            outcome.score,
            outcome.stats.nodes
        );
        if game.turn() != side {
            turns += 1;
            println!("{}", game.board());
        }
    }

    let (winner, reason) = match game.status() {
        GameStatus::Won { winner, reason } => (Some(winner), Some(reason)),
        GameStatus::InProgress => (None, None),
    };
    let board = game.board();
    let out = serde_json::json!({
        "config": config,
        "turns": turns,
        "winner": winner,
        "reason": reason,
        "nodes": nodes,
        "pieces": {
            "red": board.piece_count(draughts::checkers::piece::Side::Red),
            "white": board.piece_count(draughts::checkers::piece::Side::White),
        },
    });
    match serde_json::to_string_pretty(&out) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize summary: {e}");
            std::process::exit(1);
        }
    }
}
