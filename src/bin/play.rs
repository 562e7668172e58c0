use std::io::{self, BufRead};
use std::path::PathBuf;

use draughts::config::EngineConfig;
use draughts::core::square::BOARD_SIZE;
use draughts::game::GameStatus;
use draughts::search::minimax::Searcher;

fn parse_square(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace().map(str::parse::<usize>);
    let row = parts.next()?.ok()?;
    let col = parts.next()?.ok()?;
    if parts.next().is_some() || row >= BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some((row, col))
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: play [config.json]");
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
    let mut lines = io::stdin().lock().lines();

    println!("{}", game.board());
    while game.status() == GameStatus::InProgress {
        let side = game.turn();

        if config.engine_plays(side) {
            let outcome = match searcher.search_among(game.board(), side, game.pending_moves()) {
                Ok(o) => o,
                Err(e) => {
                    eprintln!("Search failed: {e}");
                    std::process::exit(1);
                }
            };
            let Some(mv) = outcome.best else {
                break;
            };
            if !game.play(&mv) {
                eprintln!("Engine chose an unplayable move {} -> {}", mv.from, mv.to);
                std::process::exit(1);
            }
            println!("{side:?} (engine): {} -> {}", mv.from, mv.to);
            if game.turn() != side {
                println!("{}", game.board());
            }
            continue;
        }

        println!("{side:?} to move, enter \"row col\":");
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Failed to read input: {e}");
                std::process::exit(1);
            }
            None => return,
        };
        let Some((row, col)) = parse_square(&line) else {
            eprintln!("Expected two numbers in 0..{BOARD_SIZE}, got {line:?}");
            continue;
        };
        if !game.select(row, col) {
            println!("Nothing to do at ({row}, {col})");
            continue;
        }
        if game.turn() != side {
            println!("{}", game.board());
        } else {
            let mut targets: Vec<_> = game.current_legal_moves().into_iter().collect();
            targets.sort();
            let shown: Vec<String> = targets.iter().map(ToString::to_string).collect();
            println!("Destinations: {}", shown.join(" "));
        }
    }

    match game.status() {
        GameStatus::Won { winner, reason } => println!("{winner:?} wins ({reason:?})"),
        GameStatus::InProgress => println!("Game stopped"),
    }
}
