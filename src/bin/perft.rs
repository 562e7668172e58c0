use draughts::checkers::board::Board;
use draughts::checkers::piece::Side;
use draughts::checkers::rules::CapturePolicy;
use draughts::search::perft::perft_divide;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: perft <depth> [per_piece|side_wide]");
        std::process::exit(2);
    }

    let depth: u32 = match args[1].parse() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Invalid depth {:?}: {e}", args[1]);
            std::process::exit(2);
        }
    };

    let policy = match args.get(2).map(String::as_str) {
        None | Some("per_piece") => CapturePolicy::PerPiece,
        Some("side_wide") => CapturePolicy::SideWide,
        Some(other) => {
            eprintln!("Unknown capture policy: {other}");
            std::process::exit(2);
        }
    };

    let board = Board::new();
    let divide = perft_divide(&board, Side::Red, depth, policy);
    for (mv, n) in &divide {
        println!("{} -> {}: {n}", mv.from, mv.to);
    }
    let total: u64 = divide.iter().map(|(_, n)| n).sum();
    println!("Depth {depth} ({policy:?}): {total}");
}
