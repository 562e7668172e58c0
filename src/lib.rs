//! A two-player draughts (checkers) engine on the standard 8×8 board.
//!
//! - [`checkers`]: board model, text diagrams and move generation (mandatory capture,
//!   multi-jump chains resolved into single destinations).
//! - [`game`]: the turn controller driving select/move input.
//! - [`search`]: minimax with alpha-beta pruning for the computer opponent.
//! - [`config`]: JSON-backed engine settings.
//!
//! ```
//! use draughts::checkers::piece::Side;
//! use draughts::game::TurnController;
//! use draughts::search::choose_move;
//!
//! let mut game = TurnController::new();
//! assert!(game.select(5, 0));
//! assert!(game.select(4, 1));
//! assert_eq!(game.turn(), Side::White);
//!
//! let reply = choose_move(game.board(), Side::White, 3).unwrap();
//! assert!(game.play(&reply));
//! assert_eq!(game.turn(), Side::Red);
//! ```

pub mod checkers;
pub mod config;
pub mod core;
pub mod game;
pub mod search;
