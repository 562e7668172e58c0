//! Draughts rules on the standard 8×8 board.

pub mod board;
pub mod layout;
pub mod piece;
pub mod rules;
