//! Low-level, allocation-free primitives.
//!
//! - [`coord`]: signed `(row, col)` coordinates and the diagonal step set.
//! - [`square`]: a coordinate validated to lie on the 8×8 board.

pub mod coord;
pub mod square;
