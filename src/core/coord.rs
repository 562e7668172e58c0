use std::ops::{Add, Mul, Sub};

/// A signed `(row, col)` offset or location. May lie off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn is_diagonal_step(self) -> bool {
        self.row.abs() == 1 && self.col.abs() == 1
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord {
            row: self.row * rhs,
            col: self.col * rhs,
        }
    }
}

/// The 4 diagonal steps, "up" (towards row 0) first, then left before right.
pub const DIAGONAL_STEPS: [Coord; 4] = [
    Coord { row: -1, col: -1 },
    Coord { row: -1, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: 1, col: 1 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_steps_are_unit_diagonals() {
        for d in DIAGONAL_STEPS {
            assert!(d.is_diagonal_step());
        }
        assert_eq!(Coord::new(2, -3) + Coord::new(-1, 1) * 2, Coord::new(0, -1));
        assert_eq!(Coord::new(3, 4) - Coord::new(4, 3), Coord::new(-1, 1));
    }
}
