//! Diagonal direction tables.

use crate::game_state::damath_types::Side;

/// `(row delta, col delta)` of a diagonal step.
pub type Direction = (i8, i8);

/// All four diagonals. Captures use every one of them regardless of rank.
pub const DIAGONALS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The two diagonals a man may step along without capturing.
#[inline]
pub const fn forward_diagonals(side: Side) -> [Direction; 2] {
    let dr = side.forward();
    [(dr, -1), (dr, 1)]
}
