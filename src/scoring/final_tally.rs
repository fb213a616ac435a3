//! End-of-game tally of surviving pieces.

use crate::game_state::board::Board;
use crate::game_state::damath_types::{Score, Side, SideScores};

/// Σ face value × (2 for kings) over the surviving pieces of `side`.
pub fn remaining_value(board: &Board, side: Side) -> Score {
    board.pieces_of(side).map(|(_, piece)| piece.tally_value()).sum()
}

/// Tally of both sides, to be added once to the running scores.
pub fn final_tally(board: &Board) -> SideScores {
    SideScores::new(
        remaining_value(board, Side::Red),
        remaining_value(board, Side::Blue),
    )
}
