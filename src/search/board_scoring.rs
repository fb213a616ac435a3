//! Static evaluation.
//!
//! Search delegates leaf scoring to `BoardScorer` so alternative heuristics can
//! be swapped in without touching the search code.

use crate::game_state::board::Board;
use crate::game_state::damath_types::{Score, Side, SideScores};
use crate::scoring::final_tally::remaining_value;

pub trait BoardScorer: Send + Sync {
    /// Signed value `blue - red`; higher favours Blue.
    fn score(&self, board: &Board, scores: &SideScores) -> Score;
}

/// Running score plus what the surviving pieces would add at the tally.
#[inline]
pub fn projected_total(board: &Board, scores: &SideScores, side: Side) -> Score {
    scores.get(side) + remaining_value(board, side)
}

/// Difference of projected totals, the same figure the final tally settles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectedTotalScorer;

impl BoardScorer for ProjectedTotalScorer {
    fn score(&self, board: &Board, scores: &SideScores) -> Score {
        projected_total(board, scores, Side::Blue) - projected_total(board, scores, Side::Red)
    }
}
