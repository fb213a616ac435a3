//! Root move tie-breaking.
//!
//! Root candidates are compared on, in order: minimax value, total capture
//! chain length, immediate capture score, promotion, and closeness of the
//! landing square to the board centre.

use std::cmp::Ordering;

use crate::game_state::damath_rules::ScoreGoal;
use crate::game_state::damath_types::Score;
use crate::moves::damath_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootCandidate {
    pub mv: Move,
    pub value: Score,
    pub chain_length: u8,
    /// Score earned by this jump alone; zero for quiet moves.
    pub immediate_score: Score,
    pub promotes: bool,
    pub center_distance: u8,
}

/// `Greater` when `a` is the better choice for a mover that plays the
/// `maximizing` role and pursues `goal` with its own captures.
pub fn compare_candidates(
    a: &RootCandidate,
    b: &RootCandidate,
    maximizing: bool,
    goal: ScoreGoal,
) -> Ordering {
    let by_value = if maximizing {
        a.value.cmp(&b.value)
    } else {
        b.value.cmp(&a.value)
    };
    by_value
        .then(a.chain_length.cmp(&b.chain_length))
        .then(goal.favour(a.immediate_score, b.immediate_score))
        .then(a.promotes.cmp(&b.promotes))
        .then(b.center_distance.cmp(&a.center_distance))
}

/// Best candidate; the earliest one wins a complete tie.
pub fn pick_best(
    candidates: &[RootCandidate],
    maximizing: bool,
    goal: ScoreGoal,
) -> Option<&RootCandidate> {
    candidates.iter().fold(None, |best, candidate| match best {
        Some(current)
            if compare_candidates(candidate, current, maximizing, goal) != Ordering::Greater =>
        {
            Some(current)
        }
        _ => Some(candidate),
    })
}
