//! One-ply greedy engine.
//!
//! Plays the move with the most favourable immediate capture score, choosing
//! at random among ties. Quiet moves all score zero.

use std::cmp::Ordering;

use rand::prelude::IndexedRandom;

use crate::damath_errors::{DamathError, DamathResult};
use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::board::Board;
use crate::game_state::damath_rules::ScoreGoal;
use crate::game_state::damath_types::Score;
use crate::game_state::game_state::GameState;
use crate::moves::damath_move::Move;
use crate::scoring::capture_score::score_capture;

/// Moves sharing the best immediate capture score, in input order, together
/// with that score.
pub fn best_immediate_captures(
    board: &Board,
    moves: &[Move],
    goal: ScoreGoal,
) -> (Vec<Move>, Score) {
    let mut best_score = None;
    let mut best_moves = Vec::new();
    for mv in moves {
        let score = score_capture(board, mv).map_or(Score::ZERO, |b| b.result);
        match best_score.map(|best| goal.favour(score, best)) {
            None | Some(Ordering::Greater) => {
                best_score = Some(score);
                best_moves.clear();
                best_moves.push(*mv);
            }
            Some(Ordering::Equal) => best_moves.push(*mv),
            Some(Ordering::Less) => {}
        }
    }
    (best_moves, best_score.unwrap_or(Score::ZERO))
}

#[derive(Debug, Default)]
pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose_move(&mut self, state: &GameState, params: &SearchParams) -> DamathResult<EngineOutput> {
        if state.is_over() {
            return Err(DamathError::GameAlreadyOver);
        }
        let legal_moves = state.legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("greedy_engine legal_moves {}", legal_moves.len()));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("greedy_engine requested_depth {depth} ignored"));
        }
        if legal_moves.is_empty() {
            return Ok(out);
        }

        let (best_moves, best_score) =
            best_immediate_captures(&state.board, &legal_moves, state.rules.score_goal);
        let mut rng = rand::rng();
        out.best_move = best_moves.as_slice().choose(&mut rng).copied();
        out.info_lines
            .push(format!("greedy_engine capture_score {best_score}"));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::damath_rules::RulesConfig;
    use crate::game_state::damath_types::{Side, Square};
    use crate::utils::board_notation::parse_board;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("playable test square")
    }

    // Red king on (4,2) can take b3 on (3,3) landing on (2,4) "×" or (1,5) "+".
    const KING_CHOICE: &str = ". . . . . . . . / \
                               . . . . . . . . / \
                               . . . . . . . . / \
                               . . . b3 . . . . / \
                               . . R4 . . . . . / \
                               . . . . . . . . / \
                               . . . . . . . . / \
                               . . . . . . . .";

    #[test]
    fn picks_the_richest_landing() {
        let board = parse_board(KING_CHOICE).expect("valid board");
        let moves = vec![
            Move::capture(sq(4, 2), sq(3, 3), sq(1, 5)),
            Move::capture(sq(4, 2), sq(3, 3), sq(2, 4)),
        ];
        let (best, score) = best_immediate_captures(&board, &moves, ScoreGoal::Highest);
        assert_eq!(best, vec![Move::capture(sq(4, 2), sq(3, 3), sq(2, 4))]);
        assert_eq!(score, Score::from_whole(24));
        let (best, _) = best_immediate_captures(&board, &moves, ScoreGoal::Lowest);
        assert_eq!(best, vec![Move::capture(sq(4, 2), sq(3, 3), sq(1, 5))]);
    }

    #[test]
    fn engine_plays_a_legal_move() {
        let board = parse_board(KING_CHOICE).expect("valid board");
        let rules = RulesConfig {
            score_goal: ScoreGoal::Highest,
            ..RulesConfig::default()
        };
        let state = GameState::from_board(board, Side::Red, rules);
        let out = GreedyEngine::new()
            .choose_move(&state, &SearchParams::default())
            .expect("engine runs");
        assert_eq!(out.best_move, Some(Move::capture(sq(4, 2), sq(3, 3), sq(2, 4))));
    }
}
