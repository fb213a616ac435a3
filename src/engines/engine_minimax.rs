//! Minimax engine.
//!
//! Runs the alpha-beta search for the first jump of a turn. Once a capture
//! chain is pending it picks the continuation with the best immediate capture
//! score instead of searching again.

use tracing::{info, warn};

use crate::damath_errors::{DamathError, DamathResult};
use crate::engines::difficulty::Difficulty;
use crate::engines::engine_greedy::best_immediate_captures;
use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::ProjectedTotalScorer;
use crate::search::minimax::{search, SearchConfig, SearchNode};

#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    config: SearchConfig,
    scorer: ProjectedTotalScorer,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            scorer: ProjectedTotalScorer,
        }
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(SearchConfig {
            depth: difficulty.depth(),
        })
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::with_difficulty(Difficulty::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(&mut self, state: &GameState, params: &SearchParams) -> DamathResult<EngineOutput> {
        if state.is_over() {
            return Err(DamathError::GameAlreadyOver);
        }
        let legal_moves = state.legal_moves();
        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("minimax_engine legal_moves {}", legal_moves.len()));
        if legal_moves.is_empty() {
            return Ok(out);
        }

        if state.pending_forced_piece.is_some() {
            let (best, score) =
                best_immediate_captures(&state.board, &legal_moves, state.rules.score_goal);
            out.best_move = best.first().copied();
            out.info_lines
                .push(format!("minimax_engine chain_continuation capture_score {score}"));
            return Ok(out);
        }

        let config = SearchConfig {
            depth: params.depth.unwrap_or(self.config.depth),
        };
        let control = params.control.clone().unwrap_or_default();
        let root = SearchNode {
            board: state.board,
            side: state.side_to_move,
            scores: state.scores,
            forced: None,
        };
        let result = search(&root, config, &state.rules, &self.scorer, &control)?;
        out.info_lines.push(format!(
            "minimax_engine depth {} nodes {} value {}",
            result.depth, result.nodes, result.value
        ));

        out.best_move = match result.best_move {
            Some(mv) if legal_moves.contains(&mv) => Some(mv),
            suggested => {
                warn!(?suggested, "search suggestion rejected, playing first legal move");
                legal_moves.first().copied()
            }
        };
        info!(
            side = %state.side_to_move,
            depth = config.depth,
            nodes = result.nodes,
            "minimax engine chose a move"
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::damath_rules::RulesConfig;
    use crate::game_state::damath_types::{Side, Square};
    use crate::moves::damath_move::Move;
    use crate::search::search_control::SearchControl;
    use crate::turn_control::turn_controller::apply_move;
    use crate::utils::board_notation::parse_board;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("playable test square")
    }

    #[test]
    fn every_difficulty_plays_legally() {
        let state = GameState::new_game();
        for difficulty in [Difficulty::Trivial, Difficulty::Easy, Difficulty::Medium] {
            let out = MinimaxEngine::with_difficulty(difficulty)
                .choose_move(&state, &SearchParams::default())
                .expect("engine runs");
            let mv = out.best_move.expect("opening has moves");
            assert!(state.legal_moves().contains(&mv));
        }
    }

    #[test]
    fn chain_continuation_is_greedy() {
        // After (6,2)x(4,4) the red man can continue over (3,3) to (2,2) "+"
        // or over (3,5) to (2,6) "÷".
        let board = parse_board(
            ". . . . . . . . / \
             . . . . . . . . / \
             . . . . . . . . / \
             . . . b2 . b-4 . . / \
             . . . . . . . . / \
             . . . b1 . . . . / \
             . . r8 . . . . . / \
             . . . . . . . .",
        )
        .expect("valid board");
        let state = GameState::from_board(board, Side::Red, RulesConfig::default());
        let (mid, _) =
            apply_move(&state, Move::capture(sq(6, 2), sq(5, 3), sq(4, 4))).expect("first jump");
        assert_eq!(mid.pending_forced_piece, Some(sq(4, 4)));
        let out = MinimaxEngine::default()
            .choose_move(&mid, &SearchParams::default())
            .expect("engine runs");
        // Lower scores win by default, so 8 / -4 = -2 beats 8 + 2 = 10.
        assert_eq!(out.best_move, Some(Move::capture(sq(4, 4), sq(3, 5), sq(2, 6))));
    }

    #[test]
    fn cancelled_control_propagates() {
        let control = SearchControl::new();
        control.request_stop();
        let params = SearchParams {
            depth: Some(4),
            control: Some(control),
        };
        let result = MinimaxEngine::default().choose_move(&GameState::new_game(), &params);
        assert_eq!(result, Err(DamathError::SearchCancelled));
    }
}
