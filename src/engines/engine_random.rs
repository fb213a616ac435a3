//! Uniform random legal-move engine for diagnostics and self-play openings.

use rand::prelude::IndexedRandom;

use crate::damath_errors::{DamathError, DamathResult};
use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::game_state::GameState;

#[derive(Debug, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, state: &GameState, params: &SearchParams) -> DamathResult<EngineOutput> {
        if state.is_over() {
            return Err(DamathError::GameAlreadyOver);
        }
        let legal_moves = state.legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("random_engine requested_depth {depth} ignored"));
        }

        let mut rng = rand::rng();
        out.best_move = legal_moves.as_slice().choose(&mut rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_engine_returns_legal_move() {
        let state = GameState::new_game();
        let mut engine = RandomEngine::new();
        for _ in 0..20 {
            let out = engine
                .choose_move(&state, &SearchParams::default())
                .expect("engine runs");
            let mv = out.best_move.expect("opening has moves");
            assert!(state.legal_moves().contains(&mv));
        }
    }

    #[test]
    fn finished_game_is_rejected() {
        let (state, _) = crate::turn_control::turn_controller::signal(
            &GameState::new_game(),
            crate::turn_control::game_over::EndSignal::MutualAgreement,
        )
        .expect("signal");
        let result = RandomEngine::new().choose_move(&state, &SearchParams::default());
        assert_eq!(result, Err(DamathError::GameAlreadyOver));
    }
}
