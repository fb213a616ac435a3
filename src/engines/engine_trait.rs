//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different playing
//! strategies can be selected at runtime behind a single trait interface.

use crate::damath_errors::DamathResult;
use crate::game_state::game_state::GameState;
use crate::moves::damath_move::Move;
use crate::search::search_control::SearchControl;

#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Overrides the engine's configured depth.
    pub depth: Option<u8>,
    /// Lets the caller cancel a running search.
    pub control: Option<SearchControl>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` only when the side to move has no legal move.
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks a move for `state.side_to_move`. Implementations only ever return
    /// members of `state.legal_moves()`.
    fn choose_move(&mut self, state: &GameState, params: &SearchParams)
        -> DamathResult<EngineOutput>;
}

/// First legal move, the fallback when an engine yields nothing usable.
pub fn fallback_move(state: &GameState) -> Option<Move> {
    state.legal_moves().first().copied()
}
