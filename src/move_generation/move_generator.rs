//! Move generation entry points and the generator trait used by perft.

use crate::game_state::board::Board;
use crate::game_state::damath_rules::RulesConfig;
use crate::game_state::damath_types::{Side, Square};
use crate::move_generation::capture_moves::generate_capture_moves;
use crate::move_generation::move_selector::legal_moves_from;
use crate::move_generation::quiet_moves::generate_quiet_moves;
use crate::moves::damath_move::Move;

/// All single-jump captures of `side`, or all quiet moves when none exist.
///
/// Pure function of `(board, side)`; chain ranking is left to the selector.
pub fn generate_moves(board: &Board, side: Side) -> Vec<Move> {
    let captures = generate_capture_moves(board, side);
    if captures.is_empty() {
        generate_quiet_moves(board, side)
    } else {
        captures
    }
}

pub trait MoveGenerator: Send + Sync {
    fn generate(&self, board: &Board, side: Side, forced: Option<Square>) -> Vec<Move>;
}

/// Mandatory capture only, without chain ranking.
pub struct CaptureFirstGenerator;

impl MoveGenerator for CaptureFirstGenerator {
    fn generate(&self, board: &Board, side: Side, forced: Option<Square>) -> Vec<Move> {
        match forced {
            Some(square) => generate_moves(board, side)
                .into_iter()
                .filter(|mv| mv.from == square && mv.is_capture())
                .collect(),
            None => generate_moves(board, side),
        }
    }
}

/// The full rule set: mandatory capture plus Mayor Dama ranking.
pub struct MayorDamaGenerator {
    pub rules: RulesConfig,
}

impl MoveGenerator for MayorDamaGenerator {
    fn generate(&self, board: &Board, side: Side, forced: Option<Square>) -> Vec<Move> {
        legal_moves_from(board, side, forced, &self.rules)
    }
}
