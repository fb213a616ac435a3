//! Single-piece repetition draw.
//!
//! Positions (board plus side to move) are recorded after every completed
//! turn. Captures and man moves can never be undone, so they clear the
//! history. When the side to move is down to one piece and the current
//! position has occurred `limit` times, the game is drawn.

use crate::game_state::board::Board;
use crate::game_state::damath_types::Side;

pub type PositionHistory = Vec<(Board, Side)>;

pub fn record_position(history: &mut PositionHistory, board: Board, side: Side) {
    history.push((board, side));
}

pub fn occurrences(history: &PositionHistory, board: &Board, side: Side) -> usize {
    history
        .iter()
        .filter(|(seen, seen_side)| *seen_side == side && seen == board)
        .count()
}

pub fn is_repetition(
    history: &PositionHistory,
    board: &Board,
    side: Side,
    limit: Option<usize>,
) -> bool {
    let Some(limit) = limit else {
        return false;
    };
    board.piece_count(side) == 1 && limit > 0 && occurrences(history, board, side) >= limit
}
