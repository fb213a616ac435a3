//! Board-level move application.
//!
//! Produces a fresh board: relocation, removal of the jumped piece and
//! promotion. Scores and side switching are layered on top by the callers.

use crate::damath_errors::DamathResult;
use crate::game_state::board::Board;
use crate::game_state::damath_types::Piece;
use crate::move_generation::capture_moves::has_immediate_capture;
use crate::moves::damath_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardAfterMove {
    pub board: Board,
    /// The moving piece as it stands on the destination (promoted if so).
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

impl BoardAfterMove {
    /// Whether the same piece must keep jumping from `mv.to`.
    ///
    /// Promotion ends the turn even when another jump is geometrically
    /// available, and quiet moves never continue.
    pub fn chain_continues(&self, mv: &Move) -> bool {
        self.captured.is_some()
            && !self.promoted
            && has_immediate_capture(&self.board, mv.to, self.piece)
    }
}

pub fn apply_move_to_board(board: &Board, mv: &Move) -> DamathResult<BoardAfterMove> {
    let piece = board.piece_at(mv.from)?;
    Ok(apply_with_piece(board, mv, piece))
}

/// Applies `mv` for a piece already known to stand on `mv.from`.
pub(crate) fn apply_with_piece(board: &Board, mv: &Move, piece: Piece) -> BoardAfterMove {
    let mut next = *board;
    next.remove(mv.from);
    let captured = mv.captured.and_then(|sq| next.remove(sq));
    debug_assert!(captured.map_or(true, |victim| victim.side != piece.side));
    debug_assert!(next.is_empty(mv.to), "destination {} occupied", mv.to);

    let promoted = piece.promotes_on(mv.to);
    let piece = if promoted { piece.promoted() } else { piece };
    next.place(mv.to, piece);

    BoardAfterMove {
        board: next,
        piece,
        captured,
        promoted,
    }
}
