//! Non-capturing moves.

use crate::game_state::board::Board;
use crate::game_state::damath_types::{Piece, Side, Square};
use crate::moves::damath_move::Move;
use crate::moves::directions::{forward_diagonals, DIAGONALS};

pub fn push_quiet_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    if piece.is_king() {
        for direction in DIAGONALS {
            let mut steps = 1;
            while let Some(to) = from.offset(direction, steps) {
                if !board.is_empty(to) {
                    break;
                }
                out.push(Move::quiet(from, to));
                steps += 1;
            }
        }
    } else {
        for direction in forward_diagonals(piece.side) {
            if let Some(to) = from.offset(direction, 1) {
                if board.is_empty(to) {
                    out.push(Move::quiet(from, to));
                }
            }
        }
    }
}

pub fn generate_quiet_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::new();
    for (from, piece) in board.pieces_of(side) {
        push_quiet_moves(board, from, piece, &mut out);
    }
    out
}
