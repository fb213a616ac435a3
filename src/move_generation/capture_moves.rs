//! Single-jump capture enumeration.
//!
//! Every rank captures along all four diagonals. A man jumps exactly two
//! squares; a king flies along the ray and may land on any empty square past
//! the first piece it meets, provided that piece is an opponent.

use crate::game_state::board::Board;
use crate::game_state::damath_types::{Piece, Side, Square};
use crate::moves::damath_move::Move;
use crate::moves::directions::{Direction, DIAGONALS};

/// One-jump captures available to `piece` standing on `from`.
pub fn immediate_captures(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    let mut out = Vec::new();
    push_immediate_captures(board, from, piece, &mut out);
    out
}

pub fn push_immediate_captures(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for direction in DIAGONALS {
        if piece.is_king() {
            push_king_ray_captures(board, from, piece.side, direction, out);
        } else {
            push_man_jump(board, from, piece.side, direction, out);
        }
    }
}

pub fn has_immediate_capture(board: &Board, from: Square, piece: Piece) -> bool {
    let mut out = Vec::new();
    push_immediate_captures(board, from, piece, &mut out);
    !out.is_empty()
}

/// Every single-jump capture for `side`, across all of its pieces.
pub fn generate_capture_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::new();
    for (from, piece) in board.pieces_of(side) {
        push_immediate_captures(board, from, piece, &mut out);
    }
    out
}

fn push_man_jump(board: &Board, from: Square, side: Side, direction: Direction, out: &mut Vec<Move>) {
    let (Some(over), Some(to)) = (from.offset(direction, 1), from.offset(direction, 2)) else {
        return;
    };
    let victim_is_enemy = board.get(over).is_some_and(|p| p.side != side);
    if victim_is_enemy && board.is_empty(to) {
        out.push(Move::capture(from, over, to));
    }
}

fn push_king_ray_captures(
    board: &Board,
    from: Square,
    side: Side,
    direction: Direction,
    out: &mut Vec<Move>,
) {
    let mut steps = 1;
    let over = loop {
        match from.offset(direction, steps) {
            None => return,
            Some(sq) if board.is_empty(sq) => steps += 1,
            Some(sq) => break sq,
        }
    };
    if board.get(over).is_some_and(|p| p.side == side) {
        return;
    }
    let mut landing_steps = steps + 1;
    while let Some(to) = from.offset(direction, landing_steps) {
        if !board.is_empty(to) {
            break;
        }
        out.push(Move::capture(from, over, to));
        landing_steps += 1;
    }
}
