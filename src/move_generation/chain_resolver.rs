//! Capture-chain length discovery.
//!
//! Chain lengths rank competing captures under the Mayor Dama rule. Counting
//! is capped (`RulesConfig::chain_depth_cap`), never revisits a square within
//! one chain, and stops at a promotion since promoting ends the turn.

use crate::game_state::board::Board;
use crate::game_state::damath_types::{Piece, Square};
use crate::move_generation::board_apply::apply_with_piece;
use crate::move_generation::capture_moves::immediate_captures;
use crate::moves::damath_move::Move;

/// Longest run of further jumps available to `piece` standing on `square`,
/// counting at most `cap` jumps.
pub fn max_chain_length(board: &Board, square: Square, piece: Piece, cap: u8) -> u8 {
    let mut visited = vec![square];
    longest_from(board, square, piece, cap, &mut visited)
}

/// Total number of captures reachable by a turn that starts with `first_jump`,
/// the first jump included. Returns 0 for quiet moves.
pub fn capture_chain_length(board: &Board, first_jump: &Move, cap: u8) -> u8 {
    let Some(piece) = board.get(first_jump.from) else {
        return 0;
    };
    if !first_jump.is_capture() {
        return 0;
    }
    let after = apply_with_piece(board, first_jump, piece);
    if after.promoted {
        return 1;
    }
    let mut visited = vec![first_jump.from, first_jump.to];
    1 + longest_from(
        &after.board,
        first_jump.to,
        after.piece,
        cap.max(1) - 1,
        &mut visited,
    )
}

fn longest_from(
    board: &Board,
    square: Square,
    piece: Piece,
    remaining: u8,
    visited: &mut Vec<Square>,
) -> u8 {
    if remaining == 0 {
        return 0;
    }
    let mut best = 0;
    for jump in immediate_captures(board, square, piece) {
        if visited.contains(&jump.to) {
            continue;
        }
        let after = apply_with_piece(board, &jump, piece);
        let length = if after.promoted {
            1
        } else {
            visited.push(jump.to);
            let further = longest_from(&after.board, jump.to, after.piece, remaining - 1, visited);
            visited.pop();
            1 + further
        };
        best = best.max(length);
        if best == remaining {
            break;
        }
    }
    best
}
