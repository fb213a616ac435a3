//! Rule enforcement: mandatory capture and the Mayor Dama priority rule.
//!
//! Validation of a requested move, AI expansion and destination highlighting
//! all go through `legal_moves_from`, so the policy is applied uniformly.

use crate::game_state::board::Board;
use crate::game_state::damath_rules::RulesConfig;
use crate::game_state::damath_types::{Side, Square};
use crate::move_generation::capture_moves::{generate_capture_moves, immediate_captures};
use crate::move_generation::chain_resolver::capture_chain_length;
use crate::move_generation::quiet_moves::generate_quiet_moves;
use crate::moves::damath_move::Move;

/// Moves `side` is allowed to play with no chain pending.
pub fn legal_moves(board: &Board, side: Side, rules: &RulesConfig) -> Vec<Move> {
    legal_moves_from(board, side, None, rules)
}

/// Moves `side` is allowed to play; when `forced` is set only that piece may
/// move, and only by continuing its capture chain.
pub fn legal_moves_from(
    board: &Board,
    side: Side,
    forced: Option<Square>,
    rules: &RulesConfig,
) -> Vec<Move> {
    let captures = match forced {
        Some(square) => match board.get(square) {
            Some(piece) if piece.side == side => immediate_captures(board, square, piece),
            _ => Vec::new(),
        },
        None => generate_capture_moves(board, side),
    };

    if captures.is_empty() {
        return match forced {
            Some(_) => Vec::new(),
            None => generate_quiet_moves(board, side),
        };
    }

    select_longest_captures(board, captures, rules.chain_depth_cap)
}

/// Keeps the captures reaching the global maximum chain length, then prefers
/// kings among them.
pub fn select_longest_captures(board: &Board, captures: Vec<Move>, cap: u8) -> Vec<Move> {
    let ranked: Vec<(Move, u8, bool)> = captures
        .into_iter()
        .map(|mv| {
            let length = capture_chain_length(board, &mv, cap);
            let by_king = board.get(mv.from).is_some_and(|p| p.is_king());
            (mv, length, by_king)
        })
        .collect();

    let Some(longest) = ranked.iter().map(|(_, length, _)| *length).max() else {
        return Vec::new();
    };
    let king_available = ranked
        .iter()
        .any(|(_, length, by_king)| *length == longest && *by_king);

    ranked
        .into_iter()
        .filter(|(_, length, by_king)| *length == longest && (*by_king || !king_available))
        .map(|(mv, _, _)| mv)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_notation::parse_board;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("playable test square")
    }

    #[test]
    fn captures_are_mandatory() {
        let board = parse_board(
            ". . . . . . . . / \
             . . . . . . . . / \
             . . . . . . . . / \
             . . . b3 . . . . / \
             . . r4 . . . . . / \
             . . . . . . . . / \
             r1 . . . . . . . / \
             . . . . . . . .",
        )
        .expect("valid board");
        let moves = legal_moves(&board, Side::Red, &RulesConfig::default());
        assert_eq!(moves, vec![Move::capture(sq(4, 2), sq(3, 3), sq(2, 4))]);
        assert!(moves.iter().all(Move::is_capture));
    }

    #[test]
    fn longest_chain_wins_across_pieces() {
        // (6,0) has a single jump; (6,4) has a double jump.
        let board = parse_board(
            ". . . . . . . . / \
             . . . . . . . . / \
             . . . . . . . . / \
             . . . . . b2 . . / \
             . . . . . . . . / \
             . b1 . . . b4 . . / \
             r1 . . . r8 . . . / \
             . . . . . . . .",
        )
        .expect("valid board");
        let moves = legal_moves(&board, Side::Red, &RulesConfig::default());
        assert_eq!(moves, vec![Move::capture(sq(6, 4), sq(5, 5), sq(4, 6))]);
    }

    #[test]
    fn kings_win_ties() {
        let board = parse_board(
            ". . . . . . . . / \
             . . . . . . . . / \
             . . . . . . . . / \
             . . . . . . . . / \
             . . . . . . . . / \
             . b1 . . . b2 . . / \
             r1 . . . . . . . / \
             . . . . . . . R3",
        )
        .expect("valid board");
        let moves = legal_moves(&board, Side::Red, &RulesConfig::default());
        assert_eq!(moves.len(), 5);
        assert!(moves.iter().all(|mv| mv.from == sq(7, 7) && mv.is_capture()));
    }

    #[test]
    fn forced_piece_is_the_only_one_allowed() {
        let board = parse_board(
            ". . . . . . . . / \
             . . . . . . . . / \
             . . . . . . . . / \
             . . . . . . . . / \
             . . . . . . . . / \
             . b1 . b2 . b3 . . / \
             r1 . . . r3 . . . / \
             . . . . . . . .",
        )
        .expect("valid board");
        let rules = RulesConfig::default();
        assert_eq!(legal_moves(&board, Side::Red, &rules).len(), 3);
        let forced = legal_moves_from(&board, Side::Red, Some(sq(6, 4)), &rules);
        assert!(forced.iter().all(|mv| mv.from == sq(6, 4)));
        assert_eq!(forced.len(), 2);
    }

    #[test]
    fn forced_piece_without_captures_has_no_moves() {
        let board = Board::standard();
        let moves = legal_moves_from(&board, Side::Red, Some(sq(5, 1)), &RulesConfig::default());
        assert!(moves.is_empty());
    }
}
