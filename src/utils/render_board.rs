//! Terminal board renderer.
//!
//! Empty light squares show their operator, dark squares a dot, and pieces
//! their side letter (upper case for kings) followed by the face value.

use crate::game_state::board::Board;
use crate::game_state::damath_rules::operator_at;
use crate::game_state::damath_types::{Piece, Side, Square, BOARD_SIZE};
use crate::game_state::game_state::GameState;

const CELL_WIDTH: usize = 6;

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!("{col:^CELL_WIDTH$}"));
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{row}  "));
        for col in 0..BOARD_SIZE {
            let cell = match Square::new(row, col) {
                Ok(square) => match board.get(square) {
                    Some(piece) => piece_label(piece),
                    None => operator_at(square).symbol().to_string(),
                },
                Err(_) => "·".to_owned(),
            };
            out.push_str(&format!("{cell:^CELL_WIDTH$}"));
        }
        out.push('\n');
    }

    out
}

/// Board plus side to move, scores and, if any, the outcome.
pub fn render_game_state(state: &GameState) -> String {
    let mut out = render_board(&state.board);
    out.push_str(&format!("scores: {}\n", state.scores));
    match (&state.outcome, state.pending_forced_piece) {
        (Some(outcome), _) => out.push_str(&format!("game over: {outcome}")),
        (None, Some(square)) => {
            out.push_str(&format!("{} to move, must continue from {square}", state.side_to_move))
        }
        (None, None) => out.push_str(&format!("{} to move", state.side_to_move)),
    }
    out
}

fn piece_label(piece: Piece) -> String {
    let letter = match (piece.side, piece.is_king()) {
        (Side::Red, false) => 'r',
        (Side::Red, true) => 'R',
        (Side::Blue, false) => 'b',
        (Side::Blue, true) => 'B',
    };
    let value = piece.face_value;
    if value.cents() % 100 == 0 {
        format!("{letter}{}", value.cents() / 100)
    } else {
        format!("{letter}{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_pieces_operators_and_dark_squares() {
        let text = render_board(&Board::standard());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[1].contains("b-11"));
        assert!(lines[4].contains('×'));
        assert!(lines[4].contains('·'));
        assert!(lines[8].contains("r2"));
    }

    #[test]
    fn game_state_footer_names_the_side_to_move() {
        let text = render_game_state(&GameState::new_game());
        assert!(text.ends_with("red to move"));
    }
}
