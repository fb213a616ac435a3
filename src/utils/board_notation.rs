//! Compact text notation for boards and positions.
//!
//! Rows run from row 0 to row 7, separated by `/`. Each row holds eight
//! whitespace-separated tokens: `.` for an empty square, `r<value>` /
//! `R<value>` for a red man / king and `b<value>` / `B<value>` for blue.
//! A position appends the side to move (`r` or `b`) after the board.

use crate::damath_errors::{DamathError, DamathResult};
use crate::game_state::board::Board;
use crate::game_state::damath_rules::RulesConfig;
use crate::game_state::damath_types::{Piece, Rank, Score, Side, Square, BOARD_SIZE};
use crate::game_state::game_state::GameState;

pub fn parse_board(text: &str) -> DamathResult<Board> {
    let rows: Vec<&str> = text.split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(invalid(format!("expected 8 rows, found {}", rows.len())));
    }

    let mut placements = Vec::new();
    for (row, row_text) in rows.iter().enumerate() {
        let tokens: Vec<&str> = row_text.split_whitespace().collect();
        if tokens.len() != BOARD_SIZE as usize {
            return Err(invalid(format!(
                "row {row} has {} squares, expected 8",
                tokens.len()
            )));
        }
        for (col, token) in tokens.iter().enumerate() {
            if let Some(piece) = parse_token(token)? {
                placements.push((row as u8, col as u8, piece));
            }
        }
    }

    Board::from_placements(placements)
}

pub fn board_to_notation(board: &Board) -> String {
    (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| {
                    Square::new(row, col)
                        .ok()
                        .and_then(|sq| board.get(sq))
                        .map_or_else(|| ".".to_owned(), piece_token)
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Parses `<board> <side>` into a fresh game with zero scores.
pub fn parse_position(text: &str, rules: RulesConfig) -> DamathResult<GameState> {
    let (board_text, side_text) = text
        .trim_end()
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| invalid("missing side to move".to_owned()))?;
    let side = match side_text {
        "r" | "red" => Side::Red,
        "b" | "blue" => Side::Blue,
        other => return Err(invalid(format!("unknown side '{other}'"))),
    };
    Ok(GameState::from_board(parse_board(board_text)?, side, rules))
}

pub fn position_to_notation(state: &GameState) -> String {
    let side = match state.side_to_move {
        Side::Red => "r",
        Side::Blue => "b",
    };
    format!("{} {side}", board_to_notation(&state.board))
}

fn parse_token(token: &str) -> DamathResult<Option<Piece>> {
    if token == "." {
        return Ok(None);
    }
    let mut chars = token.chars();
    let (side, rank) = match chars.next() {
        Some('r') => (Side::Red, Rank::Man),
        Some('R') => (Side::Red, Rank::King),
        Some('b') => (Side::Blue, Rank::Man),
        Some('B') => (Side::Blue, Rank::King),
        _ => return Err(invalid(format!("unknown token '{token}'"))),
    };
    let face_value: Score = chars.as_str().parse()?;
    Ok(Some(Piece {
        side,
        rank,
        face_value,
    }))
}

fn piece_token(piece: Piece) -> String {
    let letter = match (piece.side, piece.is_king()) {
        (Side::Red, false) => 'r',
        (Side::Red, true) => 'R',
        (Side::Blue, false) => 'b',
        (Side::Blue, true) => 'B',
    };
    let value = piece.face_value.to_string();
    let value = if piece.face_value.cents() % 100 == 0 {
        value.trim_end_matches(".00")
    } else {
        value.trim_end_matches('0')
    };
    format!("{letter}{value}")
}

fn invalid(reason: String) -> DamathError {
    DamathError::InvalidNotation { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board_round_trips() {
        let board = Board::standard();
        let text = board_to_notation(&board);
        assert!(text.starts_with("b2 . b-5 . b8 . b-11 . / . b-7"));
        assert_eq!(parse_board(&text), Ok(board));
    }

    #[test]
    fn fractional_values_are_kept_exact() {
        let text = "R2.5 . . . . . . . / . . . . . . . . / . . . . . . . . / . . . . . . . . / \
                    . . . . . . . . / . . . . . . . . / . . . . . . . . / . . . . . . . b-0.33";
        let board = parse_board(text).expect("valid board");
        let sq = |r, c| Square::new(r, c).expect("playable test square");
        assert_eq!(board.get(sq(0, 0)), Some(Piece::king(Side::Red, Score::from_cents(250))));
        assert_eq!(board_to_notation(&board), text.split_whitespace().collect::<Vec<_>>().join(" "));
        assert_eq!(board.get(sq(7, 7)).map(|p| p.face_value), Some(Score::from_cents(-33)));
    }

    #[test]
    fn rejects_dark_squares_and_bad_shapes() {
        let dark = ". r1 . . . . . . / . . . . . . . . / . . . . . . . . / . . . . . . . . / \
                    . . . . . . . . / . . . . . . . . / . . . . . . . . / . . . . . . . .";
        assert!(matches!(parse_board(dark), Err(DamathError::InvalidSquare { .. })));
        assert!(matches!(parse_board(". . ."), Err(DamathError::InvalidNotation { .. })));
        let short_row = dark.replacen(". r1 . . . . . .", ". . .", 1);
        assert!(matches!(parse_board(&short_row), Err(DamathError::InvalidNotation { .. })));
        let bad_token = dark.replacen(". r1", "x1 .", 1);
        assert!(matches!(parse_board(&bad_token), Err(DamathError::InvalidNotation { .. })));
    }

    #[test]
    fn position_carries_side_to_move() {
        let state = GameState::new_game();
        let text = position_to_notation(&state);
        assert!(text.ends_with(" r"));
        let parsed = parse_position(&text, RulesConfig::default()).expect("valid position");
        assert_eq!(parsed.board, state.board);
        assert_eq!(parsed.side_to_move, Side::Red);
        assert!(parse_position("garbage", RulesConfig::default()).is_err());
    }
}
