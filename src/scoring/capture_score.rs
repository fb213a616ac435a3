//! Arithmetic scoring of a single capture.

use crate::game_state::board::Board;
use crate::game_state::damath_rules::operator_at;
use crate::game_state::damath_types::{Operator, Score};
use crate::moves::damath_move::Move;

/// ×4 when both pieces are kings, ×2 when exactly one is, ×1 otherwise.
#[inline]
pub const fn king_multiplier(capturing_is_king: bool, captured_is_king: bool) -> i64 {
    match (capturing_is_king, captured_is_king) {
        (true, true) => 4,
        (true, false) | (false, true) => 2,
        (false, false) => 1,
    }
}

/// Applies `operator` to `(capturing_value, captured_value)`, multiplies by
/// the king multiplier and rounds half-up at the cent.
///
/// Everything is computed on exact hundredths, so the only rounding is the
/// final one. Division by a zero face value scores exactly zero.
pub fn capture_score(
    capturing_value: Score,
    captured_value: Score,
    operator: Operator,
    capturing_is_king: bool,
    captured_is_king: bool,
) -> Score {
    let multiplier = king_multiplier(capturing_is_king, captured_is_king);
    match operator {
        Operator::Add => (capturing_value + captured_value).scaled(multiplier),
        Operator::Subtract => (capturing_value - captured_value).scaled(multiplier),
        Operator::Multiply => Score::from_ratio_rounded(
            i128::from(capturing_value.cents())
                * i128::from(captured_value.cents())
                * i128::from(multiplier),
            100,
        ),
        Operator::Divide if captured_value.is_zero() => Score::ZERO,
        Operator::Divide => Score::from_ratio_rounded(
            i128::from(capturing_value.cents()) * 100 * i128::from(multiplier),
            i128::from(captured_value.cents()),
        ),
    }
}

/// Everything a move log needs to explain one capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaptureBreakdown {
    pub capturing_value: Score,
    pub operator: Operator,
    pub captured_value: Score,
    pub capturing_is_king: bool,
    pub captured_is_king: bool,
    pub multiplier: i64,
    pub result: Score,
}

/// Scores `mv` on the board it is played from. `None` for quiet moves or when
/// either square is empty.
///
/// Rank is taken before the move, so a man promoting on its landing square
/// still scores as a man.
pub fn score_capture(board: &Board, mv: &Move) -> Option<CaptureBreakdown> {
    let capturing = board.get(mv.from)?;
    let captured = board.get(mv.captured?)?;
    let operator = operator_at(mv.to);
    Some(CaptureBreakdown {
        capturing_value: capturing.face_value,
        operator,
        captured_value: captured.face_value,
        capturing_is_king: capturing.is_king(),
        captured_is_king: captured.is_king(),
        multiplier: king_multiplier(capturing.is_king(), captured.is_king()),
        result: capture_score(
            capturing.face_value,
            captured.face_value,
            operator,
            capturing.is_king(),
            captured.is_king(),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::damath_types::Square;
    use crate::utils::board_notation::parse_board;

    fn whole(v: i64) -> Score {
        Score::from_whole(v)
    }

    #[test]
    fn division_rounds_to_the_cent() {
        assert_eq!(
            capture_score(whole(7), whole(3), Operator::Divide, false, false),
            Score::from_cents(233)
        );
        assert_eq!(
            capture_score(whole(-7), whole(3), Operator::Divide, false, false),
            Score::from_cents(-233)
        );
    }

    #[test]
    fn decimal_values_round_half_up_exactly() {
        let cents = Score::from_cents;
        // 0.35 × 0.10 = 0.035
        assert_eq!(capture_score(cents(35), cents(10), Operator::Multiply, false, false), cents(4));
        assert_eq!(capture_score(cents(-35), cents(10), Operator::Multiply, false, false), cents(-3));
        // 2.5 × 0.33 × 2 = 1.65
        assert_eq!(capture_score(cents(250), cents(33), Operator::Multiply, true, false), cents(165));
        // 0.07 ÷ 2 = 0.035
        assert_eq!(capture_score(cents(7), whole(2), Operator::Divide, false, false), cents(4));
        assert_eq!(capture_score(cents(7), whole(-2), Operator::Divide, false, false), cents(-3));
        // 1 ÷ 0.3 = 3.333...
        assert_eq!(capture_score(whole(1), cents(30), Operator::Divide, false, false), cents(333));
    }

    #[test]
    fn division_by_zero_scores_zero() {
        assert_eq!(capture_score(whole(5), Score::ZERO, Operator::Divide, false, false), Score::ZERO);
        assert_eq!(capture_score(whole(5), Score::ZERO, Operator::Divide, true, true), Score::ZERO);
    }

    #[test]
    fn king_multiplier_applies_after_the_operator() {
        assert_eq!(capture_score(whole(4), whole(3), Operator::Multiply, true, false), whole(24));
        assert_eq!(capture_score(whole(4), whole(3), Operator::Multiply, false, false), whole(12));
        assert_eq!(capture_score(whole(4), whole(3), Operator::Subtract, true, true), whole(4));
        assert_eq!(capture_score(whole(-5), whole(8), Operator::Add, false, true), whole(6));
    }

    #[test]
    fn breakdown_uses_landing_square_operator() {
        let board = parse_board(
            ". . . . . . . . / \
             . . . . . . . . / \
             . . . . . . . . / \
             . . . b3 . . . . / \
             . . r4 . . . . . / \
             . . . . . . . . / \
             . . . . . . . . / \
             . . . . . . . .",
        )
        .expect("valid board");
        let sq = |r, c| Square::new(r, c).expect("playable test square");
        let breakdown = score_capture(&board, &Move::capture(sq(4, 2), sq(3, 3), sq(2, 4)))
            .expect("capture");
        assert_eq!(breakdown.operator, Operator::Multiply);
        assert_eq!(breakdown.multiplier, 1);
        assert_eq!(breakdown.result, whole(12));
        assert_eq!(score_capture(&board, &Move::quiet(sq(4, 2), sq(3, 1))), None);
    }
}
