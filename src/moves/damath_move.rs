//! Single-step move value.
//!
//! A multi-jump turn is a sequence of `Move`s, one per jump, each played with
//! the same piece while the chain is pending.

use std::fmt;

use crate::game_state::damath_types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Square of the jumped piece, if this is a capture.
    pub captured: Option<Square>,
}

impl Move {
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    #[inline]
    pub const fn capture(from: Square, over: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: Some(over),
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Captured squares in order; empty or one element.
    #[inline]
    pub fn captured_squares(&self) -> &[Square] {
        self.captured.as_slice()
    }

    /// Same squares, reversed direction.
    #[inline]
    pub const fn reversed(&self) -> Self {
        Self::quiet(self.to, self.from)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(
            f,
            "{},{}{}{},{}",
            self.from.row(),
            self.from.col(),
            sep,
            self.to.row(),
            self.to.col()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("playable test square")
    }

    #[test]
    fn display_marks_captures() {
        assert_eq!(Move::quiet(sq(5, 1), sq(4, 0)).to_string(), "5,1-4,0");
        let jump = Move::capture(sq(5, 1), sq(4, 2), sq(3, 3));
        assert_eq!(jump.to_string(), "5,1x3,3");
        assert_eq!(jump.captured_squares(), &[sq(4, 2)]);
        assert!(Move::quiet(sq(5, 1), sq(4, 0)).captured_squares().is_empty());
    }
}
