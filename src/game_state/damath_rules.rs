//! Canonical Sci-Damath rule constants and rule configuration.
//!
//! This module stores the static operator layout, the standard chip values of
//! the opening setup, and the few knobs (`RulesConfig`) that vary between the
//! house-rule variants of the game.

use std::cmp::Ordering;

use crate::game_state::damath_types::{Operator, Score, Side, Square};

use crate::game_state::damath_types::Operator::{
    Add as ADD, Divide as DIV, Multiply as MUL, Subtract as SUB,
};

/// Operators of the light squares, `[row][col / 2]`.
pub const OPERATOR_LAYOUT: [[Operator; 4]; 8] = [
    [MUL, DIV, SUB, ADD],
    [DIV, MUL, ADD, SUB],
    [SUB, ADD, MUL, DIV],
    [ADD, SUB, DIV, MUL],
    [MUL, DIV, SUB, ADD],
    [DIV, MUL, ADD, SUB],
    [SUB, ADD, MUL, DIV],
    [ADD, SUB, DIV, MUL],
];

/// Operator printed on a playable square.
#[inline]
pub fn operator_at(square: Square) -> Operator {
    OPERATOR_LAYOUT[square.row() as usize][(square.col() / 2) as usize]
}

/// Blue chips on rows 0..=2, left to right over light squares.
pub const BLUE_SETUP: [[i64; 4]; 3] = [[2, -5, 8, -11], [-7, 10, -3, 0], [4, -1, 6, -9]];

/// Red chips on rows 5..=7, left to right over light squares.
pub const RED_SETUP: [[i64; 4]; 3] = [[-9, 6, -1, 4], [0, -3, 10, -7], [-11, 8, -5, 2]];

pub const BLUE_SETUP_FIRST_ROW: u8 = 0;
pub const RED_SETUP_FIRST_ROW: u8 = 5;

/// Default number of jumps counted when ranking a capture chain.
pub const DEFAULT_CHAIN_DEPTH_CAP: u8 = 3;

/// Default number of occurrences of one position that draws a single-piece side.
pub const DEFAULT_REPETITION_LIMIT: usize = 3;

/// Which final score wins, and therefore which direction of the shared
/// evaluation each side pursues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreGoal {
    /// Higher final score wins. Blue maximizes `blue - red`.
    Highest,
    /// Lower final score wins. Red maximizes `blue - red`, Blue minimizes it.
    #[default]
    Lowest,
}

impl ScoreGoal {
    /// Whether `side` plays the maximizing role on `blue - red`.
    #[inline]
    pub const fn maximizes(self, side: Side) -> bool {
        matches!(
            (self, side),
            (ScoreGoal::Highest, Side::Blue) | (ScoreGoal::Lowest, Side::Red)
        )
    }

    /// Orders two scores earned by the same player; `Greater` means `a` is
    /// the more desirable one.
    #[inline]
    pub fn favour(self, a: Score, b: Score) -> Ordering {
        match self {
            ScoreGoal::Highest => a.cmp(&b),
            ScoreGoal::Lowest => b.cmp(&a),
        }
    }

    /// Winner by final score, `None` on equality.
    pub fn winner(self, red: Score, blue: Score) -> Option<Side> {
        match self.favour(red, blue) {
            Ordering::Greater => Some(Side::Red),
            Ordering::Less => Some(Side::Blue),
            Ordering::Equal => None,
        }
    }
}

/// House-rule configuration for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RulesConfig {
    /// Maximum number of jumps counted when comparing capture chains.
    pub chain_depth_cap: u8,
    /// Occurrences of a position that draw the game when the side to move
    /// has a single piece; `None` disables the rule.
    pub repetition_limit: Option<usize>,
    pub score_goal: ScoreGoal,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            chain_depth_cap: DEFAULT_CHAIN_DEPTH_CAP,
            repetition_limit: Some(DEFAULT_REPETITION_LIMIT),
            score_goal: ScoreGoal::Lowest,
        }
    }
}
