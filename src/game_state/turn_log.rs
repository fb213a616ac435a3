//! Turn log entries and the events that make up a human-readable move log.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::damath_types::{Operator, Score, Side, Square};
use crate::scoring::capture_score::CaptureBreakdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveEvent {
    Capture {
        side: Side,
        from: Square,
        to: Square,
        capturing_value: Score,
        operator: Operator,
        captured_value: Score,
        capturing_is_king: bool,
        captured_is_king: bool,
        multiplier: i64,
        result: Score,
    },
    Move {
        side: Side,
        from: Square,
        to: Square,
        value: Score,
    },
    Promotion {
        side: Side,
        square: Square,
        value: Score,
    },
    FinalTally {
        side: Side,
        value: Score,
    },
}

impl MoveEvent {
    pub fn capture(side: Side, from: Square, to: Square, breakdown: &CaptureBreakdown) -> Self {
        MoveEvent::Capture {
            side,
            from,
            to,
            capturing_value: breakdown.capturing_value,
            operator: breakdown.operator,
            captured_value: breakdown.captured_value,
            capturing_is_king: breakdown.capturing_is_king,
            captured_is_king: breakdown.captured_is_king,
            multiplier: breakdown.multiplier,
            result: breakdown.result,
        }
    }

    pub fn side(&self) -> Side {
        match self {
            MoveEvent::Capture { side, .. }
            | MoveEvent::Move { side, .. }
            | MoveEvent::Promotion { side, .. }
            | MoveEvent::FinalTally { side, .. } => *side,
        }
    }
}

impl fmt::Display for MoveEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveEvent::Capture {
                side,
                from,
                to,
                capturing_value,
                operator,
                captured_value,
                multiplier,
                result,
                ..
            } => {
                write!(
                    f,
                    "{side} {from}x{to}: {capturing_value} {operator} {captured_value}"
                )?;
                if *multiplier > 1 {
                    write!(f, " (x{multiplier})")?;
                }
                write!(f, " = {result}")
            }
            MoveEvent::Move {
                side,
                from,
                to,
                value,
            } => write!(f, "{side} {value} {from}-{to}"),
            MoveEvent::Promotion { side, square, value } => {
                write!(f, "{side} {value} promoted on {square}")
            }
            MoveEvent::FinalTally { side, value } => write!(f, "{side} remaining pieces {value}"),
        }
    }
}

/// Snapshot of one completed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnRecord {
    /// 1-based.
    pub number: usize,
    pub side: Side,
    /// Board after the turn.
    pub board: Board,
    pub events: Vec<MoveEvent>,
}
