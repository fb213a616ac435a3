//! Terminal states and winner determination.

use std::fmt;

use crate::game_state::damath_rules::ScoreGoal;
use crate::game_state::damath_types::{Side, SideScores};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOverReason {
    /// The side to move has no pieces left.
    NoPieces,
    /// The side to move has pieces but cannot move; it loses.
    NoLegalMoves,
    /// Single-piece move repetition; always a draw.
    Repetition,
    Surrender,
    MutualAgreement,
    TimeExpired,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameOverReason::NoPieces => "no pieces left",
            GameOverReason::NoLegalMoves => "no legal moves",
            GameOverReason::Repetition => "move repetition",
            GameOverReason::Surrender => "surrender",
            GameOverReason::MutualAgreement => "mutual agreement",
            GameOverReason::TimeExpired => "time expired",
        };
        f.write_str(text)
    }
}

/// Externally supplied reasons to stop the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndSignal {
    Surrender(Side),
    MutualAgreement,
    TimeExpired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOutcome {
    pub reason: GameOverReason,
    /// `None` for a draw.
    pub winner: Option<Side>,
    /// Running scores with the end-of-game tally included.
    pub final_scores: SideScores,
}

impl GameOutcome {
    /// Resolves the winner for `reason`.
    ///
    /// `loser` names the stuck or surrendering side for the reasons that
    /// have one; the others are decided on `final_scores`.
    pub fn decide(
        reason: GameOverReason,
        loser: Option<Side>,
        final_scores: SideScores,
        goal: ScoreGoal,
    ) -> Self {
        let by_score = || goal.winner(final_scores.get(Side::Red), final_scores.get(Side::Blue));
        let winner = match reason {
            GameOverReason::NoLegalMoves | GameOverReason::Surrender => {
                loser.map(Side::opponent).or_else(by_score)
            }
            GameOverReason::Repetition => None,
            GameOverReason::NoPieces
            | GameOverReason::MutualAgreement
            | GameOverReason::TimeExpired => by_score(),
        };
        Self {
            reason,
            winner,
            final_scores,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Some(side) => write!(f, "{side} wins ({}), {}", self.reason, self.final_scores),
            None => write!(f, "draw ({}), {}", self.reason, self.final_scores),
        }
    }
}
