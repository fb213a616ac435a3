//! Authoritative game state.
//!
//! `GameState` is created at game start and only ever advanced through the
//! turn controller, which returns a new value per move. Search and the
//! engines read it but never write back.

use crate::game_state::board::Board;
use crate::game_state::damath_rules::RulesConfig;
use crate::game_state::damath_types::{Side, SideScores, Square};
use crate::game_state::turn_log::{MoveEvent, TurnRecord};
use crate::move_generation::move_selector::legal_moves_from;
use crate::moves::damath_move::Move;
use crate::turn_control::game_over::GameOutcome;
use crate::turn_control::repetition::PositionHistory;

/// Where the turn state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingMove(Side),
    /// The given piece must keep capturing before the turn can end.
    ChainPending(Side, Square),
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Side,
    pub scores: SideScores,
    pub pending_forced_piece: Option<Square>,

    // Completed turns, and events of the turn in progress.
    pub turn_log: Vec<TurnRecord>,
    pub current_turn_events: Vec<MoveEvent>,

    /// Positions since the last irreversible move, for the repetition draw.
    pub position_history: PositionHistory,

    pub outcome: Option<GameOutcome>,
    pub rules: RulesConfig,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard opening with default rules; red moves first.
    pub fn new_game() -> Self {
        Self::with_rules(RulesConfig::default())
    }

    pub fn with_rules(rules: RulesConfig) -> Self {
        Self::from_board(Board::standard(), Side::Red, rules)
    }

    /// Starts a game from an arbitrary position with zero scores.
    pub fn from_board(board: Board, side_to_move: Side, rules: RulesConfig) -> Self {
        Self {
            board,
            side_to_move,
            scores: SideScores::default(),
            pending_forced_piece: None,
            turn_log: Vec::new(),
            current_turn_events: Vec::new(),
            position_history: vec![(board, side_to_move)],
            outcome: None,
            rules,
        }
    }

    /// Moves the side to move may play now; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.outcome.is_some() {
            return Vec::new();
        }
        legal_moves_from(
            &self.board,
            self.side_to_move,
            self.pending_forced_piece,
            &self.rules,
        )
    }

    /// Legal moves of the piece on `square`, for destination highlighting.
    pub fn legal_moves_for(&self, square: Square) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(|mv| mv.from == square)
            .collect()
    }

    pub fn phase(&self) -> TurnPhase {
        match (&self.outcome, self.pending_forced_piece) {
            (Some(_), _) => TurnPhase::GameOver,
            (None, Some(square)) => TurnPhase::ChainPending(self.side_to_move, square),
            (None, None) => TurnPhase::AwaitingMove(self.side_to_move),
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_awaits_red() {
        let state = GameState::new_game();
        assert_eq!(state.phase(), TurnPhase::AwaitingMove(Side::Red));
        assert_eq!(state.legal_moves().len(), 7);
        assert_eq!(state.scores, SideScores::default());
    }

    #[test]
    fn highlighting_filters_by_origin() {
        let state = GameState::new_game();
        let sq = Square::new(5, 1).expect("playable test square");
        let moves = state.legal_moves_for(sq);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.from == sq));
    }
}
