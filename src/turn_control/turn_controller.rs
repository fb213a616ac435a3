//! Turn state machine.
//!
//! `apply_move` is the single entry point that advances a game: it validates
//! the move against the legal set, applies it, scores captures, decides
//! whether the capture chain continues and, when the turn ends, logs it and
//! checks for the end of the game.

use tracing::{debug, info};

use crate::damath_errors::{DamathError, DamathResult};
use crate::game_state::damath_types::Side;
use crate::game_state::game_state::GameState;
use crate::game_state::turn_log::{MoveEvent, TurnRecord};
use crate::move_generation::board_apply::apply_move_to_board;
use crate::move_generation::move_selector::legal_moves;
use crate::moves::damath_move::Move;
use crate::scoring::capture_score::score_capture;
use crate::scoring::final_tally::final_tally;
use crate::turn_control::game_over::{EndSignal, GameOutcome, GameOverReason};
use crate::turn_control::repetition::{is_repetition, record_position};

/// Plays one step (a quiet move or a single jump) for the side to move.
///
/// Returns the new state and the events produced by this step, including
/// the final tally if the step ended the game.
pub fn apply_move(state: &GameState, mv: Move) -> DamathResult<(GameState, Vec<MoveEvent>)> {
    if state.is_over() {
        return Err(DamathError::GameAlreadyOver);
    }
    if !state.legal_moves().contains(&mv) {
        return Err(DamathError::IllegalMove { mv });
    }

    let side = state.side_to_move;
    let breakdown = score_capture(&state.board, &mv);
    let after = apply_move_to_board(&state.board, &mv)?;

    let mut next = state.clone();
    let mut events = Vec::new();
    match breakdown {
        Some(breakdown) => {
            next.scores.add(side, breakdown.result);
            events.push(MoveEvent::capture(side, mv.from, mv.to, &breakdown));
        }
        None => events.push(MoveEvent::Move {
            side,
            from: mv.from,
            to: mv.to,
            value: after.piece.face_value,
        }),
    }
    if after.promoted {
        events.push(MoveEvent::Promotion {
            side,
            square: mv.to,
            value: after.piece.face_value,
        });
    }

    let moved_man = after.promoted || !after.piece.is_king();
    if mv.is_capture() || moved_man {
        next.position_history.clear();
    }
    next.board = after.board;
    next.current_turn_events.extend(events.iter().copied());
    debug!(%side, %mv, scores = %next.scores, "move applied");

    if after.chain_continues(&mv) {
        next.pending_forced_piece = Some(mv.to);
        debug!(%side, square = %mv.to, "capture chain continues");
        return Ok((next, events));
    }

    next.pending_forced_piece = None;
    finish_turn(&mut next, &mut events);
    Ok((next, events))
}

/// Ends the game on an externally supplied signal.
pub fn signal(state: &GameState, end_signal: EndSignal) -> DamathResult<(GameState, Vec<MoveEvent>)> {
    if state.is_over() {
        return Err(DamathError::GameAlreadyOver);
    }
    let (reason, loser) = match end_signal {
        EndSignal::Surrender(side) => (GameOverReason::Surrender, Some(side)),
        EndSignal::MutualAgreement => (GameOverReason::MutualAgreement, None),
        EndSignal::TimeExpired => (GameOverReason::TimeExpired, None),
    };
    let mut next = state.clone();
    // An interrupted chain is logged as the mover's turn before the tally.
    if next.pending_forced_piece.take().is_some() || !next.current_turn_events.is_empty() {
        log_turn(&mut next);
    }
    let mut events = Vec::new();
    conclude(&mut next, reason, loser, &mut events);
    Ok((next, events))
}

pub fn is_game_over(state: &GameState) -> Option<&GameOutcome> {
    state.outcome.as_ref()
}

fn log_turn(state: &mut GameState) {
    state.turn_log.push(TurnRecord {
        number: state.turn_log.len() + 1,
        side: state.side_to_move,
        board: state.board,
        events: std::mem::take(&mut state.current_turn_events),
    });
}

fn finish_turn(state: &mut GameState, events: &mut Vec<MoveEvent>) {
    log_turn(state);
    state.side_to_move = state.side_to_move.opponent();
    record_position(&mut state.position_history, state.board, state.side_to_move);

    if let Some((reason, loser)) = end_condition(state) {
        conclude(state, reason, loser, events);
    }
}

/// End conditions checked for the side now to move.
fn end_condition(state: &GameState) -> Option<(GameOverReason, Option<Side>)> {
    let mover = state.side_to_move;
    let pieces = state.board.piece_count(mover);
    if pieces == 0 {
        return Some((GameOverReason::NoPieces, Some(mover)));
    }
    if legal_moves(&state.board, mover, &state.rules).is_empty() {
        return Some((GameOverReason::NoLegalMoves, Some(mover)));
    }
    let limit = state.rules.repetition_limit;
    if is_repetition(&state.position_history, &state.board, mover, limit) {
        return Some((GameOverReason::Repetition, None));
    }
    None
}

/// Adds the end-of-game tally once and freezes the state.
fn conclude(
    state: &mut GameState,
    reason: GameOverReason,
    loser: Option<Side>,
    events: &mut Vec<MoveEvent>,
) {
    let tally = final_tally(&state.board);
    let mut tally_events = Vec::new();
    for side in Side::ALL {
        let value = tally.get(side);
        state.scores.add(side, value);
        if !value.is_zero() {
            tally_events.push(MoveEvent::FinalTally { side, value });
        }
    }
    if let Some(last) = state.turn_log.last_mut() {
        last.events.extend(tally_events.iter().copied());
    }
    events.extend(tally_events);

    let outcome = GameOutcome::decide(reason, loser, state.scores, state.rules.score_goal);
    info!(%outcome, turns = state.turn_log.len(), "game over");
    state.outcome = Some(outcome);
}
