//! Errors used throughout the Sci-Damath engine.
//!
//! `DamathError` is the single error type returned by the rules engine, the
//! turn controller, the search and the engines. Most of the engine is pure
//! computation, so the error surface is small:
//!
//! - Caller contract violations (`IllegalMove`, `GameAlreadyOver`,
//!   `NoPieceAt`) mean the caller asked for something the rules forbid. The
//!   engine never coerces such a request into a nearby legal one.
//! - Construction errors (`InvalidSquare`, `InvalidNotation`,
//!   `MalformedBoard`) come from building boards out of untrusted input.
//! - `SearchCancelled` is returned by an aborted search; it carries no move.
//!
//! Arithmetic edge cases (a division by a zero face value) and positions
//! without legal moves are game rules, not errors, and never show up here.

use thiserror::Error;

use crate::game_state::damath_types::Square;
use crate::moves::damath_move::Move;

/// Unified error type for the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DamathError {
    /// The move is not a member of the legal move set for the side to move.
    #[error("illegal move {mv}")]
    IllegalMove { mv: Move },

    /// The game has already been concluded; no further moves or signals apply.
    #[error("the game is already over")]
    GameAlreadyOver,

    /// A move or query referenced an empty square.
    #[error("no piece at {square}")]
    NoPieceAt { square: Square },

    /// Coordinates outside the board or on a non-playable (dark) square.
    #[error("({row}, {col}) is not a playable square")]
    InvalidSquare { row: i16, col: i16 },

    /// Board text could not be parsed.
    #[error("invalid board notation: {reason}")]
    InvalidNotation { reason: String },

    /// Internal invariant violation in a board value.
    #[error("malformed board: {reason}")]
    MalformedBoard { reason: String },

    /// The search was aborted through its control handle.
    #[error("search cancelled")]
    SearchCancelled,

    /// An engine failed outside of the rules (worker thread died, etc).
    #[error("engine failure: {message}")]
    EngineFailure { message: String },
}

/// Result type alias for engine operations.
pub type DamathResult<T> = Result<T, DamathError>;
