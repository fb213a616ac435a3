//! Logical 8x8 Sci-Damath board.
//!
//! `Board` maps each of the 32 playable squares to an optional piece. It is a
//! small `Copy` value, so every turn and every search branch works on its own
//! snapshot and the authoritative board is never shared mutably.

use crate::damath_errors::{DamathError, DamathResult};
use crate::game_state::damath_rules::{
    BLUE_SETUP, BLUE_SETUP_FIRST_ROW, RED_SETUP, RED_SETUP_FIRST_ROW,
};
use crate::game_state::damath_types::{Piece, Score, Side, Square, PLAYABLE_SQUARES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [Option<Piece>; PLAYABLE_SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [None; PLAYABLE_SQUARES],
        }
    }

    /// Opening position: twelve chips per side.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (side, first_row, values) in [
            (Side::Blue, BLUE_SETUP_FIRST_ROW, &BLUE_SETUP),
            (Side::Red, RED_SETUP_FIRST_ROW, &RED_SETUP),
        ] {
            for (row_offset, row_values) in values.iter().enumerate() {
                let row = first_row as usize + row_offset;
                for (slot, value) in row_values.iter().enumerate() {
                    board.cells[row * 4 + slot] = Some(Piece::man(side, Score::from_whole(*value)));
                }
            }
        }
        board
    }

    /// Builds a board from raw coordinates, rejecting dark squares and
    /// doubly occupied squares.
    pub fn from_placements<I>(placements: I) -> DamathResult<Self>
    where
        I: IntoIterator<Item = (u8, u8, Piece)>,
    {
        let mut board = Self::empty();
        for (row, col, piece) in placements {
            let square = Square::new(row, col)?;
            if board.get(square).is_some() {
                return Err(DamathError::MalformedBoard {
                    reason: format!("two pieces on {square}"),
                });
            }
            board.place(square, piece);
        }
        Ok(board)
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cells[square.index()].is_none()
    }

    /// Occupied piece or `NoPieceAt`.
    pub fn piece_at(&self, square: Square) -> DamathResult<Piece> {
        self.get(square).ok_or(DamathError::NoPieceAt { square })
    }

    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.cells[square.index()] = Some(piece);
    }

    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.index()].take()
    }

    /// All occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.side == side)
    }

    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces_of(side).count()
    }

    pub fn total_pieces(&self) -> usize {
        self.cells.iter().flatten().count()
    }
}
