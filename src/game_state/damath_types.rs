//! Core value types shared by every subsystem: sides, ranks, pieces, squares,
//! arithmetic operators and fixed-point scores.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::damath_errors::{DamathError, DamathResult};

/// Board edge length. The engine only supports 8x8.
pub const BOARD_SIZE: u8 = 8;

/// Number of playable (light) squares.
pub const PLAYABLE_SQUARES: usize = 32;

/// Side to move. Red moves first and advances toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Red, Side::Blue];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Blue => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    /// Row delta of a forward (non-capturing) man step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::Blue => 1,
        }
    }

    /// Row on which a man of this side is promoted.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::Red => 0,
            Side::Blue => BOARD_SIZE - 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "red"),
            Side::Blue => write!(f, "blue"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    Man,
    /// Dama: flying king.
    King,
}

/// A chip on the board. Pieces carry no identity beyond the square they sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub side: Side,
    pub rank: Rank,
    /// Printed value; fixed for the lifetime of the piece.
    pub face_value: Score,
}

impl Piece {
    #[inline]
    pub const fn man(side: Side, face_value: Score) -> Self {
        Self {
            side,
            rank: Rank::Man,
            face_value,
        }
    }

    #[inline]
    pub const fn king(side: Side, face_value: Score) -> Self {
        Self {
            side,
            rank: Rank::King,
            face_value,
        }
    }

    #[inline]
    pub const fn is_king(&self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Same piece, promoted. Promotion never touches the face value.
    #[inline]
    pub const fn promoted(self) -> Self {
        Self {
            rank: Rank::King,
            ..self
        }
    }

    /// Contribution of this piece to an end-of-game tally.
    #[inline]
    pub const fn tally_value(&self) -> Score {
        if self.is_king() {
            self.face_value.scaled(2)
        } else {
            self.face_value
        }
    }

    /// Whether a man of this kind would be promoted on `square`.
    #[inline]
    pub fn promotes_on(&self, square: Square) -> bool {
        !self.is_king() && square.row() == self.side.promotion_row()
    }
}

/// A playable board coordinate. Only light squares (`(row + col) % 2 == 0`)
/// are representable, so a dark square can never hold a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Validating constructor.
    pub fn new(row: u8, col: u8) -> DamathResult<Self> {
        Self::from_coords(i16::from(row), i16::from(col)).ok_or(DamathError::InvalidSquare {
            row: i16::from(row),
            col: i16::from(col),
        })
    }

    fn from_coords(row: i16, col: i16) -> Option<Self> {
        let size = i16::from(BOARD_SIZE);
        let on_board = (0..size).contains(&row) && (0..size).contains(&col);
        if on_board && (row + col) % 2 == 0 {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Dense index in `0..32`, row-major over playable squares.
    #[inline]
    pub const fn index(self) -> usize {
        (self.row as usize) * 4 + (self.col as usize) / 2
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= PLAYABLE_SQUARES {
            return None;
        }
        let row = (index / 4) as i16;
        let col = ((index % 4) * 2) as i16 + row % 2;
        Self::from_coords(row, col)
    }

    /// Diagonal neighbour `steps` away, if it is still on the board.
    #[inline]
    pub fn offset(self, direction: (i8, i8), steps: i8) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(direction.0) * i16::from(steps);
        let col = i16::from(self.col) + i16::from(direction.1) * i16::from(steps);
        Self::from_coords(row, col)
    }

    /// Manhattan distance to the board centre, doubled to stay integral.
    #[inline]
    pub fn center_distance(self) -> u8 {
        let row = (2 * i16::from(self.row) - 7).unsigned_abs();
        let col = (2 * i16::from(self.col) - 7).unsigned_abs();
        (row + col) as u8
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..PLAYABLE_SQUARES).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Arithmetic symbol printed on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            'x' | 'X' | '×' | '*' => Some(Operator::Multiply),
            '÷' | '/' => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Fixed-point value with two decimal places, stored as hundredths.
///
/// Face values, capture results, running scores and evaluations all use this
/// type so that accumulation is exact once a result has been rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score(i64);

impl Score {
    pub const ZERO: Score = Score(0);
    pub const MAX: Score = Score(i64::MAX / 4);
    pub const MIN: Score = Score(-(i64::MAX / 4));

    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Score(cents)
    }

    #[inline]
    pub const fn from_whole(value: i64) -> Self {
        Score(value * 100)
    }

    /// `numerator / denominator` hundredths, rounded half-up at the cent
    /// (`233.5 -> 234`, `-233.5 -> -233`). `denominator` must be non-zero.
    pub fn from_ratio_rounded(numerator: i128, denominator: i128) -> Self {
        let (n, d) = if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        Score((2 * n + d).div_euclid(2 * d) as i64)
    }

    #[inline]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn scaled(self, factor: i64) -> Self {
        Score(self.0 * factor)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

/// Parses signed decimals with at most two fractional digits (`-7`, `2.5`,
/// `0.33`) without going through floating point.
impl FromStr for Score {
    type Err = DamathError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || DamathError::InvalidNotation {
            reason: format!("bad value '{text}'"),
        };
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || fraction.len() > 2 || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }
        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let fraction: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };
        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .ok_or_else(invalid)?;
        Ok(Score(if negative { -cents } else { cents }))
    }
}

impl Add for Score {
    type Output = Score;
    fn add(self, rhs: Score) -> Score {
        Score(self.0 + rhs.0)
    }
}

impl Sub for Score {
    type Output = Score;
    fn sub(self, rhs: Score) -> Score {
        Score(self.0 - rhs.0)
    }
}

impl Neg for Score {
    type Output = Score;
    fn neg(self) -> Score {
        Score(-self.0)
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Score) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Score {
    fn sub_assign(&mut self, rhs: Score) {
        self.0 -= rhs.0;
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Score>>(iter: I) -> Score {
        iter.fold(Score::ZERO, Add::add)
    }
}

/// Running score of both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideScores {
    by_side: [Score; 2],
}

impl SideScores {
    #[inline]
    pub const fn new(red: Score, blue: Score) -> Self {
        Self {
            by_side: [red, blue],
        }
    }

    #[inline]
    pub const fn get(&self, side: Side) -> Score {
        self.by_side[side.index()]
    }

    #[inline]
    pub fn add(&mut self, side: Side, delta: Score) {
        self.by_side[side.index()] += delta;
    }

    #[inline]
    pub fn with_added(mut self, side: Side, delta: Score) -> Self {
        self.add(side, delta);
        self
    }
}

impl fmt::Display for SideScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "red {} / blue {}",
            self.get(Side::Red),
            self.get(Side::Blue)
        )
    }
}
