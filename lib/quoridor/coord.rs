use crate::quoridor::Direction;
use derive_more::{Display, Error, From};
use std::ops::Sub;
use std::{fmt, str::FromStr};
use test_strategy::Arbitrary;

/// A cell on the Quoridor board.
///
/// Internally this is the index `row * 9 + column`, so it is always on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
pub struct Coord(#[strategy(0..Coord::COUNT as u8)] u8);

/// The reason why a pair of coordinates does not name a [`Coord`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Error)]
#[display(fmt = "coordinates `({_0}, {_1})` are off the board")]
pub struct OutOfBounds(pub i8, pub i8);

impl Coord {
    /// The number of cells along each side of the board.
    pub const SIDE: u8 = 9;

    /// The number of cells on the board.
    pub const COUNT: usize = (Self::SIDE * Self::SIDE) as usize;

    /// Constructs [`Coord`] from a column and a row.
    pub fn new(col: i8, row: i8) -> Result<Self, OutOfBounds> {
        let range = 0..Self::SIDE as i8;
        if range.contains(&col) && range.contains(&row) {
            Ok(Self::at(col as u8, row as u8))
        } else {
            Err(OutOfBounds(col, row))
        }
    }

    pub(crate) const fn at(col: u8, row: u8) -> Self {
        debug_assert!(col < Self::SIDE && row < Self::SIDE);
        Coord(row * Self::SIDE + col)
    }

    pub(crate) fn from_index(i: usize) -> Self {
        debug_assert!(i < Self::COUNT);
        Coord(i as u8)
    }

    /// This cell's column, counted from the west edge.
    pub fn col(self) -> u8 {
        self.0 % Self::SIDE
    }

    /// This cell's row, counted from the north edge.
    pub fn row(self) -> u8 {
        self.0 / Self::SIDE
    }

    /// This cell's position in row-major order.
    pub fn index(self) -> usize {
        self.0.into()
    }

    /// The adjacent cell in a [`Direction`], unless that is past the edge of the board.
    pub fn step(self, d: Direction) -> Option<Self> {
        let (dx, dy) = d.delta();
        Self::new(self.col() as i8 + dx, self.row() as i8 + dy).ok()
    }

    /// An iterator over all cells in row-major order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..Self::COUNT as u8).map(Coord)
    }
}

impl TryFrom<(i8, i8)> for Coord {
    type Error = OutOfBounds;

    fn try_from((col, row): (i8, i8)) -> Result<Self, Self::Error> {
        Coord::new(col, row)
    }
}

/// The displacement `(columns, rows)` from `rhs` to `self`.
impl Sub for Coord {
    type Output = (i8, i8);

    fn sub(self, rhs: Self) -> Self::Output {
        (
            self.col() as i8 - rhs.col() as i8,
            self.row() as i8 - rhs.row() as i8,
        )
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col(), self.row())
    }
}

/// The reason why parsing [`Coord`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseCoordError {
    #[display(fmt = "failed to parse coordinates, expected two digits `<column><row>`")]
    #[from(ignore)]
    InvalidSyntax,
    #[display(fmt = "failed to parse coordinates")]
    OutOfBounds(OutOfBounds),
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut digits = s.chars().map(|c| c.to_digit(10));
        match (digits.next(), digits.next(), digits.next()) {
            (Some(Some(col)), Some(Some(row)), None) => Ok(Coord::new(col as i8, row as i8)?),
            _ => Err(ParseCoordError::InvalidSyntax),
        }
    }
}
