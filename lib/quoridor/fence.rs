use crate::quoridor::{Coord, Direction, ParseCoordError};
use derive_more::{Display, Error, From};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// How a [`Fence`] is laid on the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
pub enum Orientation {
    #[display(fmt = "v")]
    Vertical,
    #[display(fmt = "h")]
    Horizontal,
}

/// A fence along one side of a cell.
///
/// A vertical fence closes the west side of its cell, a horizontal one the north side.
/// Either way the adjacent cell is closed off on its facing side too.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
#[display(fmt = "{_0}{_1}")]
pub struct Fence(pub Orientation, pub Coord);

impl Fence {
    /// This fence's [`Orientation`].
    pub fn orientation(&self) -> Orientation {
        self.0
    }

    /// The cell this fence is laid against.
    pub fn whither(&self) -> Coord {
        self.1
    }

    /// The side of [`Fence::whither`] this fence closes.
    pub fn closes(&self) -> Direction {
        match self.orientation() {
            Orientation::Vertical => Direction::West,
            Orientation::Horizontal => Direction::North,
        }
    }

    /// An iterator over every fence that could be named, including those along the edge.
    pub fn iter() -> impl Iterator<Item = Self> {
        [Orientation::Vertical, Orientation::Horizontal]
            .into_iter()
            .flat_map(|o| Coord::iter().map(move |c| Fence(o, c)))
    }
}

/// The reason why parsing [`Fence`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseFenceError {
    #[display(fmt = "failed to parse fence, expected orientation `v` or `h`")]
    #[from(ignore)]
    InvalidOrientation,
    #[display(fmt = "failed to parse fence")]
    InvalidCoord(ParseCoordError),
}

impl FromStr for Fence {
    type Err = ParseFenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let orientation = match s.chars().next() {
            Some('v') => Orientation::Vertical,
            Some('h') => Orientation::Horizontal,
            _ => return Err(ParseFenceError::InvalidOrientation),
        };

        Ok(Fence(orientation, s[1..].parse()?))
    }
}
