use crate::quoridor::{Coord, Fence, ParseCoordError, ParseFenceError};
use derive_more::{Display, Error, From};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// The possible actions a player can take on their turn.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, From)]
pub enum Action {
    /// Move the pawn to a cell.
    #[display(fmt = "{_0}")]
    Move(Coord),

    /// Place a fence on the board.
    #[display(fmt = "{_0}")]
    Fence(Fence),
}

/// The reason why parsing [`Action`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseActionError {
    #[display(fmt = "failed to parse pawn move")]
    InvalidMove(ParseCoordError),

    #[display(fmt = "failed to parse fence placement")]
    InvalidFence(ParseFenceError),
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with(|c: char| c.is_ascii_digit()) {
            Ok(Action::Move(s.parse()?))
        } else {
            Ok(Action::Fence(s.parse()?))
        }
    }
}
