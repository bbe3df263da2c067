use crate::quoridor::Coord;
use derive_more::Display;
use std::ops::Not;
use test_strategy::Arbitrary;

/// One of the two sides in a game of Quoridor.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
#[repr(u8)]
pub enum Player {
    #[display(fmt = "player 1")]
    One,
    #[display(fmt = "player 2")]
    Two,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Self; 2] = [Player::One, Player::Two];

    /// The row this player's pawn must reach to win.
    pub fn goal_row(self) -> u8 {
        match self {
            Player::One => Coord::SIDE - 1,
            Player::Two => 0,
        }
    }

    /// Where this player's pawn starts.
    pub fn home(self) -> Coord {
        match self {
            Player::One => Coord::at(4, 0),
            Player::Two => Coord::at(4, Coord::SIDE - 1),
        }
    }
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}
